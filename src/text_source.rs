//! Where the displayed message comes from.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use heapless::String;

/// Default capacity, in bytes, of a [`SharedText`].
pub const TEXT_CAPACITY: usize = 32;

/// Read-only access to the current message.
///
/// The multiplexer reads once per tick and renders from that snapshot, so
/// implementations must return quickly and never block.
pub trait TextSource {
    /// Calls `f` with a snapshot of the current text.
    fn read<R>(&self, f: impl FnOnce(&str) -> R) -> R;
}

impl TextSource for str {
    fn read<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self)
    }
}

impl<const N: usize> TextSource for String<N> {
    fn read<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(self.as_str())
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        (**self).read(f)
    }
}

/// A message that one task writes and the multiplexer reads.
///
/// Can live in a `static`; both sides go through a critical section, so a
/// tick never sees a half-written message.
///
/// ```
/// use led4_mux::{SharedText, TextSource};
///
/// static TEXT: SharedText = SharedText::new();
/// TEXT.write("21.5");
/// assert_eq!(TEXT.read(str::len), 4);
/// ```
pub struct SharedText<const N: usize = TEXT_CAPACITY>(
    Mutex<CriticalSectionRawMutex, RefCell<String<N>>>,
);

impl<const N: usize> SharedText<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self(Mutex::new(RefCell::new(String::new())))
    }

    /// Replaces the message, keeping as many whole characters as fit.
    ///
    /// Returns `false` if the message was cut short.
    pub fn write(&self, text: &str) -> bool {
        self.0.lock(|cell| {
            let mut current = cell.borrow_mut();
            current.clear();
            for char in text.chars() {
                if current.push(char).is_err() {
                    return false;
                }
            }
            true
        })
    }

    /// Empties the message, which blanks the display.
    pub fn clear(&self) {
        self.0.lock(|cell| cell.borrow_mut().clear());
    }
}

impl<const N: usize> Default for SharedText<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TextSource for SharedText<N> {
    fn read<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        self.0.lock(|cell| f(cell.borrow().as_str()))
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_str_source() {
        let source = "12.5";
        assert_eq!(source.read(|text| text.len()), 4);
    }

    #[test]
    fn test_shared_text_replaces_message() {
        let shared: SharedText<8> = SharedText::new();
        assert!(shared.read(str::is_empty));
        assert!(shared.write("ON"));
        assert!(shared.write("OFF"));
        shared.read(|text| assert_eq!(text, "OFF"));
        shared.clear();
        assert!(shared.read(str::is_empty));
    }

    #[test]
    fn test_shared_text_truncates_on_char_boundary() {
        let shared: SharedText<4> = SharedText::new();
        // 'é' is two bytes and does not fit after "abc"
        assert!(!shared.write("abcé"));
        shared.read(|text| assert_eq!(text, "abc"));
    }

    #[test]
    fn test_shared_text_through_reference() {
        static SHARED: SharedText = SharedText::new();
        SHARED.write("Hi");
        let source: &SharedText = &SHARED;
        source.read(|text| assert_eq!(text, "Hi"));
    }
}
