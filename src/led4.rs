//! A device abstraction for a 4-digit, 7-segment LED display behind a shared output port.
//!
//! The display runs in its own task: every tick it re-reads the message and
//! lights the next digit. Other tasks change the message through a [`Led4`]
//! handle.
//!
//! See [`Led4`] for the main device abstraction and usage examples.

#[cfg(feature = "display-trace")]
use defmt::trace;
#[cfg(feature = "defmt")]
use defmt::{Debug2Format, info, warn};
use embassy_time::Ticker;

use crate::multiplexer::{MuxConfig, Multiplexer};
use crate::output_port::OutputPort;
use crate::text_source::{SharedText, TextSource};

#[cfg(feature = "pico1")]
mod pico;
#[cfg(feature = "pico1")]
pub use pico::Es32a08Port;

/// Static resources for the [`Led4`] device: the message its task renders.
pub type Led4Static = SharedText;

/// A handle for changing the message on a 4-digit, 7-segment LED display.
///
/// On the RP2040 the handle comes from `Led4::new` (feature `pico1`), which
/// also spawns the device task. Elsewhere, use [`Led4::from_static`] on the
/// message a [`Multiplexer`] already reads.
pub struct Led4<'a>(&'a Led4Static);

impl<'a> Led4<'a> {
    /// Creates static resources for the display.
    #[must_use]
    pub const fn new_static() -> Led4Static {
        SharedText::new()
    }

    /// A handle onto a message that some multiplexer already renders.
    #[must_use]
    pub const fn from_static(led4_static: &'a Led4Static) -> Self {
        Self(led4_static)
    }

    /// Replaces the message. Longer text than the display shows is cut off.
    pub fn write_text(&self, text: &str) {
        #[cfg(feature = "display-trace")]
        trace!("write_text: {}", text);
        if !self.0.write(text) {
            #[cfg(feature = "defmt")]
            warn!("Message truncated to {} bytes", self.0.read(str::len));
        }
    }

    /// Blanks the display.
    pub fn clear(&self) {
        self.0.clear();
    }
}

/// Ticks `multiplexer` every `config.tick_period`, forever.
///
/// Each tick runs to completion before the next wait, so ticks never
/// overlap. A failed tick is logged and the next one starts fresh.
pub async fn run<T, P>(multiplexer: &mut Multiplexer<T, P>, config: MuxConfig) -> !
where
    T: TextSource,
    P: OutputPort,
    P::Error: core::fmt::Debug,
{
    #[cfg(feature = "defmt")]
    info!("Multiplexing every {} ms", config.tick_period.as_millis());
    // `setup` reports what is unbound; ticks are skipped until it is bound.
    if multiplexer.setup().is_err() {
        #[cfg(feature = "defmt")]
        info!("Display idle until its collaborators are bound");
    }

    let mut ticker = Ticker::every(config.tick_period);
    loop {
        if let Err(_err) = multiplexer.tick() {
            #[cfg(feature = "defmt")]
            warn!("Display tick failed: {}", Debug2Format(&_err));
        }
        ticker.next().await;
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_handle_updates_shared_message() {
        static LED4_STATIC: Led4Static = Led4::new_static();
        let display = Led4::from_static(&LED4_STATIC);
        display.write_text("Hi");
        LED4_STATIC.read(|text| assert_eq!(text, "Hi"));
        display.clear();
        assert!(LED4_STATIC.read(str::is_empty));
    }
}
