use embedded_hal::digital::OutputPin;

use crate::Result;
use crate::error::Error::{CannotSetOutputState, IndexOutOfBounds};
use crate::output_port::OutputPort;

/// Array of directly wired GPIO output pins acting as one [`OutputPort`].
///
/// For boards without a shift register: wire the 8 segment pins first, then
/// the 4 digit-select pins, and use `OutputArray<_, 12>`. Levels are staged
/// and written to every pin on commit.
pub struct OutputArray<P, const N: usize> {
    outputs: [P; N],
    levels: [bool; N],
}

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub const fn new(outputs: [P; N]) -> Self {
        Self {
            outputs,
            levels: [false; N],
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.outputs.get_mut(index)
    }

    /// Gives back the pins.
    pub fn release(self) -> [P; N] {
        self.outputs
    }
}

impl<P: OutputPin, const N: usize> OutputPort for OutputArray<P, N> {
    type Error = crate::Error;

    #[inline]
    fn set_bit(&mut self, index: u8, value: bool) -> Result<()> {
        *self
            .levels
            .get_mut(usize::from(index))
            .ok_or(IndexOutOfBounds)? = value;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        let levels = self.levels;
        for (index, level) in levels.into_iter().enumerate() {
            self.get_mut(index)
                .ok_or(IndexOutOfBounds)?
                .set_state(level.into())
                .map_err(|_| CannotSetOutputState)?;
        }
        Ok(())
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::ErrorType;

    use super::*;

    #[derive(Default)]
    struct Pin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> core::result::Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_levels_wait_for_commit() {
        let mut array: OutputArray<Pin, 3> = OutputArray::new(Default::default());
        array.set_bit(1, true).unwrap();
        assert!(array.outputs.iter().all(|pin| pin.writes == 0));
        array.commit().unwrap();
        let pins = array.release();
        assert_eq!(pins.map(|pin| pin.high), [false, true, false]);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut array: OutputArray<Pin, 3> = OutputArray::new(Default::default());
        assert!(matches!(array.set_bit(3, true), Err(IndexOutOfBounds)));
    }
}
