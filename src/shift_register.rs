//! An [`OutputPort`] over daisy-chained SN74HC595 shift registers.
//!
//! See [`ShiftRegister`] for usage.

use embedded_hal::digital::OutputPin;

use crate::output_port::OutputPort;
use crate::{Error, Result};

/// Bits per SN74HC595 chip.
const BITS_PER_CHIP_U8: u8 = 8;
const BITS_PER_CHIP: usize = BITS_PER_CHIP_U8 as usize;

/// A chain of `CHIPS` SN74HC595 registers driven by three GPIO pins.
///
/// [`set_bit`](OutputPort::set_bit) only updates a local copy of the
/// outputs; [`commit`](OutputPort::commit) clocks the whole chain out and
/// pulses the latch, so the outputs change together. Port index 0 is `Q0`
/// of the chip wired to the data pin, index 8 is `Q0` of the next chip,
/// and so on.
///
/// The ES32A08 board chains two chips: segments on the first, digit
/// selects on `Q0`-`Q3` of the second.
pub struct ShiftRegister<D, C, L, const CHIPS: usize> {
    data_pin: D,
    clock_pin: C,
    latch_pin: L,
    outputs: [u8; CHIPS],
}

impl<D, C, L, const CHIPS: usize> ShiftRegister<D, C, L, CHIPS>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    /// Wraps the pins. All outputs start low; nothing is sent until the
    /// first commit.
    pub const fn new(data_pin: D, clock_pin: C, latch_pin: L) -> Self {
        Self {
            data_pin,
            clock_pin,
            latch_pin,
            outputs: [0; CHIPS],
        }
    }

    /// Number of outputs across the chain.
    #[must_use]
    #[expect(clippy::arithmetic_side_effects, reason = "chain lengths are tiny")]
    pub const fn len(&self) -> usize {
        CHIPS * BITS_PER_CHIP
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        CHIPS == 0
    }

    /// The buffered level of output `index`, or `None` past the chain.
    #[must_use]
    pub fn bit(&self, index: u8) -> Option<bool> {
        let (chip, mask) = locate(index);
        self.outputs.get(chip).map(|bits| bits & mask != 0)
    }

    /// Gives back the pins.
    pub fn release(self) -> (D, C, L) {
        (self.data_pin, self.clock_pin, self.latch_pin)
    }

    fn shift_out(&mut self, level: bool) -> Result<()> {
        self.data_pin
            .set_state(level.into())
            .map_err(|_| Error::CannotSetOutputState)?;
        self.clock_pin
            .set_high()
            .map_err(|_| Error::CannotSetOutputState)?;
        self.clock_pin
            .set_low()
            .map_err(|_| Error::CannotSetOutputState)
    }
}

/// Chip index and bit mask for a port index.
fn locate(index: u8) -> (usize, u8) {
    (
        usize::from(index / BITS_PER_CHIP_U8),
        1_u8.rotate_left(u32::from(index % BITS_PER_CHIP_U8)),
    )
}

impl<D, C, L, const CHIPS: usize> OutputPort for ShiftRegister<D, C, L, CHIPS>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
{
    type Error = Error;

    fn set_bit(&mut self, index: u8, value: bool) -> Result<()> {
        let (chip, mask) = locate(index);
        let bits = self.outputs.get_mut(chip).ok_or(Error::IndexOutOfBounds)?;
        if value {
            *bits |= mask;
        } else {
            *bits &= !mask;
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        // The last bit shifted in ends up on the first chip's Q0, so start from the far end.
        for chip in (0..CHIPS).rev() {
            let bits = self.outputs.get(chip).copied().unwrap_or_default();
            for bit in (0..u32::from(BITS_PER_CHIP_U8)).rev() {
                self.shift_out(bits & 1_u8.rotate_left(bit) != 0)?;
            }
        }
        self.latch_pin
            .set_high()
            .map_err(|_| Error::CannotSetOutputState)?;
        self.latch_pin
            .set_low()
            .map_err(|_| Error::CannotSetOutputState)
    }
}
