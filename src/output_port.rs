//! The shared 12-bit output port and its fixed wiring.
//!
//! Bits 0-7 drive the segment lines shared by all digits, bits 8-11 select
//! digits 0-3. See [`OutputPort`].

use crate::Glyph;

/// The number of cells (digits) in the display.
pub const CELL_COUNT_U8: u8 = 4;
pub const CELL_COUNT: usize = CELL_COUNT_U8 as usize;

/// The number of segment lines (A-G plus the decimal point).
pub const SEGMENT_COUNT_U8: u8 = 8;
pub const SEGMENT_COUNT: usize = SEGMENT_COUNT_U8 as usize;

/// Total bits the multiplexer drives on the port.
pub const PORT_BIT_COUNT_U8: u8 = SEGMENT_COUNT_U8 + CELL_COUNT_U8;
pub const PORT_BIT_COUNT: usize = PORT_BIT_COUNT_U8 as usize;

/// Pattern bit read for each segment line, in port index order.
///
/// Index 0 is segment A (pattern bit 6) through index 6, segment G (bit 0);
/// index 7 is the decimal point (bit 7). This is a fixed hardware contract.
const SEGMENT_MASKS: [u8; SEGMENT_COUNT] = [
    Glyph::SEG_A,
    Glyph::SEG_B,
    Glyph::SEG_C,
    Glyph::SEG_D,
    Glyph::SEG_E,
    Glyph::SEG_F,
    Glyph::SEG_G,
    Glyph::DECIMAL,
];

/// A serially loaded digital output port.
///
/// Writes are buffered by [`set_bit`](OutputPort::set_bit) and pushed to the
/// hardware together by [`commit`](OutputPort::commit). The multiplexer
/// assumes it is the port's only writer.
pub trait OutputPort {
    /// Error reported when the hardware cannot be reached.
    type Error;

    /// Buffers the level of one output bit.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the port or the write fails.
    fn set_bit(&mut self, index: u8, value: bool) -> Result<(), Self::Error>;

    /// Pushes every buffered bit to the device in one update.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be updated.
    fn commit(&mut self) -> Result<(), Self::Error>;
}

impl<P: OutputPort + ?Sized> OutputPort for &mut P {
    type Error = P::Error;

    fn set_bit(&mut self, index: u8, value: bool) -> Result<(), Self::Error> {
        (**self).set_bit(index, value)
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        (**self).commit()
    }
}

/// Port levels for segment indexes 0-7 for a raw pattern.
#[must_use]
pub fn segment_levels(bits: u8) -> [bool; SEGMENT_COUNT] {
    SEGMENT_MASKS.map(|mask| bits & mask != 0)
}

/// Port index of the select line for `digit`.
///
/// `digit` must be below [`CELL_COUNT`]; the multiplexer only passes cursor values.
#[must_use]
pub const fn select_index(digit: u8) -> u8 {
    SEGMENT_COUNT_U8.wrapping_add(digit)
}

/// Sets every port bit low and commits, so no digit is selected.
///
/// # Errors
///
/// Returns the port's error if any write or the commit fails.
pub fn clear_port<P: OutputPort + ?Sized>(port: &mut P) -> Result<(), P::Error> {
    for index in 0..PORT_BIT_COUNT_U8 {
        port.set_bit(index, false)?;
    }
    port.commit()
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_segment_permutation() {
        // One lit pattern bit at a time lands on exactly one port index
        let expected = [
            (0b_0100_0000, 0), // A
            (0b_0010_0000, 1), // B
            (0b_0001_0000, 2), // C
            (0b_0000_1000, 3), // D
            (0b_0000_0100, 4), // E
            (0b_0000_0010, 5), // F
            (0b_0000_0001, 6), // G
            (0b_1000_0000, 7), // DP
        ];
        for (bits, index) in expected {
            let levels = segment_levels(bits);
            for (other, level) in levels.iter().enumerate() {
                assert_eq!(*level, other == index, "bits {bits:#010b} index {other}");
            }
        }
    }

    #[test]
    fn test_segment_levels_for_two() {
        // '2' = A B D E G
        assert_eq!(
            segment_levels(0x6D),
            [true, true, false, true, true, false, true, false]
        );
    }

    #[test]
    fn test_select_index() {
        assert_eq!(select_index(0), 8);
        assert_eq!(select_index(3), 11);
    }
}
