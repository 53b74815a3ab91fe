//! Fixed-width framing of arbitrary text into 4 display cells.

use core::ops::Index;

use crate::Glyph;
use crate::output_port::CELL_COUNT;

/// One physical digit's rendering for a refresh cycle.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayCell {
    /// Base segment pattern of the character.
    pub glyph: Glyph,
    /// Forces the decimal point on, whatever the glyph's own bit 7 says.
    pub dot: bool,
}

impl DisplayCell {
    /// A cell with no segments lit.
    pub const BLANK: Self = Self::new(Glyph::BLANK, false);

    #[must_use]
    pub const fn new(glyph: Glyph, dot: bool) -> Self {
        Self { glyph, dot }
    }

    /// The undotted cell for `char`.
    #[must_use]
    pub const fn from_char(char: char) -> Self {
        Self::new(Glyph::from_char(char), false)
    }

    /// Segment pattern to put on the port, decimal point included.
    #[must_use]
    pub const fn bits(self) -> u8 {
        if self.dot {
            self.glyph.with_dot().bits()
        } else {
            self.glyph.bits()
        }
    }
}

/// Exactly 4 cells, left to right.
///
/// Built from scratch on every tick by [`Frame::from_text`]:
///
/// - a `.` right after a character lights that character's decimal point
///   instead of taking a digit of its own;
/// - a `.` with nothing before it to fold onto is dropped;
/// - only the first 4 cells are kept, the rest is not shown;
/// - short text is right-aligned behind blank cells.
///
/// ```
/// use led4_mux::{DisplayCell, Frame};
///
/// let frame = Frame::from_text("22.5");
/// assert_eq!(frame[0], DisplayCell::BLANK);
/// assert_eq!(frame[1], DisplayCell::from_char('2'));
/// assert!(frame[2].dot);
/// assert_eq!(frame[3], DisplayCell::from_char('5'));
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([DisplayCell; CELL_COUNT]);

impl Frame {
    /// All four digits dark.
    pub const BLANK: Self = Self([DisplayCell::BLANK; CELL_COUNT]);

    #[must_use]
    pub const fn new(cells: [DisplayCell; CELL_COUNT]) -> Self {
        Self(cells)
    }

    /// Lays `text` out on the four digits.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut cells = [DisplayCell::BLANK; CELL_COUNT];
        let mut len: usize = 0;
        // Whether the previous character produced a cell that can still take a dot.
        let mut can_fold = false;

        for char in text.chars() {
            if char == '.' {
                if can_fold {
                    if let Some(previous) = len.checked_sub(1).and_then(|i| cells.get_mut(i)) {
                        previous.dot = true;
                    }
                }
                can_fold = false;
                continue;
            }
            let Some(cell) = cells.get_mut(len) else {
                // Only the first four cells are ever shown; a trailing dot may still
                // fold onto the fourth.
                break;
            };
            *cell = DisplayCell::from_char(char);
            len = len.saturating_add(1);
            can_fold = true;
        }

        // Right-align: move the realized cells to the end, blanks in front.
        cells.rotate_right(CELL_COUNT.saturating_sub(len));
        Self(cells)
    }

    /// The cell shown on `digit`, or `None` past the last digit.
    #[must_use]
    pub fn cell(&self, digit: usize) -> Option<DisplayCell> {
        self.0.get(digit).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayCell> {
        self.0.iter()
    }

    /// Segment patterns per digit, decimal points applied.
    #[must_use]
    pub fn bits(&self) -> [u8; CELL_COUNT] {
        self.0.map(DisplayCell::bits)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<&str> for Frame {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl Index<usize> for Frame {
    type Output = DisplayCell;

    #[expect(clippy::indexing_slicing, reason = "Caller's responsibility")]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Frame {
    type Item = DisplayCell;
    type IntoIter = core::array::IntoIter<DisplayCell, CELL_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a DisplayCell;
    type IntoIter = core::slice::Iter<'a, DisplayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    fn cell(char: char) -> DisplayCell {
        DisplayCell::from_char(char)
    }

    fn dotted(char: char) -> DisplayCell {
        DisplayCell::new(Glyph::from_char(char), true)
    }

    #[test]
    fn test_pads_short_text_on_the_left() {
        let frame = Frame::from_text("1");
        assert_eq!(frame, Frame::new([cell(' '), cell(' '), cell(' '), cell('1')]));
    }

    #[test]
    fn test_empty_text_is_blank() {
        assert_eq!(Frame::from_text(""), Frame::BLANK);
    }

    #[test]
    fn test_folds_dot_onto_previous_cell() {
        let frame = Frame::from_text("1.23");
        assert_eq!(frame, Frame::new([cell(' '), dotted('1'), cell('2'), cell('3')]));
    }

    #[test]
    fn test_fold_then_pad() {
        let frame = Frame::from_text("22.5");
        assert_eq!(frame, Frame::new([cell(' '), cell('2'), dotted('2'), cell('5')]));
    }

    #[test]
    fn test_leading_dot_is_dropped() {
        let frame = Frame::from_text(".5");
        assert_eq!(frame, Frame::new([cell(' '), cell(' '), cell(' '), cell('5')]));
    }

    #[test]
    fn test_second_dot_in_a_row_is_dropped() {
        let frame = Frame::from_text("1..2");
        assert_eq!(frame, Frame::new([cell(' '), cell(' '), dotted('1'), cell('2')]));
    }

    #[test]
    fn test_truncates_after_four_cells() {
        let frame = Frame::from_text("12345");
        assert_eq!(frame, Frame::new([cell('1'), cell('2'), cell('3'), cell('4')]));
    }

    #[test]
    fn test_dot_after_fourth_cell_still_folds() {
        let frame = Frame::from_text("12.34.5");
        assert_eq!(frame, Frame::new([cell('1'), dotted('2'), cell('3'), dotted('4')]));
    }

    #[test]
    fn test_space_can_carry_a_dot() {
        let frame = Frame::from_text(" .5");
        assert_eq!(frame, Frame::new([cell(' '), cell(' '), dotted(' '), cell('5')]));
    }

    #[test]
    fn test_cell_bits_force_decimal_point() {
        let frame = Frame::from_text("8.8");
        assert_eq!(frame.bits(), [0x00, 0x00, 0xFF, 0x7F]);
    }

    #[test]
    fn test_unsupported_chars_render_blank() {
        let frame = Frame::from_text("k°MX");
        assert_eq!(frame.bits(), [0; CELL_COUNT]);
    }

    #[test]
    fn test_from_str_and_iteration_agree() {
        let frame = Frame::from("1.2");
        assert_eq!(frame, Frame::from_text("1.2"));

        let expected = [cell(' '), cell(' '), dotted('1'), cell('2')];
        for (borrowed, expected) in (&frame).into_iter().zip(expected) {
            assert_eq!(*borrowed, expected);
        }
        assert!(frame.into_iter().eq(expected));
    }
}
