//! Character to segment encoding for 7-segment digits.
//!
//! See [`Glyph`] for the bit layout and lookup rules.

/// First character code covered by the font table (space).
const FIRST_CODE: u32 = 0x20;

/// Last character code covered by the font table (`~`).
const LAST_CODE: u32 = 0x7E;

/// Number of entries in the font table.
const GLYPH_COUNT: usize = 95;

/// The 8-bit segment pattern of one character.
///
/// Bit layout, most significant first:
///
/// | bit | 7  | 6 | 5 | 4 | 3 | 2 | 1 | 0 |
/// |-----|----|---|---|---|---|---|---|---|
/// | seg | DP | A | B | C | D | E | F | G |
///
/// Every code has exactly one glyph. Codes with no sensible 7-segment shape
/// resolve to [`Glyph::BLANK`], so rendering never fails.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph(u8);

impl Glyph {
    /// Segment A (top).
    pub const SEG_A: u8 = 0b_0100_0000;
    /// Segment B (upper right).
    pub const SEG_B: u8 = 0b_0010_0000;
    /// Segment C (lower right).
    pub const SEG_C: u8 = 0b_0001_0000;
    /// Segment D (bottom).
    pub const SEG_D: u8 = 0b_0000_1000;
    /// Segment E (lower left).
    pub const SEG_E: u8 = 0b_0000_0100;
    /// Segment F (upper left).
    pub const SEG_F: u8 = 0b_0000_0010;
    /// Segment G (middle).
    pub const SEG_G: u8 = 0b_0000_0001;
    /// Decimal point.
    pub const DECIMAL: u8 = 0b_1000_0000;

    /// No segments lit.
    pub const BLANK: Self = Self(0);

    /// Only the decimal point lit.
    pub const DECIMAL_POINT: Self = Self(Self::DECIMAL);

    /// Font table for printable ASCII, indexed by `code - 0x20`.
    const ASCII_TABLE: [u8; GLYPH_COUNT] = [
        // Space and symbols (32-47)
        0b_0000_0000, // space
        0b_1011_0000, // !
        0b_0010_0010, // "
        0b_0000_0000, // #
        0b_0000_0000, // $
        0b_0100_1001, // %
        0b_0000_0000, // &
        0b_0000_0010, // '
        0b_0100_1110, // (
        0b_0111_1000, // )
        0b_0100_0000, // *
        0b_0000_0000, // +
        0b_0001_0000, // ,
        0b_0000_0001, // -
        0b_1000_0000, // .
        0b_0000_0000, // /
        // Numbers (48-57)
        0b_0111_1110, // 0
        0b_0011_0000, // 1
        0b_0110_1101, // 2
        0b_0111_1001, // 3
        0b_0011_0011, // 4
        0b_0101_1011, // 5
        0b_0101_1111, // 6
        0b_0111_0000, // 7
        0b_0111_1111, // 8
        0b_0111_1011, // 9
        // Symbols (58-64)
        0b_0100_1000, // :
        0b_0101_1000, // ;
        0b_0000_0000, // <
        0b_0000_1001, // =
        0b_0000_0000, // >
        0b_0110_0101, // ?
        0b_0110_1111, // @
        // Uppercase letters (65-90)
        0b_0111_0111, // A
        0b_0001_1111, // B
        0b_0100_1110, // C
        0b_0011_1101, // D
        0b_0100_1111, // E
        0b_0100_0111, // F
        0b_0101_1110, // G
        0b_0011_0111, // H
        0b_0011_0000, // I
        0b_0011_1100, // J
        0b_0000_0000, // K
        0b_0000_1110, // L
        0b_0000_0000, // M
        0b_0001_0101, // N
        0b_0111_1110, // O
        0b_0110_0111, // P
        0b_1111_1110, // Q
        0b_0000_0101, // R
        0b_0101_1011, // S
        0b_0000_0111, // T
        0b_0011_1110, // U
        0b_0011_1110, // V
        0b_0011_1111, // W
        0b_0000_0000, // X
        0b_0010_0111, // Y
        0b_0110_1101, // Z
        // Symbols (91-96)
        0b_0100_1110, // [
        0b_0000_0000, // \
        0b_0111_1000, // ]
        0b_0000_0000, // ^
        0b_0000_1000, // _
        0b_0010_0000, // `
        // Lowercase letters (97-122)
        0b_0111_0111, // a
        0b_0001_1111, // b
        0b_0000_1101, // c
        0b_0011_1101, // d
        0b_0100_1111, // e
        0b_0100_0111, // f
        0b_0101_1110, // g
        0b_0001_0111, // h
        0b_0001_0000, // i
        0b_0011_1100, // j
        0b_0000_0000, // k
        0b_0000_1110, // l
        0b_0000_0000, // m
        0b_0001_0101, // n
        0b_0001_1101, // o
        0b_0110_0111, // p
        0b_0000_0000, // q
        0b_0000_0101, // r
        0b_0101_1011, // s
        0b_0000_0111, // t
        0b_0001_1100, // u
        0b_0001_1100, // v
        0b_0000_0000, // w
        0b_0000_0000, // x
        0b_0010_0111, // y
        0b_0000_0000, // z
        // Symbols (123-126)
        0b_0011_0001, // {
        0b_0000_0110, // |
        0b_0000_0111, // }
        0b_0110_0011, // ~
    ];

    /// Wraps a raw segment pattern.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Looks up the glyph for a character code.
    ///
    /// Control codes below the space render like a space; codes past `~` render blank.
    #[must_use]
    #[expect(clippy::indexing_slicing, reason = "index is bounded by LAST_CODE above")]
    pub const fn from_code(code: u32) -> Self {
        if code > LAST_CODE {
            return Self::BLANK;
        }
        let index = code.saturating_sub(FIRST_CODE) as usize;
        Self(Self::ASCII_TABLE[index])
    }

    /// Looks up the glyph for a character. Non-ASCII characters render blank.
    #[must_use]
    pub const fn from_char(char: char) -> Self {
        Self::from_code(char as u32)
    }

    /// The raw segment pattern.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// This glyph with the decimal point forced on.
    #[must_use]
    pub const fn with_dot(self) -> Self {
        Self(self.0 | Self::DECIMAL)
    }

    /// Whether no segment (including the decimal point) is lit.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }
}

impl From<char> for Glyph {
    fn from(char: char) -> Self {
        Self::from_char(char)
    }
}

impl From<Glyph> for u8 {
    fn from(glyph: Glyph) -> Self {
        glyph.bits()
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        let expected = [0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B];
        for (char, bits) in ('0'..='9').zip(expected) {
            assert_eq!(Glyph::from_char(char).bits(), bits, "digit {char}");
        }
    }

    #[test]
    fn test_space_dash_and_dot() {
        assert_eq!(Glyph::from_char(' '), Glyph::BLANK);
        assert_eq!(Glyph::from_char('-').bits(), Glyph::SEG_G);
        assert_eq!(Glyph::from_char('.'), Glyph::DECIMAL_POINT);
    }

    #[test]
    fn test_uppercase_letters() {
        let expected = [
            ('A', 0x77),
            ('B', 0x1F),
            ('C', 0x4E),
            ('D', 0x3D),
            ('E', 0x4F),
            ('F', 0x47),
            ('G', 0x5E),
            ('H', 0x37),
            ('I', 0x30),
            ('J', 0x3C),
            ('L', 0x0E),
            ('N', 0x15),
            ('O', 0x7E),
            ('P', 0x67),
            ('R', 0x05),
            ('S', 0x5B),
            ('T', 0x07),
            ('U', 0x3E),
            ('Y', 0x27),
        ];
        for (char, bits) in expected {
            assert_eq!(Glyph::from_char(char).bits(), bits, "letter {char}");
        }
    }

    #[test]
    fn test_lowercase_overrides() {
        let expected = [
            ('a', 0x77),
            ('b', 0x1F),
            ('c', 0x0D),
            ('d', 0x3D),
            ('g', 0x5E),
            ('h', 0x17),
            ('i', 0x10),
            ('n', 0x15),
            ('o', 0x1D),
            ('u', 0x1C),
            ('v', 0x1C),
        ];
        for (char, bits) in expected {
            assert_eq!(Glyph::from_char(char).bits(), bits, "letter {char}");
        }
    }

    #[test]
    fn test_odd_shapes_and_blanks() {
        assert_eq!(Glyph::from_char('@').bits(), 0x6F);
        assert_eq!(Glyph::from_char('Q').bits(), 0xFE);
        assert_eq!(Glyph::from_char('V').bits(), 0x3E);
        assert_eq!(Glyph::from_char('W').bits(), 0x3F);
        assert_eq!(Glyph::from_char('Z').bits(), 0x6D);
        for char in ['#', '$', '&', '<', '>', 'K', 'M', 'X', 'k', 'm', 'q', 'w', 'x', 'z'] {
            assert!(Glyph::from_char(char).is_blank(), "{char} should be blank");
        }
    }

    #[test]
    fn test_out_of_range_codes() {
        // Control codes fold onto the space glyph
        assert_eq!(Glyph::from_code(0), Glyph::from_char(' '));
        assert_eq!(Glyph::from_code(0x1F), Glyph::BLANK);
        // DEL and beyond never index past the table
        assert_eq!(Glyph::from_code(0x7F), Glyph::BLANK);
        assert_eq!(Glyph::from_code(u32::MAX), Glyph::BLANK);
        assert_eq!(Glyph::from_char('°'), Glyph::BLANK);
        assert_eq!(Glyph::from_char('~').bits(), 0x63);
    }

    #[test]
    fn test_lookup_is_stable() {
        for code in 0..200 {
            assert_eq!(Glyph::from_code(code), Glyph::from_code(code));
        }
    }

    #[test]
    fn test_with_dot() {
        assert_eq!(Glyph::from_char('8').with_dot().bits(), 0xFF);
        // Q already carries the decimal point
        assert_eq!(Glyph::from_char('Q').with_dot().bits(), 0xFE);
    }

    #[test]
    fn test_raw_patterns_convert_both_ways() {
        let glyph = Glyph::new(Glyph::SEG_B | Glyph::SEG_C);
        assert_eq!(glyph, Glyph::from('1'));
        assert_eq!(u8::from(glyph), 0x30);
        assert_eq!(u8::from(glyph.with_dot()), 0xB0);
    }
}
