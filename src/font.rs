//! 7-segment font.
//!
//! Bit layout of a segment pattern (no-decode mode):
//!
//! ```text
//!  bit:  7  6  5  4  3  2  1  0
//!  seg: DP  A  B  C  D  E  F  G
//!
//!      --A--
//!     |     |
//!     F     B
//!     |     |
//!      --G--
//!     |     |
//!     E     C
//!     |     |
//!      --D--  .DP
//! ```
//!
//! The table covers printable ASCII (`' '` through `'~'`). Characters a
//! seven-segment digit cannot show sensibly have no entry and render
//! blank.

/// Decimal point bit.
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// Pattern used for characters without a glyph.
pub const BLANK: u8 = 0b0000_0000;

/// First character covered by [`FONT`].
pub const FIRST_CHAR: char = ' ';

/// Last character covered by [`FONT`].
pub const LAST_CHAR: char = '~';

/// Glyph table, indexed by `char as usize - 0x20`.
pub static FONT: [Option<u8>; 95] = [
    Some(0b0000_0000), // ' '
    Some(0b1011_0000), // '!'
    Some(0b0010_0010), // '"'
    None,              // '#'
    None,              // '$'
    Some(0b0100_1001), // '%'
    None,              // '&'
    Some(0b0000_0010), // '''
    Some(0b0100_1110), // '('
    Some(0b0111_1000), // ')'
    Some(0b0100_0000), // '*'
    None,              // '+'
    Some(0b0001_0000), // ','
    Some(0b0000_0001), // '-'
    Some(0b1000_0000), // '.'
    None,              // '/'
    Some(0b0111_1110), // '0'
    Some(0b0011_0000), // '1'
    Some(0b0110_1101), // '2'
    Some(0b0111_1001), // '3'
    Some(0b0011_0011), // '4'
    Some(0b0101_1011), // '5'
    Some(0b0101_1111), // '6'
    Some(0b0111_0000), // '7'
    Some(0b0111_1111), // '8'
    Some(0b0111_1011), // '9'
    Some(0b0100_1000), // ':'
    Some(0b0101_1000), // ';'
    None,              // '<'
    Some(0b0000_1001), // '='
    None,              // '>'
    Some(0b0110_0101), // '?'
    Some(0b0110_1111), // '@'
    Some(0b0111_0111), // 'A'
    Some(0b0001_1111), // 'B'
    Some(0b0100_1110), // 'C'
    Some(0b0011_1101), // 'D'
    Some(0b0100_1111), // 'E'
    Some(0b0100_0111), // 'F'
    Some(0b0101_1110), // 'G'
    Some(0b0011_0111), // 'H'
    Some(0b0011_0000), // 'I'
    Some(0b0011_1100), // 'J'
    None,              // 'K'
    Some(0b0000_1110), // 'L'
    None,              // 'M'
    Some(0b0001_0101), // 'N'
    Some(0b0111_1110), // 'O'
    Some(0b0110_0111), // 'P'
    Some(0b1111_1110), // 'Q'
    Some(0b0000_0101), // 'R'
    Some(0b0101_1011), // 'S'
    Some(0b0000_0111), // 'T'
    Some(0b0011_1110), // 'U'
    Some(0b0011_1110), // 'V'
    Some(0b0011_1111), // 'W'
    None,              // 'X'
    Some(0b0010_0111), // 'Y'
    Some(0b0110_1101), // 'Z'
    Some(0b0100_1110), // '['
    None,              // '\'
    Some(0b0111_1000), // ']'
    None,              // '^'
    Some(0b0000_1000), // '_'
    Some(0b0010_0000), // '`'
    Some(0b0111_0111), // 'a'
    Some(0b0001_1111), // 'b'
    Some(0b0000_1101), // 'c'
    Some(0b0011_1101), // 'd'
    Some(0b0100_1111), // 'e'
    Some(0b0100_0111), // 'f'
    Some(0b0101_1110), // 'g'
    Some(0b0001_0111), // 'h'
    Some(0b0001_0000), // 'i'
    Some(0b0011_1100), // 'j'
    None,              // 'k'
    Some(0b0000_1110), // 'l'
    None,              // 'm'
    Some(0b0001_0101), // 'n'
    Some(0b0001_1101), // 'o'
    Some(0b0110_0111), // 'p'
    None,              // 'q'
    Some(0b0000_0101), // 'r'
    Some(0b0101_1011), // 's'
    Some(0b0000_0111), // 't'
    Some(0b0001_1100), // 'u'
    Some(0b0001_1100), // 'v'
    None,              // 'w'
    None,              // 'x'
    Some(0b0010_0111), // 'y'
    None,              // 'z'
    Some(0b0011_0001), // '{'
    Some(0b0000_0110), // '|'
    Some(0b0000_0111), // '}'
    None,              // '~'
];

/// Looks up the segment pattern for `c`.
///
/// Returns `None` for characters outside the table or without a glyph.
///
/// # Examples
///
/// ```
/// use rs_max7219::font;
///
/// assert_eq!(font::glyph('8'), Some(0b0111_1111));
/// assert_eq!(font::glyph('M'), None);
/// assert_eq!(font::glyph('é'), None);
/// ```
#[inline]
pub fn glyph(c: char) -> Option<u8> {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&c) {
        return None;
    }
    FONT[c as usize - FIRST_CHAR as usize]
}

/// Segment pattern for `c`, falling back to [`BLANK`].
#[inline]
pub fn encode(c: char) -> u8 {
    glyph(c).unwrap_or(BLANK)
}

/// Iterates over every character that has a glyph, with its pattern.
pub fn glyphs() -> impl Iterator<Item = (char, u8)> {
    (FIRST_CHAR..=LAST_CHAR).filter_map(|c| glyph(c).map(|g| (c, g)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_all_mapped() {
        for c in '0'..='9' {
            assert!(glyph(c).is_some(), "digit {c} has no glyph");
            assert_eq!(encode(c) & DECIMAL_POINT, 0);
        }
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(encode(' '), BLANK);
    }

    #[test]
    fn decimal_point_is_high_bit() {
        assert_eq!(encode('.'), DECIMAL_POINT);
    }

    #[test]
    fn out_of_range_falls_back_to_blank() {
        assert_eq!(encode('\n'), BLANK);
        assert_eq!(encode('\u{7f}'), BLANK);
        assert_eq!(encode('°'), BLANK);
        assert_eq!(encode('~'), BLANK);
    }

    #[test]
    fn table_covers_printable_ascii() {
        assert_eq!(FONT.len(), (LAST_CHAR as usize) - (FIRST_CHAR as usize) + 1);
    }

    #[test]
    fn upper_and_lower_share_shapes_where_expected() {
        assert_eq!(encode('A'), encode('a'));
        assert_eq!(encode('S'), encode('5'));
        assert_ne!(encode('O'), encode('o'));
    }
}
