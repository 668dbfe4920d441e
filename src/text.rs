//! Text rendering into a [`DisplayBuffer`].
//!
//! Characters map one-to-one onto positions, except the decimal point:
//! a `'.'` lights the DP segment of the character before it instead of
//! taking a position of its own. `"12.5"` therefore needs three digits.
//!
//! Formatted text is composed into a fixed-capacity [`FixedText`] first,
//! so no formatting call can allocate or grow past [`MAX_TEXT_LEN`].

use core::fmt::{self, Write};

use heapless::String as HString;

use crate::buffer::DisplayBuffer;
use crate::font::{self, DECIMAL_POINT};

/// Longest formatted message, in bytes. Longer output is cut off.
pub const MAX_TEXT_LEN: usize = 64;

/// Fixed-capacity text that silently truncates on overflow.
///
/// # Example
///
/// ```rust
/// use core::fmt::Write;
/// use rs_max7219::text::{FixedText, MAX_TEXT_LEN};
///
/// let mut text = FixedText::new();
/// write!(text, "{:>8}", 3.25).unwrap();
/// assert_eq!(text.as_str(), "    3.25");
///
/// let mut long = FixedText::new();
/// write!(long, "{:0>100}", 1).unwrap();
/// assert_eq!(long.len(), MAX_TEXT_LEN);
/// assert!(long.is_truncated());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FixedText {
    inner: HString<MAX_TEXT_LEN>,
    truncated: bool,
}

impl FixedText {
    /// Creates an empty text.
    pub const fn new() -> Self {
        Self {
            inner: HString::new(),
            truncated: false,
        }
    }

    /// The text composed so far.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when nothing was written.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True when some output did not fit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl Write for FixedText {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.inner.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

/// Formats `args` into a [`FixedText`].
pub fn format(args: fmt::Arguments<'_>) -> FixedText {
    let mut text = FixedText::new();
    // FixedText never fails; an Err here comes from a Display impl.
    if text.write_fmt(args).is_err() {
        log::warn!("formatting failed after {} bytes", text.len());
    }
    if text.is_truncated() {
        log::debug!("formatted text truncated to {} bytes", MAX_TEXT_LEN);
    }
    text
}

/// Formats `time` with a strftime-style pattern into a [`FixedText`].
///
/// An invalid pattern keeps whatever was produced before the bad specifier.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rs_max7219::text::format_time;
///
/// let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap();
/// assert_eq!(format_time("%H.%M", &t).as_str(), "07.05");
/// ```
#[cfg(feature = "time")]
pub fn format_time<Tz>(pattern: &str, time: &chrono::DateTime<Tz>) -> FixedText
where
    Tz: chrono::TimeZone,
    Tz::Offset: fmt::Display,
{
    format(format_args!("{}", time.format(pattern)))
}

/// Renders `text` into `buffer` starting at `start`.
///
/// Returns the number of positions the text advances, so consecutive
/// calls can continue where the previous one stopped:
///
/// - each character takes one position; characters without a glyph
///   render blank
/// - `'.'` sets the DP bit of the previous position and takes none; a
///   leading `'.'` is dropped
/// - positions past the end of the buffer are not written but still count
///
/// # Example
///
/// ```rust
/// use rs_max7219::{DisplayBuffer, font, text};
///
/// let mut buf = DisplayBuffer::new(1);
/// let n = text::render(&mut buf, 0, "1.2");
/// assert_eq!(n, 2);
/// assert_eq!(buf.get(0), Some(font::encode('1') | font::DECIMAL_POINT));
/// assert_eq!(buf.get(1), Some(font::encode('2')));
/// ```
pub fn render(buffer: &mut DisplayBuffer, start: usize, text: &str) -> usize {
    let mut advanced = 0usize;
    let mut dropped = 0usize;

    for c in text.chars() {
        if c == '.' {
            if advanced > 0 {
                // Previous position may itself have been past the end.
                if let Some(prev) = start.checked_add(advanced - 1) {
                    buffer.merge(prev, DECIMAL_POINT);
                }
            }
            continue;
        }

        let pattern = font::glyph(c).unwrap_or_else(|| {
            log::warn!("no segment glyph for {:?}, rendering blank", c);
            font::BLANK
        });

        let written = match start.checked_add(advanced) {
            Some(pos) => buffer.set(pos, pattern),
            None => false,
        };
        if !written {
            dropped += 1;
        }
        advanced += 1;
    }

    if dropped > 0 {
        log::warn!(
            "text too long for display: {} of {} characters dropped",
            dropped,
            advanced
        );
    }

    advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::encode;

    #[test]
    fn plain_digits_fill_consecutive_positions() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, 0, "1234"), 4);
        assert_eq!(&buf.as_slice()[..4], [encode('1'), encode('2'), encode('3'), encode('4')]);
        assert!(buf.as_slice()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn decimal_point_merges_into_previous() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, 2, "3.14"), 3);
        assert_eq!(buf.get(2), Some(encode('3') | DECIMAL_POINT));
        assert_eq!(buf.get(3), Some(encode('1')));
        assert_eq!(buf.get(4), Some(encode('4')));
    }

    #[test]
    fn leading_decimal_point_is_dropped() {
        let mut buf = DisplayBuffer::new(1);
        buf.set(1, encode('9'));
        assert_eq!(render(&mut buf, 2, ".5"), 1);
        // Position before start is untouched
        assert_eq!(buf.get(1), Some(encode('9')));
        assert_eq!(buf.get(2), Some(encode('5')));
    }

    #[test]
    fn repeated_decimal_points_do_not_advance() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, 0, "1..2"), 2);
        assert_eq!(buf.get(0), Some(encode('1') | DECIMAL_POINT));
    }

    #[test]
    fn overflow_counts_but_does_not_write() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, 6, "ABCD"), 4);
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.get(6), Some(encode('A')));
        assert_eq!(buf.get(7), Some(encode('B')));
    }

    #[test]
    fn decimal_point_after_overflow_is_dropped() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, 7, "12.3"), 3);
        assert_eq!(buf.get(7), Some(encode('1')));
    }

    #[test]
    fn start_past_end_writes_nothing() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, 20, "42"), 2);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn start_at_usize_max_counts_without_overflow() {
        let mut buf = DisplayBuffer::new(1);
        assert_eq!(render(&mut buf, usize::MAX, "1.23"), 3);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn unknown_characters_render_blank() {
        let mut buf = DisplayBuffer::new(1);
        buf.as_mut_slice().fill(0xFF);
        assert_eq!(render(&mut buf, 0, "M#é"), 3);
        assert_eq!(&buf.as_slice()[..3], [0, 0, 0]);
    }

    #[test]
    fn format_respects_capacity() {
        let text = format(format_args!("{:>200}", "x"));
        assert_eq!(text.len(), MAX_TEXT_LEN);
        assert!(text.is_truncated());
    }

    #[test]
    fn format_short_text_is_exact() {
        let text = format(format_args!("{}-{}", 4, 2));
        assert_eq!(text.as_str(), "4-2");
        assert!(!text.is_truncated());
    }
}
