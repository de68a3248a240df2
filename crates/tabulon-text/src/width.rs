//! Display-width measurement.
//!
//! Every size comparison, padding computation, and wrap boundary decision in
//! the layout engine goes through [`display_width`]. The unit is terminal
//! cells: wide/full-width East-Asian code points count 2, combining marks 0,
//! everything else 1.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Number of terminal cells `text` occupies.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Whether `text` contains any grapheme wider than one cell.
#[must_use]
pub fn has_wide_chars(text: &str) -> bool {
    text.graphemes(true).any(|g| g.width() > 1)
}

/// Whether `text` is ASCII-only (display width equals byte length).
#[must_use]
pub fn is_ascii_only(text: &str) -> bool {
    text.is_ascii()
}
