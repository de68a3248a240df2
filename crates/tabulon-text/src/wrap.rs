#![forbid(unsafe_code)]

//! Cell wrapping with Unicode correctness.
//!
//! [`wrap_cell`] splits a cell's text into display lines bounded by a maximum
//! cell width. Breaks happen at the last delimiter seen on the current line
//! when one exists; a single token longer than the cap is force-split and
//! tagged with a continuation marker. Widths are measured in terminal cells,
//! so wide (CJK) glyphs are never split mid-code-point, and the scan walks
//! grapheme clusters so combining sequences stay intact.
//!
//! # Example
//! ```
//! use tabulon_text::wrap::wrap_cell;
//!
//! // Word-aware break at the delimiter.
//! assert_eq!(wrap_cell("AAAA BBBB", 4, ' ', ""), vec!["AAAA", "BBBB"]);
//!
//! // Forced split of an unbroken token, tagged with a marker.
//! assert_eq!(wrap_cell("AAAAAAAA", 4, ' ', "-"), vec!["AAA-", "AAA-", "AA"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::width::display_width;

/// Wrap `text` into lines of at most `max_width` display cells.
///
/// Lines break at the last occurrence of `delimiter` on the line being
/// accumulated; the delimiter is consumed, never kept at either edge. When a
/// line holds a single token with no delimiter, it is force-split at
/// `max_width - width(split_marker)` cells and `split_marker` is appended as
/// a continuation signal; the remainder re-enters the same rule, so every
/// produced line stays within the cap. Whitespace exposed by delimiter
/// consumption is trimmed per line.
///
/// An empty input yields a single empty line. A `split_marker` as wide as
/// the cap is ignored for that split instead of eating the whole budget. A
/// single grapheme wider than `max_width` (a wide glyph at cap 1) is emitted
/// whole; destroying the code point would be worse than overflowing by one
/// cell.
///
/// `max_width` must be at least 1.
#[must_use]
pub fn wrap_cell(text: &str, max_width: usize, delimiter: char, split_marker: &str) -> Vec<String> {
    debug_assert!(max_width >= 1, "wrap width must be at least 1");

    if display_width(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;
    // Byte range of the last delimiter occurrence within `current`.
    let mut last_delim: Option<(usize, usize)> = None;

    for grapheme in text.graphemes(true) {
        let gw = grapheme.width();

        // The delimiter itself lands on the boundary: break here and consume
        // it, whatever the line holds.
        if current_width + gw > max_width && is_delimiter(grapheme, delimiter) {
            push_line(&mut lines, &current);
            current.clear();
            current_width = 0;
            last_delim = None;
            continue;
        }

        // Flush until the grapheme fits. A delimiter break can leave a tail
        // that still overflows once the grapheme lands, hence the loop.
        while !current.is_empty() && current_width + gw > max_width {
            match last_delim.take() {
                Some((start, end)) => {
                    push_line(&mut lines, &current[..start]);
                    current = current[end..].to_string();
                }
                None => {
                    let (head, tail) = force_split(&current, max_width, split_marker);
                    push_line(&mut lines, &head);
                    current = tail;
                }
            }
            current_width = display_width(&current);
        }

        if is_delimiter(grapheme, delimiter) {
            last_delim = Some((current.len(), current.len() + grapheme.len()));
        }
        current.push_str(grapheme);
        current_width += gw;
    }

    push_line(&mut lines, &current);

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split a delimiter-free line at the marker-adjusted budget.
fn force_split(line: &str, max_width: usize, split_marker: &str) -> (String, String) {
    let marker_width = display_width(split_marker);
    let use_marker = marker_width > 0 && marker_width < max_width;

    if use_marker {
        let head_end = take_cells(line, max_width - marker_width);
        if head_end > 0 {
            let mut head = line[..head_end].to_string();
            head.push_str(split_marker);
            return (head, line[head_end..].to_string());
        }
        // Marker-adjusted budget too tight for even one grapheme (a wide
        // glyph at a narrow cap): fall through to a marker-less split.
    }

    let mut head_end = take_cells(line, max_width);
    if head_end == 0 {
        // A single grapheme wider than the cap: keep it whole.
        head_end = line.graphemes(true).next().map_or(0, str::len);
    }
    (line[..head_end].to_string(), line[head_end..].to_string())
}

/// Byte length of the longest prefix of `line` fitting in `budget` cells.
fn take_cells(line: &str, budget: usize) -> usize {
    let mut end = 0;
    let mut width = 0;
    for grapheme in line.graphemes(true) {
        let gw = grapheme.width();
        if width + gw > budget {
            break;
        }
        width += gw;
        end += grapheme.len();
    }
    end
}

/// Emit a line, trimming whitespace exposed by delimiter consumption.
/// All-whitespace fragments are dropped rather than emitted as blank lines.
fn push_line(lines: &mut Vec<String>, line: &str) {
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}

fn is_delimiter(grapheme: &str, delimiter: char) -> bool {
    let mut chars = grapheme.chars();
    chars.next() == Some(delimiter) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(wrap_cell("test", 20, ' ', ""), vec!["test"]);
    }

    #[test]
    fn short_text_keeps_leading_whitespace() {
        // No wrap happened, so nothing is trimmed.
        assert_eq!(wrap_cell(" test", 20, ' ', ""), vec![" test"]);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap_cell("", 10, ' ', ""), vec![""]);
    }

    #[test]
    fn breaks_at_delimiter_on_boundary() {
        assert_eq!(wrap_cell("AAAA BBBB", 4, ' ', ""), vec!["AAAA", "BBBB"]);
    }

    #[test]
    fn breaks_at_last_delimiter_in_line() {
        assert_eq!(
            wrap_cell("one two three four", 9, ' ', ""),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn force_splits_long_token_with_marker() {
        // 3 content cells + 1 marker cell = 4; remainder re-enters the rule.
        assert_eq!(
            wrap_cell("AAAAAAAA", 4, ' ', "-"),
            vec!["AAA-", "AAA-", "AA"]
        );
    }

    #[test]
    fn force_splits_without_marker_at_full_budget() {
        assert_eq!(wrap_cell("AAAAAAAA", 4, ' ', ""), vec!["AAAA", "AAAA"]);
    }

    #[test]
    fn marker_wider_than_cap_is_ignored() {
        assert_eq!(wrap_cell("AAAA", 2, ' ', "..."), vec!["AA", "AA"]);
    }

    #[test]
    fn custom_delimiter() {
        assert_eq!(wrap_cell("aaa,bb", 4, ',', ""), vec!["aaa", "bb"]);
    }

    #[test]
    fn run_of_delimiters_is_trimmed() {
        assert_eq!(wrap_cell("AA  BB", 4, ' ', ""), vec!["AA", "BB"]);
    }

    #[test]
    fn cjk_never_splits_mid_glyph() {
        // 9 glyphs, 18 cells: 5 glyphs fill the 10-cell cap exactly.
        assert_eq!(
            wrap_cell("おはようございます", 10, ' ', ""),
            vec!["おはようご", "ざいます"]
        );
    }

    #[test]
    fn cjk_odd_cap_leaves_slack() {
        // Cap 5 holds two wide glyphs (4 cells); the third would make 6.
        assert_eq!(wrap_cell("你好世", 5, ' ', ""), vec!["你好", "世"]);
    }

    #[test]
    fn wide_glyphs_at_narrow_cap_drop_the_marker() {
        // Cap 2 leaves one cell after the marker, too tight for any wide
        // glyph; the split falls back to marker-less full-cap pieces.
        assert_eq!(wrap_cell("時間帯", 2, ' ', "-"), vec!["時", "間", "帯"]);
    }

    #[test]
    fn mixed_words_and_long_token() {
        assert_eq!(
            wrap_cell("ab CDEFGHI", 4, ' ', "-"),
            vec!["ab", "CDE-", "FGHI"]
        );
    }
}
