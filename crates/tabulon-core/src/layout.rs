//! Column layout planning.
//!
//! Turns formatted (but unwrapped) cell text into the per-column width
//! matrix and every cell's final display lines. Input rows are already
//! normalized to a uniform column count by the facade.

use tabulon_text::{display_width, wrap_cell};

/// Wrap policy for a layout pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WrapSpec<'a> {
    /// Cells wider than this are wrapped; columns never plan wider than it.
    pub max_cell_size: usize,
    /// Word-preserving break rune.
    pub delimiter: char,
    /// Continuation marker for forced mid-token splits.
    pub split_marker: &'a str,
}

/// The width matrix plus each cell's display lines.
#[derive(Debug)]
pub(crate) struct Layout {
    /// Effective width of each column in display cells.
    pub widths: Vec<usize>,
    /// Header cells as line lists, when a header band is present.
    pub header: Option<Vec<Vec<String>>>,
    /// Body cells as line lists, row-major.
    pub rows: Vec<Vec<Vec<String>>>,
}

/// Plan column widths and wrap cells.
///
/// With wrapping disabled every cell stays a single line and columns take
/// their natural width. With a cap, headers and cells wider than the cap are
/// wrapped first, so each column ends up at `min(cap, widest natural line)`.
pub(crate) fn plan(
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    columns: usize,
    wrap: Option<WrapSpec<'_>>,
) -> Layout {
    let mut widths = vec![0usize; columns];

    let header = header.map(|cells| wrap_row(cells, wrap, &mut widths));
    let rows = rows
        .into_iter()
        .map(|cells| wrap_row(cells, wrap, &mut widths))
        .collect();

    Layout {
        widths,
        header,
        rows,
    }
}

fn wrap_row(
    cells: Vec<String>,
    wrap: Option<WrapSpec<'_>>,
    widths: &mut [usize],
) -> Vec<Vec<String>> {
    cells
        .into_iter()
        .enumerate()
        .map(|(col, text)| {
            let lines = match wrap {
                Some(spec) if display_width(&text) > spec.max_cell_size => {
                    wrap_cell(&text, spec.max_cell_size, spec.delimiter, spec.split_marker)
                }
                _ => vec![text],
            };
            for line in &lines {
                widths[col] = widths[col].max(display_width(line));
            }
            lines
        })
        .collect()
}
