//! Row and border emission.
//!
//! Consumes a planned [`Layout`] and produces the literal text block for one
//! style. Every physical line is complete: multi-line cells pad their
//! shorter neighbors with blank lines so rows stay vertically aligned.

use crate::align::Align;
use crate::layout::Layout;
use crate::line::LineSet;
use crate::style::Style;

/// Everything the emitter needs besides the layout itself.
pub(crate) struct RenderSpec<'a> {
    pub layout: &'a Layout,
    pub align: Align,
    /// Title text plus its independently configured alignment.
    pub title: Option<(&'a str, Align)>,
    pub hidden: LineSet,
}

/// Width of the span a title must fit into, between the outer edges.
///
/// Grid puts ` | ` between fields; simple and plain use a two-space gutter.
pub(crate) fn inner_width(style: Style, widths: &[usize]) -> usize {
    let sum: usize = widths.iter().sum();
    let gutters = match style {
        Style::Grid => 3,
        Style::Simple | Style::Plain => 2,
    };
    sum + gutters * widths.len().saturating_sub(1)
}

pub(crate) fn render(spec: &RenderSpec<'_>, style: Style) -> String {
    let lines = match style {
        Style::Grid => render_grid(spec),
        Style::Simple => render_simple(spec),
        Style::Plain => render_plain(spec),
    };
    lines.join("\n")
}

fn render_grid(spec: &RenderSpec<'_>) -> Vec<String> {
    let widths = &spec.layout.widths;
    let rule = grid_rule(widths);
    let mut out = Vec::new();

    if let Some((title, title_align)) = spec.title {
        let field = inner_width(Style::Grid, widths);
        if !spec.hidden.contains(LineSet::TOP) {
            out.push(format!("+{}+", "-".repeat(field + 2)));
        }
        out.push(format!("| {} |", title_align.pad(title, field)));
        // This rule doubles as the columns' top border; it is not
        // independently hideable.
        out.push(rule.clone());
    } else if !spec.hidden.contains(LineSet::TOP) {
        out.push(rule.clone());
    }

    if let Some(header) = &spec.layout.header {
        out.extend(grid_band(header, widths, spec.align));
        if !spec.layout.rows.is_empty() && !spec.hidden.contains(LineSet::BELOW_HEADER) {
            out.push(rule.clone());
        }
    }

    let last = spec.layout.rows.len().saturating_sub(1);
    for (i, row) in spec.layout.rows.iter().enumerate() {
        out.extend(grid_band(row, widths, spec.align));
        if i != last && !spec.hidden.contains(LineSet::BETWEEN_ROWS) {
            out.push(rule.clone());
        }
    }

    let has_bands = spec.layout.header.is_some() || !spec.layout.rows.is_empty();
    if has_bands && !spec.hidden.contains(LineSet::BOTTOM) {
        out.push(rule);
    }
    out
}

fn render_simple(spec: &RenderSpec<'_>) -> Vec<String> {
    let widths = &spec.layout.widths;
    let rule = simple_rule(widths);
    let mut out = Vec::new();

    if let Some((title, title_align)) = spec.title {
        out.push(title_align.pad(title, inner_width(Style::Simple, widths)));
    }
    if !spec.hidden.contains(LineSet::TOP) {
        out.push(rule.clone());
    }

    if let Some(header) = &spec.layout.header {
        out.extend(flat_band(header, widths, spec.align));
        if !spec.layout.rows.is_empty() && !spec.hidden.contains(LineSet::BELOW_HEADER) {
            out.push(rule.clone());
        }
    }

    for row in &spec.layout.rows {
        out.extend(flat_band(row, widths, spec.align));
    }

    let has_bands = spec.layout.header.is_some() || !spec.layout.rows.is_empty();
    if has_bands && !spec.hidden.contains(LineSet::BOTTOM) {
        out.push(rule);
    }
    out
}

fn render_plain(spec: &RenderSpec<'_>) -> Vec<String> {
    let widths = &spec.layout.widths;
    let mut out = Vec::new();

    if let Some((title, title_align)) = spec.title {
        out.push(title_align.pad(title, inner_width(Style::Plain, widths)));
    }
    if let Some(header) = &spec.layout.header {
        out.extend(flat_band(header, widths, spec.align));
    }
    for row in &spec.layout.rows {
        out.extend(flat_band(row, widths, spec.align));
    }
    out
}

/// `+----+----+` junction rule spanning every column field.
fn grid_rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for &w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

/// Per-column dash segments joined by the simple-style gutter.
fn simple_rule(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Bordered physical lines for one logical row.
fn grid_band(cells: &[Vec<String>], widths: &[usize], align: Align) -> Vec<String> {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);
    (0..height)
        .map(|i| {
            let mut line = String::from("|");
            for (cell, &w) in cells.iter().zip(widths) {
                let text = cell.get(i).map_or("", String::as_str);
                line.push(' ');
                line.push_str(&align.pad(text, w));
                line.push_str(" |");
            }
            line
        })
        .collect()
}

/// Borderless physical lines for one logical row (simple and plain styles).
fn flat_band(cells: &[Vec<String>], widths: &[usize], align: Align) -> Vec<String> {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);
    (0..height)
        .map(|i| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, &w)| align.pad(cell.get(i).map_or("", String::as_str), w))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}
