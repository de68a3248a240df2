//! The table facade: configuration plus render orchestration.

use tabulon_text::display_width;

use crate::align::Align;
use crate::error::RenderError;
use crate::layout::{self, WrapSpec};
use crate::line::LineSet;
use crate::render::{self, RenderSpec};
use crate::style::Style;
use crate::value::Value;

#[derive(Debug, Clone)]
struct Title {
    text: String,
    align: Align,
}

/// A table of values and the configuration that shapes its rendering.
///
/// Constructed once from input data, mutated through chaining setters, and
/// rendered on demand. [`Table::render`] is pure: it recomputes the whole
/// layout each call, so repeated calls with unchanged configuration produce
/// identical output and configuration changes never leak stale layout.
///
/// # Example
/// ```
/// use tabulon_core::{Style, Table};
///
/// let mut table = Table::from_rows([["1", "2"]]);
/// table.set_headers(["A", "B"]);
/// let text = table.render(Style::Grid).unwrap();
/// assert_eq!(text.lines().next(), Some("+---+---+"));
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<Value>>,
    headers: Vec<String>,
    title: Option<Title>,
    align: Align,
    float_format: char,
    empty_string: String,
    max_cell_size: usize,
    wrap: bool,
    wrap_delimiter: char,
    split_concat: String,
    hidden_lines: LineSet,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table with default configuration: right alignment, `'f'`
    /// float format, empty placeholder, wrapping off, space delimiter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            headers: Vec::new(),
            title: None,
            align: Align::default(),
            float_format: 'f',
            empty_string: String::new(),
            max_cell_size: 0,
            wrap: false,
            wrap_delimiter: ' ',
            split_concat: String::new(),
            hidden_lines: LineSet::empty(),
        }
    }

    /// Build from an ordered sequence of rows. Rows may be ragged; short
    /// rows are padded with the empty-value placeholder at render time.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<Value>,
    {
        let mut table = Self::new();
        table.rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        table
    }

    /// Build from `(label, column)` pairs: labels become the headers and the
    /// columns are transposed into rows. Short columns are padded with empty
    /// values, so every row keeps a consistent cell count.
    pub fn from_columns<I, L>(columns: I) -> Self
    where
        I: IntoIterator<Item = (L, Vec<Value>)>,
        L: Into<String>,
    {
        let mut headers = Vec::new();
        let mut cols: Vec<Vec<Value>> = Vec::new();
        for (label, column) in columns {
            headers.push(label.into());
            cols.push(column);
        }

        let height = cols.iter().map(Vec::len).max().unwrap_or(0);
        let rows = (0..height)
            .map(|r| {
                cols.iter()
                    .map(|c| c.get(r).cloned().unwrap_or_else(|| Value::Str(String::new())))
                    .collect()
            })
            .collect();

        let mut table = Self::new();
        table.headers = headers;
        table.rows = rows;
        table
    }

    /// Set the header labels. Without headers, the first row is promoted to
    /// the header band at render time.
    pub fn set_headers<I>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Set a title band with its own alignment, spanning the table width.
    pub fn set_title(&mut self, text: impl Into<String>, align: Align) -> &mut Self {
        self.title = Some(Title {
            text: text.into(),
            align,
        });
        self
    }

    /// Set the table-wide cell alignment.
    pub fn set_align(&mut self, align: Align) -> &mut Self {
        self.align = align;
        self
    }

    /// Set the single-character float format code (default `'f'`).
    pub fn set_float_format(&mut self, format: char) -> &mut Self {
        self.float_format = format;
        self
    }

    /// Set the placeholder rendered for empty and missing cells.
    pub fn set_empty_string(&mut self, empty: impl Into<String>) -> &mut Self {
        self.empty_string = empty.into();
        self
    }

    /// Set the wrap cap in display cells. `0` means unbounded.
    pub fn set_max_cell_size(&mut self, size: usize) -> &mut Self {
        self.max_cell_size = size;
        self
    }

    /// Enable or disable cell wrapping.
    pub fn set_wrap(&mut self, wrap: bool) -> &mut Self {
        self.wrap = wrap;
        self
    }

    /// Set the word-preserving break rune (default space).
    pub fn set_wrap_delimiter(&mut self, delimiter: char) -> &mut Self {
        self.wrap_delimiter = delimiter;
        self
    }

    /// Set the continuation marker appended to force-split fragments.
    pub fn set_split_concat(&mut self, marker: impl Into<String>) -> &mut Self {
        self.split_concat = marker.into();
        self
    }

    /// Suppress the given separator lines.
    pub fn set_hidden_lines(&mut self, lines: LineSet) -> &mut Self {
        self.hidden_lines = lines;
        self
    }

    /// Render by style name (`"grid"`, `"simple"`, `"plain"`).
    pub fn render_named(&self, name: &str) -> Result<String, RenderError> {
        self.render(Style::from_name(name)?)
    }

    /// Render the table as a `\n`-separated text block without a trailing
    /// newline. Pure: the table is not mutated.
    pub fn render(&self, style: Style) -> Result<String, RenderError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "table_render",
            style = style.name(),
            rows = self.rows.len(),
            wrap = self.wrap
        )
        .entered();

        if self.wrap && self.max_cell_size == 0 {
            return Err(RenderError::InvalidMaxCellSize(self.max_cell_size));
        }

        // Header band: explicit headers, else the first row is promoted.
        let (header, body): (Option<Vec<String>>, &[Vec<Value>]) = if self.headers.is_empty() {
            match self.rows.split_first() {
                Some((first, rest)) => (Some(self.format_row(first)), rest),
                None => (None, &[]),
            }
        } else {
            let header = self
                .headers
                .iter()
                .map(|label| self.placeholder_or(label))
                .collect();
            (Some(header), self.rows.as_slice())
        };

        let columns = header
            .as_ref()
            .map_or(0, Vec::len)
            .max(body.iter().map(Vec::len).max().unwrap_or(0));
        if columns == 0 {
            return Ok(String::new());
        }

        // Normalize ragged bands to the full column count.
        let header = header.map(|mut cells| {
            cells.resize_with(columns, || self.empty_string.clone());
            cells
        });
        let rows: Vec<Vec<String>> = body
            .iter()
            .map(|row| {
                let mut cells = self.format_row(row);
                cells.resize_with(columns, || self.empty_string.clone());
                cells
            })
            .collect();

        let wrap = self.wrap.then(|| WrapSpec {
            max_cell_size: self.max_cell_size,
            delimiter: self.wrap_delimiter,
            split_marker: &self.split_concat,
        });
        let mut layout = layout::plan(header, rows, columns, wrap);

        // The title only widens the table: the last column absorbs any
        // deficit so the title fits between the outer borders.
        if let Some(title) = &self.title {
            let needed = display_width(&title.text);
            let available = render::inner_width(style, &layout.widths);
            if needed > available {
                if let Some(last) = layout.widths.last_mut() {
                    *last += needed - available;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(columns, widths = ?layout.widths, "layout planned");

        let spec = RenderSpec {
            layout: &layout,
            align: self.align,
            title: self.title.as_ref().map(|t| (t.text.as_str(), t.align)),
            hidden: self.hidden_lines,
        };
        Ok(render::render(&spec, style))
    }

    fn format_row(&self, row: &[Value]) -> Vec<String> {
        row.iter()
            .map(|value| value.format(self.float_format, &self.empty_string))
            .collect()
    }

    fn placeholder_or(&self, text: &str) -> String {
        if text.is_empty() {
            self.empty_string.clone()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_renders_empty_string() {
        let table = Table::new();
        assert_eq!(table.render(Style::Grid).unwrap(), "");
        assert_eq!(table.render(Style::Plain).unwrap(), "");
    }

    #[test]
    fn wrap_without_cell_size_fails_fast() {
        let mut table = Table::from_rows([["x"]]);
        table.set_wrap(true);
        assert_eq!(
            table.render(Style::Grid),
            Err(RenderError::InvalidMaxCellSize(0))
        );
        // No partial output either through the named entry point.
        assert!(table.render_named("grid").is_err());
    }

    #[test]
    fn unknown_style_name_is_an_error() {
        let table = Table::from_rows([["x"]]);
        assert_eq!(
            table.render_named("markdown"),
            Err(RenderError::UnknownStyle("markdown".into()))
        );
    }

    #[test]
    fn render_is_idempotent() {
        let mut table = Table::from_rows([["a", "bb"], ["ccc", "d"]]);
        table.set_title("T", Align::Center);
        let first = table.render(Style::Grid).unwrap();
        let second = table.render(Style::Grid).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn promotion_does_not_mutate_the_table() {
        // No headers: first row becomes the header band, but only within
        // render; a later set_headers sees all rows as body again.
        let mut table = Table::from_rows([["h1", "h2"], ["a", "b"]]);
        let promoted = table.render(Style::Plain).unwrap();
        assert_eq!(promoted, "h1  h2\n a   b");

        table.set_headers(["H", "I"]);
        let explicit = table.render(Style::Plain).unwrap();
        assert_eq!(explicit, " H   I\nh1  h2\n a   b");
    }

    #[test]
    fn from_columns_transposes_and_pads() {
        let table = Table::from_columns([
            ("n", vec![Value::Int(1), Value::Int(2)]),
            ("s", vec![Value::from("x")]),
        ]);
        assert_eq!(table.render(Style::Plain).unwrap(), "n  s\n1  x\n2   ");
    }

    #[test]
    fn setters_chain() {
        let mut table = Table::from_rows([["x"]]);
        table
            .set_align(Align::Left)
            .set_float_format('e')
            .set_empty_string("None")
            .set_hidden_lines(LineSet::TOP);
        assert_eq!(table.render(Style::Grid).unwrap(), "| x |\n+---+");
    }
}
