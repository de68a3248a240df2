#![forbid(unsafe_code)]

//! Core table model, column layout, and row rendering for tabulon.
//!
//! The pipeline is: cell values ([`Value`]) are formatted to canonical text,
//! the layout planner derives per-column widths (wrapping over-long cells at
//! the configured cap), and the row renderer emits the bordered text block
//! for the selected [`Style`]. [`Table`] owns the configuration and
//! orchestrates the pieces.
//!
//! # Example
//! ```
//! use tabulon_core::{Align, Style, Table};
//!
//! let mut table = Table::from_rows([["ab", "1"], ["c", "22"]]);
//! table.set_headers(["Name", "V"]).set_align(Align::Left);
//! let text = table.render(Style::Grid).unwrap();
//! assert!(text.starts_with("+------+----+"));
//! ```

pub mod align;
pub mod error;
mod layout;
pub mod line;
mod render;
pub mod style;
pub mod table;
pub mod value;

pub use align::Align;
pub use error::RenderError;
pub use line::LineSet;
pub use style::Style;
pub use table::Table;
pub use value::Value;
