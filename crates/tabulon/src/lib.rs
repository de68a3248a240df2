#![forbid(unsafe_code)]

//! tabulon public facade crate.
//!
//! Renders rows of heterogeneous scalar values into fixed-width text tables
//! in three styles: bordered `grid`, minimal `simple`, and borderless
//! `plain`. Layout is display-width correct (CJK glyphs count two cells) and
//! over-long cells wrap at a configurable cap with word-aware breaks.
//!
//! # Example
//! ```
//! use tabulon::{Align, Style, Table};
//!
//! let mut table = Table::from_rows([["1", "2"]]);
//! table.set_headers(["A", "B"]).set_align(Align::Center);
//!
//! assert_eq!(
//!     table.render(Style::Grid).unwrap(),
//!     "+---+---+\n\
//!      | A | B |\n\
//!      +---+---+\n\
//!      | 1 | 2 |\n\
//!      +---+---+"
//! );
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tabulon_core::{Align, LineSet, RenderError, Style, Table, Value};

// --- Text re-exports -------------------------------------------------------

pub use tabulon_text::{display_width, wrap_cell};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{Align, LineSet, RenderError, Style, Table, Value};
}

pub use tabulon_core as core;
pub use tabulon_text as text;
