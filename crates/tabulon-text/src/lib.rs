#![forbid(unsafe_code)]

//! Text measurement and wrapping for tabulon.
//!
//! This crate provides the width-correct text primitives the layout engine
//! is built on:
//! - [`display_width`] - terminal cell count of a string (CJK-aware)
//! - [`wrap_cell`] - bounded, word-aware wrapping of a single cell
//!
//! # Example
//! ```
//! use tabulon_text::{display_width, wrap_cell};
//!
//! // CJK characters occupy two terminal cells each.
//! assert_eq!(display_width("こんにちわ"), 10);
//!
//! // Word-aware wrapping at a cell size cap.
//! let lines = wrap_cell("AAAA BBBB", 4, ' ', "");
//! assert_eq!(lines, vec!["AAAA", "BBBB"]);
//! ```

pub mod width;
pub mod wrap;

pub use width::{display_width, has_wide_chars, is_ascii_only};
pub use wrap::wrap_cell;
