//! Cell values and their canonical text form.

use std::fmt;

/// A single cell value.
///
/// Anything that is not an integer, float, or string is captured through its
/// [`Display`](fmt::Display) rendering at construction via [`Value::other`],
/// so formatting never fails on an unrecognized type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    /// Generic textual conversion of any other type.
    Other(String),
}

impl Value {
    /// Capture an arbitrary value through its `Display` rendering.
    pub fn other(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    /// Canonical text under the table's format settings.
    ///
    /// An empty result (empty string value, or a missing cell formatted from
    /// [`Value::Str(String::new())`]) collapses to the configured placeholder,
    /// which is then padded and aligned like any other text.
    pub(crate) fn format(&self, float_format: char, empty: &str) -> String {
        let text = match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format_float(*v, float_format),
            Self::Str(v) | Self::Other(v) => v.clone(),
        };
        if text.is_empty() { empty.to_string() } else { text }
    }
}

/// Render a float per the single-character format code.
///
/// `'f'` (the default) is shortest-round-trip fixed notation; `'e'`/`'E'`
/// select exponent notation. Unrecognized codes fall back to fixed.
fn format_float(value: f64, format: char) -> String {
    match format {
        'e' => format!("{value:e}"),
        'E' => format!("{value:E}"),
        _ => format!("{value}"),
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Other(v.to_string())
    }
}
