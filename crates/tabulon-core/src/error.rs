//! Render errors.

use std::fmt;

/// Errors surfaced by [`Table::render`](crate::Table::render).
///
/// Rendering either fully succeeds or reports one of these before producing
/// any output. Structural problems (ragged rows, short header lists) are
/// recovered by padding and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The style name is not one of `grid`, `simple`, `plain`.
    UnknownStyle(String),
    /// Wrapping is enabled but the max cell size leaves no room to wrap.
    InvalidMaxCellSize(usize),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyle(name) => write!(f, "unknown table style: {name:?}"),
            Self::InvalidMaxCellSize(got) => write!(
                f,
                "max cell size must be at least 1 when wrapping is enabled (got {got})"
            ),
        }
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = RenderError::UnknownStyle("fancy".into());
        assert_eq!(err.to_string(), "unknown table style: \"fancy\"");

        let err = RenderError::InvalidMaxCellSize(0);
        assert!(err.to_string().contains("got 0"));
    }
}
