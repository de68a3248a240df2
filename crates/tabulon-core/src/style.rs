//! Render styles.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Border/separator convention for a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// ASCII box borders (`+`, `-`, `|`) around every band and row.
    Grid,
    /// Per-column dash rules above/below the header and at the top and
    /// bottom; no verticals, no between-row rules.
    Simple,
    /// No borders at all; columns separated by a two-space gutter.
    Plain,
}

impl Style {
    /// Parse a style name. Unrecognized names are an error, never a
    /// silent fallback.
    pub fn from_name(name: &str) -> Result<Self, RenderError> {
        match name {
            "grid" => Ok(Self::Grid),
            "simple" => Ok(Self::Simple),
            "plain" => Ok(Self::Plain),
            other => Err(RenderError::UnknownStyle(other.to_string())),
        }
    }

    /// The lowercase name this style parses from.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Simple => "simple",
            Self::Plain => "plain",
        }
    }
}

impl FromStr for Style {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_styles() {
        assert_eq!(Style::from_name("grid"), Ok(Style::Grid));
        assert_eq!(Style::from_name("simple"), Ok(Style::Simple));
        assert_eq!(Style::from_name("plain"), Ok(Style::Plain));
    }

    #[test]
    fn rejects_unknown_styles() {
        assert_eq!(
            Style::from_name("markdown"),
            Err(RenderError::UnknownStyle("markdown".into()))
        );
        assert!(Style::from_name("Grid").is_err());
    }

    #[test]
    fn from_str_round_trips_name() {
        for style in [Style::Grid, Style::Simple, Style::Plain] {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
            assert_eq!(style.to_string(), style.name());
        }
    }
}
