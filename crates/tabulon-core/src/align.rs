//! Horizontal alignment and cell padding.

use tabulon_text::display_width;

/// Horizontal cell alignment, applied table-wide.
///
/// The default is [`Align::Right`], matching numeric tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Content at the left edge, padding on the right.
    Left,
    /// Padding split as evenly as possible; an odd deficit puts the extra
    /// space on the right.
    Center,
    /// Content at the right edge, padding on the left.
    #[default]
    Right,
}

impl Align {
    /// Parse a lowercase alignment name (`"left"`, `"center"`, `"right"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Pad `text` to exactly `width` display cells.
    ///
    /// Text already at or beyond `width` is returned unchanged; the layout
    /// planner guarantees that never happens for computed column widths.
    #[must_use]
    pub(crate) fn pad(self, text: &str, width: usize) -> String {
        let deficit = width.saturating_sub(display_width(text));
        if deficit == 0 {
            return text.to_string();
        }
        match self {
            Self::Left => format!("{text}{}", " ".repeat(deficit)),
            Self::Right => format!("{}{text}", " ".repeat(deficit)),
            Self::Center => {
                let left = deficit / 2;
                format!("{}{text}{}", " ".repeat(left), " ".repeat(deficit - left))
            }
        }
    }
}
