//! Named separator lines and their suppression set.

use bitflags::bitflags;

bitflags! {
    /// Separator lines that can be individually suppressed.
    ///
    /// Hiding one line never affects the others; styles that do not draw a
    /// given line ignore its flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LineSet: u8 {
        /// The outer border above the first band (title or header).
        const TOP = 1;
        /// The rule immediately below the header band.
        const BELOW_HEADER = 1 << 1;
        /// Grid separators between body rows.
        const BETWEEN_ROWS = 1 << 2;
        /// The outer border below the last row.
        const BOTTOM = 1 << 3;
    }
}

impl LineSet {
    /// Parse one lowercase line name as used by the string configuration
    /// surface: `"top"`, `"belowheader"`, `"betweenrows"`, `"bottom"`.
    #[must_use]
    pub fn from_lower_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::TOP),
            "belowheader" => Some(Self::BELOW_HEADER),
            "betweenrows" => Some(Self::BETWEEN_ROWS),
            "bottom" => Some(Self::BOTTOM),
            _ => None,
        }
    }

    /// Union of all recognized names; unknown names are ignored.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .filter_map(Self::from_lower_name)
            .fold(Self::empty(), |acc, line| acc | line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!(LineSet::from_lower_name("top"), Some(LineSet::TOP));
        assert_eq!(LineSet::from_lower_name("belowheader"), Some(LineSet::BELOW_HEADER));
        assert_eq!(LineSet::from_lower_name("betweenrows"), Some(LineSet::BETWEEN_ROWS));
        assert_eq!(LineSet::from_lower_name("bottom"), Some(LineSet::BOTTOM));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(LineSet::from_lower_name("Top"), None);
        assert_eq!(LineSet::from_lower_name("header"), None);
    }

    #[test]
    fn from_names_unions_and_skips_unknowns() {
        let set = LineSet::from_names(["belowheader", "nope", "bottom"]);
        assert_eq!(set, LineSet::BELOW_HEADER | LineSet::BOTTOM);
        assert!(!set.contains(LineSet::TOP));
    }
}
