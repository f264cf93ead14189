//! Message tags.

use std::fmt;

/// Identifies what a row message carries.
///
/// The payload row index is the *global* index of the row being sent, which
/// is also the index the receiver writes it to. A receiver therefore always
/// knows which tag to expect, even when both of its ring neighbors are the
/// same rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Boundary row sent to a ring neighbor after a local update.
    Halo(usize),

    /// Owned row sent to the coordinator after the last step.
    Collect(usize),
}

impl Tag {
    /// Global row index carried by the message.
    pub fn row(&self) -> usize {
        match self {
            Tag::Halo(row) | Tag::Collect(row) => *row,
        }
    }

    /// Get a human-readable name for this message kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Tag::Halo(_) => "halo",
            Tag::Collect(_) => "collect",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[row {}]", self.type_name(), self.row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_accessors() {
        let halo = Tag::Halo(3);
        assert_eq!(halo.row(), 3);
        assert_eq!(halo.type_name(), "halo");
        assert_eq!(halo.to_string(), "halo[row 3]");

        let collect = Tag::Collect(9);
        assert_eq!(collect.row(), 9);
        assert_eq!(collect.type_name(), "collect");
        assert_eq!(collect.to_string(), "collect[row 9]");
    }

    #[test]
    fn test_same_row_different_phase_is_distinct() {
        assert_ne!(Tag::Halo(5), Tag::Collect(5));
    }
}
