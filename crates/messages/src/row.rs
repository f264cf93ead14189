//! Row payload.

use crate::Tag;
use lifegrid_types::{Cell, Rank};

/// One full grid row in flight between two ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMessage {
    /// Sending rank.
    pub source: Rank,

    /// What the row is and where it goes.
    pub tag: Tag,

    /// Exactly one row of cells.
    pub cells: Vec<Cell>,
}

impl RowMessage {
    /// Create a message carrying a copy of `row`.
    pub fn new(source: Rank, tag: Tag, row: &[Cell]) -> Self {
        Self {
            source,
            tag,
            cells: row.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_message_copies_row() {
        let row = [Cell::Alive, Cell::Dead, Cell::Alive];
        let message = RowMessage::new(Rank(2), Tag::Halo(7), &row);
        assert_eq!(message.source, Rank(2));
        assert_eq!(message.tag, Tag::Halo(7));
        assert_eq!(message.cells, row.to_vec());
    }
}
