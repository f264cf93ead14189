//! Scripted communicator for unit tests.
//!
//! Records every call and answers every receive with a row of alive cells,
//! so tests can assert on the exact call sequence a worker makes.

use lifegrid_core::{Communicator, TransportError};
use lifegrid_messages::Tag;
use lifegrid_types::{Cell, Rank};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send {
        dest: Rank,
        tag: Tag,
    },
    Recv {
        source: Rank,
        tag: Tag,
    },
    SendRecv {
        dest: Rank,
        send_tag: Tag,
        source: Rank,
        recv_tag: Tag,
    },
}

pub struct ScriptedComm {
    rank: Rank,
    size: usize,
    calls: RefCell<Vec<Call>>,
    fail_with: Option<TransportError>,
}

impl ScriptedComm {
    pub fn new(rank: Rank, size: usize) -> Self {
        Self {
            rank,
            size,
            calls: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Every transfer fails with `err`.
    pub fn failing(rank: Rank, size: usize, err: TransportError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new(rank, size)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn outcome(&self) -> Result<(), TransportError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Communicator for ScriptedComm {
    fn rank(&self) -> Rank {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send(&self, dest: Rank, tag: Tag, _row: &[Cell]) -> Result<(), TransportError> {
        self.outcome()?;
        self.calls.borrow_mut().push(Call::Send { dest, tag });
        Ok(())
    }

    fn recv(&self, source: Rank, tag: Tag, row: &mut [Cell]) -> Result<(), TransportError> {
        self.outcome()?;
        self.calls.borrow_mut().push(Call::Recv { source, tag });
        row.fill(Cell::Alive);
        Ok(())
    }

    fn send_recv(
        &self,
        _send_row: &[Cell],
        dest: Rank,
        send_tag: Tag,
        recv_row: &mut [Cell],
        source: Rank,
        recv_tag: Tag,
    ) -> Result<(), TransportError> {
        self.outcome()?;
        self.calls.borrow_mut().push(Call::SendRecv {
            dest,
            send_tag,
            source,
            recv_tag,
        });
        recv_row.fill(Cell::Alive);
        Ok(())
    }
}
