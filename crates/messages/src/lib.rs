//! Messages exchanged between workers.
//!
//! Every transfer moves exactly one grid row. The [`Tag`] says whether it is
//! a boundary (halo) row or a row being collected by the coordinator, and
//! which global row index it belongs to.

mod row;
mod tag;

pub use row::RowMessage;
pub use tag::Tag;
