//! Rendezvous channel network between worker threads.

use crossbeam::channel::{bounded, Receiver, Select, Sender};
use lifegrid_core::{deliver, Communicator, TransportError};
use lifegrid_messages::{RowMessage, Tag};
use lifegrid_types::{Cell, Rank};

/// Builds a fully connected group of [`ChannelCommunicator`]s.
///
/// Every ordered pair of ranks gets its own zero-capacity channel, so a send
/// completes only when the partner takes the row, and messages between two
/// ranks arrive in the order they were sent.
pub struct ChannelNetwork;

impl ChannelNetwork {
    /// One communicator per rank, indexed by rank.
    pub fn build(size: usize) -> Vec<ChannelCommunicator> {
        let mut outgoing: Vec<Vec<Sender<RowMessage>>> =
            (0..size).map(|_| Vec::with_capacity(size)).collect();
        let mut incoming: Vec<Vec<Receiver<RowMessage>>> =
            (0..size).map(|_| Vec::with_capacity(size)).collect();

        for senders in outgoing.iter_mut() {
            for receivers in incoming.iter_mut() {
                let (tx, rx) = bounded(0);
                senders.push(tx);
                receivers.push(rx);
            }
        }

        outgoing
            .into_iter()
            .zip(incoming)
            .enumerate()
            .map(|(rank, (outgoing, incoming))| ChannelCommunicator {
                rank: Rank(rank),
                size,
                outgoing,
                incoming,
            })
            .collect()
    }
}

/// One rank's endpoints into a [`ChannelNetwork`].
///
/// Dropping it disconnects the rank: partners blocked on it get
/// [`TransportError::Disconnected`] instead of waiting forever.
pub struct ChannelCommunicator {
    rank: Rank,
    size: usize,

    /// Sender to each destination rank.
    outgoing: Vec<Sender<RowMessage>>,

    /// Receiver from each source rank.
    incoming: Vec<Receiver<RowMessage>>,
}

impl ChannelCommunicator {
    fn sender_to(&self, dest: Rank) -> Result<&Sender<RowMessage>, TransportError> {
        if dest == self.rank {
            return Err(TransportError::SelfTransfer(dest));
        }
        self.outgoing
            .get(dest.get())
            .ok_or(TransportError::UnknownRank(dest))
    }

    fn receiver_from(&self, source: Rank) -> Result<&Receiver<RowMessage>, TransportError> {
        if source == self.rank {
            return Err(TransportError::SelfTransfer(source));
        }
        self.incoming
            .get(source.get())
            .ok_or(TransportError::UnknownRank(source))
    }
}

impl std::fmt::Debug for ChannelCommunicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelCommunicator")
            .field("rank", &self.rank)
            .field("size", &self.size)
            .finish()
    }
}

impl Communicator for ChannelCommunicator {
    fn rank(&self) -> Rank {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send(&self, dest: Rank, tag: Tag, row: &[Cell]) -> Result<(), TransportError> {
        self.sender_to(dest)?
            .send(RowMessage::new(self.rank, tag, row))
            .map_err(|_| TransportError::Disconnected { peer: dest })
    }

    fn recv(&self, source: Rank, tag: Tag, row: &mut [Cell]) -> Result<(), TransportError> {
        let message = self
            .receiver_from(source)?
            .recv()
            .map_err(|_| TransportError::Disconnected { peer: source })?;
        deliver(message, tag, row)
    }

    /// Arms the send and the receive together and completes whichever the
    /// partner is ready for first, then the other. Two ranks calling this
    /// on each other at the same time therefore always make progress.
    fn send_recv(
        &self,
        send_row: &[Cell],
        dest: Rank,
        send_tag: Tag,
        recv_row: &mut [Cell],
        source: Rank,
        recv_tag: Tag,
    ) -> Result<(), TransportError> {
        let tx = self.sender_to(dest)?;
        let rx = self.receiver_from(source)?;

        let mut pending = Some(RowMessage::new(self.rank, send_tag, send_row));
        let mut received: Option<RowMessage> = None;

        loop {
            match (pending.take(), received.take()) {
                (Some(outgoing), None) => {
                    let mut sel = Select::new();
                    let send_op = sel.send(tx);
                    let recv_op = sel.recv(rx);
                    let oper = sel.select();
                    let index = oper.index();

                    if index == send_op {
                        oper.send(tx, outgoing)
                            .map_err(|_| TransportError::Disconnected { peer: dest })?;
                    } else {
                        debug_assert_eq!(index, recv_op);
                        let message = oper
                            .recv(rx)
                            .map_err(|_| TransportError::Disconnected { peer: source })?;
                        received = Some(message);
                        pending = Some(outgoing);
                    }
                }
                (Some(outgoing), Some(message)) => {
                    tx.send(outgoing)
                        .map_err(|_| TransportError::Disconnected { peer: dest })?;
                    received = Some(message);
                }
                (None, None) => {
                    let message = rx
                        .recv()
                        .map_err(|_| TransportError::Disconnected { peer: source })?;
                    received = Some(message);
                }
                (None, Some(message)) => return deliver(message, recv_tag, recv_row),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn row(alive: &[bool]) -> Vec<Cell> {
        alive.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_build_assigns_ranks_in_order() {
        let comms = ChannelNetwork::build(3);
        let ranks: Vec<_> = comms.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank(0), Rank(1), Rank(2)]);
        assert!(comms.iter().all(|c| c.size() == 3));
    }

    #[test]
    fn test_send_then_recv_between_threads() {
        let mut comms = ChannelNetwork::build(2);
        let b = comms.pop().unwrap();
        let a = comms.pop().unwrap();

        let received = thread::scope(|s| {
            s.spawn(|| {
                a.send(Rank(1), Tag::Collect(3), &row(&[true, false, true]))
                    .unwrap();
            });
            let handle = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 3];
                b.recv(Rank(0), Tag::Collect(3), &mut buf).unwrap();
                buf
            });
            handle.join().unwrap()
        });

        assert_eq!(received, row(&[true, false, true]));
    }

    #[test]
    fn test_send_recv_both_directions_at_once() {
        let mut comms = ChannelNetwork::build(2);
        let b = comms.pop().unwrap();
        let a = comms.pop().unwrap();

        let (from_b, from_a) = thread::scope(|s| {
            let ha = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 2];
                a.send_recv(
                    &row(&[true, true]),
                    Rank(1),
                    Tag::Halo(0),
                    &mut buf,
                    Rank(1),
                    Tag::Halo(1),
                )
                .unwrap();
                buf
            });
            let hb = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 2];
                b.send_recv(
                    &row(&[false, true]),
                    Rank(0),
                    Tag::Halo(1),
                    &mut buf,
                    Rank(0),
                    Tag::Halo(0),
                )
                .unwrap();
                buf
            });
            (ha.join().unwrap(), hb.join().unwrap())
        });

        assert_eq!(from_b, row(&[false, true]));
        assert_eq!(from_a, row(&[true, true]));
    }

    #[test]
    fn test_send_recv_against_plain_recv_then_send() {
        // Partner receives first and only then sends.
        let mut comms = ChannelNetwork::build(2);
        let b = comms.pop().unwrap();
        let a = comms.pop().unwrap();

        let (from_b, from_a) = thread::scope(|s| {
            let ha = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 1];
                a.send_recv(
                    &row(&[true]),
                    Rank(1),
                    Tag::Halo(0),
                    &mut buf,
                    Rank(1),
                    Tag::Halo(1),
                )
                .unwrap();
                buf
            });
            let hb = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 1];
                b.recv(Rank(0), Tag::Halo(0), &mut buf).unwrap();
                b.send(Rank(0), Tag::Halo(1), &row(&[true])).unwrap();
                buf
            });
            (ha.join().unwrap(), hb.join().unwrap())
        });

        assert_eq!(from_b, row(&[true]));
        assert_eq!(from_a, row(&[true]));
    }

    #[test]
    fn test_send_recv_against_plain_send_then_recv() {
        let mut comms = ChannelNetwork::build(2);
        let b = comms.pop().unwrap();
        let a = comms.pop().unwrap();

        let from_b = thread::scope(|s| {
            let ha = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 2];
                a.send_recv(
                    &row(&[false, false]),
                    Rank(1),
                    Tag::Halo(0),
                    &mut buf,
                    Rank(1),
                    Tag::Halo(1),
                )
                .unwrap();
                buf
            });
            s.spawn(|| {
                b.send(Rank(0), Tag::Halo(1), &row(&[true, false])).unwrap();
                let mut buf = vec![Cell::Alive; 2];
                b.recv(Rank(0), Tag::Halo(0), &mut buf).unwrap();
                assert_eq!(buf, row(&[false, false]));
            });
            ha.join().unwrap()
        });

        assert_eq!(from_b, row(&[true, false]));
    }

    #[test]
    fn test_recv_rejects_unexpected_tag() {
        let mut comms = ChannelNetwork::build(2);
        let b = comms.pop().unwrap();
        let a = comms.pop().unwrap();

        let err = thread::scope(|s| {
            s.spawn(|| {
                a.send(Rank(1), Tag::Halo(2), &row(&[true])).unwrap();
            });
            let handle = s.spawn(|| {
                let mut buf = vec![Cell::Dead; 1];
                b.recv(Rank(0), Tag::Collect(2), &mut buf).unwrap_err()
            });
            handle.join().unwrap()
        });

        assert_eq!(
            err,
            TransportError::UnexpectedMessage {
                expected: Tag::Collect(2),
                got: Tag::Halo(2),
                from: Rank(0),
            }
        );
    }

    #[test]
    fn test_dropped_peer_disconnects() {
        let mut comms = ChannelNetwork::build(2);
        let b = comms.pop().unwrap();
        let a = comms.pop().unwrap();
        drop(b);

        let err = a.send(Rank(1), Tag::Halo(0), &row(&[true])).unwrap_err();
        assert_eq!(err, TransportError::Disconnected { peer: Rank(1) });

        let mut buf = vec![Cell::Dead; 1];
        let err = a
            .send_recv(
                &row(&[true]),
                Rank(1),
                Tag::Halo(0),
                &mut buf,
                Rank(1),
                Tag::Halo(1),
            )
            .unwrap_err();
        assert!(matches!(err, TransportError::Disconnected { peer: Rank(1) }));
    }

    #[test]
    fn test_rejects_unknown_and_own_rank() {
        let comms = ChannelNetwork::build(2);
        let mut buf = vec![Cell::Dead; 1];

        assert_eq!(
            comms[0].send(Rank(5), Tag::Halo(0), &buf).unwrap_err(),
            TransportError::UnknownRank(Rank(5))
        );
        assert_eq!(
            comms[0].recv(Rank(0), Tag::Halo(0), &mut buf).unwrap_err(),
            TransportError::SelfTransfer(Rank(0))
        );
    }
}
