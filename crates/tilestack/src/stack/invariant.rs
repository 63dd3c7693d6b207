#![forbid(unsafe_code)]

//! Structural validation of the tile chain.

use std::collections::HashSet;
use std::fmt;

use super::{TileId, TileStack};

/// A broken chain invariant found by [`TileStack::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackInvariantError {
    /// Exactly one of front/back is set.
    EndpointMismatch {
        front: Option<TileId>,
        back: Option<TileId>,
    },
    /// The front node has a predecessor.
    FrontHasPrev { front: TileId, prev: TileId },
    /// The back node has a successor.
    BackHasNext { back: TileId, next: TileId },
    /// A link (or an endpoint, when `from` is `None`) points at a vacant slot.
    DanglingLink { from: Option<TileId>, to: TileId },
    /// A node's `prev` does not point at the node visited before it.
    BrokenBackLink {
        node: TileId,
        expected: Option<TileId>,
        found: Option<TileId>,
    },
    /// Walking `next` links revisited a node.
    Cycle { at: TileId },
    /// Walking forward from the front did not end at the back.
    TailMismatch {
        back: Option<TileId>,
        last: Option<TileId>,
    },
    /// The stored length disagrees with the number of chained nodes.
    LengthMismatch { stored: usize, chained: usize },
    /// Some occupied slots are not reachable from the front.
    Unreachable { count: usize },
}

impl fmt::Display for StackInvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointMismatch { front, back } => {
                write!(f, "front {front:?} and back {back:?} disagree on emptiness")
            }
            Self::FrontHasPrev { front, prev } => {
                write!(f, "front {front} has predecessor {prev}")
            }
            Self::BackHasNext { back, next } => write!(f, "back {back} has successor {next}"),
            Self::DanglingLink { from: Some(from), to } => {
                write!(f, "node {from} links to vacant slot {to}")
            }
            Self::DanglingLink { from: None, to } => {
                write!(f, "endpoint refers to vacant slot {to}")
            }
            Self::BrokenBackLink {
                node,
                expected,
                found,
            } => write!(
                f,
                "node {node} has prev {found:?}, expected {expected:?}"
            ),
            Self::Cycle { at } => write!(f, "cycle detected at node {at}"),
            Self::TailMismatch { back, last } => {
                write!(f, "forward walk ended at {last:?}, back is {back:?}")
            }
            Self::LengthMismatch { stored, chained } => {
                write!(f, "stored length {stored} but {chained} node(s) are chained")
            }
            Self::Unreachable { count } => {
                write!(f, "{count} tile(s) are not reachable from the front")
            }
        }
    }
}

impl std::error::Error for StackInvariantError {}

impl TileStack {
    /// Check the chain invariants.
    ///
    /// Walks the chain once from the front, verifying that every `prev` link
    /// mirrors the walk, that the walk ends at the back, and that every
    /// stored tile was visited exactly once. O(n).
    pub fn validate(&self) -> Result<(), StackInvariantError> {
        let (front, back) = (self.front, self.back);
        if front.is_some() != back.is_some() {
            return Err(StackInvariantError::EndpointMismatch { front, back });
        }

        if let Some(front) = front {
            let node = self
                .arena
                .get(front)
                .ok_or(StackInvariantError::DanglingLink {
                    from: None,
                    to: front,
                })?;
            if let Some(prev) = node.prev {
                return Err(StackInvariantError::FrontHasPrev { front, prev });
            }
        }
        if let Some(back) = back {
            let node = self
                .arena
                .get(back)
                .ok_or(StackInvariantError::DanglingLink {
                    from: None,
                    to: back,
                })?;
            if let Some(next) = node.next {
                return Err(StackInvariantError::BackHasNext { back, next });
            }
        }

        let mut seen = HashSet::with_capacity(self.arena.len());
        let mut last: Option<TileId> = None;
        let mut cursor = front;
        while let Some(id) = cursor {
            if !seen.insert(id) {
                return Err(StackInvariantError::Cycle { at: id });
            }
            let node = self
                .arena
                .get(id)
                .ok_or(StackInvariantError::DanglingLink { from: last, to: id })?;
            if node.prev != last {
                return Err(StackInvariantError::BrokenBackLink {
                    node: id,
                    expected: last,
                    found: node.prev,
                });
            }
            last = Some(id);
            cursor = node.next;
        }

        if last != back {
            return Err(StackInvariantError::TailMismatch { back, last });
        }

        let chained = seen.len();
        let occupied = self.arena.occupied().count();
        if occupied != chained {
            return Err(StackInvariantError::Unreachable {
                count: occupied.saturating_sub(chained),
            });
        }
        if self.arena.len() != chained {
            return Err(StackInvariantError::LengthMismatch {
                stored: self.arena.len(),
                chained,
            });
        }
        Ok(())
    }
}
