#![forbid(unsafe_code)]

//! Slot storage for stack nodes.
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`TileId`]
//! instead of by pointer. Each slot carries a generation that is bumped when
//! its node is released, so a handle to a removed tile can never resolve to
//! whatever later reuses the slot.

use std::fmt;

use crate::tile::Tile;

/// Stable handle to a tile held by a [`TileStack`](crate::TileStack).
///
/// Handles stay valid across raise/lower/highlight and become stale once the
/// tile is removed, merged away, or the stack is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    index: u32,
    generation: u32,
}

impl TileId {
    /// Slot index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Slot generation at the time the handle was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// A tile plus its position in the chain.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) tile: Tile,
    pub(crate) prev: Option<TileId>,
    pub(crate) next: Option<TileId>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl Arena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Store `tile` as an unlinked node and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` slots would be needed.
    pub(crate) fn insert(&mut self, tile: Tile) -> TileId {
        let node = Node {
            tile,
            prev: None,
            next: None,
        };
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return TileId {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or_else(|_| {
            panic!("tile arena exhausted ({} slots)", self.slots.len())
        });
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        TileId {
            index,
            generation: 0,
        }
    }

    /// Free the slot behind `id` and hand back its node.
    ///
    /// Returns `None` for stale handles.
    pub(crate) fn remove(&mut self, id: TileId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(node)
    }

    #[inline]
    pub(crate) fn get(&self, id: TileId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Handles of every occupied slot, in slot order.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = TileId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.node.as_ref().map(|_| TileId {
                index: index as u32,
                generation: slot.generation,
            })
        })
    }

    /// Total slots allocated, occupied or not.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drop every node. Slots are kept for reuse; all handles go stale.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index as u32);
        }
        self.len = 0;
    }
}
