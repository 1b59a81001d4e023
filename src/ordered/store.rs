//! The node arena backing a [`Tree`][super::Tree].
//!
//! Nodes live in a `Vec` of slots and refer to each other by index. Removing a
//! node turns its slot into a vacant one that is pushed onto a free list, and
//! the next insertion pops it again, so the arena only grows when every slot
//! is occupied.

use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// Position of a node in its arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct NodeId(pub(super) usize);

/// A possibly empty reference to a node.
pub(super) type Link = Option<NodeId>;

#[derive(Clone, Debug)]
pub(super) struct Node<T> {
    pub(super) element: T,
    pub(super) left: Link,
    pub(super) right: Link,
    pub(super) parent: Link,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(super) height: usize,
}

impl<T> Node<T> {
    pub(super) fn leaf(element: T, parent: Link) -> Self {
        Self {
            element,
            left: None,
            right: None,
            parent,
            height: 1,
        }
    }
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Link },
}

#[derive(Clone, Debug)]
pub(super) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Link,
}

impl<T> Arena<T> {
    pub(super) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
        }
    }

    pub(super) fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut arena = Self::new();
        arena
            .slots
            .try_reserve_exact(capacity)
            .map_err(Error::allocation("tree nodes"))?;
        Ok(arena)
    }

    /// Makes sure the next [`Arena::insert`] will not need to allocate.
    pub(super) fn reserve_one(&mut self) -> Result<()> {
        if self.free.is_none() {
            self.slots
                .try_reserve(1)
                .map_err(Error::allocation("tree node"))?;
        }
        Ok(())
    }

    /// Stores `node`, reusing a vacant slot when there is one.
    ///
    /// Into a fresh arena, consecutive inserts hand out consecutive ids
    /// starting at 0.
    pub(super) fn insert(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(id) => {
                let slot = std::mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at occupied slot {id:?}"),
                };
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot. The caller must have unlinked it from
    /// the rest of the tree already.
    pub(super) fn remove(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant { .. } => unreachable!("removing vacant slot {id:?}"),
        }
    }

    /// Drops every node but keeps the allocation around.
    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    pub(super) fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {id:?}"),
        }
    }
}
