//! An unbalanced ordered search tree with on-demand rebalancing.
//!
//! Elements are ordered by a [`Comparator`] chosen when the tree is created.
//! Nothing rebalances the tree behind your back: inserting keys in sorted
//! order builds a chain as tall as the tree is large. Call
//! [`Tree::balance`] to rebuild it with minimal height.
//!
//! # Examples
//!
//! ```
//! use eds::ordered::Tree;
//!
//! let mut tree: Tree<i32> = Tree::default();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//! assert_eq!(tree.height(), 0);
//!
//! // Ascending inserts make a chain.
//! for x in 1..=7 {
//!     tree.insert(x).unwrap();
//! }
//! assert_eq!(tree.height(), 7);
//!
//! // Inserting an equal element is a no-op.
//! assert_eq!(tree.insert(4).unwrap(), false);
//! assert_eq!(tree.len(), 7);
//!
//! // Rebalancing keeps the elements but flattens the tree.
//! tree.balance().unwrap();
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.breadth_first().unwrap(), [&4, &2, &6, &1, &3, &5, &7]);
//!
//! // Removing an element hands it back.
//! assert_eq!(tree.remove(&4), Some(4));
//! assert_eq!(tree.find(&4), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, Natural};
use crate::error::Result;

mod rebalance;
mod store;
mod traverse;

pub use traverse::Iter;

use store::{Arena, Link, Node, NodeId};

/// An ordered search tree holding at most one element per key.
///
/// `T` is the element type and `C` the [`Comparator`] that orders it. To keep
/// elements owned by the caller, store references (`Tree<&X, _>`) or shared
/// pointers: the tree only ever moves its elements, and [`Tree::remove`] hands
/// them back.
#[derive(Clone)]
pub struct Tree<T, C = Natural> {
    nodes: Arena<T>,
    root: Link,
    comparator: C,
    len: usize,
}

impl<T, C: Default> Default for Tree<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Tree<T, C> {
    /// Creates an empty tree ordered by `comparator`. Does not allocate.
    pub fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Creates an empty tree with room for `capacity` elements before it
    /// needs to allocate again.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::compare::Natural;
    /// use eds::ordered::Tree;
    ///
    /// let tree: Tree<u32> = Tree::try_with_capacity(Natural, 128).unwrap();
    /// assert!(tree.capacity() >= 128);
    /// assert!(Tree::<u32, Natural>::try_with_capacity(Natural, usize::MAX).is_err());
    /// ```
    pub fn try_with_capacity(comparator: C, capacity: usize) -> Result<Self> {
        Ok(Self {
            nodes: Arena::try_with_capacity(capacity)?,
            root: None,
            comparator,
            len: 0,
        })
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels on the longest path from the root to a leaf. An
    /// empty tree has height 0 and a lone root has height 1.
    pub fn height(&self) -> usize {
        self.link_height(self.root)
    }

    /// How many elements fit before the node storage grows.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// The comparator this tree was created with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every element. The comparator and the node storage are kept
    /// so the tree can be refilled without allocating.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    fn link_height(&self, link: Link) -> usize {
        link.map_or(0, |id| self.nodes[id].height)
    }

    /// Recomputes cached heights from `link` up towards the root, stopping at
    /// the first node whose height did not change.
    fn fix_heights(&mut self, mut link: Link) {
        while let Some(id) = link {
            let node = &self.nodes[id];
            let height = self.link_height(node.left).max(self.link_height(node.right)) + 1;
            if height == node.height {
                break;
            }

            let node = &mut self.nodes[id];
            node.height = height;
            link = node.parent;
        }
    }

    /// Points whatever referenced `old` (its parent or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
        }
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    /// Detaches a node with at most one child, promoting that child into its
    /// place.
    fn unlink(&mut self, id: NodeId) -> Node<T> {
        let node = &self.nodes[id];
        debug_assert!(node.left.is_none() || node.right.is_none());

        let parent = node.parent;
        let child = node.left.or(node.right);
        self.replace_child(parent, id, child);
        self.fix_heights(parent);
        self.nodes.remove(id)
    }
}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Inserts `element` unless an equal one is already present.
    ///
    /// Returns `Ok(true)` if a node was added. If the tree already holds an
    /// equal element it is left untouched, `element` is dropped and
    /// `Ok(false)` is returned. On allocation failure the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::ordered::Tree;
    ///
    /// let mut tree = Tree::new(|a: &(u8, &str), b: &(u8, &str)| a.0.cmp(&b.0));
    ///
    /// assert_eq!(tree.insert((1, "first")).unwrap(), true);
    /// assert_eq!(tree.insert((1, "second")).unwrap(), false);
    ///
    /// // The original element stays.
    /// assert_eq!(tree.find(&(1, "")), Some(&(1, "first")));
    /// ```
    pub fn insert(&mut self, element: T) -> Result<bool> {
        let mut parent = None;
        let mut side = Ordering::Equal;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            side = self.comparator.compare(&element, &node.element);
            cursor = match side {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => {
                    log::trace!("insert: equal element already present");
                    return Ok(false);
                }
            };
            parent = Some(id);
        }

        self.nodes.reserve_one()?;
        let id = self.nodes.insert(Node::leaf(element, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) if side == Ordering::Less => self.nodes[parent].left = Some(id),
            Some(parent) => self.nodes[parent].right = Some(id),
        }
        self.len += 1;
        self.fix_heights(parent);

        log::trace!("insert: added node {}, height {}", id.0, self.height());
        Ok(true)
    }

    /// Finds the stored element equal to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::ordered::Tree;
    ///
    /// let mut tree: Tree<&str> = Tree::default();
    /// tree.insert("b").unwrap();
    ///
    /// assert_eq!(tree.find(&"b"), Some(&"b"));
    /// assert_eq!(tree.find(&"c"), None);
    /// ```
    pub fn find(&self, key: &T) -> Option<&T> {
        self.locate(key).map(|id| &self.nodes[id].element)
    }

    /// Whether an element equal to `key` is stored.
    pub fn contains(&self, key: &T) -> bool {
        self.locate(key).is_some()
    }

    /// Removes the element equal to `key` and returns it, or returns `None`
    /// if there is no such element.
    ///
    /// A node with two children takes the element of its in-order successor
    /// (the smallest element of its right subtree), and the successor's node
    /// is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::ordered::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::default();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.depth_first().unwrap(), [&3, &1]);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let id = self.locate(key)?;
        let node = &self.nodes[id];

        let element = match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = traverse::leftmost(&self.nodes, right);
                let successor = self.unlink(successor);
                std::mem::replace(&mut self.nodes[id].element, successor.element)
            }
            _ => self.unlink(id).element,
        };
        self.len -= 1;

        log::trace!("remove: took node {}, height {}", id.0, self.height());
        Some(element)
    }

    fn locate(&self, key: &T) -> Link {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match self.comparator.compare(key, &node.element) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Checks every structural invariant of the tree, panicking on the first
    /// violation.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let mut count = 0;
        let mut stack = Vec::from_iter(self.root);
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].parent, None, "root has a parent");
        }
        while let Some(id) = stack.pop() {
            count += 1;
            let node = &self.nodes[id];
            let expected = self.link_height(node.left).max(self.link_height(node.right)) + 1;
            assert_eq!(node.height, expected, "stale height at node {}", id.0);

            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(self.nodes[child].parent, Some(id), "bad parent link");
                stack.push(child);
            }
        }
        assert_eq!(count, self.len, "len disagrees with reachable nodes");

        let sorted = self.in_order().unwrap();
        for pair in sorted.windows(2) {
            assert_eq!(
                self.comparator.compare(pair[0], pair[1]),
                Ordering::Less,
                "in-order walk not strictly ascending"
            );
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
