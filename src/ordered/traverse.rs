use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::store::{Arena, Link, NodeId};
use super::Tree;
use crate::error::{Error, Result};

impl<T, C> Tree<T, C> {
    /// Lists the elements in level order: the root, then every node one level
    /// down from left to right, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::ordered::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::default();
    /// for x in [50, 25, 60, 17, 55] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.breadth_first().unwrap(), [&50, &25, &60, &17, &55]);
    /// ```
    pub fn breadth_first(&self) -> Result<Vec<&T>> {
        let mut elements = self.traversal_buffer()?;
        let mut queue = VecDeque::new();
        queue
            .try_reserve(self.len)
            .map_err(Error::allocation("traversal queue"))?;

        queue.extend(self.root);
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            elements.push(&node.element);
            queue.extend(node.left);
            queue.extend(node.right);
        }

        Ok(elements)
    }

    /// Lists the elements in pre-order: each node comes before its left
    /// subtree, which comes before its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::ordered::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::default();
    /// for x in [50, 25, 60, 17, 55] {
    ///     tree.insert(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.depth_first().unwrap(), [&50, &25, &17, &60, &55]);
    /// ```
    pub fn depth_first(&self) -> Result<Vec<&T>> {
        let mut elements = self.traversal_buffer()?;

        let mut cursor = self.root;
        while let Some(id) = cursor {
            elements.push(&self.nodes[id].element);
            cursor = preorder_next(&self.nodes, id);
        }

        Ok(elements)
    }

    /// Lists the elements in ascending order.
    pub fn in_order(&self) -> Result<Vec<&T>> {
        let mut elements = self.traversal_buffer()?;
        elements.extend(self.iter());
        Ok(elements)
    }

    /// Iterates over the elements in ascending order without allocating.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.root.map(|root| leftmost(&self.nodes, root)),
            remaining: self.len,
        }
    }

    fn traversal_buffer(&self) -> Result<Vec<&T>> {
        let mut elements = Vec::new();
        elements
            .try_reserve_exact(self.len)
            .map_err(Error::allocation("traversal buffer"))?;
        Ok(elements)
    }

    /// Node ids in ascending element order.
    pub(super) fn in_order_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut cursor = self.root.map(|root| leftmost(&self.nodes, root));
        std::iter::from_fn(move || {
            let id = cursor?;
            cursor = successor(&self.nodes, id);
            Some(id)
        })
    }
}

pub(super) fn leftmost<T>(nodes: &Arena<T>, mut id: NodeId) -> NodeId {
    while let Some(left) = nodes[id].left {
        id = left;
    }
    id
}

/// The node holding the next larger element, walking parent links when there
/// is no right subtree.
fn successor<T>(nodes: &Arena<T>, id: NodeId) -> Link {
    if let Some(right) = nodes[id].right {
        return Some(leftmost(nodes, right));
    }

    let mut child = id;
    let mut parent = nodes[id].parent;
    while let Some(p) = parent {
        if nodes[p].left == Some(child) {
            return Some(p);
        }
        child = p;
        parent = nodes[p].parent;
    }
    None
}

/// The node visited after `id` in a pre-order walk.
fn preorder_next<T>(nodes: &Arena<T>, id: NodeId) -> Link {
    let node = &nodes[id];
    if node.left.is_some() {
        return node.left;
    }
    if node.right.is_some() {
        return node.right;
    }

    // Climb until we leave a left subtree whose parent still has a right one.
    let mut child = id;
    let mut parent = node.parent;
    while let Some(p) = parent {
        let up = &nodes[p];
        if up.left == Some(child) && up.right.is_some() {
            return up.right;
        }
        child = p;
        parent = up.parent;
    }
    None
}

/// An iterator over the elements of a [`Tree`] in ascending order.
///
/// Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<T>,
    next: Link,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.next?;
        self.next = successor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id].element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
