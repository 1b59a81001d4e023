use super::store::{Arena, Link, Node, NodeId};
use super::Tree;
use crate::error::{Error, Result};

impl<T, C> Tree<T, C> {
    /// Rebuilds the tree with the smallest possible height, keeping exactly
    /// the same elements.
    ///
    /// Each subtree is rooted at the middle of its sorted range (the lower
    /// middle for even-sized ranges), so afterwards the height is
    /// `ceil(log2(len + 1))`. Every node is moved into freshly allocated
    /// storage; if that storage cannot be reserved the tree is left as it
    /// was.
    ///
    /// # Examples
    ///
    /// ```
    /// use eds::ordered::Tree;
    ///
    /// let mut tree: Tree<char> = Tree::default();
    /// for c in ['a', 'b', 'c', 'd'] {
    ///     tree.insert(c).unwrap();
    /// }
    /// assert_eq!(tree.height(), 4);
    ///
    /// tree.balance().unwrap();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.depth_first().unwrap(), [&'b', &'a', &'c', &'d']);
    /// ```
    pub fn balance(&mut self) -> Result<()> {
        let old_height = self.height();

        let mut order = Vec::new();
        order
            .try_reserve_exact(self.len)
            .map_err(Error::allocation("rebalance order"))?;
        order.extend(self.in_order_ids());
        let mut fresh = Arena::try_with_capacity(self.len)?;

        // Nothing below allocates, so the tree cannot be left half rebuilt.
        let mut old = std::mem::replace(&mut self.nodes, Arena::new());
        for id in order {
            fresh.insert(Node::leaf(old.remove(id).element, None));
        }
        self.nodes = fresh;
        self.root = self.link_range(0, self.len, None);

        log::debug!(
            "rebalanced {} elements, height {} -> {}",
            self.len,
            old_height,
            self.height()
        );
        Ok(())
    }

    /// Links the freshly stored nodes `lo..hi` (already in ascending order)
    /// into a minimal-height subtree under `parent` and returns its root.
    fn link_range(&mut self, lo: usize, hi: usize, parent: Link) -> Link {
        if lo >= hi {
            return None;
        }

        let mid = NodeId(lo + (hi - lo - 1) / 2);
        let left = self.link_range(lo, mid.0, Some(mid));
        let right = self.link_range(mid.0 + 1, hi, Some(mid));
        let height = self.link_height(left).max(self.link_height(right)) + 1;

        let node = &mut self.nodes[mid];
        node.left = left;
        node.right = right;
        node.parent = parent;
        node.height = height;
        Some(mid)
    }
}
