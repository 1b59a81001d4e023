//! Embeddable data structures.
//!
//! ## Ordered search tree
//!
//! The centrepiece of this crate is [`ordered::Tree`], a Binary Search Tree
//! (BST) that keeps its elements sorted by a caller supplied
//! [`Comparator`][compare::Comparator]. The most important invariants of a
//! BST are:
//!
//! 1. For every node in the tree, all the nodes in its left subtree hold an
//!    element ordered before its own element.
//! 2. For every node in the tree, all the nodes in its right subtree hold an
//!    element ordered after its own element.
//!
//! > Two elements the comparator calls equal are the same key, so the tree
//! > never holds both.
//!
//! Searching takes `O(height)` comparisons, where `height` is the number of
//! levels on the longest path from the root to a leaf. This tree does not
//! rebalance itself while you mutate it: inserting already sorted keys gives
//! a chain whose height equals its size. Rebalancing is an explicit
//! operation, [`ordered::Tree::balance`], which rebuilds the tree with height
//! `ceil(log2(len + 1))`.
//!
//! ## Errors and logging
//!
//! Operations that need memory reserve it up front and report failure as
//! [`Error::Allocation`] without touching the tree. Missing keys are `None`,
//! not errors. The crate logs through the [`log`] facade and never installs a
//! logger itself.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
mod error;
pub mod ordered;


pub use error::{Error, Result};
