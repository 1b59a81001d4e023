//! Orderings for the elements stored in a [`Tree`][crate::ordered::Tree].
//!
//! A tree is bound to one [`Comparator`] for its whole life. Any closure
//! `Fn(&T, &T) -> Ordering` is a comparator, so most callers never name this
//! trait:
//!
//! ```
//! use eds::ordered::Tree;
//!
//! // Order strings by length only. "bb" and "cc" are the same key here.
//! let mut tree = Tree::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! tree.insert("bb").unwrap();
//! tree.insert("cc").unwrap();
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree.find(&"zz"), Some(&"bb"));
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
///
/// `compare(a, b)` returns `Less` when `a` orders before `b`, `Greater` when
/// it orders after and `Equal` when both are the same key. The answer for a
/// given pair must never change while a tree uses the comparator.
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the wrapped comparator.
///
/// ```
/// use eds::compare::{Natural, Reversed};
/// use eds::ordered::Tree;
///
/// let mut tree = Tree::new(Reversed(Natural));
/// for x in [1, 3, 2] {
///     tree.insert(x).unwrap();
/// }
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
