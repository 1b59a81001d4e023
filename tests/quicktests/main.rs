//! Property tests driving the public API with random operation sequences.

use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// ordered trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the element into the data structure
    Insert(T),
    /// Remove the element from the data structure
    Remove(T),
    /// Rebalance the tree
    Balance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Balance,
            _ => unreachable!(),
        }
    }
}
