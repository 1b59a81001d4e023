use eds::compare::{Natural, Reversed};
use eds::ordered::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone()).unwrap();
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                tree.remove(x);
                set.remove(x);
            }
            Op::Balance => tree.balance().unwrap(),
        }
    }
}

/// `ceil(log2(n + 1))`
fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::default();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn in_order_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::default();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let sorted = tree.in_order().unwrap();
    sorted.len() == tree.len() && sorted.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn remove_returns_what_was_inserted(xs: Vec<u16>) -> bool {
    let mut tree: Tree<u16> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    let unique: BTreeSet<_> = xs.iter().copied().collect();
    unique.iter().all(|x| tree.remove(x) == Some(*x)) && tree.is_empty() && tree.height() == 0
}

#[quickcheck]
fn duplicates_are_idempotent(xs: Vec<u8>) -> bool {
    let mut tree: Tree<u8> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let (len, height) = (tree.len(), tree.height());

    let reinserted = xs.iter().all(|x| !tree.insert(*x).unwrap());
    reinserted && tree.len() == len && tree.height() == height
}

#[quickcheck]
fn height_bounds(xs: Vec<i32>) -> bool {
    let mut tree: Tree<i32> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    tree.height() <= tree.len() && tree.height() >= minimal_height(tree.len())
}

#[quickcheck]
fn balance_reaches_minimal_height(xs: Vec<i32>) -> bool {
    let mut tree: Tree<i32> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }
    let before: Vec<i32> = tree.iter().copied().collect();

    tree.balance().unwrap();

    let after: Vec<i32> = tree.iter().copied().collect();
    before == after && tree.height() == minimal_height(tree.len())
}

#[quickcheck]
fn traversals_hold_every_element(xs: Vec<i32>) -> bool {
    let mut tree: Tree<i32> = Tree::default();
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    let expected: BTreeSet<_> = xs.iter().collect();
    let bfs = tree.breadth_first().unwrap();
    let dfs = tree.depth_first().unwrap();

    bfs.len() == tree.len()
        && dfs.len() == tree.len()
        && bfs.into_iter().collect::<BTreeSet<_>>() == expected
        && dfs.into_iter().collect::<BTreeSet<_>>() == expected
}

#[quickcheck]
fn reversed_comparator_iterates_descending(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new(Reversed(Natural));
    for x in &xs {
        tree.insert(*x).unwrap();
    }

    let expected: BTreeSet<_> = xs.iter().collect();
    tree.iter().eq(expected.into_iter().rev())
}
