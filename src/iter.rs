//! Module implement scans over [RbSet] entries.
//!
//! * [Iter] borrows the set and walks it in ascending order. The borrow
//!   keeps the set from being modified while the iterator is alive.
//! * [Cursor] is detached from the set, it holds its own walk state and is
//!   stepped by handing it the set. A cursor remembers the set's
//!   generation at creation time and fails with
//!   [Error::ConcurrentModification] once the set has been modified.
//!
//! Cursors come in three walk orders: in-order (ascending), pre-order
//! (depth first) and level-order (breadth first). The last two are meant
//! for diagnostics, they expose the shape of the tree.

use std::collections::VecDeque;

use crate::{
    node::{Node, NIL},
    Error, RbSet, Result,
};

/// Borrowing iterator over all entries, in ascending order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    walk: InOrder,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], root: usize) -> Iter<'a, T> {
        Iter {
            nodes,
            walk: InOrder::new(nodes, root),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        self.walk.step(nodes).map(|n| &nodes[n].value)
    }
}

/// Detached, fail-fast cursor over [RbSet] entries.
///
/// Created by [RbSet::cursor], [RbSet::depth_first] and
/// [RbSet::breadth_first]. A cursor is bound to the set that created it
/// and can't be rewound.
pub struct Cursor {
    id: u64,
    generation: u64,
    walk: Walk,
}

enum Walk {
    InOrder(InOrder),
    PreOrder(Vec<usize>),
    LevelOrder(VecDeque<usize>),
}

impl Cursor {
    pub(crate) fn in_order<T>(nodes: &[Node<T>], root: usize, id: u64, generation: u64) -> Cursor {
        Cursor {
            id,
            generation,
            walk: Walk::InOrder(InOrder::new(nodes, root)),
        }
    }

    pub(crate) fn pre_order(root: usize, id: u64, generation: u64) -> Cursor {
        let mut stack = Vec::default();
        if root != NIL {
            stack.push(root)
        }
        Cursor {
            id,
            generation,
            walk: Walk::PreOrder(stack),
        }
    }

    pub(crate) fn level_order(root: usize, id: u64, generation: u64) -> Cursor {
        let mut queue = VecDeque::default();
        if root != NIL {
            queue.push_back(root)
        }
        Cursor {
            id,
            generation,
            walk: Walk::LevelOrder(queue),
        }
    }

    /// Return the next entry, or `None` once the walk is complete. Fails
    /// with [Error::ConcurrentModification] if `set` was modified since
    /// this cursor was created, or if `set` is not the set that created it.
    pub fn next<'a, T>(&mut self, set: &'a RbSet<T>) -> Result<Option<&'a T>> {
        if set.to_id() != self.id {
            err_at!(ConcurrentModification, msg: "cursor stepped against another set")?;
        }
        if set.to_generation() != self.generation {
            err_at!(
                ConcurrentModification,
                msg: "set modified, generation {} != {}",
                set.to_generation(),
                self.generation
            )?;
        }

        let nodes = set.as_nodes();
        Ok(self.step(nodes).map(|n| &nodes[n].value))
    }

    /// Drain the rest of this walk into a vector.
    pub fn remaining<'a, T>(&mut self, set: &'a RbSet<T>) -> Result<Vec<&'a T>> {
        let mut items = vec![];
        while let Some(item) = self.next(set)? {
            items.push(item)
        }
        Ok(items)
    }

    // Advance without the generation check, caller must hold the set
    // unmodified since the cursor was created.
    pub(crate) fn step<T>(&mut self, nodes: &[Node<T>]) -> Option<usize> {
        match &mut self.walk {
            Walk::InOrder(walk) => walk.step(nodes),
            Walk::PreOrder(stack) => {
                let n = stack.pop()?;
                let node = &nodes[n];
                for child in [node.right, node.left].iter().copied() {
                    if child != NIL {
                        stack.push(child)
                    }
                }
                Some(n)
            }
            Walk::LevelOrder(queue) => {
                let n = queue.pop_front()?;
                let node = &nodes[n];
                for child in [node.left, node.right].iter().copied() {
                    if child != NIL {
                        queue.push_back(child)
                    }
                }
                Some(n)
            }
        }
    }
}

#[derive(Copy, Clone)]
enum IFlag {
    Left,
    Center,
    Right,
}

struct Fragment {
    flag: IFlag,
    node: usize,
}

// In-order walk state, a stack of partially visited nodes.
struct InOrder {
    paths: Vec<Fragment>,
}

impl InOrder {
    fn new<T>(nodes: &[Node<T>], root: usize) -> InOrder {
        let mut paths = Vec::default();
        build_iter(nodes, root, &mut paths);
        InOrder { paths }
    }

    fn step<T>(&mut self, nodes: &[Node<T>]) -> Option<usize> {
        loop {
            let path = self.paths.last_mut()?;
            match path.flag {
                IFlag::Left => {
                    path.flag = IFlag::Center;
                    break Some(path.node);
                }
                IFlag::Center => {
                    path.flag = IFlag::Right;
                    let right = nodes[path.node].right;
                    build_iter(nodes, right, &mut self.paths)
                }
                IFlag::Right => {
                    self.paths.pop();
                }
            }
        }
    }
}

fn build_iter<T>(nodes: &[Node<T>], mut node: usize, paths: &mut Vec<Fragment>) {
    while node != NIL {
        paths.push(Fragment {
            flag: IFlag::Left,
            node,
        });
        node = nodes[node].left;
    }
}

#[cfg(test)]
#[path = "iter_test.rs"]
mod iter_test;
