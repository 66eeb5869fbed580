//! Module provide ordered-set implemented by [RbSet] type.
//!
//! RbSet is implemented using the classic [red-black][wiki-rbt] tree, with
//! parent links and a shared black sentinel for absent children.
//!
//! - Each entry in RbSet instance is a unique element.
//! - Parametrised over `element-type`.
//! - CRUD operations, via add(), contains(), remove(), take() api.
//! - Full table scan, to iterate over all entries in ascending order.
//! - Fail-fast cursors, for in-order, pre-order and level-order scans.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Nodes are held in an arena owned by the set and linked by index, so
//! parent links never own anything. The arena is kept dense: removing a
//! node moves the last slot into the hole.
//!
//! Using a comparator:
//! ```
//! use rbset::{RbSet, Strategy};
//!
//! let mut index = RbSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
//! index.add_all(vec![1, 3, 2]).unwrap();
//! assert_eq!(index.strategy(), Strategy::Comparator);
//! assert_eq!(index.to_vec(), vec![3, 2, 1]);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use log::{debug, trace};

use std::{
    cmp::Ordering,
    collections::VecDeque,
    fmt,
    iter::FromIterator,
    mem,
    sync::atomic::{AtomicU64, Ordering::Relaxed},
};

use crate::{
    iter::{Cursor, Iter},
    node::{Color, Node, Side, NIL},
    order::{Order, Strategy},
    Error, Result,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// RbSet manage a single instance of in-memory ordered-set using
/// [red-black][rbt] tree.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct RbSet<T> {
    nodes: Vec<Node<T>>,
    root: usize,
    n_count: usize, // number of entries in the tree.
    order: Order<T>,
    generation: u64, // bumped on every structural change.
    id: u64,
}

// Outcome of a binary search over the tree.
#[derive(Debug, PartialEq)]
enum Probe {
    Empty,
    Found(usize),
    Vacant(usize, Side),
}

impl<T> RbSet<T> {
    /// Create an empty instance of RbSet, ordered by the element's
    /// natural order.
    pub fn new() -> RbSet<T>
    where
        T: PartialOrd,
    {
        Self::with_order(Order::natural())
    }

    /// Create an empty instance of RbSet, ordered by a total comparison
    /// function.
    pub fn with_comparator<F>(cmp: F) -> RbSet<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_order(Order::total(cmp))
    }

    /// Create an empty instance of RbSet, ordered by a comparison function
    /// that may refuse to order some pairs. Refused pairs surface as
    /// [Error::TypeMismatch].
    pub fn with_partial_comparator<F>(cmp: F) -> RbSet<T>
    where
        F: Fn(&T, &T) -> Option<Ordering> + 'static,
    {
        Self::with_order(Order::partial(cmp))
    }

    fn with_order(order: Order<T>) -> RbSet<T> {
        RbSet {
            nodes: Vec::default(),
            root: NIL,
            n_count: Default::default(),
            order,
            generation: 0,
            id: NEXT_ID.fetch_add(1, Relaxed),
        }
    }
}

impl<T: PartialOrd> Default for RbSet<T> {
    fn default() -> RbSet<T> {
        RbSet::new()
    }
}

/// Maintenance API.
impl<T> RbSet<T> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return the ordering strategy this instance was built with.
    pub fn strategy(&self) -> Strategy {
        self.order.to_strategy()
    }

    /// Return the number of nodes on the longest path from root to a leaf,
    /// zero for an empty set.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: VecDeque<usize> = VecDeque::default();
        if self.root != NIL {
            level.push_back(self.root);
        }
        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                if let Some(n) = level.pop_front() {
                    let node = &self.nodes[n];
                    for child in [node.left, node.right].iter().copied() {
                        if child != NIL {
                            level.push_back(child)
                        }
                    }
                }
            }
        }
        height
    }

    /// Drop all entries. Invalidates every outstanding [Cursor].
    pub fn clear(&mut self) {
        debug!("clear: dropping {} entries", self.n_count);
        self.nodes.clear();
        self.root = NIL;
        self.n_count = 0;
        self.bump();
    }

    /// Validate tree with following rules:
    ///
    /// * Root is black.
    /// * No red node has a red child.
    /// * Number of blacks is same on every path from a node to its leaves.
    /// * Parent links mirror child links.
    /// * Elements are in strictly ascending order.
    /// * Entry count match the number of reachable nodes.
    pub fn validate(&self) -> Result<()>
    where
        T: fmt::Debug,
    {
        if self.root != NIL {
            if !self.nodes[self.root].is_black() {
                err_at!(Fatal, msg: "root {:?} is red", self.nodes[self.root].value)?;
            }
            if self.nodes[self.root].parent != NIL {
                err_at!(Fatal, msg: "root has a parent")?;
            }
        }

        let mut n_count = 0;
        self.validate_tree(self.root, false /*fromred*/, &mut n_count)?;
        if n_count != self.n_count || n_count != self.nodes.len() {
            err_at!(
                Fatal,
                msg: "mismatch in count {} {} {}",
                n_count,
                self.n_count,
                self.nodes.len()
            )?;
        }

        let mut prev: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev) = prev {
                match self.compare(prev, value)? {
                    Ordering::Less => (),
                    _ => err_at!(Fatal, msg: "sort {:?} before {:?}", prev, value)?,
                }
            }
            prev = Some(value);
        }

        Ok(())
    }

    fn validate_tree(&self, n: usize, fromred: bool, n_count: &mut usize) -> Result<usize>
    where
        T: fmt::Debug,
    {
        if n == NIL {
            return Ok(1); // sentinel leaves are black.
        }
        *n_count += 1;

        let node = &self.nodes[n];
        let red = !node.is_black();
        if fromred && red {
            err_at!(Fatal, msg: "consecutive reds at {:?}", node.value)?;
        }

        for child in [node.left, node.right].iter().copied() {
            if child != NIL && self.nodes[child].parent != n {
                err_at!(Fatal, msg: "broken parent link under {:?}", node.value)?;
            }
        }

        let lblacks = self.validate_tree(node.left, red, n_count)?;
        let rblacks = self.validate_tree(node.right, red, n_count)?;
        if lblacks != rblacks {
            err_at!(
                Fatal,
                msg: "unbalanced blacks {} {} at {:?}",
                lblacks,
                rblacks,
                node.value
            )?;
        }

        Ok(if red { lblacks } else { lblacks + 1 })
    }
}

/// CRUD API.
impl<T> RbSet<T> {
    /// Add value to this set. Return true if value was newly inserted,
    /// false if an equal element is already present, in which case the
    /// set is left unchanged.
    pub fn add(&mut self, value: T) -> Result<bool> {
        match self.search(&value)? {
            Probe::Found(_) => return Ok(false),
            Probe::Empty => {
                // nothing to compare against, make sure the element can
                // at least be ordered against itself.
                if self.order.compare(&value, &value) != Some(Ordering::Equal) {
                    debug!("add: rejecting element, not comparable with itself");
                    err_at!(TypeMismatch, msg: "element not ordered by {}", self.strategy())?;
                }
                self.nodes.push(Node::new(value, NIL, Color::Black));
                self.root = self.nodes.len() - 1;
            }
            Probe::Vacant(parent, side) => {
                self.nodes.push(Node::new(value, parent, Color::Red));
                let n = self.nodes.len() - 1;
                self.nodes[parent].set_child(side, n);
                self.insert_fixup(n);
            }
        }
        self.n_count += 1;
        self.bump();
        Ok(true)
    }

    /// Check whether value is present in this set.
    pub fn contains(&self, value: &T) -> Result<bool> {
        match self.search(value)? {
            Probe::Found(_) => Ok(true),
            Probe::Empty | Probe::Vacant(_, _) => Ok(false),
        }
    }

    /// Remove value from this set. Return true if an element was removed.
    pub fn remove(&mut self, value: &T) -> Result<bool> {
        Ok(self.take(value)?.is_some())
    }

    /// Remove value from this set and return the element that was stored
    /// for it. If value is not present, then take is a no-op.
    pub fn take(&mut self, value: &T) -> Result<Option<T>> {
        match self.search(value)? {
            Probe::Found(z) => {
                let value = self.delete_at(z);
                self.n_count -= 1;
                self.bump();
                Ok(Some(value))
            }
            Probe::Empty | Probe::Vacant(_, _) => Ok(None),
        }
    }

    /// Return the smallest element in this set.
    pub fn first(&self) -> Option<&T> {
        match self.root {
            NIL => None,
            root => Some(&self.nodes[self.extreme(root, Side::Left)].value),
        }
    }

    /// Return the largest element in this set.
    pub fn last(&self) -> Option<&T> {
        match self.root {
            NIL => None,
            root => Some(&self.nodes[self.extreme(root, Side::Right)].value),
        }
    }

    /// Return an iterator over all entries in ascending order.
    ///
    /// ```
    /// use rbset::RbSet;
    ///
    /// let index: RbSet<u8> = vec![3, 1, 2].into_iter().collect();
    /// let items: Vec<&u8> = index.iter().collect();
    /// assert_eq!(items, vec![&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.nodes, self.root)
    }

    /// Return a detached, fail-fast cursor over all entries in ascending
    /// order. Any successful `add`, `remove`, `take` or `clear` after this
    /// call makes the cursor fail on its next step.
    ///
    /// ```
    /// use rbset::{Error, RbSet};
    ///
    /// let mut index: RbSet<u8> = vec![1, 2].into_iter().collect();
    /// let mut cursor = index.cursor();
    /// assert_eq!(cursor.next(&index).unwrap(), Some(&1));
    ///
    /// index.add(3).unwrap();
    /// match cursor.next(&index) {
    ///     Err(Error::ConcurrentModification(_, _)) => (),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn cursor(&self) -> Cursor {
        Cursor::in_order(&self.nodes, self.root, self.id, self.generation)
    }

    /// Return a fail-fast cursor walking this set depth first, pre-order.
    pub fn depth_first(&self) -> Cursor {
        Cursor::pre_order(self.root, self.id, self.generation)
    }

    /// Return a fail-fast cursor walking this set breadth first, level by
    /// level.
    pub fn breadth_first(&self) -> Cursor {
        Cursor::level_order(self.root, self.id, self.generation)
    }

    #[inline]
    pub(crate) fn as_nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    #[inline]
    pub(crate) fn to_id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn to_generation(&self) -> u64 {
        self.generation
    }
}

/// Bulk API, expressed over the CRUD API.
impl<T> RbSet<T> {
    /// Add every value from `values`, return true if any was newly
    /// inserted. Stops at the first value that can't be ordered, values
    /// before it stay added.
    pub fn add_all<I>(&mut self, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.add(value)?;
        }
        Ok(changed)
    }

    /// Remove every value from `values`, return true if any was removed.
    /// Stops at the first value that can't be ordered, values before it
    /// stay removed.
    pub fn remove_all<'a, I>(&mut self, values: I) -> Result<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.remove(value)?;
        }
        Ok(changed)
    }

    /// Check whether every value from `values` is present.
    pub fn contains_all<'a, I>(&self, values: I) -> Result<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for value in values {
            if !self.contains(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Keep only the elements also present in `other`, return true if any
    /// element was dropped. Membership is decided before anything is
    /// dropped, so an error leaves this set unchanged.
    pub fn retain_all(&mut self, other: &RbSet<T>) -> Result<bool> {
        let mut keep = Vec::with_capacity(self.n_count);
        for value in self.iter() {
            keep.push(other.contains(value)?);
        }
        let mut keep = keep.into_iter();
        Ok(self.retain(|_| keep.next().unwrap_or(true)))
    }

    /// Keep only the elements for which `f` returns true, return true if
    /// any element was dropped. `f` is called once per element, in
    /// ascending order. Invalidates every outstanding [Cursor]. If `f`
    /// panics, the set is left empty.
    pub fn retain<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let order: Vec<usize> = self.iter_index().collect();
        let n_count = self.n_count;
        let mut slots: Vec<Option<T>> = mem::take(&mut self.nodes)
            .into_iter()
            .map(|node| Some(node.value))
            .collect();
        // arena is detached, leave a valid empty set in case `f` panics.
        self.root = NIL;
        self.n_count = 0;
        self.bump();

        let mut kept = Vec::with_capacity(order.len());
        for n in order.into_iter() {
            if let Some(value) = slots[n].take() {
                if f(&value) {
                    kept.push(value)
                }
            }
        }

        // arena is rebuilt either way, outstanding cursors must fail.
        let changed = kept.len() != n_count;
        self.build_sorted(kept);
        self.bump();
        changed
    }

    /// Return a copy of every element, in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> RbSet<T> {
    #[inline]
    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        match self.order.compare(a, b) {
            Some(ord) => Ok(ord),
            None => {
                debug!("compare: elements not ordered by {}", self.strategy());
                err_at!(TypeMismatch, msg: "elements not ordered by {}", self.strategy())
            }
        }
    }

    fn search(&self, value: &T) -> Result<Probe> {
        let mut n = self.root;
        if n == NIL {
            return Ok(Probe::Empty);
        }
        loop {
            let node = &self.nodes[n];
            let side = match self.compare(value, &node.value)? {
                Ordering::Equal => return Ok(Probe::Found(n)),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                NIL => return Ok(Probe::Vacant(n, side)),
                child => n = child,
            }
        }
    }

    fn iter_index(&self) -> impl Iterator<Item = usize> + '_ {
        let mut cursor = self.cursor();
        let nodes = self.as_nodes();
        std::iter::from_fn(move || cursor.step(nodes))
    }

    // sentinel aware accessors.

    #[inline]
    fn color(&self, n: usize) -> Color {
        match n {
            NIL => Color::Black,
            n => self.nodes[n].color,
        }
    }

    #[inline]
    fn is_red(&self, n: usize) -> bool {
        self.color(n) == Color::Red
    }

    #[inline]
    fn is_black(&self, n: usize) -> bool {
        self.color(n) == Color::Black
    }

    // sentinel is immutable, recoloring it is a no-op.
    #[inline]
    fn set_color(&mut self, n: usize, color: Color) {
        match (n, color) {
            (NIL, _) => (),
            (n, Color::Red) => self.nodes[n].set_red(),
            (n, Color::Black) => self.nodes[n].set_black(),
        }
    }

    #[inline]
    fn parent(&self, n: usize) -> usize {
        match n {
            NIL => NIL,
            n => self.nodes[n].parent,
        }
    }

    #[inline]
    fn child(&self, n: usize, side: Side) -> usize {
        match n {
            NIL => NIL,
            n => self.nodes[n].child(side),
        }
    }

    // which side of its parent `n` hangs from, `n` must not be root.
    fn side_of(&self, n: usize) -> Side {
        let parent = &self.nodes[self.nodes[n].parent];
        if parent.left == n {
            Side::Left
        } else if parent.right == n {
            Side::Right
        } else {
            panic!("side_of(): {} is not a child of its parent, call the programmer", n)
        }
    }

    fn extreme(&self, mut n: usize, side: Side) -> usize {
        loop {
            match self.nodes[n].child(side) {
                NIL => break n,
                child => n = child,
            }
        }
    }

    // Hang `new` where `old` hung under `parent`, `parent` being NIL when
    // `old` was the root. `new` may be NIL.
    fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
        if parent == NIL {
            self.root = new;
        } else {
            let side = if self.nodes[parent].left == old {
                Side::Left
            } else if self.nodes[parent].right == old {
                Side::Right
            } else {
                panic!("replace_child(): {} not under {}, call the programmer", old, parent)
            };
            self.nodes[parent].set_child(side, new);
        }
        if new != NIL {
            self.nodes[new].parent = parent;
        }
    }
}

//--------- rotation routines ----------------

impl<T> RbSet<T> {
    // Rotate at `n` so that `n` moves down towards `side`.
    #[inline]
    fn rotate(&mut self, n: usize, side: Side) {
        match side {
            Side::Left => self.rotate_left(n),
            Side::Right => self.rotate_right(n),
        }
    }

    //              (p)                       (p)
    //               |                         |
    //               n                         c
    //              / \                       / \
    //             /   \                     /   \
    //            /     \                   /     \
    //          left     c                 n       cr
    //                  / \               / \
    //                cl   cr          left  cl
    //
    fn rotate_left(&mut self, n: usize) {
        let c = self.nodes[n].right;
        if c == NIL {
            panic!("rotate_left(): no right child, call the programmer");
        }
        trace!("rotate_left at {}", n);

        let cl = self.nodes[c].left;
        self.nodes[n].right = cl;
        if cl != NIL {
            self.nodes[cl].parent = n;
        }

        let parent = self.nodes[n].parent;
        self.replace_child(parent, n, c);

        self.nodes[c].left = n;
        self.nodes[n].parent = c;
    }

    //              (p)                       (p)
    //               |                         |
    //               n                         c
    //              / \                       / \
    //             /   \                     /   \
    //            /     \                   /     \
    //           c     right              cl       n
    //          / \                               / \
    //        cl   cr                           cr  right
    //
    fn rotate_right(&mut self, n: usize) {
        let c = self.nodes[n].left;
        if c == NIL {
            panic!("rotate_right(): no left child, call the programmer");
        }
        trace!("rotate_right at {}", n);

        let cr = self.nodes[c].right;
        self.nodes[n].left = cr;
        if cr != NIL {
            self.nodes[cr].parent = n;
        }

        let parent = self.nodes[n].parent;
        self.replace_child(parent, n, c);

        self.nodes[c].right = n;
        self.nodes[n].parent = c;
    }
}

//--------- insert and delete fix-up ----------------

impl<T> RbSet<T> {
    // `n` is a freshly attached red node, walk up until no red node has
    // a red parent and the root is black.
    fn insert_fixup(&mut self, mut n: usize) {
        loop {
            let mut p = self.parent(n);
            if p == NIL {
                self.set_color(n, Color::Black);
                break;
            }
            if self.is_black(p) {
                break;
            }

            // red parent is never the root, grandparent exists.
            let g = self.parent(p);
            let p_side = self.side_of(p);
            let u = self.child(g, p_side.flip());

            if self.is_red(u) {
                trace!("insert_fixup: red uncle, recolor at {}", g);
                self.set_color(p, Color::Black);
                self.set_color(u, Color::Black);
                self.set_color(g, Color::Red);
                n = g;
                continue;
            }

            if self.side_of(n) != p_side {
                trace!("insert_fixup: inner grandchild {}", n);
                self.rotate(p, p_side);
                n = p;
                p = self.parent(n);
            }

            trace!("insert_fixup: outer grandchild {}", n);
            self.set_color(p, Color::Black);
            self.set_color(g, Color::Red);
            self.rotate(g, p_side.flip());
            break;
        }
    }

    // Unlink node `z` from the tree and return its element.
    fn delete_at(&mut self, z: usize) -> T {
        let (left, right) = (self.nodes[z].left, self.nodes[z].right);

        // with two children, successor's element moves into `z` and the
        // successor node is the one spliced out.
        let y = if left != NIL && right != NIL {
            let s = self.extreme(right, Side::Left);
            self.swap_values(z, s);
            s
        } else {
            z
        };

        let c = match self.nodes[y].left {
            NIL => self.nodes[y].right,
            left => left,
        };
        let parent = self.nodes[y].parent;
        let side = match parent {
            NIL => Side::Left, // unused, `c` becomes the root.
            _ => self.side_of(y),
        };
        self.replace_child(parent, y, c);

        if self.nodes[y].is_black() {
            self.delete_fixup(c, parent, side);
        }

        self.release(y).value
    }

    // `x` sits at `side` of `parent` and carries one black too few on
    // its paths. `x` may be the sentinel, hence `parent` is tracked here.
    fn delete_fixup(&mut self, mut x: usize, mut parent: usize, mut side: Side) {
        while x != self.root && self.is_black(x) {
            let mut s = self.child(parent, side.flip());

            if self.is_red(s) {
                trace!("delete_fixup: red sibling {}", s);
                self.set_color(s, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                s = self.child(parent, side.flip());
            }

            let (near, far) = (self.child(s, side), self.child(s, side.flip()));
            if self.is_black(near) && self.is_black(far) {
                trace!("delete_fixup: black nephews, move deficit to {}", parent);
                self.set_color(s, Color::Red);
                x = parent;
                parent = self.parent(x);
                if parent != NIL {
                    side = self.side_of(x);
                }
                continue;
            }

            if self.is_black(far) {
                trace!("delete_fixup: red near nephew {}", near);
                self.set_color(near, Color::Black);
                self.set_color(s, Color::Red);
                self.rotate(s, side.flip());
                s = self.child(parent, side.flip());
            }

            trace!("delete_fixup: red far nephew under {}", s);
            let color = self.color(parent);
            self.set_color(s, color);
            self.set_color(parent, Color::Black);
            let far = self.child(s, side.flip());
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            x = self.root;
        }
        self.set_color(x, Color::Black);
    }

    fn swap_values(&mut self, a: usize, b: usize) {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi);
        mem::swap(&mut head[lo].value, &mut tail[0].value);
    }

    // Drop slot `y`, already unlinked, from the arena. The last slot moves
    // into `y` and its neighbours are re-pointed.
    fn release(&mut self, y: usize) -> Node<T> {
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(y);
        if y != last {
            let (parent, left, right) = {
                let moved = &self.nodes[y];
                (moved.parent, moved.left, moved.right)
            };
            if parent == NIL {
                self.root = y;
            } else if self.nodes[parent].left == last {
                self.nodes[parent].left = y;
            } else {
                self.nodes[parent].right = y;
            }
            if left != NIL {
                self.nodes[left].parent = y;
            }
            if right != NIL {
                self.nodes[right].parent = y;
            }
        }
        node
    }

    // Replace the whole tree with `values`, already in ascending order,
    // as a perfectly balanced tree. Nodes on the deepest level, when it
    // is not full, are red; everything else is black.
    fn build_sorted(&mut self, values: Vec<T>) {
        let n = values.len();
        let mut red_level = 0;
        let mut m = n as isize - 1;
        while m >= 0 {
            red_level += 1;
            m = m / 2 - 1;
        }

        self.nodes = Vec::with_capacity(n);
        let mut values = values.into_iter();
        self.root = self.build_subtree(&mut values, 0, n, 0, red_level);
        if self.root != NIL {
            self.nodes[self.root].parent = NIL;
        }
        self.n_count = n;
    }

    fn build_subtree<I>(
        &mut self,
        values: &mut I,
        lo: usize,
        hi: usize,
        level: usize,
        red_level: usize,
    ) -> usize
    where
        I: Iterator<Item = T>,
    {
        if lo >= hi {
            return NIL;
        }
        let mid = lo + (hi - lo - 1) / 2;
        let left = self.build_subtree(values, lo, mid, level + 1, red_level);

        let value = match values.next() {
            Some(value) => value,
            None => panic!("build_subtree(): ran out of values, call the programmer"),
        };
        let color = if level == red_level { Color::Red } else { Color::Black };
        self.nodes.push(Node::new(value, NIL, color));
        let n = self.nodes.len() - 1;

        let right = self.build_subtree(values, mid + 1, hi, level + 1, red_level);
        for (side, child) in [(Side::Left, left), (Side::Right, right)].iter().copied() {
            self.nodes[n].set_child(side, child);
            if child != NIL {
                self.nodes[child].parent = n;
            }
        }
        n
    }
}

impl<T> Extend<T> for RbSet<T> {
    /// Add every element, elements that the set's ordering strategy
    /// rejects are skipped.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            if let Err(err) = self.add(value) {
                debug!("extend: skipping element, {}", err);
            }
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for RbSet<T> {
    fn from_iter<I>(iter: I) -> RbSet<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RbSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a RbSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RbSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "rbset_test.rs"]
mod rbset_test;
