// Arena index standing in for every absent child and for the root's parent.
// It never addresses a slot, and always reads as black.
pub const NIL: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Node corresponds to a single element in RbSet instance. Links are
// indices into the owning set's arena, `parent` is a back-reference
// used only for navigation.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub color: Color,
    pub parent: usize, // store: parent, NIL for root
    pub left: usize,   // store: left child
    pub right: usize,  // store: right child
}

impl<T> Node<T> {
    pub fn new(value: T, parent: usize, color: Color) -> Node<T> {
        Node {
            value,
            color,
            parent,
            left: NIL,
            right: NIL,
        }
    }

    #[inline]
    pub fn child(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub fn set_child(&mut self, side: Side, child: usize) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
