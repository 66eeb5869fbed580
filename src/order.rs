//! Module implement the ordering strategy used by [RbSet] instances.
//!
//! Strategy is picked once, when the set is constructed, and every
//! search, insert and delete on that set goes through it. Comparison
//! returns `None` when two elements can't be ordered against each other,
//! which the set surfaces as [Error::TypeMismatch].
//!
//! [RbSet]: crate::RbSet
//! [Error::TypeMismatch]: crate::Error

use std::{cmp::Ordering, fmt};

/// Ordering strategy in effect for an [RbSet](crate::RbSet) instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Element type's own ordering, via `PartialOrd`.
    Natural,
    /// Comparison function supplied at construction.
    Comparator,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Natural => write!(f, "natural"),
            Strategy::Comparator => write!(f, "comparator"),
        }
    }
}

pub enum Order<T> {
    Natural(fn(&T, &T) -> Option<Ordering>),
    Total(Box<dyn Fn(&T, &T) -> Ordering>),
    Partial(Box<dyn Fn(&T, &T) -> Option<Ordering>>),
}

impl<T> Order<T> {
    pub fn natural() -> Order<T>
    where
        T: PartialOrd,
    {
        Order::Natural(<T as PartialOrd>::partial_cmp)
    }

    pub fn total<F>(cmp: F) -> Order<T>
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Order::Total(Box::new(cmp))
    }

    pub fn partial<F>(cmp: F) -> Order<T>
    where
        F: Fn(&T, &T) -> Option<Ordering> + 'static,
    {
        Order::Partial(Box::new(cmp))
    }

    pub fn to_strategy(&self) -> Strategy {
        match self {
            Order::Natural(_) => Strategy::Natural,
            Order::Total(_) | Order::Partial(_) => Strategy::Comparator,
        }
    }

    /// Order `a` relative to `b`, `None` if they are incomparable.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Option<Ordering> {
        match self {
            Order::Natural(cmp) => cmp(a, b),
            Order::Total(cmp) => Some(cmp(a, b)),
            Order::Partial(cmp) => cmp(a, b),
        }
    }
}

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;
