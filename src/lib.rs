//! Package implement an ordered set on top of a classic red-black tree.
//!
//! Quoting from [Wikipedia][wiki-rbt]:
//!
//! > A red-black tree is a self-balancing binary search tree data structure
//! > noted for fast storage and retrieval of ordered information. The nodes
//! > in a red-black tree hold an extra "color" bit, often drawn as red and
//! > black, which help ensure that the tree is always approximately balanced.
//!
//! [RbSet] is the single collection type exported by this package:
//!
//! - Each entry in RbSet instance is a unique element.
//! - Parametrised over `element-type`.
//! - Element order is resolved once, at construction, either from the
//!   element's natural order or from a supplied comparison function.
//! - CRUD operations, via add(), contains(), remove() and take() api.
//! - Full table scan, ascending, via iter() or a fail-fast [Cursor].
//! - Pre-order and level-order diagnostic scans.
//! - Uses ownership model and borrow semantics to ensure safety.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Constructing a new [RbSet] instance and CRUD operations:
//!
//! ```
//! use rbset::RbSet;
//!
//! let mut index: RbSet<String> = RbSet::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! assert_eq!(index.add("key1".to_string()).unwrap(), true);
//! assert_eq!(index.add("key2".to_string()).unwrap(), true);
//! assert_eq!(index.add("key2".to_string()).unwrap(), false);
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.contains(&"key1".to_string()).unwrap(), true);
//!
//! assert_eq!(index.remove(&"key1".to_string()).unwrap(), true);
//! assert_eq!(index.remove(&"key1".to_string()).unwrap(), false);
//! ```
//!
//! Elements that can't be ordered against each other are reported, not
//! silently skipped:
//!
//! ```
//! use rbset::{Error, RbSet};
//!
//! let mut index: RbSet<f64> = RbSet::new();
//! index.add(1.5).unwrap();
//! match index.contains(&f64::NAN) {
//!     Err(Error::TypeMismatch(_, _)) => (),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, msg: "unbalanced blacks {} {}", lblacks, rblacks);
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
}

mod iter;
mod node;
mod order;
mod rbset;

pub use iter::{Cursor, Iter};
pub use order::Strategy;
pub use rbset::RbSet;

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    /// Tree invariants are broken, reported by [RbSet::validate].
    Fatal(String, String),
    /// Elements are not comparable under the set's ordering strategy.
    TypeMismatch(String, String),
    /// A [Cursor] observed a structural change since it was created.
    ConcurrentModification(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            TypeMismatch(p, msg) => write!(f, "{} TypeMismatch: {}", p, msg),
            ConcurrentModification(p, msg) => {
                write!(f, "{} ConcurrentModification: {}", p, msg)
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
