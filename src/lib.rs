//! SeqList - A growable, ordered list with head/tail decomposition
//!
//! # Overview
//!
//! [`SeqList<T>`] is a type-parametric sequential container backed by a single
//! contiguous buffer. It offers:
//!
//! - Positional access with checked indices (`get`, `first`, `last`)
//! - Insertion at both ends (`append` is amortized O(1), `prepend` is O(n))
//! - Removal by position and wholesale `clear`
//! - Non-mutating `filter` and `tail`, both producing independent lists
//! - A `[a b c]` textual rendering through [`core::fmt::Display`]
//!
//! # Quick Start
//!
//! ```
//! use seq_list::SeqList;
//!
//! let mut list = SeqList::new();
//! list.append(2);
//! list.append(3);
//! list.prepend(1);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.first(), Ok(&1));
//! assert_eq!(list.last(), Ok(&3));
//! assert_eq!(list.to_string(), "[1 2 3]");
//!
//! let evens = list.filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_string(), "[2]");
//! ```
//!
//! # Head/Tail Recursion
//!
//! There is deliberately no iterator protocol. Traversal is done by splitting
//! a list into its first element and the rest:
//!
//! ```
//! use seq_list::SeqList;
//!
//! fn sum(list: &SeqList<i32>) -> i32 {
//!     match list.first() {
//!         Ok(head) => head + sum(&list.tail()),
//!         Err(_) => 0,
//!     }
//! }
//!
//! assert_eq!(sum(&SeqList::from([1, 2, 3, 4])), 10);
//! ```
//!
//! # Errors
//!
//! Accessors never panic. Empty lists report [`EmptyError`] and bad positions
//! report [`IndexError`]; both convert into the umbrella [`Error`].
//!
//! # Features
//!
//! - `std`: link against `std`. Without it the crate is `no_std` and only
//!   needs `alloc`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod error;
pub mod list;
pub mod position;

pub use error::{EmptyError, Error, IndexError};
pub use list::SeqList;
pub use position::Position;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_prepend() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
