//! Error types returned by [`SeqList`](crate::SeqList) accessors.
//!
//! Each fallible operation reports the narrowest error it can produce:
//! `first`/`last` return [`EmptyError`], positional operations return
//! [`IndexError`]. Code that mixes both can `?` into [`Error`].

use thiserror::Error;

/// The list holds no elements, so there is no first or last one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("list is empty")]
pub struct EmptyError;

/// A position outside `[0, len)` was requested.
///
/// `index` is widened to `i128` so negative positions are reported as given.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("index {index} out of bounds for list of length {len}")]
pub struct IndexError {
    pub index: i128,
    pub len: usize,
}

/// Any error produced by a [`SeqList`](crate::SeqList) operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    #[error(transparent)]
    Empty(#[from] EmptyError),

    #[error(transparent)]
    Index(#[from] IndexError),
}
