//! The [`SeqList`] container.

use alloc::vec::Vec;
use core::fmt;

use crate::error::{EmptyError, IndexError};
use crate::position::Position;

/// A growable, ordered list of `T` backed by one contiguous buffer.
///
/// Index `0` is the first element and index `len() - 1` the last. Order is
/// preserved by every operation except [`remove_at`](Self::remove_at) and
/// [`clear`](Self::clear).
///
/// References handed out by [`first`](Self::first), [`last`](Self::last),
/// [`get`](Self::get) and their `_mut` counterparts borrow the list, so they
/// cannot outlive the next mutation.
///
/// The list does no locking. It is `Send`/`Sync` whenever `T` is, and sharing
/// it for mutation across threads needs external synchronization.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SeqList<T> {
    elements: Vec<T>,
}

static_assertions::assert_eq_size!(SeqList<u64>, Vec<u64>);
static_assertions::assert_impl_all!(SeqList<u8>: Send, Sync, Clone);

impl<T> SeqList<T> {
    /// Creates an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty list with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    pub fn first(&self) -> Result<&T, EmptyError> {
        self.elements.first().ok_or(EmptyError)
    }

    pub fn first_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.elements.first_mut().ok_or(EmptyError)
    }

    pub fn last(&self) -> Result<&T, EmptyError> {
        self.elements.last().ok_or(EmptyError)
    }

    pub fn last_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.elements.last_mut().ok_or(EmptyError)
    }

    /// Returns the element at `index`.
    ///
    /// Fails when `index` is negative or not less than `len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_list::{IndexError, SeqList};
    ///
    /// let list = SeqList::from([1, 2, 3]);
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert_eq!(list.get(3), Err(IndexError { index: 3, len: 3 }));
    /// assert_eq!(list.get(-1), Err(IndexError { index: -1, len: 3 }));
    /// ```
    pub fn get(&self, index: impl Position) -> Result<&T, IndexError> {
        let offset = self.resolve(index)?;
        Ok(&self.elements[offset])
    }

    pub fn get_mut(&mut self, index: impl Position) -> Result<&mut T, IndexError> {
        let offset = self.resolve(index)?;
        Ok(&mut self.elements[offset])
    }

    /// Adds `item` after the current last element. Amortized O(1).
    pub fn append(&mut self, item: T) {
        if self.elements.len() == self.elements.capacity() {
            self.reserve_one();
        }
        self.elements.push(item);
    }

    #[cold]
    fn reserve_one(&mut self) {
        let old_cap = self.elements.capacity();
        self.elements.reserve(1);
        tracing::trace!(
            old_cap,
            new_cap = self.elements.capacity(),
            "Grew list buffer"
        );
    }

    /// Adds `item` before the current first element. O(n): every existing
    /// element moves one slot to the right.
    pub fn prepend(&mut self, item: T) {
        self.elements.insert(0, item);
        tracing::trace!(len = self.elements.len(), "Prepended to list");
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    ///
    /// Out-of-range and negative positions leave the list untouched.
    pub fn remove_at(&mut self, index: impl Position) -> Result<T, IndexError> {
        let offset = self.resolve(index)?;
        let removed = self.elements.remove(offset);
        tracing::trace!(index = offset, len = self.elements.len(), "Removed from list");
        Ok(removed)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        let removed = self.elements.len();
        self.elements.clear();
        tracing::trace!(removed, "Cleared list");
    }

    /// Consumes the list and returns it without its first element.
    ///
    /// Unlike [`tail`](Self::tail) this needs no `Clone` bound. An empty list
    /// stays empty.
    pub fn into_tail(mut self) -> Self {
        if !self.elements.is_empty() {
            self.elements.remove(0);
        }
        self
    }

    /// Consumes the list, splitting it into its first element and the rest.
    ///
    /// Returns `None` for an empty list.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_list::SeqList;
    ///
    /// fn concat(list: SeqList<&str>) -> String {
    ///     match list.split_first() {
    ///         Some((head, rest)) => format!("{head}{}", concat(rest)),
    ///         None => String::new(),
    ///     }
    /// }
    ///
    /// assert_eq!(concat(SeqList::from(["a", "b", "c"])), "abc");
    /// ```
    pub fn split_first(mut self) -> Option<(T, Self)> {
        if self.elements.is_empty() {
            return None;
        }
        let head = self.elements.remove(0);
        Some((head, self))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn resolve(&self, index: impl Position) -> Result<usize, IndexError> {
        index.resolve(self.elements.len()).inspect_err(|err| {
            tracing::debug!(index = err.index, len = err.len, "Rejected list position");
        })
    }
}

impl<T: Clone> SeqList<T> {
    /// Returns a new list holding every element except the first.
    ///
    /// The result owns copies of the elements and shares no storage with
    /// `self`. Lists of zero or one element yield an empty list.
    pub fn tail(&self) -> Self {
        let rest = self.elements.get(1..).unwrap_or_default();
        Self {
            elements: rest.to_vec(),
        }
    }

    /// Returns a new list with the elements matching `predicate`, in their
    /// original order. `self` is left unchanged.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        let elements = self
            .elements
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect();
        Self { elements }
    }
}

impl<T> Default for SeqList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SeqList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for SeqList<T> {
    fn from(array: [T; N]) -> Self {
        Self {
            elements: Vec::from(array),
        }
    }
}

impl<T> From<SeqList<T>> for Vec<T> {
    fn from(list: SeqList<T>) -> Self {
        list.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// Renders as `[e0 e1 e2]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
