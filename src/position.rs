//! Integer positions accepted by [`SeqList`](crate::SeqList) indexing.
//!
//! Positions may be any primitive integer up to 64 bits, signed or not, so an
//! index computed as `i - 1` can be passed straight through and a negative
//! result is rejected with [`IndexError`] instead of wrapping or panicking.

use crate::error::IndexError;

mod private {
    pub trait Sealed {}
}

/// An integer that can address an element of a list.
///
/// This is a sealed trait - it cannot be implemented outside this crate.
pub trait Position: private::Sealed + Copy {
    /// The position as a buffer offset, `None` when it is negative or does
    /// not fit in `usize`.
    fn to_offset(self) -> Option<usize>;

    /// The position widened losslessly, for error reports.
    fn widen(self) -> i128;

    /// Resolves the position against a list of `len` elements.
    fn resolve(self, len: usize) -> Result<usize, IndexError> {
        match self.to_offset() {
            Some(offset) if offset < len => Ok(offset),
            _ => Err(IndexError {
                index: self.widen(),
                len,
            }),
        }
    }
}

macro_rules! impl_position {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Position for $ty {
                #[inline(always)]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_position!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_bounds() {
        assert_eq!(0usize.resolve(3), Ok(0));
        assert_eq!(2i32.resolve(3), Ok(2));
        assert_eq!(1u8.resolve(2), Ok(1));
    }

    #[test]
    fn test_resolve_past_end() {
        assert_eq!(3i32.resolve(3), Err(IndexError { index: 3, len: 3 }));
        assert_eq!(0usize.resolve(0), Err(IndexError { index: 0, len: 0 }));
    }

    #[test]
    fn test_resolve_negative() {
        assert_eq!((-1i32).resolve(3), Err(IndexError { index: -1, len: 3 }));
        assert_eq!(
            i64::MIN.resolve(3),
            Err(IndexError {
                index: i64::MIN as i128,
                len: 3
            })
        );
    }

    #[test]
    fn test_widen_keeps_large_unsigned() {
        assert_eq!(u64::MAX.widen(), u64::MAX as i128);
        assert_eq!(usize::MAX.widen(), usize::MAX as i128);
    }
}
