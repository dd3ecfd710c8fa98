// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Non-negative extents measured in elements - see [`Count`] type.

use std::{iter::Sum,
          marker::PhantomData,
          ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign}};

use crate::{Offset, RawUnit, UnitsError, UnitsResult,
            error::{fatal, unwrap_or_fatal},
            unit_value_macros::impl_unit_value_traits};

/// Represents the number of `E` elements in an array, string or buffer.
///
/// A `Count` is a size (how many), as opposed to an [`Offset`] which is a 0-based
/// position (which one). The element tag `E` is a compile time marker only, so a
/// `Count<u16>` can't be passed where a `Count<u8>` is expected. Converting between
/// element types is always an explicit call ([`Count::cast`], [`Count::scale_by`]).
///
/// A constructed `Count` is never negative. The only subtractions are:
/// - [`Count::saturating_sub`] (and the `-` operator): clamps at zero, never fails.
/// - [`Count::strict_sub`]: fatal when `other > self`.
/// - [`Count::try_sub`]: returns [`UnitsError::SubtractionUnderflow`] when `other >
///   self`.
///
/// # Examples
///
/// ```
/// use r3bl_units::{Count, count, offset};
///
/// let length: Count<char> = count(10);
/// assert_eq!(length - count(3), count(7));
/// assert_eq!(count::<char>(3) - length, Count::ZERO);
/// assert_eq!(length.last_offset(), offset(9));
/// ```
pub struct Count<E> {
    raw: RawUnit,
    _unit: PhantomData<fn() -> E>,
}

/// A [`Count`] of bytes. Also used as the element size witness for byte conversions.
pub type ByteCount = Count<u8>;

/// Creates a new [`Count`] from a raw value. Equivalent to [`Count::from_raw`].
///
/// ```
/// use r3bl_units::{Count, count};
///
/// let it: Count<u32> = count(5);
/// assert_eq!(it, Count::from_raw(5));
/// ```
#[must_use]
pub const fn count<E>(arg_raw: RawUnit) -> Count<E> { Count::from_raw(arg_raw) }

/// Creates a new [`ByteCount`] from a raw value.
#[must_use]
pub const fn byte_count(arg_raw: RawUnit) -> ByteCount { Count::from_raw(arg_raw) }

impl_unit_value_traits!(Count, "Count");

mod construct {
    use super::{Count, PhantomData, RawUnit};

    impl<E> Count<E> {
        pub const ZERO: Self = Self::from_raw(0);

        /// Trusted construction. The caller guarantees that `raw` is not negative, this
        /// is only asserted in debug builds.
        #[must_use]
        pub const fn from_raw(raw: RawUnit) -> Self {
            debug_assert!(raw >= 0, "Count can't be negative");
            Self {
                raw,
                _unit: PhantomData,
            }
        }

        #[must_use]
        pub const fn as_raw(self) -> RawUnit { self.raw }

        #[must_use]
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        pub const fn as_usize(self) -> usize { self.raw as usize }

        #[must_use]
        pub const fn is_zero(self) -> bool { self.raw == 0 }
    }
}

mod subtract {
    use super::{Count, UnitsError, UnitsResult, unwrap_or_fatal};

    impl<E> Count<E> {
        /// Always safe subtraction. Returns [`Count::ZERO`] if `other > self`.
        #[must_use]
        pub const fn saturating_sub(self, other: Self) -> Self {
            if other.raw > self.raw {
                Self::ZERO
            } else {
                Self::from_raw(self.raw - other.raw)
            }
        }

        /// Exact subtraction.
        ///
        /// # Errors
        ///
        /// Returns [`UnitsError::SubtractionUnderflow`] if `other > self`.
        pub const fn try_sub(self, other: Self) -> UnitsResult<Self> {
            if other.raw > self.raw {
                Err(UnitsError::SubtractionUnderflow {
                    minuend: self.raw,
                    subtrahend: other.raw,
                })
            } else {
                Ok(Self::from_raw(self.raw - other.raw))
            }
        }

        /// Exact subtraction for callers that know `self >= other`.
        ///
        /// # Panics
        ///
        /// Fatal if `other > self`. Use [`Count::saturating_sub`] when the operand order
        /// is not known up front.
        #[must_use]
        #[track_caller]
        pub fn strict_sub(self, other: Self) -> Self {
            unwrap_or_fatal(self.try_sub(other))
        }
    }
}

mod convert {
    use super::{ByteCount, Count, Offset, RawUnit, UnitsError, UnitsResult,
                unwrap_or_fatal};

    impl<E> Count<E> {
        /// Total number of bytes taken up by `self` elements that are each
        /// `elem_size` bytes wide.
        #[must_use]
        pub const fn scale_by(self, elem_size: ByteCount) -> ByteCount {
            ByteCount::from_raw(self.raw * elem_size.raw)
        }

        /// Rounds up to the next multiple of `alignment`, which must be a power of two.
        /// Any other `alignment` gives a meaningless (masked) result in release builds.
        ///
        /// ```
        /// use r3bl_units::{Count, count};
        ///
        /// assert_eq!(count::<u8>(13).round_up_to_alignment(8), count(16));
        /// assert_eq!(count::<u8>(16).round_up_to_alignment(8), count(16));
        /// ```
        #[must_use]
        pub const fn round_up_to_alignment(self, alignment: RawUnit) -> Self {
            debug_assert!(
                alignment > 0 && (alignment & (alignment - 1)) == 0,
                "alignment must be a power of two"
            );
            Self::from_raw((self.raw + alignment - 1) & !(alignment - 1))
        }

        /// The position of the final element, ie: `count - 1`.
        ///
        /// # Errors
        ///
        /// Returns [`UnitsError::LastOffsetOfEmpty`] for a zero count.
        pub const fn try_last_offset(self) -> UnitsResult<Offset<E>> {
            if self.raw == 0 {
                Err(UnitsError::LastOffsetOfEmpty)
            } else {
                Ok(Offset::from_raw(self.raw - 1))
            }
        }

        /// Subtract 1 from the count to get the last offset. I.e.: `count = last
        /// offset + 1`.
        ///
        /// ```text
        /// Count=6 to last offset conversion:
        ///
        /// Count:      1   2   3   4   5   6
        ///           ┌───┬───┬───┬───┬───┬───┐
        ///           │   │   │   │   │   │   │
        ///           └───┴───┴───┴───┴───┴───┘
        /// Offset:     0   1   2   3   4   5
        ///                                 ↑
        ///                         last_offset() = 5
        /// ```
        ///
        /// # Panics
        ///
        /// Fatal for a zero count, since an empty extent has no last element.
        #[must_use]
        #[track_caller]
        pub fn last_offset(self) -> Offset<E> { unwrap_or_fatal(self.try_last_offset()) }

        /// Reinterprets the count as the offset one past the end of the extent. This is
        /// the exact inverse of [`Offset::as_count`].
        #[must_use]
        pub const fn as_offset(self) -> Offset<E> { Offset::from_raw(self.raw) }

        /// Relabels the element tag. Only meaningful when `E` and `E2` have the same
        /// width, which is asserted in debug builds only.
        #[must_use]
        pub fn cast<E2>(self) -> Count<E2> {
            debug_assert_eq!(
                size_of::<E>(),
                size_of::<E2>(),
                "cast between element types of different widths"
            );
            Count::from_raw(self.raw)
        }
    }
}

mod ops {
    use super::{Add, AddAssign, ByteCount, Count, Mul, Neg, Offset, Sub, SubAssign, Sum,
                UnitsError, fatal};

    impl<E> Add for Count<E> {
        type Output = Count<E>;

        fn add(self, rhs: Count<E>) -> Self::Output {
            Count::from_raw(self.raw + rhs.raw)
        }
    }

    impl<E> AddAssign for Count<E> {
        fn add_assign(&mut self, rhs: Count<E>) { *self = *self + rhs; }
    }

    /// Saturating, see [`Count::saturating_sub`].
    impl<E> Sub for Count<E> {
        type Output = Count<E>;

        fn sub(self, rhs: Count<E>) -> Self::Output { self.saturating_sub(rhs) }
    }

    impl<E> SubAssign for Count<E> {
        fn sub_assign(&mut self, rhs: Count<E>) { *self = *self - rhs; }
    }

    impl<E> Add<Offset<E>> for Count<E> {
        type Output = Offset<E>;

        fn add(self, rhs: Offset<E>) -> Self::Output { rhs.advance(self) }
    }

    /// `ByteCount * Count<E>`, same as [`Count::scale_by`].
    impl<E> Mul<Count<E>> for ByteCount {
        type Output = ByteCount;

        fn mul(self, rhs: Count<E>) -> Self::Output { rhs.scale_by(self) }
    }

    /// Counts are never negative, so negating one is always a logic bug.
    impl<E> Neg for Count<E> {
        type Output = Count<E>;

        #[track_caller]
        fn neg(self) -> Self::Output {
            fatal(UnitsError::NegatedCount { value: self.raw })
        }
    }

    impl<E> Sum for Count<E> {
        fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.fold(Count::ZERO, |acc, it| acc + it)
        }
    }
}

mod serde_impl {
    use super::{Count, RawUnit};

    /// Counts arrive from untrusted input here, so negative values are rejected rather
    /// than trusted like [`Count::from_raw`].
    impl<'de, E> serde::Deserialize<'de> for Count<E> {
        fn deserialize<D: serde::Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            let raw = <RawUnit as serde::Deserialize>::deserialize(deserializer)?;
            if raw < 0 {
                return Err(serde::de::Error::custom(format!(
                    "count can't be negative, got {raw}"
                )));
            }
            Ok(Count::from_raw(raw))
        }
    }
}
