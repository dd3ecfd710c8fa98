// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-based positions measured in elements - see [`Offset`] type.

use std::{marker::PhantomData,
          ops::{Add, AddAssign, Sub, SubAssign}};

use crate::{ByteCount, Count, RawUnit, UnitsError, UnitsResult,
            error::unwrap_or_fatal, unit_value_macros::impl_unit_value_traits};

/// Represents the 0-based position of an `E` element from the start of an array,
/// string or buffer.
///
/// The relationship between [`Offset`] and [`Count`] is that:
/// - An `Offset` is a position, a `Count` is an extent.
/// - `Offset - Offset` is the distance between two positions, a [`Count`].
/// - `Offset ± Count` moves a position by an extent, giving an [`Offset`].
/// - The last valid offset in an extent of count `c` is `c - 1`, see
///   [`Count::last_offset`].
///
/// Offsets are logically non-negative, but a negative raw value can still be stored in
/// one (via [`Offset::difference`], [`Offset::add_raw`] or [`Offset::from_raw`]). It
/// never leaks into a [`Count`]: [`Offset::as_count`] is checked, and the distance
/// operations compare the raw values before subtracting.
///
/// # Examples
///
/// ```
/// use r3bl_units::{Count, Offset, count, offset};
///
/// let start: Offset<char> = offset(2);
/// let end = start + count(5);
/// assert_eq!(end, offset(7));
/// assert_eq!(end - start, count(5));
/// assert!(end.equals_count(count(7)));
/// ```
pub struct Offset<E> {
    raw: RawUnit,
    _unit: PhantomData<fn() -> E>,
}

/// An [`Offset`] counted in bytes.
pub type ByteOffset = Offset<u8>;

/// Creates a new [`Offset`] from a raw value. Equivalent to [`Offset::from_raw`].
#[must_use]
pub const fn offset<E>(arg_raw: RawUnit) -> Offset<E> { Offset::from_raw(arg_raw) }

/// Creates a new [`ByteOffset`] from a raw value.
#[must_use]
pub const fn byte_offset(arg_raw: RawUnit) -> ByteOffset { Offset::from_raw(arg_raw) }

impl_unit_value_traits!(Offset, "Offset");

mod construct {
    use super::{Count, Offset, PhantomData, RawUnit, UnitsError, UnitsResult,
                unwrap_or_fatal};

    impl<E> Offset<E> {
        pub const ZERO: Self = Self::from_raw(0);

        /// Trusted construction, no validation.
        #[must_use]
        pub const fn from_raw(raw: RawUnit) -> Self {
            Self {
                raw,
                _unit: PhantomData,
            }
        }

        #[must_use]
        pub const fn as_raw(self) -> RawUnit { self.raw }

        #[must_use]
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        pub fn as_usize(self) -> usize {
            debug_assert!(self.raw >= 0, "negative offset used as an index");
            self.raw as usize
        }

        /// Reinterprets the offset as a count of the same raw value, eg: one past the
        /// end offset as the total length.
        ///
        /// # Errors
        ///
        /// Returns [`UnitsError::NegativeOffsetAsCount`] for a negative offset.
        pub const fn try_as_count(self) -> UnitsResult<Count<E>> {
            if self.raw < 0 {
                Err(UnitsError::NegativeOffsetAsCount { value: self.raw })
            } else {
                Ok(Count::from_raw(self.raw))
            }
        }

        /// Same as [`Offset::try_as_count`] for offsets the caller knows are not
        /// negative. Exact inverse of [`Count::as_offset`].
        ///
        /// # Panics
        ///
        /// Fatal for a negative offset.
        #[must_use]
        #[track_caller]
        pub fn as_count(self) -> Count<E> { unwrap_or_fatal(self.try_as_count()) }

        /// `true` iff this offset sits exactly at the end of an extent of `count`
        /// elements.
        #[must_use]
        pub const fn equals_count(self, count: Count<E>) -> bool {
            self.raw == count.as_raw()
        }
    }

    impl<E> PartialEq<Count<E>> for Offset<E> {
        fn eq(&self, other: &Count<E>) -> bool { self.equals_count(*other) }
    }

    impl<E> PartialEq<Offset<E>> for Count<E> {
        fn eq(&self, other: &Offset<E>) -> bool { other.equals_count(*self) }
    }
}

mod move_by {
    use super::{Count, Offset, RawUnit, UnitsError, UnitsResult, unwrap_or_fatal};

    impl<E> Offset<E> {
        /// Shifts the raw value by `delta` elements in either direction.
        #[must_use]
        pub const fn add_raw(self, delta: RawUnit) -> Self {
            Self::from_raw(self.raw + delta)
        }

        #[must_use]
        pub const fn advance(self, n: Count<E>) -> Self {
            Self::from_raw(self.raw + n.as_raw())
        }

        /// Moves the offset back by `n`. The caller guarantees that the result is not
        /// negative, this is only asserted in debug builds.
        #[must_use]
        pub const fn retreat(self, n: Count<E>) -> Self {
            debug_assert!(self.raw >= n.as_raw(), "retreat past the start");
            Self::from_raw(self.raw - n.as_raw())
        }

        /// Raw subtraction. The result is negative when `other > self`, which is why it
        /// stays an [`Offset`]. Use [`Offset::distance_from`] to get a [`Count`].
        #[must_use]
        pub const fn difference(self, other: Self) -> Self {
            Self::from_raw(self.raw - other.raw)
        }

        /// The number of elements from `other` up to `self`.
        ///
        /// # Errors
        ///
        /// Returns [`UnitsError::SubtractionUnderflow`] if `other > self`.
        pub const fn try_distance_from(self, other: Self) -> UnitsResult<Count<E>> {
            if other.raw > self.raw {
                Err(UnitsError::SubtractionUnderflow {
                    minuend: self.raw,
                    subtrahend: other.raw,
                })
            } else {
                Ok(Count::from_raw(self.raw - other.raw))
            }
        }

        /// The number of elements from `other` up to `self`, for callers that know
        /// `self >= other`. Also available as `self - other`.
        ///
        /// # Panics
        ///
        /// Fatal if `other > self`.
        #[must_use]
        #[track_caller]
        pub fn distance_from(self, other: Self) -> Count<E> {
            unwrap_or_fatal(self.try_distance_from(other))
        }

        /// The number of elements from `other` up to `self`, or zero if `other > self`.
        #[must_use]
        pub const fn saturating_distance_from(self, other: Self) -> Count<E> {
            if other.raw > self.raw {
                Count::ZERO
            } else {
                Count::from_raw(self.raw - other.raw)
            }
        }
    }
}

mod convert {
    use super::{ByteCount, ByteOffset, Offset};

    impl<E> Offset<E> {
        /// Relabels the element tag. Only meaningful when `E` and `E2` have the same
        /// width, which is asserted in debug builds only.
        #[must_use]
        pub fn cast<E2>(self) -> Offset<E2> {
            debug_assert_eq!(
                size_of::<E>(),
                size_of::<E2>(),
                "cast between element types of different widths"
            );
            Offset::from_raw(self.raw)
        }

        /// Converts to an offset in `E2` units by going through bytes:
        /// `raw * src_elem_size / dst_elem_size`. The division truncates, so the byte
        /// offset must be a multiple of `dst_elem_size` (asserted in debug builds only).
        ///
        /// ```
        /// use r3bl_units::{Offset, byte_count, offset};
        ///
        /// let in_u16: Offset<u16> = offset(6);
        /// let in_u32: Offset<u32> = in_u16.rescale(byte_count(2), byte_count(4));
        /// assert_eq!(in_u32, offset(3));
        /// ```
        #[must_use]
        pub fn rescale<E2>(
            self,
            src_elem_size: ByteCount,
            dst_elem_size: ByteCount,
        ) -> Offset<E2> {
            let byte_offset = self.to_byte_offset(src_elem_size).raw;
            let dst_elem_size = dst_elem_size.as_raw();
            debug_assert!(byte_offset % dst_elem_size == 0, "rescale would truncate");
            Offset::from_raw(byte_offset / dst_elem_size)
        }

        #[must_use]
        pub const fn to_byte_offset(self, elem_size: ByteCount) -> ByteOffset {
            ByteOffset::from_raw(self.raw * elem_size.as_raw())
        }

        /// Shifts the raw value right by `n` bits, relabelling the element tag. Used for
        /// power of two index scaling (eg: bucket index in a radix structure). `n` must
        /// be smaller than the bit width of [`crate::RawUnit`].
        #[must_use]
        pub const fn shift_right<E2>(self, n: u32) -> Offset<E2> {
            Offset::from_raw(self.raw >> n)
        }

        /// Shifts the raw value left by `n` bits, relabelling the element tag. `n` must
        /// be smaller than the bit width of [`crate::RawUnit`].
        #[must_use]
        pub const fn shift_left<E2>(self, n: u32) -> Offset<E2> {
            Offset::from_raw(self.raw << n)
        }
    }
}

mod ops {
    use super::{Add, AddAssign, Count, Offset, RawUnit, Sub, SubAssign};

    impl<E> Add<RawUnit> for Offset<E> {
        type Output = Offset<E>;

        fn add(self, rhs: RawUnit) -> Self::Output { self.add_raw(rhs) }
    }

    impl<E> AddAssign<RawUnit> for Offset<E> {
        fn add_assign(&mut self, rhs: RawUnit) { *self = self.add_raw(rhs); }
    }

    impl<E> Add<Count<E>> for Offset<E> {
        type Output = Offset<E>;

        fn add(self, rhs: Count<E>) -> Self::Output { self.advance(rhs) }
    }

    impl<E> AddAssign<Count<E>> for Offset<E> {
        fn add_assign(&mut self, rhs: Count<E>) { *self = self.advance(rhs); }
    }

    impl<E> Sub<Count<E>> for Offset<E> {
        type Output = Offset<E>;

        fn sub(self, rhs: Count<E>) -> Self::Output { self.retreat(rhs) }
    }

    impl<E> SubAssign<Count<E>> for Offset<E> {
        fn sub_assign(&mut self, rhs: Count<E>) { *self = self.retreat(rhs); }
    }

    /// Strict, see [`Offset::distance_from`].
    impl<E> Sub for Offset<E> {
        type Output = Count<E>;

        #[track_caller]
        fn sub(self, rhs: Offset<E>) -> Self::Output { self.distance_from(rhs) }
    }
}

mod serde_impl {
    use super::{Offset, RawUnit};

    impl<'de, E> serde::Deserialize<'de> for Offset<E> {
        fn deserialize<D: serde::Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            let raw = <RawUnit as serde::Deserialize>::deserialize(deserializer)?;
            if raw < 0 {
                return Err(serde::de::Error::custom(format!(
                    "offset can't be negative, got {raw}"
                )));
            }
            Ok(Offset::from_raw(raw))
        }
    }
}
