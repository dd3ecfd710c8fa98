// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between byte quantities and the native size integers used at system call
//! and foreign call boundaries (eg: the `size_t` buffer length passed to `write`, or the
//! `ssize_t` returned by `read`).
//!
//! The native width is picked once, at build time, from `target_pointer_width`. It is
//! never looked up per call.

use crate::{ByteCount, ByteOffset, UnitsError, UnitsResult, error::unwrap_or_fatal};

/// The backing field that is used to represent every [`crate::Count`] and
/// [`crate::Offset`] in memory. At least as wide as [`NativeSize`], so converting from
/// an unsigned native size never loses information.
pub type RawUnit = i64;

/// Unsigned native size, the Rust spelling of `size_t`.
pub type NativeSize = usize;

/// Signed native size, the Rust spelling of `ssize_t`. Fallible native calls return `-1`
/// ([`NATIVE_SIZE_SENTINEL`]) on failure.
pub type NativeSignedSize = isize;

#[cfg(target_pointer_width = "64")]
pub const NATIVE_SIZE_BITS: u32 = 64;

#[cfg(target_pointer_width = "32")]
pub const NATIVE_SIZE_BITS: u32 = 32;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("r3bl_units only supports 32 bit and 64 bit targets");

/// Returned by fallible native calls in place of a size.
pub const NATIVE_SIZE_SENTINEL: NativeSignedSize = -1;

mod to_native {
    use super::{ByteCount, ByteOffset, NativeSignedSize, NativeSize};

    impl ByteCount {
        /// Width conversion only, no range check beyond what the native width permits.
        #[must_use]
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        pub const fn to_native_size(self) -> NativeSize { self.as_raw() as NativeSize }

        #[must_use]
        #[allow(clippy::cast_possible_truncation)]
        pub const fn to_native_signed_size(self) -> NativeSignedSize {
            self.as_raw() as NativeSignedSize
        }
    }

    impl ByteOffset {
        /// Width conversion only, no range check beyond what the native width permits.
        #[must_use]
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        pub const fn to_native_size(self) -> NativeSize { self.as_raw() as NativeSize }

        #[must_use]
        #[allow(clippy::cast_possible_truncation)]
        pub const fn to_native_signed_size(self) -> NativeSignedSize {
            self.as_raw() as NativeSignedSize
        }
    }

    impl From<ByteCount> for NativeSize {
        fn from(it: ByteCount) -> Self { it.to_native_size() }
    }
}

mod from_native {
    use super::{ByteCount, ByteOffset, NATIVE_SIZE_SENTINEL, NativeSignedSize,
                NativeSize, RawUnit, UnitsError, UnitsResult, unwrap_or_fatal};

    impl ByteCount {
        /// Converts the signed size returned by a native call.
        ///
        /// # Errors
        ///
        /// - [`UnitsError::InvalidNativeSize`] for the `-1` sentinel, ie: the caller did
        ///   not handle the native call's failure.
        /// - [`UnitsError::NegativeNativeSize`] for any other negative value.
        pub const fn try_from_signed_native_size(
            value: NativeSignedSize,
        ) -> UnitsResult<Self> {
            if value == NATIVE_SIZE_SENTINEL {
                return Err(UnitsError::InvalidNativeSize);
            }
            // Lossless, RawUnit is at least as wide as the native size.
            let raw = value as RawUnit;
            if raw < 0 {
                return Err(UnitsError::NegativeNativeSize { value: raw });
            }
            Ok(Self::from_raw(raw))
        }

        /// Converts the signed size returned by a native call that the caller already
        /// knows succeeded.
        ///
        /// # Panics
        ///
        /// Fatal for the `-1` sentinel or any other negative value.
        #[must_use]
        #[track_caller]
        pub fn from_signed_native_size(value: NativeSignedSize) -> Self {
            unwrap_or_fatal(Self::try_from_signed_native_size(value))
        }

        /// Unconditional width conversion, every unsigned native size is a valid count.
        #[must_use]
        #[allow(clippy::cast_possible_wrap)]
        pub const fn from_unsigned_native_size(value: NativeSize) -> Self {
            Self::from_raw(value as RawUnit)
        }
    }

    impl ByteOffset {
        /// Unconditional width conversion.
        #[must_use]
        #[allow(clippy::cast_possible_wrap)]
        pub const fn from_unsigned_native_size(value: NativeSize) -> Self {
            Self::from_raw(value as RawUnit)
        }
    }

    impl From<NativeSize> for ByteCount {
        fn from(value: NativeSize) -> Self { Self::from_unsigned_native_size(value) }
    }

    impl TryFrom<NativeSignedSize> for ByteCount {
        type Error = UnitsError;

        fn try_from(value: NativeSignedSize) -> Result<Self, Self::Error> {
            Self::try_from_signed_native_size(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{byte_count, byte_offset};

    #[test]
    fn test_native_width_matches_target() {
        assert_eq!(NATIVE_SIZE_BITS, usize::BITS);
        assert!(RawUnit::BITS >= NATIVE_SIZE_BITS);
    }

    #[test]
    fn test_to_native_size() {
        assert_eq!(byte_count(42).to_native_size(), 42_usize);
        assert_eq!(byte_count(42).to_native_signed_size(), 42_isize);
        assert_eq!(byte_offset(7).to_native_size(), 7_usize);
        assert_eq!(byte_offset(7).to_native_signed_size(), 7_isize);
        assert_eq!(NativeSize::from(byte_count(3)), 3_usize);
    }

    #[test_case(0)]
    #[test_case(42)]
    #[test_case(4096)]
    fn test_from_signed_native_size(value: NativeSignedSize) {
        let expected = byte_count(value as RawUnit);
        assert_eq!(ByteCount::from_signed_native_size(value), expected);
        assert_eq!(ByteCount::try_from(value), Ok(expected));
    }

    #[test]
    fn test_try_from_signed_native_size_errors() {
        assert_eq!(
            ByteCount::try_from_signed_native_size(-1),
            Err(UnitsError::InvalidNativeSize)
        );
        assert_eq!(
            ByteCount::try_from_signed_native_size(-5),
            Err(UnitsError::NegativeNativeSize { value: -5 })
        );
    }

    #[test]
    #[should_panic(expected = "-1 sentinel")]
    fn test_sentinel_is_fatal() {
        let _unused = ByteCount::from_signed_native_size(NATIVE_SIZE_SENTINEL);
    }

    #[test]
    #[should_panic(expected = "Native size -5 is negative")]
    fn test_other_negative_is_fatal() {
        let _unused = ByteCount::from_signed_native_size(-5);
    }

    #[test]
    fn test_from_unsigned_native_size() {
        assert_eq!(ByteCount::from_unsigned_native_size(42), byte_count(42));
        assert_eq!(ByteCount::from(42_usize), byte_count(42));
        assert_eq!(ByteOffset::from_unsigned_native_size(9), byte_offset(9));
    }

    #[test]
    fn test_round_trip_through_native_size() {
        let it = byte_count(1 << 20);
        assert_eq!(ByteCount::from_unsigned_native_size(it.to_native_size()), it);
    }
}
