// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors raised when a [`Count`] or [`Offset`] invariant is violated.
//!
//! There are two ways to surface them:
//! 1. The `try_*` operations return a [`UnitsResult`], so the caller decides what to do.
//! 2. The fatal operations ([`Count::strict_sub`], [`Count::last_offset`], negating a
//!    count, [`Offset::as_count`], [`Count::from_signed_native_size`]) route the same
//!    error into [`fatal`], which logs it and panics. These violations are caller logic
//!    bugs, so there is no default value to fall back to.
//!
//! For more information on this error style, see:
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! [`Count`]: crate::Count
//! [`Offset`]: crate::Offset
//! [`Count::strict_sub`]: crate::Count::strict_sub
//! [`Count::last_offset`]: crate::Count::last_offset
//! [`Count::from_signed_native_size`]: crate::Count::from_signed_native_size
//! [`Offset::as_count`]: crate::Offset::as_count

use miette::Diagnostic;

use crate::RawUnit;

/// Type alias for results of the fallible unit operations. Since [`UnitsError`]
/// implements [`Diagnostic`], the `?` operator converts it into a [`miette::Report`].
pub type UnitsResult<T> = Result<T, UnitsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum UnitsError {
    #[error("Count subtraction underflow: {minuend} - {subtrahend} is negative")]
    #[diagnostic(
        code(r3bl_units::count::subtraction_underflow),
        help("Use `saturating_sub` if the operand order is not known up front")
    )]
    SubtractionUnderflow {
        minuend: RawUnit,
        subtrahend: RawUnit,
    },

    #[error("An empty count has no last offset")]
    #[diagnostic(
        code(r3bl_units::count::last_offset_of_empty),
        help("Check `is_zero()` before asking for the last offset")
    )]
    LastOffsetOfEmpty,

    #[error("Attempted to negate count {value}, counts are never negative")]
    #[diagnostic(code(r3bl_units::count::negated))]
    NegatedCount { value: RawUnit },

    #[error("Offset {value} is negative and can't be used as a count")]
    #[diagnostic(
        code(r3bl_units::offset::negative_as_count),
        help("Use `distance_from` to measure between two offsets")
    )]
    NegativeOffsetAsCount { value: RawUnit },

    #[error("Native size is the -1 sentinel, which marks a failed native call")]
    #[diagnostic(
        code(r3bl_units::native_size::invalid),
        help("Handle the error return of the native call before converting its result")
    )]
    InvalidNativeSize,

    #[error("Native size {value} is negative")]
    #[diagnostic(code(r3bl_units::native_size::negative))]
    NegativeNativeSize { value: RawUnit },
}

/// Single sink for every fatal invariant violation. Logs the error via [`tracing`] and
/// then panics with its message.
///
/// # Panics
///
/// Always.
#[cold]
#[track_caller]
pub fn fatal(error: UnitsError) -> ! {
    // % is Display, ? is Debug.
    tracing::error!(message = "Unit invariant violated.", error = %error);
    panic!("{error}");
}

/// Unwraps the result of a `try_*` operation, sending any error to [`fatal`].
#[track_caller]
pub(crate) fn unwrap_or_fatal<T>(result: UnitsResult<T>) -> T {
    match result {
        Ok(it) => it,
        Err(error) => fatal(error),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_messages() {
        let error = UnitsError::SubtractionUnderflow {
            minuend: 3,
            subtrahend: 5,
        };
        assert_eq!(
            error.to_string(),
            "Count subtraction underflow: 3 - 5 is negative"
        );
        assert_eq!(
            UnitsError::NegatedCount { value: 5 }.to_string(),
            "Attempted to negate count 5, counts are never negative"
        );
        assert_eq!(
            UnitsError::NegativeOffsetAsCount { value: -2 }.to_string(),
            "Offset -2 is negative and can't be used as a count"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let code = UnitsError::LastOffsetOfEmpty
            .code()
            .map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_units::count::last_offset_of_empty"));
    }

    #[test]
    fn test_converts_into_miette_report() {
        fn fails() -> miette::Result<()> {
            let result: UnitsResult<()> = Err(UnitsError::InvalidNativeSize);
            result?;
            Ok(())
        }
        let report = fails().unwrap_err();
        assert!(report.to_string().contains("-1 sentinel"));
    }

    #[test]
    fn test_unwrap_or_fatal_passes_ok_through() {
        assert_eq!(unwrap_or_fatal(Ok::<_, UnitsError>(7)), 7);
    }

    #[test]
    #[should_panic(expected = "An empty count has no last offset")]
    fn test_fatal_panics_with_message() { fatal(UnitsError::LastOffsetOfEmpty); }
}
