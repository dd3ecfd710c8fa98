// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Status enums for bounds checking operations.
//!
//! See the [module documentation] for details on the different bounds checking paradigms.
//!
//! [module documentation]: mod@crate::bounds_check

/// Result of [`check_array_access_bounds`].
///
/// [`check_array_access_bounds`]: crate::BoundsCheck::check_array_access_bounds
///
/// # Examples
///
/// ```
/// use r3bl_units::{ArrayAccessBoundsStatus, BoundsCheck, Count, Offset, count, offset};
///
/// let length: Count<u8> = count(10);
/// assert_eq!(
///     offset::<u8>(5).check_array_access_bounds(length),
///     ArrayAccessBoundsStatus::Within
/// );
/// assert_eq!(
///     offset::<u8>(10).check_array_access_bounds(length),
///     ArrayAccessBoundsStatus::Overflowed
/// );
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayAccessBoundsStatus {
    /// Offset is negative. Offsets are trusted on construction, so this can come from
    /// [`crate::Offset::from_raw`], [`crate::Offset::add_raw`] with a negative delta, or
    /// [`crate::Offset::difference`].
    Underflowed,

    /// Offset is within valid bounds (`0 <= offset < count`).
    Within,

    /// Offset is at or past the end (`offset >= count`).
    Overflowed,
}

/// Result of [`check_cursor_position_bounds`].
///
/// [`check_cursor_position_bounds`]: crate::BoundsCheck::check_cursor_position_bounds
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorPositionBoundsStatus {
    /// Offset is at the start of content (`offset == 0`). For empty content, this takes
    /// precedence over `AtEnd`.
    AtStart,

    /// Offset points to existing content (`0 < offset < count`).
    Within,

    /// Offset is at the content end boundary (`offset == count && offset > 0`), valid
    /// for insertion.
    AtEnd,

    /// Offset is past the end (`offset > count`) or negative, requires correction.
    Beyond,
}
