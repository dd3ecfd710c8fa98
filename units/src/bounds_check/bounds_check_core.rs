// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core bounds checking trait and its implementation for [`Offset`].
//!
//! [`Offset`]: crate::Offset

use std::cmp::Ordering;

use super::result_enums::{ArrayAccessBoundsStatus, CursorPositionBoundsStatus};
use crate::{Count, Offset};

/// Index bounds validation for containers.
///
/// Generic over the extent type, so that only an extent with a matching element tag can
/// be used as the bound.
pub trait BoundsCheck<Extent> {
    /// Array-style bounds checking.
    ///
    /// ```text
    ///                           offset=5            offset=10
    ///                                 ↓                   ↓
    /// Offset:     0   1   2   3   4   5   6   7   8   9 │ 10  11  12
    ///           ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┼───┬───┬───┐
    ///           │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ × │ × │ × │
    ///           ├───┴───┴───┴───┴───┴───┴───┴───┴───┴───┼───┴───┴───┤
    ///           ├────────── within bounds ──────────────┼─ overflow ┘
    ///           └────────── count=10 ───────────────────┘
    /// ```
    fn check_array_access_bounds(&self, max: Extent) -> ArrayAccessBoundsStatus;

    /// Cursor position bounds checking.
    ///
    /// ```text
    /// Offset:     0   1   2   3   4   5   6   7   8   9   10  11
    ///           ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
    ///           │ S │ W │ W │ W │ W │ W │ W │ W │ W │ W │ E │ B │
    ///           └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
    ///           └──────────────── count=10 ─────────────┘
    ///
    /// S = AtStart (offset=0)
    /// W = Within (1 ≤ offset < 10)
    /// E = AtEnd (offset=10)
    /// B = Beyond (offset > 10)
    /// ```
    fn check_cursor_position_bounds(&self, content_length: Extent)
    -> CursorPositionBoundsStatus;

    /// `true` if the offset can't be used to access an element.
    fn overflows(&self, max: Extent) -> bool {
        self.check_array_access_bounds(max) != ArrayAccessBoundsStatus::Within
    }
}

impl<E> BoundsCheck<Count<E>> for Offset<E> {
    fn check_array_access_bounds(&self, max: Count<E>) -> ArrayAccessBoundsStatus {
        if self.as_raw() < 0 {
            ArrayAccessBoundsStatus::Underflowed
        } else if self.as_raw() < max.as_raw() {
            ArrayAccessBoundsStatus::Within
        } else {
            ArrayAccessBoundsStatus::Overflowed
        }
    }

    fn check_cursor_position_bounds(
        &self,
        content_length: Count<E>,
    ) -> CursorPositionBoundsStatus {
        if self.as_raw() < 0 {
            return CursorPositionBoundsStatus::Beyond;
        }
        if self.as_raw() == 0 {
            return CursorPositionBoundsStatus::AtStart;
        }
        match self.as_raw().cmp(&content_length.as_raw()) {
            Ordering::Less => CursorPositionBoundsStatus::Within,
            Ordering::Equal => CursorPositionBoundsStatus::AtEnd,
            Ordering::Greater => CursorPositionBoundsStatus::Beyond,
        }
    }
}

impl<E> Count<E> {
    /// Same as [`BoundsCheck::overflows`], from the count's perspective.
    #[must_use]
    pub fn is_overflowed_by(self, offset: Offset<E>) -> bool { offset.overflows(self) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{RawUnit, count, offset};

    #[test_case(0, 10, ArrayAccessBoundsStatus::Within)]
    #[test_case(9, 10, ArrayAccessBoundsStatus::Within)]
    #[test_case(10, 10, ArrayAccessBoundsStatus::Overflowed)]
    #[test_case(11, 10, ArrayAccessBoundsStatus::Overflowed)]
    #[test_case(0, 0, ArrayAccessBoundsStatus::Overflowed)]
    #[test_case(-1, 10, ArrayAccessBoundsStatus::Underflowed)]
    fn test_check_array_access_bounds(
        o: RawUnit,
        c: RawUnit,
        expected: ArrayAccessBoundsStatus,
    ) {
        let it: Offset<char> = offset(o);
        assert_eq!(it.check_array_access_bounds(count(c)), expected);
    }

    #[test]
    fn test_every_negative_offset_source_underflows() {
        let length = count::<char>(10);
        let start: Offset<char> = offset(2);
        for it in [
            Offset::from_raw(-3),
            start.add_raw(-3),
            start.difference(offset(5)),
        ] {
            assert_eq!(
                it.check_array_access_bounds(length),
                ArrayAccessBoundsStatus::Underflowed
            );
        }
    }

    #[test_case(0, 5, CursorPositionBoundsStatus::AtStart)]
    #[test_case(0, 0, CursorPositionBoundsStatus::AtStart)]
    #[test_case(3, 5, CursorPositionBoundsStatus::Within)]
    #[test_case(5, 5, CursorPositionBoundsStatus::AtEnd)]
    #[test_case(7, 5, CursorPositionBoundsStatus::Beyond)]
    #[test_case(1, 0, CursorPositionBoundsStatus::Beyond)]
    #[test_case(-2, 5, CursorPositionBoundsStatus::Beyond)]
    fn test_check_cursor_position_bounds(
        o: RawUnit,
        c: RawUnit,
        expected: CursorPositionBoundsStatus,
    ) {
        let it: Offset<char> = offset(o);
        assert_eq!(it.check_cursor_position_bounds(count(c)), expected);
    }

    #[test]
    fn test_overflows_both_perspectives() {
        let length: Count<u8> = count(3);
        assert!(!offset::<u8>(2).overflows(length));
        assert!(offset::<u8>(3).overflows(length));
        assert!(!length.is_overflowed_by(offset(2)));
        assert!(length.is_overflowed_by(offset(3)));
    }

    #[test]
    fn test_last_offset_is_within() {
        let length: Count<u8> = count(4);
        assert_eq!(
            length.last_offset().check_array_access_bounds(length),
            ArrayAccessBoundsStatus::Within
        );
        assert_eq!(
            length.as_offset().check_cursor_position_bounds(length),
            CursorPositionBoundsStatus::AtEnd
        );
    }
}
