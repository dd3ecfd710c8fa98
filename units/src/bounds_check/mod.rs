// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounds checking of an [`Offset`] against the [`Count`] of the container it indexes.
//!
//! # Core Concepts
//!
//! ## Array-Style Bounds Checking (`check_array_access_bounds`)
//!
//! An offset is valid for reading or writing an element if it is less than the count.
//! Returns [`ArrayAccessBoundsStatus`].
//!
//! ## Cursor Position Checking (`check_cursor_position_bounds`)
//!
//! An offset is a valid insertion point if it is at most the count, ie: one past the
//! last element is allowed. Returns [`CursorPositionBoundsStatus`], which separates the
//! start, the middle, the end and beyond the end.
//!
//! Both checks only compare an `Offset<E>` with a `Count<E>` of the same element type,
//! so a byte offset can't be checked against a count of `u32` elements.
//!
//! # Usage Examples
//!
//! ```
//! use r3bl_units::{BoundsCheck, CursorPositionBoundsStatus, Count, Offset, count, offset};
//!
//! let content_length: Count<char> = count(10);
//! let cursor_pos: Offset<char> = offset(8);
//!
//! match cursor_pos.check_cursor_position_bounds(content_length) {
//!     CursorPositionBoundsStatus::AtStart => println!("Cursor at start"),
//!     CursorPositionBoundsStatus::Within => println!("Cursor on content"),
//!     CursorPositionBoundsStatus::AtEnd => println!("Cursor at end"),
//!     CursorPositionBoundsStatus::Beyond => println!("Invalid position"),
//! }
//!
//! // "Does this count get overflowed by this offset?"
//! assert!(!content_length.is_overflowed_by(cursor_pos));
//! // "Does this offset overflow this count?"
//! assert!(!cursor_pos.overflows(content_length));
//! ```
//!
//! [`Offset`]: crate::Offset
//! [`Count`]: crate::Count

// Attach.
pub mod bounds_check_core;
pub mod result_enums;

// Re-export.
pub use bounds_check_core::*;
pub use result_enums::*;
