// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_units
//!
//! Unit-tagged offsets and counts for sequential in-memory structures (arrays, strings,
//! buffers).
//!
//! Raw integers that mean "byte offset", "element offset" and "element count" look the
//! same to the compiler, so they get mixed up, and `a - b` on sizes quietly underflows.
//! This crate wraps them in types that keep them apart:
//!
//! | Type                  | Meaning                                      |
//! |-----------------------|----------------------------------------------|
//! | [`Offset<E>`]         | 0-based position of an `E` element           |
//! | [`Count<E>`]          | number of `E` elements, never negative       |
//! | [`ByteOffset`]        | `Offset<u8>`                                 |
//! | [`ByteCount`]         | `Count<u8>`, also the element size witness   |
//! | [`FileSize`]          | byte size of a file on disk, no element tag  |
//!
//! The element tag `E` costs nothing at runtime. Moving between element types is always
//! an explicit call: [`Offset::cast`], [`Offset::rescale`], [`Offset::to_byte_offset`],
//! [`Count::scale_by`]. Element sizes are never inferred, the caller passes them in as a
//! [`ByteCount`].
//!
//! # Failure tiers
//!
//! 1. Unchecked preconditions (non power of two alignment, casts between element types
//!    of different widths, invalid shift amounts, retreating past the start, inexact
//!    rescales) are only `debug_assert!`ed.
//! 2. Invariant violations ([`Count::strict_sub`] underflow, [`Count::last_offset`] of
//!    zero, negating a count, [`Offset::as_count`] of a negative offset,
//!    [`Count::from_signed_native_size`] of `-1`) are fatal: they are logged via
//!    [`tracing`] and then panic. Each one has a `try_*` twin that returns a
//!    [`UnitsError`] instead.
//! 3. [`Count::saturating_sub`] (and the `-` operator on counts) never fails.
//!
//! # Example
//!
//! ```
//! use r3bl_units::{BoundsCheck, ByteCount, Count, Offset, byte_count, count, offset};
//!
//! // A buffer of 10 `u32` elements.
//! let length: Count<u32> = count(10);
//! let elem_size: ByteCount = byte_count(4);
//!
//! let cursor: Offset<u32> = offset(3);
//! assert!(!cursor.overflows(length));
//!
//! // How many elements are left, and how many bytes is that?
//! let remaining = length.as_offset() - cursor;
//! assert_eq!(remaining, count(7));
//! assert_eq!(remaining.scale_by(elem_size), byte_count(28));
//! assert_eq!(remaining.scale_by(elem_size).to_native_size(), 28);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod bounds_check;
pub mod count;
pub mod error;
pub mod file_size;
pub mod native_size;
pub mod offset;
mod unit_value_macros; // Don't re-export.

// Re-export.
pub use bounds_check::*;
pub use count::*;
pub use error::*;
pub use file_size::*;
pub use native_size::*;
pub use offset::*;
