// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fs::Metadata;

use serde::{Deserialize, Serialize};

/// Size of a whole file in bytes.
///
/// This is not a [`crate::Count`]: a file on disk isn't tied to any in-memory element
/// type. It only supports equality and ordering, there is no arithmetic.
///
/// ```
/// use r3bl_units::{FileSize, file_size};
///
/// assert!(file_size(10) < file_size(20));
/// assert_eq!(FileSize::from(10_u64), file_size(10));
/// ```
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct FileSize(u64);

#[must_use]
pub const fn file_size(arg_bytes: u64) -> FileSize { FileSize::new(arg_bytes) }

impl FileSize {
    #[must_use]
    pub const fn new(bytes: u64) -> Self { Self(bytes) }

    #[must_use]
    pub const fn as_u64(self) -> u64 { self.0 }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self { Self(bytes) }
}

impl From<FileSize> for u64 {
    fn from(it: FileSize) -> Self { it.0 }
}

/// Reads the size that is already cached in the metadata, no I/O happens here.
impl From<&Metadata> for FileSize {
    fn from(metadata: &Metadata) -> Self { Self(metadata.len()) }
}
