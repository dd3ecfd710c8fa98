// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Generates the value-type trait implementations for a unit-tagged wrapper.
///
/// `#[derive(...)]` can't be used on [`Count`] and [`Offset`] because it would require
/// the element tag `E` to implement every derived trait as well (eg: `Offset<MyGlyph>`
/// would only be `Copy` if `MyGlyph: Copy`). The tag is only a [`PhantomData`] marker,
/// so these implementations only look at the raw value.
///
/// # Parameters
/// - `$type`: The generic struct that receives the implementations (e.g., `Count`,
///   `Offset`). It must have a `raw: RawUnit` field and a `_unit: PhantomData<..>` field,
///   and a `const fn from_raw(RawUnit) -> Self` constructor.
/// - `$debug_name`: The name printed by the [`Debug`] implementation.
///
/// # Generated Implementations
/// - [`Clone`], [`Copy`]
/// - [`PartialEq`], [`Eq`], [`PartialOrd`], [`Ord`], [`Hash`]
/// - [`Default`] (raw value of 0)
/// - [`Debug`] as `$debug_name(raw)`, [`Display`] as the raw value
/// - [`serde::Serialize`] as a plain integer
///
/// [`Count`]: crate::Count
/// [`Offset`]: crate::Offset
/// [`PhantomData`]: std::marker::PhantomData
/// [`Debug`]: std::fmt::Debug
/// [`Display`]: std::fmt::Display
macro_rules! impl_unit_value_traits {
    ($type:ident, $debug_name:literal) => {
        impl<E> Clone for $type<E> {
            fn clone(&self) -> Self { *self }
        }

        impl<E> Copy for $type<E> {}

        impl<E> PartialEq for $type<E> {
            fn eq(&self, other: &Self) -> bool { self.raw == other.raw }
        }

        impl<E> Eq for $type<E> {}

        impl<E> PartialOrd for $type<E> {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<E> Ord for $type<E> {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.raw.cmp(&other.raw) }
        }

        impl<E> std::hash::Hash for $type<E> {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.raw, state);
            }
        }

        impl<E> Default for $type<E> {
            fn default() -> Self { Self::from_raw(0) }
        }

        impl<E> std::fmt::Debug for $type<E> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($debug_name, "({:?})"), self.raw)
            }
        }

        impl<E> std::fmt::Display for $type<E> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.raw)
            }
        }

        impl<E> serde::Serialize for $type<E> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.raw)
            }
        }
    };
}

pub(crate) use impl_unit_value_traits;
