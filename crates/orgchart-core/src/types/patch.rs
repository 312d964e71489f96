//! Helpers for partial-update payloads.
//!
//! A patch field of type `Option<Option<T>>` distinguishes "leave as is"
//! (`None`, key absent) from "clear" (`Some(None)`, explicit `null`) and
//! "set" (`Some(Some(v))`). Use [`double_option`] as the field's
//! `deserialize_with` together with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present key into `Some(..)`, keeping `null` as `Some(None)`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrite `target` when the patch carries a value.
pub fn apply<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}
