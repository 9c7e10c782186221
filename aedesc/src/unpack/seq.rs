use crate::desc::{AEKeyword, Descriptor, TYPE_NULL};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Applies `unpack_item` to every member of a List, failing on the first
/// member that fails. Any non-List descriptor counts as a one-element
/// sequence, the legacy rule that lets a single value stand in for a list
/// of one.
pub fn unpack_as_array<T, F>(desc: &Descriptor, unpack_item: F) -> Result<Vec<T>>
where
    F: Fn(&Descriptor) -> Result<T>,
{
    match desc {
        Descriptor::List { items } => items.iter().map(unpack_item).collect(),
        _ => Ok(vec![unpack_item(desc)?]),
    }
}

/// Applies `unpack_value` to every field of a Record, failing on the first
/// value that fails. There is no single-value fallback here; a non-Record
/// does not coerce.
pub fn unpack_as_mapping<T, F>(desc: &Descriptor, unpack_value: F) -> Result<HashMap<AEKeyword, T>>
where
    F: Fn(&Descriptor) -> Result<T>,
{
    match desc {
        Descriptor::Record { fields, .. } => fields
            .iter()
            .map(|(key, value)| Ok((*key, unpack_value(value)?)))
            .collect(),
        _ => Err(Error::UnsupportedCoercion {
            dtype: desc.type_tag(),
            target: "record",
        }),
    }
}

/// `Ok(None)` for the `null` and missing-value sentinels, otherwise
/// delegates to `unpack_some`. Composes with the other unpack functions for
/// optional parameters.
pub fn unpack_as_option<T, F>(desc: &Descriptor, unpack_some: F) -> Result<Option<T>>
where
    F: Fn(&Descriptor) -> Result<T>,
{
    if desc.type_tag() == TYPE_NULL || desc.is_missing_value() {
        Ok(None)
    } else {
        unpack_some(desc).map(Some)
    }
}
