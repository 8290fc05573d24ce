// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Strict, typed decoding from a parsed JSON tree.
//!
//! Every accessor either returns the expected shape or a [`DecodeError`]
//! carrying the path of the offending value. Nothing here falls back to a
//! default.

use crate::error::DecodeError;
use meshgrad_core::Vec2;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A type that can be decoded from a JSON value found at `path`.
pub(crate) trait FromJson: Sized {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError>;
}

/// Bridges a [`FromJson`] type into a `serde::Deserialize` implementation.
pub(crate) fn deserialize_with<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromJson,
{
    let value = Value::deserialize(deserializer)?;
    T::from_json(&value, "").map_err(de::Error::custom)
}

pub(crate) fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn mismatch(path: &str, expected: &'static str) -> DecodeError {
    DecodeError::TypeMismatch {
        field: path.to_string(),
        expected,
    }
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| mismatch(path, "an object"))
}

pub(crate) fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], DecodeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| mismatch(path, "an array"))
}

/// Borrows an array that must hold exactly `N` elements.
pub(crate) fn as_fixed_array<'a, const N: usize>(
    value: &'a Value,
    path: &str,
) -> Result<&'a [Value; N], DecodeError> {
    let items = as_array(value, path)?;
    items.try_into().map_err(|_| DecodeError::MalformedArray {
        field: path.to_string(),
        expected: N,
        actual: items.len(),
    })
}

/// Reads a number that must also fit a finite `f32`.
pub(crate) fn as_f32(value: &Value, path: &str) -> Result<f32, DecodeError> {
    let wide = value.as_f64().ok_or_else(|| mismatch(path, "a number"))?;
    let narrow = wide as f32;
    if narrow.is_finite() {
        Ok(narrow)
    } else {
        Err(mismatch(path, "a 32-bit float"))
    }
}

pub(crate) fn as_i64(value: &Value, path: &str) -> Result<i64, DecodeError> {
    value.as_i64().ok_or_else(|| mismatch(path, "an integer"))
}

pub(crate) fn as_bool(value: &Value, path: &str) -> Result<bool, DecodeError> {
    value.as_bool().ok_or_else(|| mismatch(path, "a boolean"))
}

pub(crate) fn as_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, DecodeError> {
    value.as_str().ok_or_else(|| mismatch(path, "a string"))
}

/// Looks up a required key of `object`.
pub(crate) fn required<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<&'a Value, DecodeError> {
    object.get(key).ok_or_else(|| DecodeError::MissingField {
        field: child_path(path, key),
    })
}

/// Decodes every element of an array with `T::from_json`.
pub(crate) fn sequence<T: FromJson>(value: &Value, path: &str) -> Result<Vec<T>, DecodeError> {
    as_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, item)| T::from_json(item, &index_path(path, i)))
        .collect()
}

/// Decodes a value whose format is owned by its own `serde` implementation.
pub(crate) fn opaque<T: DeserializeOwned>(
    value: &Value,
    path: &str,
    expected: &'static str,
) -> Result<T, DecodeError> {
    T::deserialize(value).map_err(|_| mismatch(path, expected))
}

impl FromJson for Vec2 {
    fn from_json(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let [x, y] = as_fixed_array::<2>(value, path)?;
        Ok(Vec2::new(
            as_f32(x, &index_path(path, 0))?,
            as_f32(y, &index_path(path, 1))?,
        ))
    }
}
