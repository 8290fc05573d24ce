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

//! Defines the error types of the gradient document codec.

use thiserror::Error;

/// An error raised while turning a document into a [`GradientData`](crate::GradientData).
///
/// `field` members hold the dotted path of the offending value inside the
/// document, e.g. `locations.bezierPoints[3]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not a well-formed JSON document.
    #[error("malformed document: {0}")]
    Syntax(String),
    /// A required key is absent.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Path of the missing key.
        field: String,
    },
    /// A value is present but has the wrong shape or type.
    #[error("type mismatch at `{field}`: expected {expected}")]
    TypeMismatch {
        /// Path of the offending value.
        field: String,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },
    /// A location or color-space tag is not part of the closed set.
    #[error("unknown variant `{tag}`")]
    UnknownVariant {
        /// The tag found in the document.
        tag: String,
    },
    /// A fixed-length array holds the wrong number of elements.
    #[error("malformed array at `{field}`: expected {expected} elements, found {actual}")]
    MalformedArray {
        /// Path of the array.
        field: String,
        /// Required element count.
        expected: usize,
        /// Element count found in the document.
        actual: usize,
    },
    /// A location set carries none of its variant keys.
    #[error("`{field}` must hold exactly one of `points` or `bezierPoints`, found none")]
    MissingVariant {
        /// Path of the location set.
        field: String,
    },
    /// A location set carries more than one key.
    #[error("`{field}` must hold exactly one of `points` or `bezierPoints`, found {tags:?}")]
    ConflictingVariants {
        /// Path of the location set.
        field: String,
        /// Every key found on the location set.
        tags: Vec<String>,
    },
}

/// An error raised while turning a [`GradientData`](crate::GradientData) into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value has no document representation, e.g. a color space outside
    /// the portable pair. This is a caller contract violation, not bad input.
    #[error("value has no portable representation: {0}")]
    UnsupportedValue(String),
    /// The underlying serializer failed.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// An error reported by [`GradientData::validate`](crate::GradientData::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A grid dimension is negative.
    #[error("grid dimensions must not be negative, got {width}x{height}")]
    NegativeDimension {
        /// Declared grid width.
        width: i64,
        /// Declared grid height.
        height: i64,
    },
    /// `width * height` does not fit in memory.
    #[error("grid of {width}x{height} nodes is too large")]
    TooLarge {
        /// Declared grid width.
        width: i64,
        /// Declared grid height.
        height: i64,
    },
    /// The location list does not hold one entry per grid node.
    #[error("expected {expected} locations, found {actual}")]
    LocationCount {
        /// `width * height`.
        expected: usize,
        /// Actual number of locations.
        actual: usize,
    },
    /// The color list does not hold one entry per grid node.
    #[error("expected {expected} colors, found {actual}")]
    ColorCount {
        /// `width * height`.
        expected: usize,
        /// Actual number of colors.
        actual: usize,
    },
}
