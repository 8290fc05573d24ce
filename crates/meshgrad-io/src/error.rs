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

use meshgrad_data::epoch::AdapterError;
use meshgrad_data::{DecodeError, EncodeError, ValidationError};
use thiserror::Error;

/// An error raised while reading or writing a gradient document on disk.
#[derive(Debug, Error)]
pub enum IoError {
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file content is not a valid gradient document.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The gradient could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// The document decoded but failed the cardinality check.
    #[error("invalid gradient: {0}")]
    Validation(#[from] ValidationError),
    /// A renderer mesh could not be converted to a document.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}
