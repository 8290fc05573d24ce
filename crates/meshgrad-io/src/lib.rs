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

//! # Meshgrad IO
//!
//! File-level services around the gradient codec: strict load and save,
//! the fallback loader used by display code, codec configuration and logger
//! initialisation.

#![warn(missing_docs)]

mod config;
mod document;
mod error;
pub mod logging;

pub use config::CodecConfig;
pub use document::{
    load_gradient, load_mesh_gradient_or_fallback, save_gradient, save_mesh_gradient,
};
pub use error::IoError;
