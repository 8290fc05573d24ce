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

//! Reading and writing gradient documents on disk.
//!
//! [`load_gradient`] and [`save_gradient`] are strict and surface every
//! failure. [`load_mesh_gradient_or_fallback`] is a convenience for display
//! code that would rather draw something than handle an error: it degrades to
//! [`MeshGradient::fallback`] and only logs what went wrong.

use crate::config::CodecConfig;
use crate::error::IoError;
use meshgrad_data::{codec, GradientData};
use meshgrad_render::MeshGradient;
use std::path::Path;

/// Reads and decodes a gradient document.
pub fn load_gradient(
    path: impl AsRef<Path>,
    config: &CodecConfig,
) -> Result<GradientData, IoError> {
    let path = path.as_ref();
    log::debug!("Loading gradient document '{}'", path.display());

    let bytes = std::fs::read(path)?;
    let data = codec::from_slice(&bytes)?;
    if config.validate_cardinality {
        data.validate()?;
    }
    Ok(data)
}

/// Encodes and writes a gradient document.
pub fn save_gradient(
    path: impl AsRef<Path>,
    data: &GradientData,
    config: &CodecConfig,
) -> Result<(), IoError> {
    let path = path.as_ref();
    let bytes = if config.pretty {
        codec::to_vec_pretty(data)?
    } else {
        codec::to_vec(data)?
    };
    std::fs::write(path, bytes)?;
    log::debug!("Saved gradient document '{}'", path.display());
    Ok(())
}

/// Writes the portable form of a renderer mesh.
pub fn save_mesh_gradient(
    path: impl AsRef<Path>,
    mesh: &MeshGradient,
    config: &CodecConfig,
) -> Result<(), IoError> {
    let data = GradientData::from_mesh_gradient(mesh)?;
    save_gradient(path, &data, config)
}

/// Loads a renderer mesh, or the 2x2 black fallback mesh if anything fails.
///
/// The error is logged at `warn` level and otherwise discarded. Use
/// [`load_gradient`] to observe it.
pub fn load_mesh_gradient_or_fallback(path: impl AsRef<Path>) -> MeshGradient {
    let path = path.as_ref();
    match load_gradient(path, &CodecConfig::default()) {
        Ok(data) => data.to_mesh_gradient(),
        Err(e) => {
            log::warn!(
                "Failed to load gradient '{}', using fallback mesh: {e}",
                path.display()
            );
            MeshGradient::fallback()
        }
    }
}
