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

//! Adapter between the portable locations and the renderer's mesh types.
//!
//! The two models disagree on field meaning: the renderer's
//! [`MeshBezierPoint::position`] is the portable [`BezierPoint::bottom_control_point`].
//! This module is the only place that remapping happens.
//!
//! # Known non-invertibility
//!
//! [`lift_bezier_point`] writes the portable bottom control point into the
//! rich position, while [`lower_bezier_point`] copies the rich position back
//! into the portable position. Lifting then lowering therefore replaces the
//! original portable `position` with its `bottom_control_point`. Both
//! directions are kept exactly as they are; callers must not rely on a round
//! trip through the renderer types to preserve node positions.

use crate::gradient::GradientData;
use crate::locations::{BezierPoint, Locations};
use meshgrad_render::{MeshBezierPoint, MeshGradient, MeshLocations};
use thiserror::Error;

/// An error raised when renderer values cannot be lowered to the portable model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The renderer produced a location model with no portable counterpart.
    #[error("mesh location variant has no portable representation")]
    UnsupportedVariant,
}

/// Portable to renderer: the rich position is the portable bottom control point.
pub fn lift_bezier_point(point: &BezierPoint) -> MeshBezierPoint {
    MeshBezierPoint::new(
        point.bottom_control_point,
        point.leading_control_point,
        point.top_control_point,
        point.trailing_control_point,
        point.bottom_control_point,
    )
}

/// Renderer to portable: every field is copied by name.
pub fn lower_bezier_point(point: &MeshBezierPoint) -> BezierPoint {
    BezierPoint::new(
        point.position,
        point.leading_control_point,
        point.top_control_point,
        point.trailing_control_point,
        point.bottom_control_point,
    )
}

/// Lifts portable locations to the renderer's location model.
pub fn lift_locations(locations: &Locations) -> MeshLocations {
    match locations {
        Locations::Points(points) => MeshLocations::Points(points.clone()),
        Locations::BezierPoints(points) => {
            MeshLocations::BezierPoints(points.iter().map(lift_bezier_point).collect())
        }
    }
}

/// Lowers the renderer's location model to portable locations.
///
/// [`MeshLocations`] is `#[non_exhaustive]`, so a variant added by the renderer
/// crate after this one was written reaches the wildcard arm and is reported as
/// [`AdapterError::UnsupportedVariant`]. Every variant known today lowers
/// successfully.
pub fn lower_locations(locations: &MeshLocations) -> Result<Locations, AdapterError> {
    match locations {
        MeshLocations::Points(points) => Ok(Locations::Points(points.clone())),
        MeshLocations::BezierPoints(points) => Ok(Locations::BezierPoints(
            points.iter().map(lower_bezier_point).collect(),
        )),
        _ => {
            log::error!("Cannot lower an unknown mesh location variant");
            Err(AdapterError::UnsupportedVariant)
        }
    }
}

impl GradientData {
    /// Builds portable data from a renderer mesh.
    pub fn from_mesh_gradient(mesh: &MeshGradient) -> Result<Self, AdapterError> {
        Ok(Self {
            width: mesh.width,
            height: mesh.height,
            locations: lower_locations(&mesh.locations)?,
            colors: mesh.colors.clone(),
            background: mesh.background,
            smooths_colors: mesh.smooths_colors,
            color_space: mesh.color_space,
        })
    }

    /// The locations in the renderer's model.
    pub fn mesh_locations(&self) -> MeshLocations {
        lift_locations(&self.locations)
    }

    /// Builds the renderer mesh described by this data.
    pub fn to_mesh_gradient(&self) -> MeshGradient {
        MeshGradient::new(
            self.width,
            self.height,
            self.mesh_locations(),
            self.colors.clone(),
            self.background,
            self.smooths_colors,
            self.color_space,
        )
    }
}
