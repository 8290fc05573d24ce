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

use anyhow::Result;
use meshgrad_data::{
    BezierPoint, ColorSpace, DecodeError, GradientData, LinearRgba, Locations, Vec2,
};
use meshgrad_io::{
    load_gradient, load_mesh_gradient_or_fallback, logging, save_gradient, save_mesh_gradient,
    CodecConfig, IoError,
};
use meshgrad_render::{MeshGradient, MeshLocations};
use tempfile::tempdir;

fn bezier_gradient() -> GradientData {
    let node = |x: f32, y: f32| {
        BezierPoint::new(
            Vec2::new(x, y),
            Vec2::new(x - 0.1, y),
            Vec2::new(x, y - 0.1),
            Vec2::new(x + 0.1, y),
            Vec2::new(x, y + 0.1),
        )
    };
    GradientData::new(
        2,
        2,
        Locations::BezierPoints(vec![
            node(0.0, 0.0),
            node(1.0, 0.0),
            node(0.0, 1.0),
            node(1.0, 1.0),
        ]),
        vec![LinearRgba::RED, LinearRgba::GREEN, LinearRgba::BLUE, LinearRgba::WHITE],
        LinearRgba::BLACK,
        true,
        ColorSpace::Perceptual,
    )
}

#[test]
fn test_save_then_load() -> Result<()> {
    logging::init_logging("debug");
    let dir = tempdir()?;

    for pretty in [true, false] {
        let config = CodecConfig {
            pretty,
            validate_cardinality: true,
        };
        let path = dir.path().join(format!("mesh-{pretty}.json"));
        save_gradient(&path, &bezier_gradient(), &config)?;
        assert_eq!(load_gradient(&path, &config)?, bezier_gradient());
    }
    Ok(())
}

#[test]
fn test_strict_load_surfaces_decode_errors() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"width": 2, "height": 2}"#)?;

    let err = load_gradient(&path, &CodecConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        IoError::Decode(DecodeError::MissingField { ref field }) if field == "colors"
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_gradient(&missing, &CodecConfig::default()),
        Err(IoError::Io(_))
    ));
    Ok(())
}

#[test]
fn test_validation_is_opt_in() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("short.json");
    let mut data = bezier_gradient();
    data.colors.truncate(3);
    save_gradient(&path, &data, &CodecConfig::default())?;

    assert_eq!(load_gradient(&path, &CodecConfig::default())?, data);
    let strict = CodecConfig {
        validate_cardinality: true,
        ..CodecConfig::default()
    };
    assert!(matches!(
        load_gradient(&path, &strict),
        Err(IoError::Validation(_))
    ));
    Ok(())
}

#[test]
fn test_fallback_on_unreadable_document() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"width": 2, "height": 2, "colorSpace": "linear"}"#)?;

    assert_eq!(load_mesh_gradient_or_fallback(&path), MeshGradient::fallback());
    assert_eq!(
        load_mesh_gradient_or_fallback(dir.path().join("absent.json")),
        MeshGradient::fallback()
    );
    Ok(())
}

#[test]
fn test_fallback_loader_lifts_valid_documents() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("good.json");
    save_gradient(&path, &bezier_gradient(), &CodecConfig::default())?;

    let mesh = load_mesh_gradient_or_fallback(&path);
    assert_ne!(mesh, MeshGradient::fallback());
    assert_eq!(mesh.color_space, ColorSpace::Perceptual);
    match &mesh.locations {
        // The renderer anchors each node at the portable bottom control point.
        MeshLocations::BezierPoints(points) => {
            assert_eq!(points[3].position, Vec2::new(1.0, 1.0 + 0.1));
        }
        other => panic!("unexpected locations: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_save_mesh_gradient_uses_portable_form() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("fallback.json");
    save_mesh_gradient(&path, &MeshGradient::fallback(), &CodecConfig::default())?;

    let data = load_gradient(&path, &CodecConfig::default())?;
    assert_eq!((data.width, data.height), (2, 2));
    assert!(!data.uses_bezier_points());
    assert_eq!(data.colors, vec![LinearRgba::BLACK; 4]);

    let mut unsupported = MeshGradient::fallback();
    unsupported.color_space = ColorSpace::ExtendedLinear;
    assert!(matches!(
        save_mesh_gradient(&path, &unsupported, &CodecConfig::default()),
        Err(IoError::Encode(_))
    ));
    Ok(())
}
