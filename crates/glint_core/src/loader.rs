//! Scene file loading.
//!
//! Scenes are plain JSON deserialized straight into the `scene` types and
//! validated before they are handed to a renderer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::SceneError;
use crate::scene::Scene;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene from a JSON file.
///
/// A scene with no name takes its name from the file stem.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<Scene> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mut scene = parse_scene(&text)?;

    if scene.name.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            scene.name = stem.to_string();
        }
    }

    log::info!(
        "Loaded scene '{}': {} objects, {} lights, depth {}",
        scene.name,
        scene.object_count(),
        scene.light_count(),
        scene.settings.recursion_depth
    );

    Ok(scene)
}

/// Load and validate a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    parse_scene(text)
}

fn parse_scene(text: &str) -> LoadResult<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    const MINIMAL: &str = r#"{
        "name": "minimal",
        "camera": { "position": [0.0, 0.0, 5.0] },
        "settings": { "ambient_color": [0.1, 0.1, 0.1], "recursion_depth": 3 },
        "lights": [
            { "position": [0.0, 4.0, 0.0], "color": [1.0, 1.0, 1.0], "energy": 100.0 }
        ],
        "objects": [
            {
                "shape": { "type": "sphere", "center": [0.0, 0.0, 0.0], "radius": 1.0 },
                "material": { "name": "ball", "diffuse_color": [0.8, 0.2, 0.2] }
            },
            {
                "shape": { "type": "plane", "point": [0.0, -1.0, 0.0], "normal": [0.0, 1.0, 0.0] }
            }
        ]
    }"#;

    #[test]
    fn test_load_minimal_scene() {
        let scene = load_scene_from_str(MINIMAL).unwrap();

        assert_eq!(scene.name, "minimal");
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.settings.recursion_depth, 3);
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, 5.0));

        // Omitted material fields take defaults
        assert_eq!(scene.objects[0].material.transmission, 0.0);
        assert!(!scene.objects[0].material.use_fresnel);
    }

    #[test]
    fn test_load_rejects_invalid_material() {
        let text = r#"{
            "objects": [
                {
                    "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1.0 },
                    "material": { "name": "broken", "ior": -1.0 }
                }
            ]
        }"#;

        assert!(matches!(
            load_scene_from_str(text),
            Err(LoadError::Scene(SceneError::Material { .. }))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        assert!(matches!(
            load_scene_from_str("{ not json"),
            Err(LoadError::Json(_))
        ));
    }
}
