//! Camera and input options with TOML file support.
//!
//! Every struct uses `#[serde(default)]`, so a partial file (e.g. only
//! overriding `[keybindings]`) fills the rest from defaults.

mod keybindings;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use keybindings::KeyBindings;

use crate::control::camera::fly::FlyCamera;
use crate::error::FlycamError;

/// Top-level options container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Initial camera state and control parameters.
    pub camera: CameraOptions,
    /// Projection parameters.
    pub projection: ProjectionOptions,
    /// Movement key bindings.
    pub keybindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Initial camera state and control parameters.
pub struct CameraOptions {
    pub position: [f32; 3],
    pub up: [f32; 3],
    /// Degrees. Together with `pitch` this sets the initial look direction.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// World units per second.
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub constrain_pitch: bool,
    /// Field of view change per scroll wheel line, in degrees.
    pub zoom_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            up: [0.0, 1.0, 0.0],
            yaw: FlyCamera::DEFAULT_YAW,
            pitch: FlyCamera::DEFAULT_PITCH,
            movement_speed: FlyCamera::DEFAULT_SPEED,
            mouse_sensitivity: FlyCamera::DEFAULT_SENSITIVITY,
            zoom: FlyCamera::DEFAULT_ZOOM,
            constrain_pitch: true,
            zoom_step: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Perspective projection parameters, the field of view comes from the camera.
pub struct ProjectionOptions {
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Options {
    pub fn from_toml_str(content: &str) -> Result<Self, FlycamError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        tracing::debug!("Options loaded from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::*;

    #[test]
    fn default_round_trips_through_a_file() {
        let path = std::env::temp_dir()
            .join(format!("flycam-options-{}", std::process::id()))
            .join("options.toml");

        let options = Options::default();
        options.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(options, loaded);

        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let options = Options::from_toml_str(
            r#"
[camera]
movement_speed = 10.0
position = [1.0, 2.0, 3.0]

[keybindings]
forward = "ArrowUp"
"#,
        )
        .unwrap();

        assert_eq!(options.camera.movement_speed, 10.0);
        assert_eq!(options.camera.position, [1.0, 2.0, 3.0]);
        assert_eq!(options.camera.zoom, 45.0);
        assert!(options.camera.constrain_pitch);
        assert_eq!(options.keybindings.forward, KeyCode::ArrowUp);
        assert_eq!(options.keybindings.backward, KeyCode::KeyS);
        assert_eq!(options.projection, ProjectionOptions::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let error = Options::from_toml_str("[camera]\nyaw = \"left\"").unwrap_err();
        assert!(matches!(error, FlycamError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = Options::load(Path::new("/nonexistent/flycam/options.toml")).unwrap_err();
        assert!(matches!(error, FlycamError::Io(_)));
    }
}
