//! Centralized camera configuration with TOML preset support.
//!
//! Projection parameters and motion caps are consolidated here. Options
//! serialize to/from TOML for view presets; all sub-structs use
//! `#[serde(default)]` so partial files (e.g. only overriding `[motion]`)
//! work correctly.

mod camera;
mod motion;

use std::path::Path;

pub use camera::CameraOptions;
use glam::Vec3;
pub use motion::MotionOptions;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::VantageError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Motion model caps.
    pub motion: MotionOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Apply these options to a camera: configure the perspective
    /// projection at the given viewport aspect ratio and install the
    /// motion caps.
    pub fn apply_to(&self, camera: &mut Camera, aspect: f32) {
        camera.set_perspective_projection(
            self.camera.field_of_view,
            aspect,
            self.camera.znear,
            self.camera.zfar,
        );
        camera.set_max_speed(Vec3::from_array(self.motion.max_speed));
        camera
            .set_max_acceleration(Vec3::from_array(self.motion.max_acceleration));
    }
}
