//! Render settings file.
//!
//! A JSON document mirroring the camera configuration plus the output path.
//! Every field is optional; missing fields keep the defaults of the demo
//! render.

use crate::output::DEFAULT_OUTPUT_PATH;
use crate::{Camera, Point3, Vec3};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub aspect_ratio: f64,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vfov: f64,
    pub look_from: [f64; 3],
    pub look_at: [f64; 3],
    pub vup: [f64; 3],
    /// Lens aperture angle in degrees
    pub defocus_angle: f64,
    pub focus_dist: f64,
    /// Seed for the per-row render RNGs
    pub seed: Option<u64>,
    /// Seed for the random scene layout
    pub scene_seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 500,
            samples_per_pixel: 50,
            max_depth: 10,
            vfov: 20.0,
            look_from: [13.0, 2.0, 3.0],
            look_at: [0.0, 0.0, 0.0],
            vup: [0.0, 1.0, 0.0],
            defocus_angle: 0.6,
            focus_dist: 10.0,
            seed: None,
            scene_seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build a camera configured with these settings.
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new()
            .with_image(self.image_width, self.aspect_ratio)
            .with_quality(self.samples_per_pixel, self.max_depth)
            .with_position(
                Point3::from_array(self.look_from),
                Point3::from_array(self.look_at),
                Vec3::from_array(self.vup),
            )
            .with_lens(self.vfov, self.defocus_angle, self.focus_dist);
        camera.seed = self.seed;
        camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        let settings = RenderSettings::from_json("{}").unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.output, PathBuf::from("final_image.jpeg"));
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let settings = RenderSettings::from_json(
            r#"{ "image_width": 120, "look_from": [0, 1, 5], "seed": 9, "output": "out.png" }"#,
        )
        .unwrap();

        assert_eq!(settings.image_width, 120);
        assert_eq!(settings.look_from, [0.0, 1.0, 5.0]);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.output, PathBuf::from("out.png"));
        assert_eq!(settings.samples_per_pixel, 50);
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let err = RenderSettings::from_json(r#"{ "image_width": "wide" }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("bokeh_settings_does_not_exist.json");
        let settings = RenderSettings::load_or_default(&path).unwrap();
        assert_eq!(settings, RenderSettings::default());

        assert!(matches!(RenderSettings::load(&path), Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_camera_from_settings() {
        let settings = RenderSettings {
            image_width: 160,
            aspect_ratio: 2.0,
            samples_per_pixel: 3,
            seed: Some(5),
            ..RenderSettings::default()
        };
        let mut camera = settings.camera();
        camera.initialize();

        assert_eq!(camera.image_width, 160);
        assert_eq!(camera.image_height(), 80);
        assert_eq!(camera.samples_per_pixel, 3);
        assert_eq!(camera.seed, Some(5));
        assert_eq!(camera.center(), Point3::new(13.0, 2.0, 3.0));
    }
}
