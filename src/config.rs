// src/config.rs
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_SETTINGS_FILE: &str = "cvpress.yaml";

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn uniform(all: f64) -> Self {
        Self {
            top: all,
            right: all,
            bottom: all,
            left: all,
        }
    }

    pub const fn vh(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Font and page geometry settings, passed explicitly into the renderer.
/// Nothing here is process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub font_dir: PathBuf,
    pub font_family: String,
    pub resume_margins: Margins,
    pub letter_margins: Margins,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("fonts"),
            font_family: "Inter".to_string(),
            // Resume pages run tight margins to stay within two pages.
            resume_margins: Margins::vh(2.5, 5.0),
            // Cover letters use a conventional one-inch frame.
            letter_margins: Margins::uniform(25.4),
        }
    }
}

impl RenderSettings {
    /// Load settings from a YAML file. An explicitly given path must exist;
    /// the default `cvpress.yaml` is optional and falls back to built-ins.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(Error::not_found(path));
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|source| Error::io(format!("failed to read {}", path.display()), source))?;
        let settings: Self = serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.clone(),
            source,
        })?;

        info!("loaded render settings from {}", path.display());
        Ok(settings)
    }
}
