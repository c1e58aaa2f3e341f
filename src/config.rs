//! Initial view configuration
//!
//! A viewer's starting position can be described in JSON:
//!
//! ```json
//! {
//!   "anchor": [180.0, 0.0],
//!   "ppd": 4,
//!   "width": 800,
//!   "height": 600,
//!   "oblique_center": [137.4, -4.6]
//! }
//! ```
//!
//! Every field is optional and falls back to [`ViewConfig::default`].

use crate::projection::{Magnification, ObliqueCylindrical, ProjectionState, Viewport};
use crate::{ProjectionError, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// World-coordinate view centre
    pub anchor: [f64; 2],
    /// Pixels per degree
    pub ppd: i64,
    pub width: u32,
    pub height: u32,
    /// Centre (east lon, lat) of an oblique cylindrical body shape, if used
    pub oblique_center: Option<[f64; 2]>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            anchor: [180.0, 0.0],
            ppd: 4,
            width: 800,
            height: 600,
            oblique_center: None,
        }
    }
}

impl ViewConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded view config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the configuration and builds the projection state
    ///
    /// # Errors
    ///
    /// Fails on non-positive magnification, an empty viewport, or a
    /// non-finite anchor.
    pub fn to_state(&self) -> Result<ProjectionState> {
        if !self.anchor.iter().all(|v| v.is_finite()) {
            return Err(ProjectionError::Config(format!(
                "anchor must be finite, got {:?}",
                self.anchor
            )));
        }
        let magnification = Magnification::new(self.ppd)?;
        let viewport = Viewport::new(self.width, self.height)?;
        Ok(ProjectionState::new(
            Point2::new(self.anchor[0], self.anchor[1]),
            magnification,
            viewport,
        ))
    }

    pub fn oblique_shape(&self) -> Option<ObliqueCylindrical> {
        self.oblique_center
            .map(|[lon, lat]| ObliqueCylindrical::new(lon, lat))
    }
}
