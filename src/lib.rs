//! Planetproj: coordinate projections for wrapped planetary maps
//!
//! This crate reconciles the three coordinate spaces a planetary map viewer
//! works in: screen pixels, an unbounded cylindrical "world" space measured
//! in degrees, and spherical longitude/latitude ("spatial") coordinates on the
//! body surface. World space repeats every 360 degrees of longitude, so every
//! window and distance calculation here is wraparound-aware.

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod geometry;
pub mod projection;

// Re-export commonly used types
pub use config::ViewConfig;
pub use coordinates::SphereVector;
pub use geometry::{AffineTransform, Rect, Segment, WorldRegion};
pub use projection::{
    Body, BodyShape, CoordinateProjection, Equirectangular, Magnification, NullProjection,
    ObliqueCylindrical, ProjectionState, ProjectionView, ScreenProjection, SpatialProjection,
    ViewGeometry, Viewport, WorldProjection,
};

/// Main error type for the planetproj library
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Invalid magnification: {0} (pixels per degree must be positive)")]
    InvalidMagnification(i64),

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("View geometry has not been laid out yet")]
    NotLaidOut,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for planetproj operations
pub type Result<T> = std::result::Result<T, ProjectionError>;
