//! # Projection State Module
//!
//! The minimal mutable state behind every transform: the anchor point the
//! view is centred on, the magnification, and the viewport size. Everything
//! else (world window, affine transforms, wrapped regions) is derived from
//! these three fields on demand and never cached.
//!
//! ## Pixel Snapping
//!
//! The world window's origin is floored to an exact multiple of the pixel
//! size on both axes. Successive redraws at the same magnification then
//! land on the same pixel grid, so tiles drawn in different frames abut
//! without one-pixel seams.
//!
//! ## Snapshots
//!
//! `ProjectionState` is `Copy`. A background worker that needs geometry must
//! take a copy of the whole state in one step; reading the fields piecemeal
//! while the viewer pans can pair a new magnification with a stale anchor.

use crate::constants::WORLD_WRAP;
use crate::geometry::{AffineTransform, Rect, WorldRegion};
use crate::projection::wrap::world_window_mod;
use crate::{ProjectionError, Result};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Pixels per world-degree
///
/// Always positive; in practice a power of two so that the pixel size
/// `1/ppd` is exactly representable and window snapping is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Magnification(u32);

impl Magnification {
    /// Validates a pixels-per-degree value
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidMagnification`] for zero, negative
    /// values, or values that do not fit a `u32`.
    pub fn new(ppd: i64) -> Result<Self> {
        if ppd <= 0 || ppd > u32::MAX as i64 {
            log::warn!("rejecting magnification {}", ppd);
            return Err(ProjectionError::InvalidMagnification(ppd));
        }
        Ok(Magnification(ppd as u32))
    }

    pub fn ppd(&self) -> u32 {
        self.0
    }

    /// `round(log2(ppd))`, the zoom level used in tile and cache keys
    pub fn ppd_log2(&self) -> i32 {
        (self.0 as f64).log2().round() as i32
    }

    /// Size of one pixel in world-degrees
    pub fn pixel_size(&self) -> f64 {
        1.0 / self.0 as f64
    }
}

impl TryFrom<i64> for Magnification {
    type Error = ProjectionError;

    fn try_from(ppd: i64) -> Result<Self> {
        Magnification::new(ppd)
    }
}

impl From<Magnification> for u32 {
    fn from(m: Magnification) -> u32 {
        m.0
    }
}

/// Size in pixels of the rendering surface, insets excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidViewport`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            log::warn!("rejecting viewport {}x{}", width, height);
            return Err(ProjectionError::InvalidViewport { width, height });
        }
        Ok(Viewport { width, height })
    }

    pub fn size(&self) -> Vector2<f64> {
        Vector2::new(self.width as f64, self.height as f64)
    }
}

/// Anchor, magnification and viewport: the inputs to every transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    anchor: Point2<f64>,
    magnification: Magnification,
    viewport: Viewport,
}

impl ProjectionState {
    pub fn new(anchor: Point2<f64>, magnification: Magnification, viewport: Viewport) -> Self {
        ProjectionState {
            anchor,
            magnification,
            viewport,
        }
    }

    /// World-coordinate centre of the view
    pub fn anchor(&self) -> Point2<f64> {
        self.anchor
    }

    pub fn magnification(&self) -> Magnification {
        self.magnification
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn ppd(&self) -> u32 {
        self.magnification.ppd()
    }

    pub fn ppd_log2(&self) -> i32 {
        self.magnification.ppd_log2()
    }

    pub fn pixel_size(&self) -> f64 {
        self.magnification.pixel_size()
    }

    /// Width of one full copy of world space, in screen pixels
    pub fn wrap_pixels(&self) -> f64 {
        WORLD_WRAP * self.ppd() as f64
    }

    /// Centres the view on a world point
    pub fn pan_to(&mut self, anchor: Point2<f64>) {
        log::debug!("pan to ({}, {})", anchor.x, anchor.y);
        self.anchor = anchor;
    }

    /// Moves the view by whole screen pixels (positive `dy` moves down)
    pub fn pan_by_pixels(&mut self, dx: i32, dy: i32) {
        let ps = self.pixel_size();
        let anchor = Point2::new(
            self.anchor.x + dx as f64 * ps,
            self.anchor.y - dy as f64 * ps,
        );
        self.pan_to(anchor);
    }

    /// Changes magnification, keeping the anchor
    pub fn zoom_to(&mut self, magnification: Magnification) {
        log::debug!(
            "zoom {} -> {} ppd",
            self.magnification.ppd(),
            magnification.ppd()
        );
        self.magnification = magnification;
    }

    /// Doubles the magnification
    pub fn zoom_in(&mut self) {
        let ppd = self.ppd().saturating_mul(2);
        self.zoom_to(Magnification(ppd));
    }

    /// Halves the magnification, never going below 1 ppd
    pub fn zoom_out(&mut self) {
        let ppd = (self.ppd() / 2).max(1);
        self.zoom_to(Magnification(ppd));
    }

    pub fn resize(&mut self, viewport: Viewport) {
        log::debug!("resize to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    /// Viewport rectangle in pixel space, `(0, 0, width, height)`
    pub fn screen_window(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        )
    }

    /// Visible world rectangle with its origin snapped to the pixel grid
    ///
    /// The size is `viewport * pixel_size`; the origin is `anchor - size/2`
    /// floored to a multiple of the pixel size on each axis.
    pub fn world_window(&self) -> Rect {
        let ppd = self.ppd() as f64;
        let ps = self.pixel_size();
        let size = self.viewport.size() * ps;

        let x = ((self.anchor.x - size.x / 2.0) * ppd).floor() / ppd;
        let y = ((self.anchor.y - size.y / 2.0) * ppd).floor() / ppd;

        Rect::new(x, y, size.x, size.y)
    }

    /// The world window folded into the canonical [0, 360) copy
    pub fn world_window_mod(&self) -> WorldRegion {
        world_window_mod(&self.world_window())
    }

    /// Pixel space to world-degree space, including the vertical flip
    pub fn screen_to_world(&self) -> AffineTransform {
        let window = self.world_window();
        let ps = self.pixel_size();
        AffineTransform::scale_translate(ps, -ps, window.min_x(), window.max_y())
    }

    /// World-degree space to pixel space, including the vertical flip
    pub fn world_to_screen(&self) -> AffineTransform {
        let window = self.world_window();
        let ppd = self.ppd() as f64;
        AffineTransform::scale_translate(
            ppd,
            -ppd,
            -window.min_x() * ppd,
            window.max_y() * ppd,
        )
    }
}
