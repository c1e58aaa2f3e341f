//! View geometry before and after first layout
//!
//! A viewer has no projection until its surface has been laid out and the
//! viewport size is known. `ViewGeometry` models that single transition and
//! hands out projections that degrade to [`NullProjection`] while pending,
//! so call sites never need a separate readiness branch.

use crate::geometry::{Rect, WorldRegion};
use crate::projection::body::BodyShape;
use crate::projection::coordinate::ProjectionView;
use crate::projection::null::NullProjection;
use crate::projection::screen::ScreenProjection;
use crate::projection::spatial::SpatialProjection;
use crate::projection::state::{Magnification, ProjectionState, Viewport};
use crate::projection::world::WorldProjection;
use crate::{ProjectionError, Result};
use nalgebra::Point2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ViewGeometry {
    /// Not laid out yet; every projection is null
    #[default]
    Pending,
    Ready(ProjectionState),
}

impl ViewGeometry {
    /// Performs the first layout, or resizes an already laid out view
    ///
    /// On the first call the anchor and magnification become the initial
    /// view. Later calls only change the viewport, keeping pan and zoom.
    pub fn lay_out(
        &mut self,
        anchor: Point2<f64>,
        magnification: Magnification,
        viewport: Viewport,
    ) {
        match self {
            ViewGeometry::Pending => {
                log::debug!(
                    "laid out {}x{} at {} ppd",
                    viewport.width,
                    viewport.height,
                    magnification.ppd()
                );
                *self = ViewGeometry::Ready(ProjectionState::new(anchor, magnification, viewport));
            }
            ViewGeometry::Ready(state) => state.resize(viewport),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewGeometry::Ready(_))
    }

    pub fn state(&self) -> Option<&ProjectionState> {
        match self {
            ViewGeometry::Pending => None,
            ViewGeometry::Ready(state) => Some(state),
        }
    }

    /// Mutable access for pan and zoom
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::NotLaidOut`] before the first layout.
    pub fn state_mut(&mut self) -> Result<&mut ProjectionState> {
        match self {
            ViewGeometry::Pending => Err(ProjectionError::NotLaidOut),
            ViewGeometry::Ready(state) => Ok(state),
        }
    }

    /// Copy of the current state for use on another thread
    pub fn snapshot(&self) -> Option<ProjectionState> {
        self.state().copied()
    }

    pub fn screen_window(&self) -> Option<Rect> {
        self.state().map(ProjectionState::screen_window)
    }

    pub fn world_window(&self) -> Option<Rect> {
        self.state().map(ProjectionState::world_window)
    }

    pub fn world_window_mod(&self) -> Option<WorldRegion> {
        self.state().map(ProjectionState::world_window_mod)
    }

    pub fn screen<'a, B: BodyShape>(&'a self, body: &'a B) -> ProjectionView<ScreenProjection<'a, B>> {
        match self {
            ViewGeometry::Pending => ProjectionView::Null(NullProjection),
            ViewGeometry::Ready(state) => ProjectionView::Live(ScreenProjection::new(state, body)),
        }
    }

    pub fn world<'a, B: BodyShape>(&'a self, body: &'a B) -> ProjectionView<WorldProjection<'a, B>> {
        match self {
            ViewGeometry::Pending => ProjectionView::Null(NullProjection),
            ViewGeometry::Ready(state) => ProjectionView::Live(WorldProjection::new(state, body)),
        }
    }

    pub fn spatial<'a, B: BodyShape>(
        &'a self,
        body: &'a B,
    ) -> ProjectionView<SpatialProjection<'a, B>> {
        match self {
            ViewGeometry::Pending => ProjectionView::Null(NullProjection),
            ViewGeometry::Ready(state) => ProjectionView::Live(SpatialProjection::new(state, body)),
        }
    }
}
