//! The operation surface shared by the screen, world and spatial projections
//!
//! Each projection interprets its input points in its own space:
//!
//! | Projection          | Point `x`            | Point `y`         |
//! |---------------------|----------------------|-------------------|
//! | [`ScreenProjection`]  | pixels, right        | pixels, down      |
//! | [`WorldProjection`]   | world-degrees        | world-degrees, up |
//! | [`SpatialProjection`] | east longitude (deg) | latitude (deg)    |
//!
//! Distances come back in the same units as the input space.
//!
//! [`ScreenProjection`]: crate::projection::ScreenProjection
//! [`WorldProjection`]: crate::projection::WorldProjection
//! [`SpatialProjection`]: crate::projection::SpatialProjection

use crate::coordinates::SphereVector;
use crate::geometry::Segment;
use crate::projection::null::NullProjection;
use crate::projection::state::ProjectionState;
use nalgebra::Point2;

pub trait CoordinateProjection {
    /// True only for [`NullProjection`]; its outputs are not geometry
    fn is_null(&self) -> bool {
        false
    }

    fn to_screen(&self, p: &Point2<f64>) -> Option<Point2<f64>>;

    /// Screen position folded into the copy of the map starting at the
    /// viewport's left edge
    fn to_screen_local(&self, p: &Point2<f64>) -> Option<Point2<f64>>;

    fn to_world(&self, p: &Point2<f64>) -> Option<Point2<f64>>;

    fn to_spatial(&self, p: &Point2<f64>) -> Option<Point2<f64>>;

    /// Expresses a sphere vector in this projection's space
    fn from_sphere_vector(&self, v: &SphereVector) -> Option<Point2<f64>>;

    fn distance_points(&self, a: &Point2<f64>, b: &Point2<f64>) -> f64;

    fn distance_segment_to_point(&self, seg: &Segment, p: &Point2<f64>) -> f64;

    /// Whether the two segments cross or touch
    fn hit_test(&self, a: &Segment, b: &Segment) -> bool;

    /// Nearest point of `seg` to `p`, if it lies within the segment's span
    /// and no farther than `max_dist`
    fn nearest_point_on_segment(
        &self,
        seg: &Segment,
        p: &Point2<f64>,
        max_dist: f64,
    ) -> Option<Point2<f64>>;
}

/// Folds a raw screen x into `[0, 360 * ppd)`
///
/// The same longitude appears at every multiple of `360 * ppd` pixels as the
/// map repeats; this picks the copy at or to the right of the viewport's
/// left edge.
pub(crate) fn fold_screen(state: &ProjectionState, p: &Point2<f64>) -> Point2<f64> {
    let wrap = state.wrap_pixels();
    Point2::new(p.x - (p.x / wrap).floor() * wrap, p.y)
}

/// Either a live projection or the null stand-in used before layout
///
/// Dispatch is static: a `ProjectionView<SpatialProjection<'_, B>>` calls
/// straight into the spatial implementation without a vtable.
#[derive(Debug, Clone, Copy)]
pub enum ProjectionView<P> {
    Null(NullProjection),
    Live(P),
}

impl<P> ProjectionView<P> {
    /// The live projection, if the view has geometry
    pub fn live(&self) -> Option<&P> {
        match self {
            ProjectionView::Null(_) => None,
            ProjectionView::Live(p) => Some(p),
        }
    }
}

macro_rules! dispatch {
    ($view:expr, $proj:ident => $call:expr) => {
        match $view {
            ProjectionView::Null($proj) => $call,
            ProjectionView::Live($proj) => $call,
        }
    };
}

impl<P: CoordinateProjection> CoordinateProjection for ProjectionView<P> {
    fn is_null(&self) -> bool {
        dispatch!(self, proj => proj.is_null())
    }

    fn to_screen(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        dispatch!(self, proj => proj.to_screen(p))
    }

    fn to_screen_local(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        dispatch!(self, proj => proj.to_screen_local(p))
    }

    fn to_world(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        dispatch!(self, proj => proj.to_world(p))
    }

    fn to_spatial(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        dispatch!(self, proj => proj.to_spatial(p))
    }

    fn from_sphere_vector(&self, v: &SphereVector) -> Option<Point2<f64>> {
        dispatch!(self, proj => proj.from_sphere_vector(v))
    }

    fn distance_points(&self, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
        dispatch!(self, proj => proj.distance_points(a, b))
    }

    fn distance_segment_to_point(&self, seg: &Segment, p: &Point2<f64>) -> f64 {
        dispatch!(self, proj => proj.distance_segment_to_point(seg, p))
    }

    fn hit_test(&self, a: &Segment, b: &Segment) -> bool {
        dispatch!(self, proj => proj.hit_test(a, b))
    }

    fn nearest_point_on_segment(
        &self,
        seg: &Segment,
        p: &Point2<f64>,
        max_dist: f64,
    ) -> Option<Point2<f64>> {
        dispatch!(self, proj => proj.nearest_point_on_segment(seg, p, max_dist))
    }
}
