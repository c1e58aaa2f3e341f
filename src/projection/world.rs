//! Cylindrical world-degree projection
//!
//! World space is unbounded but repeats every 360 degrees in x. Point
//! distances take the shorter way around the cylinder. Segment queries stay
//! planar: the query point (or second segment) is first moved to the copy
//! closest to the reference segment, then ordinary planar geometry applies.
//! Planar answers are an approximation; [`SpatialProjection`] is the
//! authority on geodesic distance.
//!
//! [`SpatialProjection`]: crate::projection::SpatialProjection

use crate::constants::{PLANAR_EPS, WORLD_WRAP};
use crate::coordinates::SphereVector;
use crate::geometry::{planar, Segment};
use crate::projection::body::BodyShape;
use crate::projection::coordinate::{fold_screen, CoordinateProjection};
use crate::projection::state::ProjectionState;
use nalgebra::Point2;

/// The copy of `x` (shifted by whole multiples of 360) nearest `reference`
pub fn nearest_copy(x: f64, reference: f64) -> f64 {
    x - ((x - reference) / WORLD_WRAP).round() * WORLD_WRAP
}

/// X distance around the cylinder, in [0, 180]
pub fn wrapped_dx(a: f64, b: f64) -> f64 {
    let dx = (a - b).rem_euclid(WORLD_WRAP);
    dx.min(WORLD_WRAP - dx)
}

#[derive(Debug, Clone, Copy)]
pub struct WorldProjection<'a, B> {
    state: &'a ProjectionState,
    body: &'a B,
}

impl<'a, B: BodyShape> WorldProjection<'a, B> {
    pub fn new(state: &'a ProjectionState, body: &'a B) -> Self {
        WorldProjection { state, body }
    }
}

/// `p` moved to the copy nearest the segment's midpoint
fn fold_near(seg: &Segment, p: &Point2<f64>) -> Point2<f64> {
    Point2::new(nearest_copy(p.x, seg.midpoint().x), p.y)
}

impl<B: BodyShape> CoordinateProjection for WorldProjection<'_, B> {
    fn to_screen(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(self.state.world_to_screen().apply(p))
    }

    fn to_screen_local(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        let screen = self.state.world_to_screen().apply(p);
        Some(fold_screen(self.state, &screen))
    }

    fn to_world(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(*p)
    }

    fn to_spatial(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(self.body.world_to_spatial(p))
    }

    fn from_sphere_vector(&self, v: &SphereVector) -> Option<Point2<f64>> {
        let spatial = v.to_spatial()?;
        Some(self.body.spatial_to_world(&spatial))
    }

    /// Euclidean with the x difference taken the short way around
    ///
    /// The distance from x = 1 to x = 359 is 2, not 358.
    fn distance_points(&self, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
        wrapped_dx(a.x, b.x).hypot(a.y - b.y)
    }

    fn distance_segment_to_point(&self, seg: &Segment, p: &Point2<f64>) -> f64 {
        if nalgebra::distance(&seg.start, &seg.end) < PLANAR_EPS {
            log::trace!("zero-length world segment, using point distance");
            return self.distance_points(&seg.start, p);
        }
        planar::line_distance(seg, &fold_near(seg, p))
    }

    fn hit_test(&self, a: &Segment, b: &Segment) -> bool {
        let shift = nearest_copy(b.midpoint().x, a.midpoint().x) - b.midpoint().x;
        planar::segments_intersect(a, &b.shifted_x(shift))
    }

    fn nearest_point_on_segment(
        &self,
        seg: &Segment,
        p: &Point2<f64>,
        max_dist: f64,
    ) -> Option<Point2<f64>> {
        planar::nearest_on_segment(seg, &fold_near(seg, p), max_dist)
    }
}
