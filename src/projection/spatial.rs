//! # Spatial Projection Module
//!
//! True great-circle geometry on the body surface. Points are east
//! longitude / latitude in degrees and every query is answered on the unit
//! sphere through [`SphereVector`], so results are the same no matter where
//! the 0/360 seam falls.
//!
//! ## Arc Membership
//!
//! A segment between `a1` and `a2` is the minor arc of the great circle
//! through them. A point `pt` on that great circle lies on the arc exactly
//! when it is at least as close to the bisector `a1 + a2` as the endpoints
//! are:
//!
//! ```text
//! (a1 + a2) · pt >= (a1 + a2) · a1
//! ```
//!
//! The same test drives segment distance, nearest-point and hit testing.
//!
//! ## Degenerate Segments
//!
//! Zero-length segments (and segments between antipodal points, whose great
//! circle is undefined) have no plane normal. They fall back to endpoint
//! distances rather than dividing by a zero-length normal.

use crate::constants::{ANGLE_EPS_DEG, RAD2DEG, SPHERE_EPS};
use crate::coordinates::SphereVector;
use crate::geometry::Segment;
use crate::projection::body::{Body, BodyShape};
use crate::projection::coordinate::{fold_screen, CoordinateProjection};
use crate::projection::state::ProjectionState;
use nalgebra::Point2;

/// Whether `pt` (on the great circle through `a1`, `a2`) lies on their minor arc
pub fn arc_contains(a1: &SphereVector, a2: &SphereVector, pt: &SphereVector) -> bool {
    let bisector = *a1 + *a2;
    bisector.dot(pt) >= bisector.dot(a1) - SPHERE_EPS
}

/// Unit normal of the arc's great circle, or `None` when it is undefined
fn arc_normal(a1: &SphereVector, a2: &SphereVector) -> Option<SphereVector> {
    let normal = a1.cross(a2).unit();
    if normal.is_none() {
        log::trace!("degenerate spatial segment, falling back to endpoints");
    }
    normal
}

fn nearest_endpoint(a1: &SphereVector, a2: &SphereVector, p: &SphereVector) -> (SphereVector, f64) {
    let d1 = a1.separation_degrees(p);
    let d2 = a2.separation_degrees(p);
    if d1 <= d2 {
        (*a1, d1)
    } else {
        (*a2, d2)
    }
}

/// Splits `p` into its offset from the arc's plane and its in-plane direction
///
/// Returns `(perpendicular_deg, foot)` where `foot` is the unit vector of
/// `p`'s projection onto the great circle. `foot` is `None` when `p` is a
/// pole of the circle and every point of it is equally near.
fn decompose(normal: &SphereVector, p: &SphereVector) -> (f64, Option<SphereVector>) {
    let along = p.dot(normal);
    let diff = *normal * along;
    let in_plane = *p - diff;
    let perpendicular = diff.norm().atan2(in_plane.norm()) * RAD2DEG;
    (perpendicular, in_plane.unit())
}

/// Angular distance in degrees from `p` to the minor arc `a1`-`a2`
pub fn arc_distance(a1: &SphereVector, a2: &SphereVector, p: &SphereVector) -> f64 {
    let Some(normal) = arc_normal(a1, a2) else {
        return nearest_endpoint(a1, a2, p).1;
    };

    match decompose(&normal, p) {
        (perpendicular, Some(foot)) if arc_contains(a1, a2, &foot) => perpendicular,
        _ => nearest_endpoint(a1, a2, p).1,
    }
}

/// Nearest point of the minor arc to `p`, if within `max_deg` and the arc's span
pub fn arc_nearest(
    a1: &SphereVector,
    a2: &SphereVector,
    p: &SphereVector,
    max_deg: f64,
) -> Option<SphereVector> {
    let Some(normal) = arc_normal(a1, a2) else {
        let (end, d) = nearest_endpoint(a1, a2, p);
        return (d <= max_deg).then_some(end);
    };

    let (perpendicular, foot) = decompose(&normal, p);
    let foot = foot?;
    if !arc_contains(a1, a2, &foot) || perpendicular > max_deg {
        return None;
    }
    Some(foot)
}

/// Whether the minor arcs `a1`-`a2` and `b1`-`b2` cross or touch
///
/// The two great circles meet at `±(aN × bN)`. Only a candidate lying on
/// both arcs counts, which rules out the false positives a sign-only test
/// gives once the arcs together span more than a hemisphere.
pub fn arcs_cross(
    a1: &SphereVector,
    a2: &SphereVector,
    b1: &SphereVector,
    b2: &SphereVector,
) -> bool {
    let on_arc = |s1: &SphereVector, s2: &SphereVector, p: &SphereVector| {
        arc_distance(s1, s2, p) <= ANGLE_EPS_DEG
    };

    let (a_normal, b_normal) = match (arc_normal(a1, a2), arc_normal(b1, b2)) {
        (Some(a), Some(b)) => (a, b),
        // A degenerate segment hits only if one of its endpoints lies on the other
        (None, _) => return on_arc(b1, b2, a1) || on_arc(b1, b2, a2),
        (_, None) => return on_arc(a1, a2, b1) || on_arc(a1, a2, b2),
    };

    match a_normal.cross(&b_normal).unit() {
        Some(candidate) => [candidate, -candidate]
            .iter()
            .any(|pt| arc_contains(a1, a2, pt) && arc_contains(b1, b2, pt)),
        // Same great circle: overlap iff an endpoint of one lies on the other
        None => {
            arc_contains(a1, a2, b1)
                || arc_contains(a1, a2, b2)
                || arc_contains(b1, b2, a1)
                || arc_contains(b1, b2, a2)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SpatialProjection<'a, B> {
    state: &'a ProjectionState,
    body: &'a B,
}

impl<'a, B: BodyShape> SpatialProjection<'a, B> {
    pub fn new(state: &'a ProjectionState, body: &'a B) -> Self {
        SpatialProjection { state, body }
    }

    /// Great-circle surface distance in kilometers on `planet`
    pub fn distance_km(&self, a: &Point2<f64>, b: &Point2<f64>, planet: Body) -> f64 {
        planet.arc_length_km(self.distance_points(a, b))
    }
}

fn vectors(seg: &Segment) -> (SphereVector, SphereVector) {
    (
        SphereVector::from_spatial(&seg.start),
        SphereVector::from_spatial(&seg.end),
    )
}

impl<B: BodyShape> CoordinateProjection for SpatialProjection<'_, B> {
    fn to_screen(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        let world = self.body.spatial_to_world(p);
        Some(self.state.world_to_screen().apply(&world))
    }

    fn to_screen_local(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        let screen = self.to_screen(p)?;
        Some(fold_screen(self.state, &screen))
    }

    fn to_world(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(self.body.spatial_to_world(p))
    }

    fn to_spatial(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(*p)
    }

    fn from_sphere_vector(&self, v: &SphereVector) -> Option<Point2<f64>> {
        v.to_spatial()
    }

    /// Great-circle separation in degrees
    fn distance_points(&self, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
        SphereVector::from_spatial(a).separation_degrees(&SphereVector::from_spatial(b))
    }

    fn distance_segment_to_point(&self, seg: &Segment, p: &Point2<f64>) -> f64 {
        let (a1, a2) = vectors(seg);
        arc_distance(&a1, &a2, &SphereVector::from_spatial(p))
    }

    fn hit_test(&self, a: &Segment, b: &Segment) -> bool {
        let (a1, a2) = vectors(a);
        let (b1, b2) = vectors(b);
        arcs_cross(&a1, &a2, &b1, &b2)
    }

    fn nearest_point_on_segment(
        &self,
        seg: &Segment,
        p: &Point2<f64>,
        max_dist: f64,
    ) -> Option<Point2<f64>> {
        let (a1, a2) = vectors(seg);
        let near = arc_nearest(&a1, &a2, &SphereVector::from_spatial(p), max_dist)?;
        self.from_sphere_vector(&near)
    }
}
