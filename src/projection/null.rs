//! Stand-in projection used before the view has been laid out

use crate::coordinates::SphereVector;
use crate::geometry::Segment;
use crate::projection::coordinate::CoordinateProjection;
use nalgebra::Point2;

/// Projection with no geometry behind it
///
/// Conversions and nearest-point queries return `None`, distances return
/// `0.0` and hit tests return `false`. [`CoordinateProjection::is_null`] is
/// true so callers can tell these answers apart from real ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullProjection;

impl CoordinateProjection for NullProjection {
    fn is_null(&self) -> bool {
        true
    }

    fn to_screen(&self, _p: &Point2<f64>) -> Option<Point2<f64>> {
        None
    }

    fn to_screen_local(&self, _p: &Point2<f64>) -> Option<Point2<f64>> {
        None
    }

    fn to_world(&self, _p: &Point2<f64>) -> Option<Point2<f64>> {
        None
    }

    fn to_spatial(&self, _p: &Point2<f64>) -> Option<Point2<f64>> {
        None
    }

    fn from_sphere_vector(&self, _v: &SphereVector) -> Option<Point2<f64>> {
        None
    }

    fn distance_points(&self, _a: &Point2<f64>, _b: &Point2<f64>) -> f64 {
        0.0
    }

    fn distance_segment_to_point(&self, _seg: &Segment, _p: &Point2<f64>) -> f64 {
        0.0
    }

    fn hit_test(&self, _a: &Segment, _b: &Segment) -> bool {
        false
    }

    fn nearest_point_on_segment(
        &self,
        _seg: &Segment,
        _p: &Point2<f64>,
        _max_dist: f64,
    ) -> Option<Point2<f64>> {
        None
    }
}
