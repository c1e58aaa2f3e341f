//! Pixel-space projection
//!
//! Screen space is linear and Euclidean. It is toroidal only in the sense
//! that the map repeats every `360 * ppd` pixels; by the time a caller works
//! in pixels a particular copy has already been chosen, so distances here
//! are not wraparound-aware.

use crate::coordinates::SphereVector;
use crate::geometry::{planar, Segment};
use crate::projection::body::BodyShape;
use crate::projection::coordinate::{fold_screen, CoordinateProjection};
use crate::projection::state::ProjectionState;
use nalgebra::Point2;

#[derive(Debug, Clone, Copy)]
pub struct ScreenProjection<'a, B> {
    state: &'a ProjectionState,
    body: &'a B,
}

impl<'a, B: BodyShape> ScreenProjection<'a, B> {
    pub fn new(state: &'a ProjectionState, body: &'a B) -> Self {
        ScreenProjection { state, body }
    }
}

impl<B: BodyShape> CoordinateProjection for ScreenProjection<'_, B> {
    fn to_screen(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(*p)
    }

    fn to_screen_local(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(fold_screen(self.state, p))
    }

    fn to_world(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        Some(self.state.screen_to_world().apply(p))
    }

    fn to_spatial(&self, p: &Point2<f64>) -> Option<Point2<f64>> {
        let world = self.state.screen_to_world().apply(p);
        Some(self.body.world_to_spatial(&world))
    }

    fn from_sphere_vector(&self, v: &SphereVector) -> Option<Point2<f64>> {
        let spatial = v.to_spatial()?;
        let world = self.body.spatial_to_world(&spatial);
        Some(self.state.world_to_screen().apply(&world))
    }

    fn distance_points(&self, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
        nalgebra::distance(a, b)
    }

    fn distance_segment_to_point(&self, seg: &Segment, p: &Point2<f64>) -> f64 {
        planar::line_distance(seg, p)
    }

    fn hit_test(&self, a: &Segment, b: &Segment) -> bool {
        planar::segments_intersect(a, b)
    }

    fn nearest_point_on_segment(
        &self,
        seg: &Segment,
        p: &Point2<f64>,
        max_dist: f64,
    ) -> Option<Point2<f64>> {
        planar::nearest_on_segment(seg, p, max_dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::body::Equirectangular;
    use crate::projection::state::{Magnification, Viewport};

    fn state() -> ProjectionState {
        ProjectionState::new(
            Point2::new(180.0, 0.0),
            Magnification::new(4).unwrap(),
            Viewport::new(800, 600).unwrap(),
        )
    }

    #[test]
    fn test_screen_local_folds_copies() {
        let s = state();
        let screen = ScreenProjection::new(&s, &Equirectangular);
        // One copy of the map is 1440 pixels wide at 4 ppd
        let p = screen.to_screen_local(&Point2::new(1500.0, 7.0)).unwrap();
        assert_eq!(p, Point2::new(60.0, 7.0));
        let p = screen.to_screen_local(&Point2::new(-100.0, 7.0)).unwrap();
        assert_eq!(p, Point2::new(1340.0, 7.0));
        let p = screen.to_screen_local(&Point2::new(-2880.0, 0.0)).unwrap();
        assert_eq!(p, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_screen_to_world_and_spatial() {
        let s = state();
        let screen = ScreenProjection::new(&s, &Equirectangular);
        let centre = Point2::new(400.0, 300.0);
        assert_eq!(screen.to_world(&centre), Some(Point2::new(180.0, 0.0)));
        assert_eq!(screen.to_spatial(&centre), Some(Point2::new(180.0, 0.0)));
        assert_eq!(screen.to_screen(&centre), Some(centre));
    }

    #[test]
    fn test_from_sphere_vector() {
        let s = state();
        let screen = ScreenProjection::new(&s, &Equirectangular);
        let v = SphereVector::from_lon_lat(80.0, 75.0);
        let p = screen.from_sphere_vector(&v).unwrap();
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_euclidean_distance_ignores_wrap() {
        let s = state();
        let screen = ScreenProjection::new(&s, &Equirectangular);
        let d = screen.distance_points(&Point2::new(0.0, 0.0), &Point2::new(1439.0, 0.0));
        assert_eq!(d, 1439.0);
    }

    #[test]
    fn test_segment_queries() {
        let s = state();
        let screen = ScreenProjection::new(&s, &Equirectangular);
        let seg = Segment::from_coords(0.0, 0.0, 100.0, 0.0);
        assert_eq!(
            screen.distance_segment_to_point(&seg, &Point2::new(50.0, 8.0)),
            8.0
        );
        assert_eq!(
            screen.nearest_point_on_segment(&seg, &Point2::new(50.0, 8.0), 10.0),
            Some(Point2::new(50.0, 0.0))
        );
        assert!(screen.hit_test(&seg, &Segment::from_coords(50.0, -5.0, 50.0, 5.0)));
    }
}
