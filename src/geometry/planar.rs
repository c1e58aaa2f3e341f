//! Planar segment math used by the screen and world projections
//!
//! Segment-to-point distance here is the perpendicular distance to the
//! segment's supporting line: the offset of `p - start` along the unit
//! normal of the segment. Zero-length segments have no normal and fall back
//! to plain point distance.

use crate::constants::PLANAR_EPS;
use crate::geometry::Segment;
use nalgebra::{Point2, Vector2};

/// Unit normal of the segment direction, or `None` for a zero-length segment
fn unit_normal(seg: &Segment) -> Option<Vector2<f64>> {
    let d = seg.end - seg.start;
    let len = d.norm();
    if len < PLANAR_EPS {
        None
    } else {
        Some(Vector2::new(-d.y, d.x) / len)
    }
}

/// Perpendicular distance from `p` to the line through `seg`
pub fn line_distance(seg: &Segment, p: &Point2<f64>) -> f64 {
    match unit_normal(seg) {
        Some(normal) => (p - seg.start).dot(&normal).abs(),
        None => {
            log::trace!("zero-length segment, using point distance");
            nalgebra::distance(&seg.start, p)
        }
    }
}

/// Foot of the perpendicular from `p` onto the line through `seg`, with its
/// parameter along the segment (`0` at start, `1` at end)
pub fn project_onto_line(seg: &Segment, p: &Point2<f64>) -> Option<(Point2<f64>, f64)> {
    let d = seg.end - seg.start;
    let len_sq = d.norm_squared();
    if len_sq < PLANAR_EPS * PLANAR_EPS {
        return None;
    }
    let t = (p - seg.start).dot(&d) / len_sq;
    Some((seg.start + d * t, t))
}

/// Nearest point on the segment within `max_dist`, or `None`
///
/// The perpendicular foot must land within the segment's span; a point
/// whose nearest approach is beyond either end does not match. A
/// zero-length segment matches at its start point.
pub fn nearest_on_segment(seg: &Segment, p: &Point2<f64>, max_dist: f64) -> Option<Point2<f64>> {
    match project_onto_line(seg, p) {
        Some((foot, t)) => {
            if !(0.0..=1.0).contains(&t) {
                return None;
            }
            (nalgebra::distance(&foot, p) <= max_dist).then_some(foot)
        }
        None => (nalgebra::distance(&seg.start, p) <= max_dist).then_some(seg.start),
    }
}

/// Sign of the turn `a -> b -> c`: positive counter-clockwise, zero collinear
fn orientation(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    let cross = (b - a).perp(&(c - a));
    if cross.abs() < PLANAR_EPS {
        0.0
    } else {
        cross
    }
}

/// Whether collinear point `p` lies within the bounding box of `seg`
fn within_span(seg: &Segment, p: &Point2<f64>) -> bool {
    p.x >= seg.start.x.min(seg.end.x) - PLANAR_EPS
        && p.x <= seg.start.x.max(seg.end.x) + PLANAR_EPS
        && p.y >= seg.start.y.min(seg.end.y) - PLANAR_EPS
        && p.y <= seg.start.y.max(seg.end.y) + PLANAR_EPS
}

/// Whether two closed segments share at least one point
///
/// Touching endpoints and collinear overlap count as intersections.
/// Degenerate (zero-length) segments act as points.
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    let o1 = orientation(&a.start, &a.end, &b.start);
    let o2 = orientation(&a.start, &a.end, &b.end);
    let o3 = orientation(&b.start, &b.end, &a.start);
    let o4 = orientation(&b.start, &b.end, &a.end);

    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }

    (o1 == 0.0 && within_span(a, &b.start))
        || (o2 == 0.0 && within_span(a, &b.end))
        || (o3 == 0.0 && within_span(b, &a.start))
        || (o4 == 0.0 && within_span(b, &a.end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_distance() {
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(line_distance(&seg, &Point2::new(5.0, 3.0)), 3.0);
        assert_eq!(line_distance(&seg, &Point2::new(5.0, -4.0)), 4.0);
        // Supporting line, not the clamped segment
        assert_eq!(line_distance(&seg, &Point2::new(50.0, 2.0)), 2.0);
    }

    #[test]
    fn test_line_distance_zero_length_falls_back() {
        let seg = Segment::from_coords(1.0, 1.0, 1.0, 1.0);
        assert_eq!(line_distance(&seg, &Point2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn test_nearest_on_segment() {
        let seg = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        let near = nearest_on_segment(&seg, &Point2::new(6.0, 4.0), 2.0).unwrap();
        assert!((near.x - 5.0).abs() < 1e-12);
        assert!((near.y - 5.0).abs() < 1e-12);

        assert!(nearest_on_segment(&seg, &Point2::new(6.0, 4.0), 1.0).is_none());
        assert!(nearest_on_segment(&seg, &Point2::new(12.0, 12.0), 5.0).is_none());
    }

    #[test]
    fn test_segments_intersect() {
        let a = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Segment::from_coords(0.0, 10.0, 10.0, 0.0);
        assert!(segments_intersect(&a, &b));

        let c = Segment::from_coords(20.0, 0.0, 30.0, 10.0);
        assert!(!segments_intersect(&a, &c));

        // Touching at an endpoint
        let d = Segment::from_coords(10.0, 10.0, 20.0, 0.0);
        assert!(segments_intersect(&a, &d));

        // Collinear, disjoint
        let e = Segment::from_coords(11.0, 11.0, 12.0, 12.0);
        assert!(!segments_intersect(&a, &e));
    }

    #[test]
    fn test_degenerate_segment_acts_as_point() {
        let a = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let on = Segment::from_coords(4.0, 0.0, 4.0, 0.0);
        let off = Segment::from_coords(4.0, 1.0, 4.0, 1.0);
        assert!(segments_intersect(&a, &on));
        assert!(!segments_intersect(&a, &off));
    }
}
