//! Randomized and scenario checks of the projection engine's invariants

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Point2;
use planetproj::geometry::{Rect, Segment, WorldRegion};
use planetproj::{
    CoordinateProjection, Equirectangular, Magnification, ObliqueCylindrical, ProjectionState,
    ScreenProjection, SpatialProjection, SphereVector, ViewGeometry, Viewport, WorldProjection,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn state(x: f64, y: f64, ppd: i64, w: u32, h: u32) -> ProjectionState {
    ProjectionState::new(
        Point2::new(x, y),
        Magnification::new(ppd).unwrap(),
        Viewport::new(w, h).unwrap(),
    )
}

fn random_state(rng: &mut StdRng) -> ProjectionState {
    let ppd = 1i64 << rng.gen_range(0u32..=12);
    state(
        rng.gen_range(-1000.0..1000.0),
        rng.gen_range(-90.0..90.0),
        ppd,
        rng.gen_range(1..2000),
        rng.gen_range(1..1500),
    )
}

#[test]
fn screen_world_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let s = random_state(&mut rng);
        let to_world = s.screen_to_world();
        let to_screen = s.world_to_screen();
        for _ in 0..20 {
            let p = Point2::new(rng.gen_range(-500.0..2500.0), rng.gen_range(-500.0..2000.0));
            let back = to_screen.apply(&to_world.apply(&p));
            assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-6);
            assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn world_window_origin_is_pixel_snapped() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..64 {
        let s = random_state(&mut rng);
        let window = s.world_window();
        let ppd = s.ppd() as f64;
        let x_pixels = window.x * ppd;
        let y_pixels = window.y * ppd;
        assert_eq!(x_pixels, x_pixels.round(), "x not snapped for {:?}", s);
        assert_eq!(y_pixels, y_pixels.round(), "y not snapped for {:?}", s);
        assert!(window.x <= s.anchor().x - window.width / 2.0);
        assert!(s.anchor().x - window.width / 2.0 - window.x < s.pixel_size());
    }
}

#[test]
fn reference_scenario_window() {
    let s = state(180.0, 0.0, 4, 800, 600);
    assert_eq!(s.pixel_size(), 0.25);
    assert_eq!(s.ppd_log2(), 2);
    let w = s.world_window();
    assert_eq!(w, Rect::new(80.0, -75.0, 200.0, 150.0));
    assert_eq!((w.min_x(), w.max_x()), (80.0, 280.0));
    assert_eq!(s.screen_window(), Rect::new(0.0, 0.0, 800.0, 600.0));
    assert_eq!(s.world_window_mod(), WorldRegion::Single(w));
}

#[test]
fn wide_window_mod_is_full_strip() {
    let region = planetproj::projection::world_window_mod(&Rect::new(17.0, -30.0, 400.0, 60.0));
    assert_eq!(region, WorldRegion::Single(Rect::new(0.0, -30.0, 360.0, 60.0)));
}

#[test]
fn window_mod_membership_matches_unwrapped_window() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let window = Rect::new(
            rng.gen_range(-1080.0..1080.0),
            0.0,
            rng.gen_range(0.5..420.0),
            1.0,
        );
        let region = planetproj::projection::world_window_mod(&window);
        for _ in 0..50 {
            let x: f64 = rng.gen_range(-2000.0..2000.0);
            let canonical = x.rem_euclid(360.0);
            let k_lo = ((window.min_x() - x) / 360.0).floor() as i64 - 1;
            let in_window = (k_lo..k_lo + 4)
                .any(|k| window.contains_x(x + 360.0 * k as f64));
            assert_eq!(
                region.contains_x(canonical),
                in_window,
                "x = {} against {:?} -> {:?}",
                x,
                window,
                region
            );
        }
    }
}

#[rstest]
#[case(Point2::new(359.0, 0.0))]
#[case(Point2::new(-1.0, 0.0))]
#[case(Point2::new(719.0, 0.0))]
fn world_distance_wraps(#[case] other: Point2<f64>) {
    let s = state(180.0, 0.0, 4, 800, 600);
    let world = WorldProjection::new(&s, &Equirectangular);
    assert_relative_eq!(world.distance_points(&Point2::new(0.0, 0.0), &other), 1.0, epsilon = 1e-9);
}

#[rstest]
#[case(0.0, 0.0)]
#[case(123.4, 56.7)]
#[case(300.0, -89.0)]
fn separation_extremes(#[case] lon: f64, #[case] lat: f64) {
    let v = SphereVector::from_lon_lat(lon, lat);
    assert_eq!(v.separation_degrees(&v), 0.0);
    assert_abs_diff_eq!(v.separation_degrees(&-v), 180.0, epsilon = 1e-12);
}

#[rstest]
#[case::equator_crossing((170.0, -10.0, 170.0, 10.0), (160.0, 0.0, 180.0, 0.0), true)]
#[case::opposite_longitude((350.0, -10.0, 350.0, 10.0), (340.0, 0.0, 0.0, 0.0), true)]
#[case::seam((355.0, -5.0, 5.0, 5.0), (355.0, 5.0, 5.0, -5.0), true)]
#[case::opposite_hemispheres((0.0, 10.0, 10.0, 20.0), (180.0, -10.0, 190.0, -20.0), false)]
#[case::long_arcs_far_side((0.0, 0.0, 170.0, 0.0), (260.0, -10.0, 260.0, 10.0), false)]
#[case::near_miss((0.0, 1.0, 10.0, 1.0), (5.0, -10.0, 5.0, 0.5), false)]
fn spatial_hit_test(
    #[case] a: (f64, f64, f64, f64),
    #[case] b: (f64, f64, f64, f64),
    #[case] expected: bool,
) {
    let s = state(180.0, 0.0, 4, 800, 600);
    let spatial = SpatialProjection::new(&s, &Equirectangular);
    let a = Segment::from_coords(a.0, a.1, a.2, a.3);
    let b = Segment::from_coords(b.0, b.1, b.2, b.3);
    assert_eq!(spatial.hit_test(&a, &b), expected);
    assert_eq!(spatial.hit_test(&b, &a), expected);
}

#[test]
fn spatial_nearest_point() {
    let s = state(180.0, 0.0, 4, 800, 600);
    let spatial = SpatialProjection::new(&s, &Equirectangular);
    let seg = Segment::from_coords(350.0, 0.0, 10.0, 0.0);

    let mid = spatial.nearest_point_on_segment(&seg, &Point2::new(0.0, 0.0), 0.5).unwrap();
    assert_abs_diff_eq!(spatial.distance_points(&mid, &Point2::new(0.0, 0.0)), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(spatial.distance_segment_to_point(&seg, &Point2::new(0.0, 0.0)), 0.0, epsilon = 1e-9);

    assert!(spatial.nearest_point_on_segment(&seg, &Point2::new(0.0, 30.0), 10.0).is_none());
}

#[test]
fn spatial_segment_distance_never_exceeds_endpoints() {
    let mut rng = StdRng::seed_from_u64(99);
    let s = state(180.0, 0.0, 4, 800, 600);
    let spatial = SpatialProjection::new(&s, &Equirectangular);
    for _ in 0..500 {
        let mut lonlat = || Point2::new(rng.gen_range(0.0..360.0), rng.gen_range(-89.0..89.0));
        let seg = Segment::new(lonlat(), lonlat());
        let p = lonlat();
        let d = spatial.distance_segment_to_point(&seg, &p);
        let d1 = spatial.distance_points(&seg.start, &p);
        let d2 = spatial.distance_points(&seg.end, &p);
        assert!(d >= 0.0);
        assert!(d <= d1.min(d2) + 1e-9, "{} > min({}, {})", d, d1, d2);
    }
}

#[test]
fn projections_agree_through_screen() {
    let s = state(42.0, 17.0, 64, 1024, 768);
    let shape = ObliqueCylindrical::new(42.0, 17.0);
    let screen = ScreenProjection::new(&s, &shape);
    let world = WorldProjection::new(&s, &shape);
    let spatial = SpatialProjection::new(&s, &shape);

    let px = Point2::new(100.5, 650.25);
    let w = screen.to_world(&px).unwrap();
    let ll = screen.to_spatial(&px).unwrap();
    assert_eq!(world.to_spatial(&w), Some(ll));

    let v = SphereVector::from_spatial(&ll);
    let back = spatial.to_screen(&ll).unwrap();
    assert_abs_diff_eq!(back.x, px.x, epsilon = 1e-6);
    assert_abs_diff_eq!(back.y, px.y, epsilon = 1e-6);
    let via_vector = screen.from_sphere_vector(&v).unwrap();
    assert_abs_diff_eq!(via_vector.x, px.x, epsilon = 1e-6);
    assert_abs_diff_eq!(via_vector.y, px.y, epsilon = 1e-6);
}

#[test]
fn view_geometry_lifecycle() {
    let mut view = ViewGeometry::Pending;
    let before = view.spatial(&Equirectangular);
    assert!(before.is_null());
    assert!(!before.hit_test(
        &Segment::from_coords(0.0, -1.0, 0.0, 1.0),
        &Segment::from_coords(-1.0, 0.0, 1.0, 0.0)
    ));

    view.lay_out(
        Point2::new(180.0, 0.0),
        Magnification::new(4).unwrap(),
        Viewport::new(800, 600).unwrap(),
    );
    let after = view.spatial(&Equirectangular);
    assert!(!after.is_null());
    assert!(after.hit_test(
        &Segment::from_coords(0.0, -1.0, 0.0, 1.0),
        &Segment::from_coords(359.0, 0.0, 1.0, 0.0)
    ));
}
