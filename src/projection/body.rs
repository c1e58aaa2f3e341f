//! Body shapes: conversion between world-degree and spatial coordinates
//!
//! The projection engine treats this conversion as a black box behind the
//! [`BodyShape`] trait. Two shapes are provided: a plain equirectangular
//! mapping and the oblique cylindrical projection planetary map viewers use
//! to put an arbitrary point at the centre of an undistorted strip.

use crate::constants::{DEG2RAD, HALF_WRAP, WORLD_WRAP};
use crate::coordinates::SphereVector;
use nalgebra::{Matrix3, Point2, Rotation3, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Converts between world coordinates and spatial (lon/lat) coordinates
///
/// Spatial points use `x` = east longitude, `y` = latitude, both in degrees.
pub trait BodyShape {
    fn world_to_spatial(&self, world: &Point2<f64>) -> Point2<f64>;

    fn spatial_to_world(&self, spatial: &Point2<f64>) -> Point2<f64>;

    /// World-degrees per spatial degree along x and y at the projection centre
    fn world_scale(&self) -> Vector2<f64> {
        Vector2::new(1.0, 1.0)
    }
}

/// Solar system bodies with mapped surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Ceres,
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl Body {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Ceres => "Ceres",
            Body::Io => "Io",
            Body::Europa => "Europa",
            Body::Ganymede => "Ganymede",
            Body::Callisto => "Callisto",
        }
    }

    /// Mean radius in kilometers
    pub fn mean_radius_km(&self) -> f64 {
        match self {
            Body::Mercury => 2_439.7,
            Body::Venus => 6_051.8,
            Body::Earth => 6_371.0,
            Body::Moon => 1_737.4,
            Body::Mars => 3_389.5,
            Body::Ceres => 469.7,
            Body::Io => 1_821.6,
            Body::Europa => 1_560.8,
            Body::Ganymede => 2_634.1,
            Body::Callisto => 2_410.3,
        }
    }

    /// Surface distance along a great circle for an angular separation
    pub fn arc_length_km(&self, separation_deg: f64) -> f64 {
        separation_deg * DEG2RAD * self.mean_radius_km()
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Body> {
        const ALL: [Body; 10] = [
            Body::Mercury,
            Body::Venus,
            Body::Earth,
            Body::Moon,
            Body::Mars,
            Body::Ceres,
            Body::Io,
            Body::Europa,
            Body::Ganymede,
            Body::Callisto,
        ];
        ALL.into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

/// World x is east longitude, world y is latitude
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equirectangular;

impl BodyShape for Equirectangular {
    fn world_to_spatial(&self, world: &Point2<f64>) -> Point2<f64> {
        Point2::new(world.x.rem_euclid(WORLD_WRAP), world.y.clamp(-90.0, 90.0))
    }

    fn spatial_to_world(&self, spatial: &Point2<f64>) -> Point2<f64> {
        *spatial
    }
}

/// Oblique cylindrical projection centred on an arbitrary surface point
///
/// The sphere is rotated so that `center` lands on world `(0, 0)` and the
/// local north direction at the centre becomes world +y. World x then runs
/// along the great circle through the centre perpendicular to north, which
/// keeps distortion low in a band around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueCylindrical {
    center: Point2<f64>,
    rotation: Rotation3<f64>,
}

impl ObliqueCylindrical {
    /// Builds the projection for a centre given as (east lon, lat) in degrees
    pub fn new(center_lon: f64, center_lat: f64) -> Self {
        let c = SphereVector::from_lon_lat(center_lon, center_lat).to_vector3();
        let pole = Vector3::z();

        // Local north at the centre; undefined at the poles themselves
        let north = pole - c * c.dot(&pole);
        let up = if north.norm() > 1e-12 {
            north.normalize()
        } else {
            let lon = center_lon * DEG2RAD;
            Vector3::new(-lon.cos(), -lon.sin(), 0.0) * center_lat.signum()
        };
        let east = up.cross(&c);

        let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[c, east, up]));
        ObliqueCylindrical {
            center: Point2::new(center_lon.rem_euclid(WORLD_WRAP), center_lat),
            rotation,
        }
    }

    /// Centre point as (east lon, lat) in degrees
    pub fn center(&self) -> Point2<f64> {
        self.center
    }
}

impl BodyShape for ObliqueCylindrical {
    fn world_to_spatial(&self, world: &Point2<f64>) -> Point2<f64> {
        let local = SphereVector::from_lon_lat(world.x, world.y).to_vector3();
        let v = SphereVector::from_vector3(self.rotation * local);
        // The rotation of a unit vector is never zero
        v.to_spatial().unwrap_or(self.center)
    }

    fn spatial_to_world(&self, spatial: &Point2<f64>) -> Point2<f64> {
        let v = SphereVector::from_spatial(spatial).to_vector3();
        let local = SphereVector::from_vector3(self.rotation.inverse_transform_vector(&v));
        match local.to_lon_lat() {
            Some((lon, lat)) => {
                // Centre the canonical copy on world x = 0
                let x = if lon >= HALF_WRAP { lon - WORLD_WRAP } else { lon };
                Point2::new(x, lat)
            }
            None => Point2::origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Point2<f64>, b: &Point2<f64>, eps: f64) {
        let diff = (a - b).norm();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn test_body_names_and_radii() {
        assert_eq!(Body::Mars.name(), "Mars");
        assert_eq!(Body::from_name("mars"), Some(Body::Mars));
        assert_eq!(Body::from_name("pluto"), None);
        assert!((Body::Moon.mean_radius_km() - 1737.4).abs() < 1e-9);
    }

    #[test]
    fn test_arc_length() {
        // A quarter of Mars' circumference
        let quarter = Body::Mars.arc_length_km(90.0);
        assert!((quarter - std::f64::consts::PI / 2.0 * 3389.5).abs() < 1e-6);
    }

    #[test]
    fn test_equirectangular_wraps_longitude() {
        let shape = Equirectangular;
        let s = shape.world_to_spatial(&Point2::new(-10.0, 20.0));
        assert_eq!(s, Point2::new(350.0, 20.0));
        let s = shape.world_to_spatial(&Point2::new(725.0, 95.0));
        assert_eq!(s, Point2::new(5.0, 90.0));
        assert_eq!(
            shape.spatial_to_world(&Point2::new(12.0, -3.0)),
            Point2::new(12.0, -3.0)
        );
        assert_eq!(shape.world_scale(), Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_oblique_on_equator_is_shifted_equirectangular() {
        let shape = ObliqueCylindrical::new(100.0, 0.0);
        assert_close(
            &shape.world_to_spatial(&Point2::new(10.0, 5.0)),
            &Point2::new(110.0, 5.0),
            1e-9,
        );
        assert_close(
            &shape.spatial_to_world(&Point2::new(90.0, -20.0)),
            &Point2::new(-10.0, -20.0),
            1e-9,
        );
    }

    #[test]
    fn test_oblique_center_maps_to_origin() {
        let shape = ObliqueCylindrical::new(30.0, 40.0);
        assert_close(
            &shape.spatial_to_world(&Point2::new(30.0, 40.0)),
            &Point2::new(0.0, 0.0),
            1e-9,
        );
        // World +y heads north along the centre meridian
        assert_close(
            &shape.world_to_spatial(&Point2::new(0.0, 10.0)),
            &Point2::new(30.0, 50.0),
            1e-9,
        );
    }

    #[test]
    fn test_oblique_round_trip() {
        let shape = ObliqueCylindrical::new(250.0, -35.0);
        for (x, y) in [(0.0, 0.0), (-40.0, 12.0), (120.0, -60.0), (179.0, 80.0)] {
            let world = Point2::new(x, y);
            let back = shape.spatial_to_world(&shape.world_to_spatial(&world));
            assert_close(&back, &world, 1e-9);
        }
    }

    #[test]
    fn test_oblique_at_pole() {
        let shape = ObliqueCylindrical::new(0.0, 90.0);
        let world = shape.spatial_to_world(&Point2::new(0.0, 90.0));
        assert_close(&world, &Point2::new(0.0, 0.0), 1e-9);
        let back = shape.world_to_spatial(&Point2::new(0.0, 0.0));
        assert!((back.y - 90.0).abs() < 1e-9);
    }
}
