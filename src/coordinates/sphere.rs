//! # Sphere Vector Module
//!
//! This module provides the 3D vector representation used for all true
//! spherical geometry in the crate: great-circle distances, arc intersection
//! and nearest-point queries.
//!
//! ## Coordinate System Convention
//!
//! Spatial points are stored as vectors on the unit sphere:
//! - **X-axis**: Points toward longitude 0°, latitude 0°
//! - **Y-axis**: Points toward longitude 90° east, latitude 0°
//! - **Z-axis**: Points toward the north pole (latitude +90°)
//!
//! ## Normalization
//!
//! Vectors built from longitude/latitude are unit length. The arithmetic
//! operators (`+`, `-`, `*`) do NOT renormalize: the sum of two endpoints is
//! the (unnormalized) bisector used to decide whether a point lies on the
//! minor arc between them, and its length carries information.
//!
//! ## Examples
//!
//! ```rust
//! use planetproj::coordinates::SphereVector;
//!
//! let prime = SphereVector::from_lon_lat(0.0, 0.0);
//! let north = SphereVector::from_lon_lat(0.0, 90.0);
//!
//! assert!((prime.separation_degrees(&north) - 90.0).abs() < 1e-12);
//! ```

use crate::constants::{DEG2RAD, DEGENERATE_EPS, RAD2DEG};
use nalgebra::{Point2, Vector3};

/// Three-dimensional vector used for spherical geometry
///
/// Represents a direction from the body centre. When built through
/// [`SphereVector::from_lon_lat`] the vector is unit length; intermediate
/// results of arithmetic (bisectors, plane normals) generally are not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereVector {
    /// X-component (toward lon 0°, lat 0°)
    pub x: f64,
    /// Y-component (toward lon 90° E)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl SphereVector {
    /// Creates a vector from raw components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        SphereVector { x, y, z }
    }

    /// Creates the unit vector for an east longitude and latitude in degrees
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = cos(lat) * cos(lon)`
    /// - `y = cos(lat) * sin(lon)`
    /// - `z = sin(lat)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planetproj::coordinates::SphereVector;
    ///
    /// let v = SphereVector::from_lon_lat(90.0, 0.0);
    /// assert!(v.x.abs() < 1e-15);
    /// assert!((v.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_lon_lat(lon_deg: f64, lat_deg: f64) -> Self {
        let lon = lon_deg * DEG2RAD;
        let lat = lat_deg * DEG2RAD;
        let cos_lat = lat.cos();
        SphereVector {
            x: cos_lat * lon.cos(),
            y: cos_lat * lon.sin(),
            z: lat.sin(),
        }
    }

    /// Creates the unit vector for a spatial point (`x` = lon, `y` = lat, degrees)
    pub fn from_spatial(point: &Point2<f64>) -> Self {
        Self::from_lon_lat(point.x, point.y)
    }

    /// Converts to east longitude and latitude in degrees
    ///
    /// Longitude is normalized to [0, 360), latitude lies in [-90, 90].
    /// The vector does not need to be unit length. Returns `None` for the
    /// zero vector, which has no direction.
    ///
    /// At the poles longitude is arbitrary and reported as 0.
    pub fn to_lon_lat(&self) -> Option<(f64, f64)> {
        let r_xy = (self.x * self.x + self.y * self.y).sqrt();
        if r_xy == 0.0 && self.z == 0.0 {
            return None;
        }

        let lat = self.z.atan2(r_xy) * RAD2DEG;
        let lon = if r_xy == 0.0 {
            0.0
        } else {
            (self.y.atan2(self.x) * RAD2DEG).rem_euclid(360.0)
        };

        Some((lon, lat))
    }

    /// Converts to a spatial point (`x` = lon, `y` = lat, degrees)
    pub fn to_spatial(&self) -> Option<Point2<f64>> {
        self.to_lon_lat().map(|(lon, lat)| Point2::new(lon, lat))
    }

    /// Euclidean length of the vector
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` if the input length is below the degeneracy threshold,
    /// since the direction of (near) zero vectors is meaningless.
    ///
    /// ```rust
    /// use planetproj::coordinates::SphereVector;
    ///
    /// let v = SphereVector::new(3.0, 4.0, 0.0).unit().unwrap();
    /// assert!((v.norm() - 1.0).abs() < 1e-15);
    /// assert!(SphereVector::new(0.0, 0.0, 0.0).unit().is_none());
    /// ```
    pub fn unit(&self) -> Option<SphereVector> {
        let mag = self.norm();
        if mag < DEGENERATE_EPS {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product
    pub fn dot(&self, other: &SphereVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product; the normal of the plane through the origin and both vectors
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &SphereVector) -> SphereVector {
        SphereVector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angular separation to another vector, in radians [0, π]
    ///
    /// Uses `atan2(|a × b|, a · b)` rather than `acos` of the normalized dot
    /// product. `acos` loses most of its precision near 0 and π, exactly where
    /// hit-testing needs it; the `atan2` form is well conditioned everywhere.
    ///
    /// ```rust
    /// use planetproj::coordinates::SphereVector;
    /// use std::f64::consts::PI;
    ///
    /// let v = SphereVector::from_lon_lat(30.0, 10.0);
    /// assert_eq!(v.separation(&v), 0.0);
    /// assert!((v.separation(&-v) - PI).abs() < 1e-15);
    /// ```
    pub fn separation(&self, other: &SphereVector) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }

    /// Angular separation to another vector, in degrees [0, 180]
    pub fn separation_degrees(&self, other: &SphereVector) -> f64 {
        self.separation(other) * RAD2DEG
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        SphereVector {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations; none of them renormalize
impl std::ops::Add for SphereVector {
    type Output = SphereVector;

    fn add(self, other: SphereVector) -> SphereVector {
        SphereVector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for SphereVector {
    type Output = SphereVector;

    fn sub(self, other: SphereVector) -> SphereVector {
        SphereVector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for SphereVector {
    type Output = SphereVector;

    fn neg(self) -> SphereVector {
        SphereVector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for SphereVector {
    type Output = SphereVector;

    fn mul(self, scalar: f64) -> SphereVector {
        SphereVector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for SphereVector {
    type Output = SphereVector;

    fn div(self, scalar: f64) -> SphereVector {
        SphereVector {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
