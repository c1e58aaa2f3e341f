//! Constants module for map projection calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// World space
/// Width of one full copy of world space, in world-degrees
pub const WORLD_WRAP: f64 = 360.0;
/// Half of a world copy; the largest possible wrapped longitude difference
pub const HALF_WRAP: f64 = WORLD_WRAP / 2.0;

// Tolerances
/// Below this magnitude a cross product is treated as degenerate (parallel inputs)
pub const DEGENERATE_EPS: f64 = 1e-12;
/// Planar tolerance, in the units of the space being measured
pub const PLANAR_EPS: f64 = 1e-9;
/// Angular tolerance on the unit sphere (dot-product units)
pub const SPHERE_EPS: f64 = 1e-12;
/// Angular tolerance, in degrees, for treating a point as lying on an arc
pub const ANGLE_EPS_DEG: f64 = 1e-9;
