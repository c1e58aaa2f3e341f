//! 2D affine transforms between screen and world space
//!
//! The transforms are stored as homogeneous 3x3 nalgebra matrices. Only
//! scale + translation (with a possible axis flip) are ever built here, so
//! inverses exist whenever the scale is non-zero.

use nalgebra::{Matrix3, Point2, Vector2};

/// A 2D affine transform `p' = M * p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    matrix: Matrix3<f64>,
}

impl AffineTransform {
    pub fn identity() -> Self {
        AffineTransform {
            matrix: Matrix3::identity(),
        }
    }

    /// Wraps an existing homogeneous matrix
    pub fn from_matrix(matrix: Matrix3<f64>) -> Self {
        AffineTransform { matrix }
    }

    /// Axis scaling followed by a translation
    ///
    /// `x' = sx * x + tx`, `y' = sy * y + ty`
    pub fn scale_translate(sx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        AffineTransform {
            matrix: Matrix3::new(
                sx, 0.0, tx, //
                0.0, sy, ty, //
                0.0, 0.0, 1.0,
            ),
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Applies the transform to a point (translation included)
    pub fn apply(&self, p: &Point2<f64>) -> Point2<f64> {
        self.matrix.transform_point(p)
    }

    /// Applies the linear part only, for deltas and sizes
    pub fn apply_vector(&self, v: &Vector2<f64>) -> Vector2<f64> {
        self.matrix.transform_vector(v)
    }

    /// `self` followed by `next`
    pub fn then(&self, next: &AffineTransform) -> AffineTransform {
        AffineTransform {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Returns `None` for a singular transform
    pub fn inverse(&self) -> Option<AffineTransform> {
        self.matrix
            .try_inverse()
            .map(|matrix| AffineTransform { matrix })
    }
}
