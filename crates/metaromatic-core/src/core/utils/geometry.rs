use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Cannot normalize a degenerate vector (norm = {norm})")]
    DegenerateVector { norm: f64 },
}

pub fn norm(v: &Vector3<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Returns `v / |v|`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateVector`] when `v` has zero (or non-finite)
/// length, instead of silently producing NaN components.
pub fn unit(v: &Vector3<f64>) -> Result<Vector3<f64>, GeometryError> {
    let n = norm(v);
    if n > 0.0 && n.is_finite() {
        Ok(v / n)
    } else {
        Err(GeometryError::DegenerateVector { norm: n })
    }
}

pub fn dot(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    u.dot(v)
}

/// Angle between two vectors in radians.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so (anti)parallel vectors
/// whose rounded cosine overshoots still give `0` or `π`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateVector`] if either vector has zero length.
pub fn angle_between(u: &Vector3<f64>, v: &Vector3<f64>) -> Result<f64, GeometryError> {
    let norm_u = norm(u);
    let norm_v = norm(v);
    let denominator = norm_u * norm_v;
    if !(denominator > 0.0 && denominator.is_finite()) {
        return Err(GeometryError::DegenerateVector {
            norm: norm_u.min(norm_v),
        });
    }
    let cosine = (dot(u, v) / denominator).clamp(-1.0, 1.0);
    Ok(cosine.acos())
}

pub fn angle_between_degrees(u: &Vector3<f64>, v: &Vector3<f64>) -> Result<f64, GeometryError> {
    angle_between(u, v).map(f64::to_degrees)
}

pub fn mat_mul(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a * b
}

pub fn mat_add(a: &Matrix3<f64>, b: &Matrix3<f64>) -> Matrix3<f64> {
    a + b
}

pub fn mat_vec_mul(m: &Matrix3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    m * v
}

/// Skew-symmetric matrix `K` such that `K * v == r x v`.
pub fn cross_product_matrix(r: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -r.z, r.y, //
        r.z, 0.0, -r.x, //
        -r.y, r.x, 0.0,
    )
}

/// Rodrigues rotation matrix `I + sin(t) K + (1 - cos(t)) K^2` with both
/// coefficients fixed at one, i.e. a quarter turn about the unit axis `axis`.
pub fn quadratic_rodrigues_matrix(axis: &Vector3<f64>) -> Matrix3<f64> {
    let k = cross_product_matrix(axis);
    let k_squared = mat_mul(&k, &k);
    mat_add(&mat_add(&Matrix3::identity(), &k), &k_squared)
}

pub fn midpoint(p: &Point3<f64>, q: &Point3<f64>) -> Point3<f64> {
    nalgebra::center(p, q)
}
