//! Forward cube-face projection and the face coordinate transforms.
//!
//! A point on a face is addressed three ways:
//! - **(u, v)**: gnomonic coordinates in \[-1, 1\], the point `normal + u·u_axis + v·v_axis`.
//! - **(s, t)**: coordinates in \[0, 1\] along which faces are subdivided uniformly.
//! - **(si, ti)**: integer s/t at the finest subdivision, in \[0, 2³¹\].
//!
//! The s/t ↔ u/v transform is chosen by [`ProjectionMethod`]. The default
//! quadratic transform keeps cells more uniform in area than the linear one
//! at a fraction of the cost of the tangent one.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::DVec3;
use orbis_math::Vector;
use serde::{Deserialize, Serialize};

use crate::CubeFace;

/// Number of subdivision levels below a face.
pub const MAX_LEVEL: u32 = 30;

/// Number of cells along each edge of a face at [`MAX_LEVEL`].
pub const MAX_SIZE: u64 = 1 << MAX_LEVEL;

/// Largest si/ti value; si/ti coordinates have one more bit than cell positions.
pub const MAX_SI_TI: u64 = MAX_SIZE << 1;

/// Selects the transform between s/t and u/v coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectionMethod {
    /// `u = 2s - 1`. Cheapest, least uniform cell areas.
    Linear,
    /// `u = tan(π/2·s - π/4)`. Most uniform, needs trigonometry.
    Tangent,
    /// Piecewise quadratic, close to the tangent transform without trig calls.
    #[default]
    Quadratic,
}

impl ProjectionMethod {
    /// Map an s or t value in \[0, 1\] to u or v in \[-1, 1\].
    #[inline]
    #[must_use]
    pub fn st_to_uv(self, s: f64) -> f64 {
        match self {
            ProjectionMethod::Linear => 2.0 * s - 1.0,
            ProjectionMethod::Tangent => (FRAC_PI_2 * s - FRAC_PI_4).tan(),
            ProjectionMethod::Quadratic => st_to_uv(s),
        }
    }

    /// Map a u or v value in \[-1, 1\] back to s or t in \[0, 1\].
    #[inline]
    #[must_use]
    pub fn uv_to_st(self, u: f64) -> f64 {
        match self {
            ProjectionMethod::Linear => 0.5 * (u + 1.0),
            ProjectionMethod::Tangent => (u.atan() + FRAC_PI_4) / FRAC_PI_2,
            ProjectionMethod::Quadratic => uv_to_st(u),
        }
    }
}

/// The quadratic s → u transform.
///
/// Monotonic, maps 0 → -1, 0.5 → 0 and 1 → 1, and is odd about s = 0.5.
#[inline]
#[must_use]
pub fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// Inverse of [`st_to_uv`]. Round trips agree to within rounding, not bit
/// for bit.
#[inline]
#[must_use]
pub fn uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// Convert an si or ti value to s or t. Values above [`MAX_SI_TI`] give 1.0.
#[inline]
#[must_use]
pub fn si_ti_to_st(si: u64) -> f64 {
    if si > MAX_SI_TI {
        return 1.0;
    }
    si as f64 / MAX_SI_TI as f64
}

/// Convert an s or t value to the nearest si or ti value.
#[inline]
#[must_use]
pub fn st_to_si_ti(s: f64) -> u64 {
    (s * MAX_SI_TI as f64).round() as u64
}

/// The unnormalized direction for `(u, v)` on `face`.
///
/// Exact inverse of [`valid_face_xyz_to_uv`](crate::valid_face_xyz_to_uv)
/// up to scale.
#[inline]
#[must_use]
pub fn face_uv_to_xyz(face: CubeFace, u: f64, v: f64) -> Vector {
    Vector::from(face_uv_to_dvec3(face, u, v))
}

/// Unit normal of `face`.
#[inline]
#[must_use]
pub fn face_norm(face: CubeFace) -> Vector {
    Vector::from(face.normal())
}

/// Direction of increasing u on `face`.
#[inline]
#[must_use]
pub fn u_axis(face: CubeFace) -> Vector {
    Vector::from(face.u_axis())
}

/// Direction of increasing v on `face`.
#[inline]
#[must_use]
pub fn v_axis(face: CubeFace) -> Vector {
    Vector::from(face.v_axis())
}

/// Normal, not unit length, of the plane through the origin containing the
/// line of constant `u` on `face`. Right-handed for an edge running along +v,
/// so points with larger `u` have a negative dot product with it.
#[inline]
#[must_use]
pub fn u_norm(face: CubeFace, u: f64) -> Vector {
    Vector::from(u * face.normal() - face.u_axis())
}

/// Normal, not unit length, of the plane through the origin containing the
/// line of constant `v` on `face`. Right-handed for an edge running along +u,
/// so points with larger `v` have a positive dot product with it.
#[inline]
#[must_use]
pub fn v_norm(face: CubeFace, v: f64) -> Vector {
    Vector::from(face.v_axis() - v * face.normal())
}

/// `face_uv_to_xyz` in glam form, for callers already working in `DVec3`.
#[inline]
#[must_use]
pub fn face_uv_to_dvec3(face: CubeFace, u: f64, v: f64) -> DVec3 {
    face.normal() + u * face.u_axis() + v * face.v_axis()
}
