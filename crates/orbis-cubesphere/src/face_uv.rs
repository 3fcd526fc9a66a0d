//! Face-local coordinates: a cube face plus a (u, v) position on it.

use orbis_math::Vector;
use orbis_sphere::Point;
use serde::{Deserialize, Serialize};

use crate::{CubeFace, ProjectionMethod, face_uv_to_xyz};

/// A position on a cube face in gnomonic coordinates.
///
/// `(u, v) = (0, 0)` is the face center and the face edges are at ±1.
/// Directions produced by [`xyz_to_face_uv`](crate::xyz_to_face_uv) always
/// fall in \[-1, 1\]; values outside that range still name a well-defined
/// direction, off the face's own square.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceUv {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Coordinate along the face's u axis.
    pub u: f64,
    /// Coordinate along the face's v axis.
    pub v: f64,
}

impl FaceUv {
    /// Create a face coordinate from its parts.
    #[must_use]
    pub const fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self { face, u, v }
    }

    /// Build from s/t coordinates in \[0, 1\] under the given transform.
    #[must_use]
    pub fn from_st(face: CubeFace, s: f64, t: f64, method: ProjectionMethod) -> Self {
        Self::new(face, method.st_to_uv(s), method.st_to_uv(t))
    }

    /// The s/t coordinates of this position under the given transform.
    #[must_use]
    pub fn to_st(self, method: ProjectionMethod) -> (f64, f64) {
        (method.uv_to_st(self.u), method.uv_to_st(self.v))
    }

    /// The unnormalized direction through this position.
    #[must_use]
    pub fn to_xyz(self) -> Vector {
        face_uv_to_xyz(self.face, self.u, self.v)
    }

    /// The unit-sphere point in the direction of this position.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::from(self.to_xyz()).normalize()
    }
}

impl From<FaceUv> for Point {
    fn from(fuv: FaceUv) -> Self {
        fuv.to_point()
    }
}
