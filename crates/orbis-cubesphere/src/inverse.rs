//! Sphere-to-cube inverse projection: recover the face and (u, v) of a direction.

use orbis_math::Vector;
use orbis_sphere::Point;

use crate::{CubeFace, FaceUv};

/// Determine which cube face a direction vector belongs to.
///
/// The face is determined by the axis with the largest absolute component.
/// Ties go to the earlier axis in X, Y, Z order, so points on a face
/// boundary are assigned deterministically. A zero vector maps to
/// [`CubeFace::PosX`].
#[must_use]
pub fn face(r: Vector) -> CubeFace {
    let abs = r.abs();
    let mut axis = 0;
    let mut value = r.x;
    if abs.y > abs.x {
        axis = 1;
        value = r.y;
    }
    if abs.z > value.abs() {
        axis = 2;
        value = r.z;
    }
    if value < 0.0 {
        axis += 3;
    }
    CubeFace::ALL[axis]
}

/// The (u, v) coordinates of `r` on `face`, assuming `r` lies in the open
/// half-space the face points into.
///
/// The result may fall outside \[-1, 1\] when `face` is not the face
/// [`face`] would choose for `r`.
#[must_use]
pub fn valid_face_xyz_to_uv(face: CubeFace, r: Vector) -> (f64, f64) {
    match face {
        CubeFace::PosX => (r.y / r.x, r.z / r.x),
        CubeFace::PosY => (-r.x / r.y, r.z / r.y),
        CubeFace::PosZ => (-r.x / r.z, -r.y / r.z),
        CubeFace::NegX => (r.z / r.x, r.y / r.x),
        CubeFace::NegY => (r.z / r.y, -r.x / r.y),
        CubeFace::NegZ => (-r.y / r.z, -r.x / r.z),
    }
}

/// Checked form of [`valid_face_xyz_to_uv`]: `None` when `p` does not lie
/// strictly on the side of the origin that `face` points towards.
#[must_use]
pub fn face_xyz_to_uv(face: CubeFace, p: Point) -> Option<(f64, f64)> {
    let r = p.vector();
    let coord = match face.axis() {
        0 => r.x,
        1 => r.y,
        _ => r.z,
    };
    let inside = if face.is_negative() { coord < 0.0 } else { coord > 0.0 };
    if !inside {
        tracing::trace!(face = face.index(), coord, "point outside face half-space");
        return None;
    }
    Some(valid_face_xyz_to_uv(face, r))
}

/// Convert a direction vector, not necessarily unit length, to its face
/// and (u, v) coordinates. The result always has `u` and `v` in \[-1, 1\].
#[must_use]
pub fn xyz_to_face_uv(r: Vector) -> FaceUv {
    let face = face(r);
    let (u, v) = valid_face_xyz_to_uv(face, r);
    FaceUv::new(face, u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face_uv_to_xyz;

    const EPSILON: f64 = 1e-14;

    #[test]
    fn test_face_detection_axis_aligned_directions() {
        assert_eq!(face(Vector::new(1.0, 0.0, 0.0)), CubeFace::PosX);
        assert_eq!(face(Vector::new(-1.0, 0.0, 0.0)), CubeFace::NegX);
        assert_eq!(face(Vector::new(0.0, 1.0, 0.0)), CubeFace::PosY);
        assert_eq!(face(Vector::new(0.0, -1.0, 0.0)), CubeFace::NegY);
        assert_eq!(face(Vector::new(0.0, 0.0, 1.0)), CubeFace::PosZ);
        assert_eq!(face(Vector::new(0.0, 0.0, -1.0)), CubeFace::NegZ);
    }

    #[test]
    fn test_face_matches_dominant_axis() {
        let cases = [
            (Vector::new(-0.1, -0.5, -0.9), CubeFace::NegZ),
            (Vector::new(0.3, -0.9, 0.2), CubeFace::NegY),
            (Vector::new(-0.5, 0.4, 0.1), CubeFace::NegX),
            (Vector::new(0.2, 0.3, 0.31), CubeFace::PosZ),
        ];
        for (r, want) in cases {
            assert_eq!(face(r), want, "face({r})");
        }
    }

    #[test]
    fn test_boundary_ties_prefer_earlier_axis() {
        assert_eq!(face(Vector::new(1.0, 1.0, 0.0)), CubeFace::PosX);
        assert_eq!(face(Vector::new(1.0, 1.0, 1.0)), CubeFace::PosX);
        assert_eq!(face(Vector::new(0.0, -1.0, 1.0)), CubeFace::NegY);
        assert_eq!(face(Vector::new(0.0, 1.0, -1.0)), CubeFace::PosY);
        assert_eq!(face(Vector::new(-2.0, 2.0, 2.0)), CubeFace::NegX);
    }

    #[test]
    fn test_face_zero_vector() {
        assert_eq!(face(Vector::ZERO), CubeFace::PosX);
    }

    #[test]
    fn test_valid_face_xyz_to_uv_formulas() {
        let r = Vector::new(0.5, -0.25, 2.0);
        let want = [
            (-0.5, 4.0),
            (2.0, -8.0),
            (-0.25, 0.125),
            (4.0, -0.5),
            (-8.0, 2.0),
            (0.125, -0.25),
        ];
        for (face, want) in CubeFace::ALL.into_iter().zip(want) {
            assert_eq!(valid_face_xyz_to_uv(face, r), want, "{face:?}");
        }
    }

    #[test]
    fn test_face_xyz_to_uv_rejects_wrong_half_space() {
        let p = Point::new(0.6, -0.8, 0.0);
        assert_eq!(face_xyz_to_uv(CubeFace::PosX, p), Some((-0.8 / 0.6, 0.0)));
        assert!(face_xyz_to_uv(CubeFace::NegY, p).is_some());
        assert_eq!(face_xyz_to_uv(CubeFace::NegX, p), None);
        assert_eq!(face_xyz_to_uv(CubeFace::PosY, p), None);
        // The plane through the origin belongs to neither face.
        assert_eq!(face_xyz_to_uv(CubeFace::PosZ, p), None);
        assert_eq!(face_xyz_to_uv(CubeFace::NegZ, p), None);
    }

    #[test]
    fn test_xyz_to_face_uv_range() {
        let dirs = [
            Vector::new(0.0, -1.0, 0.0),
            Vector::new(0.3, -0.9, 0.2),
            Vector::new(-0.5, -0.7, 0.5),
            Vector::new(1.0, 1.0, 1.0),
            Vector::new(-3.0, 0.1, -2.9),
        ];
        for r in dirs {
            let fuv = xyz_to_face_uv(r);
            assert!((-1.0..=1.0).contains(&fuv.u), "u out of range for {r}: {fuv:?}");
            assert!((-1.0..=1.0).contains(&fuv.v), "v out of range for {r}: {fuv:?}");
        }
    }

    #[test]
    fn test_roundtrip_uv_xyz_uv() {
        // Interior points only: on an edge the face is chosen by tie-break.
        for f in CubeFace::ALL {
            for i in 1..20 {
                for j in 1..20 {
                    let u = -1.0 + i as f64 / 10.0;
                    let v = -1.0 + j as f64 / 10.0;
                    let p = face_uv_to_xyz(f, u, v).normalize();
                    let fuv = xyz_to_face_uv(p);
                    assert_eq!(fuv.face, f, "Face mismatch for {f:?} at ({u}, {v})");
                    assert!(
                        (fuv.u - u).abs() < EPSILON,
                        "u mismatch for {f:?}: original {u}, recovered {}",
                        fuv.u
                    );
                    assert!(
                        (fuv.v - v).abs() < EPSILON,
                        "v mismatch for {f:?}: original {v}, recovered {}",
                        fuv.v
                    );
                }
            }
        }
    }

    #[test]
    fn test_roundtrip_xyz_uv_xyz() {
        let dirs = [
            Vector::new(0.3, -0.9, 0.2),
            Vector::new(-0.5, -0.7, 0.5),
            Vector::new(0.1, 0.2, -0.95),
            Vector::new(-0.99, 0.05, 0.1),
        ];
        for r in dirs {
            let r = r.normalize();
            let back = xyz_to_face_uv(r).to_xyz().normalize();
            assert!((back - r).norm() < EPSILON, "{r} roundtripped to {back}");
        }
    }
}
