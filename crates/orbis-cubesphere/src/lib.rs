//! Cube-face projection of the sphere: face selection, face-local (u, v)
//! coordinates, and the s/t transforms used for uniform face subdivision.

mod cube_face;
mod error;
mod face_uv;
mod inverse;
mod projection;

pub use cube_face::CubeFace;
pub use error::FaceError;
pub use face_uv::FaceUv;
pub use inverse::{face, face_xyz_to_uv, valid_face_xyz_to_uv, xyz_to_face_uv};
pub use projection::{
    MAX_LEVEL, MAX_SI_TI, MAX_SIZE, ProjectionMethod, face_norm, face_uv_to_dvec3, face_uv_to_xyz,
    si_ti_to_st, st_to_si_ti, st_to_uv, u_axis, u_norm, uv_to_st, v_axis, v_norm,
};
