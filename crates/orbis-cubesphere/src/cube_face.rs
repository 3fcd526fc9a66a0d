//! The six faces of the projection cube and their coordinate frames.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::FaceError;

/// The six faces of the cube the sphere is projected onto.
///
/// Faces are numbered so that `index() % 3` is the axis of the face
/// normal and indices 3..=5 are the negative directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// +Y face
    PosY = 1,
    /// +Z face
    PosZ = 2,
    /// −X face
    NegX = 3,
    /// −Y face
    NegY = 4,
    /// −Z face
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in index order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::PosY,
        CubeFace::PosZ,
        CubeFace::NegX,
        CubeFace::NegY,
        CubeFace::NegZ,
    ];

    /// The face number in 0..=5.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The face with the given number.
    pub const fn from_index(index: u8) -> Result<CubeFace, FaceError> {
        match index {
            0 => Ok(CubeFace::PosX),
            1 => Ok(CubeFace::PosY),
            2 => Ok(CubeFace::PosZ),
            3 => Ok(CubeFace::NegX),
            4 => Ok(CubeFace::NegY),
            5 => Ok(CubeFace::NegZ),
            _ => Err(FaceError::InvalidIndex(index)),
        }
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Axis of the face normal: 0 for X, 1 for Y, 2 for Z.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> usize {
        (self as usize) % 3
    }

    /// Returns true for the three faces whose normal points along a
    /// negative axis.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        (self as u8) >= 3
    }

    /// Outward-pointing unit normal for this face. This is also the point
    /// at `(u, v) = (0, 0)`.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::X,
            CubeFace::PosY => DVec3::Y,
            CubeFace::PosZ => DVec3::Z,
            CubeFace::NegX => DVec3::NEG_X,
            CubeFace::NegY => DVec3::NEG_Y,
            CubeFace::NegZ => DVec3::NEG_Z,
        }
    }

    /// Direction of increasing `u` on this face.
    #[must_use]
    pub fn u_axis(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::Y,
            CubeFace::PosY => DVec3::NEG_X,
            CubeFace::PosZ => DVec3::NEG_X,
            CubeFace::NegX => DVec3::NEG_Z,
            CubeFace::NegY => DVec3::NEG_Z,
            CubeFace::NegZ => DVec3::Y,
        }
    }

    /// Direction of increasing `v` on this face.
    #[must_use]
    pub fn v_axis(self) -> DVec3 {
        match self {
            CubeFace::PosX => DVec3::Z,
            CubeFace::PosY => DVec3::Z,
            CubeFace::PosZ => DVec3::NEG_Y,
            CubeFace::NegX => DVec3::NEG_Y,
            CubeFace::NegY => DVec3::X,
            CubeFace::NegZ => DVec3::X,
        }
    }
}

impl TryFrom<u8> for CubeFace {
    type Error = FaceError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        CubeFace::from_index(index)
    }
}

impl From<CubeFace> for u8 {
    fn from(face: CubeFace) -> Self {
        face.index()
    }
}
