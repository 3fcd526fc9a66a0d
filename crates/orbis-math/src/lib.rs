//! f64 vector algebra, angles, and the linear and circular interval types that
//! underpin the spherical geometry in `orbis-sphere`.

mod angle;
mod arc_interval;
mod interval;
mod scalar;
mod vector;

pub use angle::Angle;
pub use arc_interval::ArcInterval;
pub use interval::Interval;
pub use scalar::remainder;
pub use vector::Vector;
