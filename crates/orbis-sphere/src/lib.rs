//! Regions and coordinates on the unit sphere: points, latitude/longitude
//! pairs, spherical caps and latitude/longitude rectangles.
//!
//! Every type is a small `Copy` value and every operation is pure. Invalid
//! input is never rejected at construction; each type offers an `is_valid`
//! check for callers handling untrusted data.

mod cap;
mod latlng;
mod point;
mod rect;

pub use cap::{Cap, radius_to_height};
pub use latlng::LatLng;
pub use point::Point;
pub use rect::Rect;
