mod point;
mod rotation;
mod vector;

pub use point::Point;
pub use rotation::AxisRotation;
pub use vector::GeoVector;

/// Angle type, in radians (alias for f64).
pub type Angle = f64;
