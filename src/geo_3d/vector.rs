use std::ops::{Add, Mul, Div};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_3d::Angle;

/// A vector in 3D space.
/// Used for rotation axes and point displacements.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Normalize and return a new vector.
    /// The zero vector has no direction and is returned unchanged.
    pub fn normalize(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        *self / self.norm()
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Check if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Rotate around a unit axis by an angle (radians, right-handed).
    pub fn rotate_around(&self, axis: &GeoVector, angle: Angle) -> GeoVector {
        let c = angle.cos();
        let s = angle.sin();
        let cross = axis.cross(self);

        *self * c + cross * s + *axis * axis.dot(self) * (1.0 - c)
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        GeoVector{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        GeoVector{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 1.0}
    }
}
impl Add for GeoVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl Mul<f64> for GeoVector {
    type Output = GeoVector;

    fn mul(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}
impl Div<f64> for GeoVector {
    type Output = GeoVector;

    fn div(self, other: f64) -> GeoVector {
        GeoVector{
            x: self.x / other,
            y: self.y / other,
            z: self.z / other,
        }
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*}, {:.*})", precision, self.x, precision, self.y, precision, self.z)
    }
}
