use std::fmt;

use crate::geo_3d::{GeoVector, Point};

/// A single rigid rotation by an angle around one axis vector.
/// Several non-zero axis components make one combined axis,
/// never a sequence of per-axis rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRotation {
    angle_deg: f64,
    axis: GeoVector,
    matrix: [[f64; 3]; 3],
}
impl AxisRotation {
    /// Create a rotation of `angle_deg` degrees (right-handed) around `axis`.
    /// The axis does not need to be normalized.
    /// An angle of zero or a zero-length axis gives the identity.
    pub fn new(angle_deg: f64, axis: GeoVector) -> Self {
        if angle_deg == 0.0 || axis.is_zero() {
            return AxisRotation{angle_deg, axis, matrix: IDENTITY};
        }

        let unit_axis = axis.normalize();
        let angle = angle_deg.to_radians();

        // Columns of the matrix are the rotated basis vectors
        let columns = [
            GeoVector::xhat().rotate_around(&unit_axis, angle),
            GeoVector::yhat().rotate_around(&unit_axis, angle),
            GeoVector::zhat().rotate_around(&unit_axis, angle),
        ];
        let mut matrix = IDENTITY;
        for (col, column) in columns.iter().enumerate() {
            matrix[0][col] = column.x;
            matrix[1][col] = column.y;
            matrix[2][col] = column.z;
        }

        AxisRotation{angle_deg, axis, matrix}
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        AxisRotation{angle_deg: 0.0, axis: GeoVector::zero(), matrix: IDENTITY}
    }

    /// Rotation by the negated angle around the same axis.
    pub fn inverse(&self) -> Self {
        AxisRotation::new(-self.angle_deg, self.axis)
    }

    /// Check if this rotation leaves every point where it is.
    pub fn is_identity(&self) -> bool {
        self.matrix == IDENTITY
    }

    /// Row-major rotation matrix.
    pub fn matrix(&self) -> &[[f64; 3]; 3] {
        &self.matrix
    }

    /// Rotate raw coordinates.
    pub fn apply_xyz(&self, xyz: [f64; 3]) -> [f64; 3] {
        let m = &self.matrix;
        [
            m[0][0] * xyz[0] + m[0][1] * xyz[1] + m[0][2] * xyz[2],
            m[1][0] * xyz[0] + m[1][1] * xyz[1] + m[1][2] * xyz[2],
            m[2][0] * xyz[0] + m[2][1] * xyz[1] + m[2][2] * xyz[2],
        ]
    }

    /// Rotate a point about the origin.
    pub fn apply(&self, point: Point) -> Point {
        self.apply_xyz(point.to_array()).into()
    }
}
impl fmt::Display for AxisRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deg around {:.1}", self.angle_deg, self.axis)
    }
}

const IDENTITY: [[f64; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_point_eq(a: Point, b: Point) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn zero_angle_or_zero_axis_is_identity() {
        assert!(AxisRotation::new(0.0, GeoVector::zhat()).is_identity());
        assert!(AxisRotation::new(180.0, GeoVector::zero()).is_identity());
        assert!(AxisRotation::identity().is_identity());
        let p = Point::new(1.5, -2.0, 3.25);
        assert_eq!(AxisRotation::new(77.0, GeoVector::zero()).apply(p), p);
    }

    #[test]
    fn half_turn_around_z_negates_x_and_y() {
        let rotation = AxisRotation::new(180.0, GeoVector::zhat());
        let p = rotation.apply(Point::new(1.0, 2.0, 3.0));
        assert_point_eq(p, Point::new(-1.0, -2.0, 3.0));
    }

    #[test]
    fn combined_axes_make_a_single_rotation() {
        // 120 degrees around the main diagonal cycles the basis vectors
        let rotation = AxisRotation::new(120.0, GeoVector::new(1.0, 1.0, 1.0));
        assert_point_eq(rotation.apply(Point::new(1.0, 0.0, 0.0)), Point::new(0.0, 1.0, 0.0));
        assert_point_eq(rotation.apply(Point::new(0.0, 1.0, 0.0)), Point::new(0.0, 0.0, 1.0));
        assert_point_eq(rotation.apply(Point::new(0.0, 0.0, 1.0)), Point::new(1.0, 0.0, 0.0));

        // Sequential x, y, z rotations by the same angle send x somewhere else
        let sequential = [GeoVector::xhat(), GeoVector::yhat(), GeoVector::zhat()]
            .iter()
            .fold(Point::new(1.0, 0.0, 0.0), |p, axis| AxisRotation::new(120.0, *axis).apply(p));
        assert!(sequential.distance(&Point::new(0.0, 1.0, 0.0)) > 1e-3);
    }

    #[test]
    fn axis_length_does_not_matter() {
        let a = AxisRotation::new(33.0, GeoVector::new(0.0, 1.0, 1.0));
        let b = AxisRotation::new(33.0, GeoVector::new(0.0, 5.0, 5.0));
        for (row_a, row_b) in a.matrix().iter().zip(b.matrix().iter()) {
            for (va, vb) in row_a.iter().zip(row_b.iter()) {
                assert_relative_eq!(*va, *vb, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn inverse_restores_points() {
        let rotation = AxisRotation::new(-417.0, GeoVector::new(1.0, 0.0, 1.0));
        let p = Point::new(0.3, -7.0, 12.5);
        assert_point_eq(rotation.inverse().apply(rotation.apply(p)), p);
    }
}
