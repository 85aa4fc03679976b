use serde::{Serialize, Deserialize};

use crate::args;
use crate::formats::FormatKind;
use crate::geo_3d::{AxisRotation, GeoVector};

/// Default rotation angle in degrees.
pub const DEFAULT_ANGLE: i32 = 180;

fn default_angle() -> i32 {
    DEFAULT_ANGLE
}

/// Arguments for the rotation process.
/// Filled from the command line or from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationArgs {
    /// Input mesh path (must end in vtp or vtk).
    #[serde(alias = "input", alias = "in", alias = "i")]
    pub input_path: String,

    /// Output mesh path, written in the input's format.
    #[serde(alias = "output", alias = "out", alias = "o")]
    pub output_path: String,

    /// Rotation angle in degrees.
    #[serde(default = "default_angle", alias = "a")]
    pub angle: i32,

    /// Include the x axis in the rotation vector.
    #[serde(default, alias = "x")]
    pub x_axis: bool,

    /// Include the y axis in the rotation vector.
    #[serde(default, alias = "y")]
    pub y_axis: bool,

    /// Include the z axis in the rotation vector.
    #[serde(default, alias = "z")]
    pub z_axis: bool,
}

/// Rotation angle and axis indicators.
/// Every non-zero indicator joins a single combined axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSpec {
    /// Angle in degrees.
    pub angle_deg: i32,
    /// Axis participation indicators, in x, y, z order (0 or 1).
    pub axis: [u8; 3],
}
impl RotationSpec {
    pub fn new(angle_deg: i32, axis_x: u8, axis_y: u8, axis_z: u8) -> Self {
        RotationSpec{angle_deg, axis: [axis_x, axis_y, axis_z]}
    }

    /// The combined axis vector.
    pub fn axis_vector(&self) -> GeoVector {
        GeoVector::new(self.axis[0] as f64, self.axis[1] as f64, self.axis[2] as f64)
    }

    /// The single rotation around the combined axis.
    pub fn to_rotation(&self) -> AxisRotation {
        AxisRotation::new(self.angle_deg as f64, self.axis_vector())
    }
}
impl From<&RotationArgs> for RotationSpec {
    fn from(rotation_args: &RotationArgs) -> Self {
        RotationSpec::new(
            rotation_args.angle,
            rotation_args.x_axis as u8,
            rotation_args.y_axis as u8,
            rotation_args.z_axis as u8,
        )
    }
}

/// Rotation target struct.
/// Contains the validated paths, the detected format and the rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationTarget {
    /// Input mesh path.
    pub input_path: String,
    /// Output mesh path.
    pub output_path: String,
    /// Format shared by input and output.
    pub format: FormatKind,
    /// Rotation to apply.
    pub spec: RotationSpec,
}
impl RotationTarget {
    /// Construct a rotation target from arguments, checking the input format.
    pub fn from_args(rotation_args: &RotationArgs) -> args::ProcResult<Self> {
        let format = match FormatKind::from_path(&rotation_args.input_path) {
            Some(format) => format,
            None => return args::err_str(&crate::formats::unrecognized_format_str(&rotation_args.input_path)),
        };

        if rotation_args.output_path.is_empty() {
            args::err_str("Output path is empty")?;
        }

        Ok(RotationTarget{
            input_path: rotation_args.input_path.clone(),
            output_path: rotation_args.output_path.clone(),
            format,
            spec: RotationSpec::from(rotation_args),
        })
    }

    /// Construct a rotation target from a config file (json, toml, yaml).
    pub fn from_cfg_file(cfg_file: &str) -> args::ProcResult<Self> {
        let rotation_args: RotationArgs = crate::io::read_cfg_file(cfg_file)?;
        RotationTarget::from_args(&rotation_args)
    }
}
