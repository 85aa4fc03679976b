use clap::Parser;

mod proc_errors;

use crate::rotation::{
    DEFAULT_ANGLE,
    RotationArgs,
    RotationTarget,
};

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Rotate a vtp or vtk track file around a desired axis and by a desired angle.
///
/// Pass -z with the default angle to rotate 180° around z, which converts between the RAS and LPS orientation conventions.
#[derive(Debug, Parser)]
#[command(
    name = "trackrot",
    version,
    after_help = "Note that it is possible to specify a rotation by several distinct axes at the same time, \
but the behavior is not to rotate by one axis and then the other(s). \
Instead the mesh is rotated once, by the angle, around the vector (x, y, z)."
)]
pub struct RotationCli {
    #[arg(short, long = "input", value_name = "FILE", required_unless_present = "cfg_path")]
    /// Input track file (must be vtp or vtk).
    pub input_path: Option<String>,

    #[arg(short, long = "output", value_name = "FILE", required_unless_present = "cfg_path")]
    /// Desired name for output rotated track file (same format as the input).
    pub output_path: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_ANGLE, allow_negative_numbers = true)]
    /// Value of rotation angle, in degrees.
    pub angle: i32,

    #[arg(short = 'x', long = "x_axis")]
    /// Rotation around x axis is done if -x is written.
    pub x_axis: bool,

    #[arg(short = 'y', long = "y_axis")]
    /// Rotation around y axis is done if -y is written.
    pub y_axis: bool,

    #[arg(short = 'z', long = "z_axis")]
    /// Rotation around z axis is done if -z is written.
    pub z_axis: bool,

    #[arg(
        short,
        long = "cfg",
        value_name = "FILE",
        conflicts_with_all = ["input_path", "output_path", "angle", "x_axis", "y_axis", "z_axis"]
    )]
    /// Read the rotation from a config file (.yaml, .json or .toml) instead of the options above.
    pub cfg_path: Option<String>,
}

impl RotationCli {
    /// Collect the command line options into rotation arguments.
    /// Returns `None` when a config file was given instead.
    pub fn rotation_args(&self) -> Option<RotationArgs> {
        match (&self.input_path, &self.output_path) {
            (Some(input_path), Some(output_path)) => Some(RotationArgs{
                input_path: input_path.clone(),
                output_path: output_path.clone(),
                angle: self.angle,
                x_axis: self.x_axis,
                y_axis: self.y_axis,
                z_axis: self.z_axis,
            }),
            _ => None,
        }
    }
}

/// Parse the command line arguments using `clap`.
/// Exits the process with usage help on bad arguments.
pub fn parse_cli_args() -> RotationCli {
    RotationCli::parse()
}

/// Build the rotation target from parsed arguments or from the config file they point to.
pub fn build_target(cli_args: RotationCli) -> ProcResult<RotationTarget> {
    if let Some(cfg_path) = &cli_args.cfg_path {
        println!("Loading rotation config file: {}...", cfg_path);
        return RotationTarget::from_cfg_file(cfg_path);
    }
    match cli_args.rotation_args() {
        Some(rotation_args) => RotationTarget::from_args(&rotation_args),
        None => err_str("Input and output paths are required without a config file"),
    }
}
