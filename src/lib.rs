pub mod args;
pub mod formats;
pub mod geo_3d;
pub mod io;
pub mod mesh;
pub mod rotation;
mod crate_errors;

pub use crate_errors::{
    TrackrotError,
    TrackrotResult,
};
pub use formats::{
    FormatKind,
    LEGACY_FILE_VERSION,
};
pub use mesh::MeshFile;
pub use rotation::{
    rotate,
    RotationError,
    RotationSpec,
    RotationTarget,
};

/// [Stage 1.]
/// Turn the parsed command line into a rotation target.
/// The input format is checked here, before any mesh is read.
/// Returns a `TrackrotResult` with the `RotationTarget` or an `Err`.
pub fn handle_cli_args(cli_args: args::RotationCli) -> TrackrotResult<RotationTarget> {
    Ok(args::build_target(cli_args)?)
}

/// [Stage 2.]
/// Load, rotate and save the mesh described by the target.
/// Returns a `TrackrotResult` with `()` or an `Err`.
pub fn run_process(rotation_target: &RotationTarget) -> TrackrotResult<()> {
    println!("Rotating {} file: {} -> {}",
        rotation_target.format,
        rotation_target.input_path,
        rotation_target.output_path,
    );
    rotation::do_rotation(rotation_target)?;
    println!("Done.");
    Ok(())
}
