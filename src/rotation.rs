mod cfg;
mod proc_errors;

use crate::formats::{FormatChoice, MeshFormat};

// Re-export errors
pub use proc_errors::{
    RotationError,
    ProcResult,
};
// Re-export cfg handling
pub use cfg::{
    DEFAULT_ANGLE,
    RotationArgs,
    RotationSpec,
    RotationTarget,
};

/// Rotate a mesh file by `angle_deg` degrees around the vector `(axis_x, axis_y, axis_z)`.
/// The output is written in the same format as the input.
/// Several axis indicators make one combined axis, not a sequence of rotations.
/// Returns a `ProcResult` with `()` or an `Err`.
pub fn rotate(
    input_path: &str,
    output_path: &str,
    angle_deg: i32,
    axis_x: u8,
    axis_y: u8,
    axis_z: u8,
) -> ProcResult<()> {
    rotate_with_spec(input_path, output_path, &RotationSpec::new(angle_deg, axis_x, axis_y, axis_z))
}

/// Run the rotation process on a target.
pub fn do_rotation(rotation_target: &RotationTarget) -> ProcResult<()> {
    rotate_with_spec(&rotation_target.input_path, &rotation_target.output_path, &rotation_target.spec)
}

/// Load, rotate and save a mesh.
/// The format is resolved before any file is touched.
pub fn rotate_with_spec(input_path: &str, output_path: &str, spec: &RotationSpec) -> ProcResult<()> {
    // 1. Select the reader/writer pair from the input suffix
    let format = FormatChoice::from_path(input_path)?;

    // 2. Load the mesh
    println!("Loading {} file: {}...", format.get_format_kind(), input_path);
    let mesh = format.read_mesh(input_path)?;

    // 3. Build the single combined rotation
    let rotation = spec.to_rotation();
    if spec.axis_vector().is_zero() {
        log::warn!("No rotation axis selected, the mesh is written unrotated");
    }
    else if rotation.is_identity() {
        log::warn!("Rotation angle is 0, the mesh is written unrotated");
    }
    log::debug!("Rotation matrix: {:?}", rotation.matrix());

    // 4. Rotate every point
    println!("Rotating {} points by {}...", mesh.num_points(), rotation);
    let mesh = mesh.rotated(&rotation)?;

    // 5. and 6. Write in the input format (legacy files get their version tag here)
    println!("Saving rotated mesh to {}...", output_path);
    format.write_mesh(mesh, output_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_format_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("model.obj");
        let output = dir.path().join("rotated.obj");
        std::fs::write(&input, "v 1 0 0\n").unwrap();

        let result = rotate(input.to_str().unwrap(), output.to_str().unwrap(), 90, 0, 0, 1);
        assert!(matches!(result, Err(RotationError::UnrecognizedFormat(_))));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.vtk");
        let output = dir.path().join("rotated.vtk");

        let result = rotate(input.to_str().unwrap(), output.to_str().unwrap(), 180, 0, 0, 1);
        match result {
            Err(RotationError::IoError(error)) => assert_eq!(error.file.as_deref(), input.to_str()),
            other => panic!("Expected IoError, got {:?}", other),
        }
        assert!(!output.exists());
    }
}
