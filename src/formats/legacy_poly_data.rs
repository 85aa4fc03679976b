use vtkio::model::{Version, Vtk};

use crate::formats::{FormatKind, MeshFormat};
use crate::io;
use crate::mesh::MeshFile;

/// Legacy file version written to every `.vtk` output.
/// Matches VTK's `VTK_LEGACY_READER_VERSION_4_2`, the revision older readers expect.
pub const LEGACY_FILE_VERSION: Version = Version { major: 4, minor: 2 };

/// First legacy major version storing cells as `OFFSETS`/`CONNECTIVITY` arrays.
/// The parser skips those sections without failing, so such files are refused.
const OFFSETS_CELLS_MAJOR_VERSION: u8 = 5;

/// VTK legacy PolyData reader/writer.
#[derive(Debug)]
pub struct Format {
    /// Version tag for the written file header.
    file_version: Version,
}
impl Format {
    pub fn new() -> Self {
        Format{file_version: LEGACY_FILE_VERSION}
    }
}
impl MeshFormat for Format {
    fn get_format_kind(&self) -> FormatKind {
        FormatKind::LegacyPolyData
    }

    /// Binary legacy sections are big-endian, as VTK writes them.
    /// Files of version 5.0 and later are rejected.
    fn read_mesh(&self, input_path: &str) -> io::IoResult<MeshFile> {
        let reader = std::io::BufReader::new(io::open(input_path)?);
        let vtk = Vtk::parse_legacy_be(reader)
            .map_err(|error| io::IoError::with_file(input_path, io::IoErrorType::Vtk(error)))?;
        if vtk.version.major >= OFFSETS_CELLS_MAJOR_VERSION {
            return io::err_file_str(input_path, &format!(
                "Legacy file version {}.{} (OFFSETS/CONNECTIVITY cells) is not supported. Save it as version 4.2 or older",
                vtk.version.major, vtk.version.minor,
            ));
        }
        MeshFile::from_vtk(vtk, input_path)
    }

    /// Written as ASCII, like VTK's legacy writer does by default.
    fn write_mesh(&self, mut mesh: MeshFile, output_path: &str) -> io::IoResult<()> {
        mesh.set_version(self.file_version);
        log::debug!("Writing legacy file version {}.{}", self.file_version.major, self.file_version.minor);

        let mut buffer = String::new();
        mesh.into_vtk().write_legacy_ascii(&mut buffer)
            .map_err(|error| io::IoError::with_file(output_path, io::IoErrorType::Vtk(error)))?;
        io::write_to_file(output_path, &buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TRACK_V3: &str = "\
# vtk DataFile Version 3.0
two fibers
ASCII
DATASET POLYDATA
POINTS 5 float
0 0 0 1 0 0 2 0.5 0
0 1 1 0 2 1
LINES 2 7
3 0 1 2
2 3 4
";

    const TRACK_V5: &str = "\
# vtk DataFile Version 5.1
one fiber
ASCII
DATASET POLYDATA
POINTS 3 float
0 0 0 1 0 0 2 0.5 0
LINES 2 3
OFFSETS vtktypeint64
0 3
CONNECTIVITY vtktypeint64
0 1 2
";

    #[test]
    fn output_is_tagged_with_legacy_version() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("track.vtk");
        let output = dir.path().join("out.vtk");
        std::fs::write(&input, TRACK_V3).unwrap();

        let format = Format::new();
        let mesh = format.read_mesh(input.to_str().unwrap()).unwrap();
        assert_eq!(mesh.version().major, 3);
        assert_eq!(mesh.num_points(), 5);
        format.write_mesh(mesh, output.to_str().unwrap()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("# vtk DataFile Version 4.2"));

        let reread = format.read_mesh(output.to_str().unwrap()).unwrap();
        assert_eq!(reread.version().major, 4);
        assert_eq!(reread.version().minor, 2);
        let points = reread.points();
        assert_relative_eq!(points[2].x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(points[2].y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn offsets_connectivity_layout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("track_v5.vtk");
        std::fs::write(&input, TRACK_V5).unwrap();

        let err = Format::new().read_mesh(input.to_str().unwrap()).unwrap_err();
        assert!(matches!(err.cause, io::IoErrorType::StringOnly(_)));
        assert_eq!(err.file.as_deref(), input.to_str());
        assert!(err.to_string().contains("5.1"));
    }

    #[test]
    fn binary_big_endian_file_is_read() {
        let mut bytes = b"# vtk DataFile Version 3.0\nbinary fiber\nBINARY\nDATASET POLYDATA\nPOINTS 3 float\n".to_vec();
        for value in [1.0f32, 2.0, 3.0, -1.0, 0.5, 0.0, 4.0, 4.0, -4.0] {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes.extend_from_slice(b"\nLINES 1 4\n");
        for value in [3i32, 0, 1, 2] {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes.push(b'\n');

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("binary.vtk");
        std::fs::write(&input, bytes).unwrap();

        let mesh = Format::new().read_mesh(input.to_str().unwrap()).unwrap();
        let points = mesh.points();
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[1].x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(points[1].y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(points[2].z, -4.0, epsilon = 1e-6);
        assert_eq!(mesh.pieces()[0].lines.as_ref().map(|lines| lines.num_cells()), Some(1));
    }

    #[test]
    fn malformed_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.vtk");
        std::fs::write(&input, "this is not a vtk file\n").unwrap();

        let err = Format::new().read_mesh(input.to_str().unwrap()).unwrap_err();
        assert!(matches!(err.cause, io::IoErrorType::Vtk(_)));
        assert_eq!(err.file.as_deref(), input.to_str());
    }
}
