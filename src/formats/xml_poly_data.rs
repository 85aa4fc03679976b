use std::io::Write;

use vtkio::model::Vtk;

use crate::formats::{FormatKind, MeshFormat};
use crate::io;
use crate::mesh::MeshFile;

/// VTK XML PolyData reader/writer.
#[derive(Debug)]
pub struct Format;
impl Format {
    pub fn new() -> Self {
        Format
    }
}
impl MeshFormat for Format {
    fn get_format_kind(&self) -> FormatKind {
        FormatKind::XmlPolyData
    }

    fn read_mesh(&self, input_path: &str) -> io::IoResult<MeshFile> {
        let reader = std::io::BufReader::new(io::open(input_path)?);
        let vtk = Vtk::parse_xml(reader)
            .map_err(|error| io::IoError::with_file(input_path, io::IoErrorType::Vtk(error)))?;
        MeshFile::from_vtk(vtk, input_path)
    }

    fn write_mesh(&self, mesh: MeshFile, output_path: &str) -> io::IoResult<()> {
        let mut writer = std::io::BufWriter::new(io::create(output_path)?);
        mesh.into_vtk().write_xml(&mut writer)
            .map_err(|error| io::IoError::with_file(output_path, io::IoErrorType::Vtk(error)))?;
        writer.flush()
            .map_err(|error| io::IoError::with_file(output_path, io::IoErrorType::File(error)))
    }
}
