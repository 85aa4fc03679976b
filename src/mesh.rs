use vtkio::model::{
    DataSet,
    IOBuffer,
    Piece,
    PolyDataPiece,
    Version,
    Vtk,
};

use crate::geo_3d::{AxisRotation, Point};
use crate::io;

/// A polygonal mesh loaded from a VTK file.
/// Holds the PolyData pieces (points, connectivity, attributes)
/// and the rest of the file header so it can be written back unchanged.
#[derive(Debug)]
pub struct MeshFile {
    /// Path the mesh was read from, used in error messages.
    path: String,
    /// File header and data set shell, with the pieces taken out.
    vtk: Vtk,
    /// Inline PolyData pieces, in file order.
    pieces: Vec<PolyDataPiece>,
}
impl MeshFile {
    /// Wrap a parsed VTK file.
    /// Fails if the data set is not PolyData or a piece is stored in another file.
    pub fn from_vtk(mut vtk: Vtk, path: &str) -> io::IoResult<Self> {
        let pieces = match &mut vtk.data {
            DataSet::PolyData { pieces, .. } => std::mem::take(pieces),
            _ => return io::err_file_str(path, "Data set is not PolyData"),
        };

        let pieces = pieces.into_iter()
            .map(|piece| match piece {
                Piece::Inline(piece) => Ok(*piece),
                _ => io::err_file_str(path, "Only inline PolyData pieces are supported"),
            })
            .collect::<io::IoResult<Vec<_>>>()?;

        for piece in pieces.iter() {
            coords_len(&piece.points, path)?;
        }

        Ok(MeshFile{path: path.to_string(), vtk, pieces})
    }

    /// Put the pieces back and hand the VTK model over to a writer.
    pub fn into_vtk(self) -> Vtk {
        let MeshFile{mut vtk, pieces, ..} = self;
        if let DataSet::PolyData { pieces: vtk_pieces, .. } = &mut vtk.data {
            *vtk_pieces = pieces.into_iter()
                .map(|piece| Piece::Inline(Box::new(piece)))
                .collect();
        }
        vtk
    }

    /// File format version from the header.
    pub fn version(&self) -> &Version {
        &self.vtk.version
    }

    /// Overwrite the file format version written to the header.
    pub fn set_version(&mut self, version: Version) {
        self.vtk.version = version;
    }

    /// PolyData pieces (points, verts, lines, polys, strips, attributes).
    pub fn pieces(&self) -> &[PolyDataPiece] {
        &self.pieces
    }

    /// Total number of points over all pieces.
    pub fn num_points(&self) -> usize {
        self.pieces.iter()
            .map(|piece| coords_len(&piece.points, &self.path).unwrap_or(0) / 3)
            .sum()
    }

    /// All points of all pieces, in file order.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::<Point>::with_capacity(self.num_points());
        for piece in self.pieces.iter() {
            match &piece.points {
                IOBuffer::F32(coords) => points.extend(coords.chunks_exact(3)
                    .map(|xyz| Point::new(xyz[0] as f64, xyz[1] as f64, xyz[2] as f64))),
                IOBuffer::F64(coords) => points.extend(coords.chunks_exact(3)
                    .map(|xyz| Point::new(xyz[0], xyz[1], xyz[2]))),
                _ => {},
            }
        }
        points
    }

    /// Rotate every point about the origin, producing the rotated mesh.
    /// Coordinates keep their storage precision; connectivity and attributes are untouched.
    pub fn rotated(mut self, rotation: &AxisRotation) -> io::IoResult<Self> {
        if rotation.is_identity() {
            return Ok(self);
        }
        for piece in self.pieces.iter_mut() {
            match &mut piece.points {
                IOBuffer::F32(coords) => {
                    for xyz in coords.chunks_exact_mut(3) {
                        let rotated = rotation.apply_xyz([xyz[0] as f64, xyz[1] as f64, xyz[2] as f64]);
                        xyz[0] = rotated[0] as f32;
                        xyz[1] = rotated[1] as f32;
                        xyz[2] = rotated[2] as f32;
                    }
                },
                IOBuffer::F64(coords) => {
                    for xyz in coords.chunks_exact_mut(3) {
                        let rotated = rotation.apply_xyz([xyz[0], xyz[1], xyz[2]]);
                        xyz.copy_from_slice(&rotated);
                    }
                },
                _ => return io::err_file_str(&self.path, "Point coordinates must be Float32 or Float64"),
            }
        }
        Ok(self)
    }
}

/// Number of coordinate values in a point buffer.
/// Only floating point buffers holding whole xyz triples are accepted.
fn coords_len(buffer: &IOBuffer, path: &str) -> io::IoResult<usize> {
    let len = match buffer {
        IOBuffer::F32(coords) => coords.len(),
        IOBuffer::F64(coords) => coords.len(),
        _ => return io::err_file_str(path, "Point coordinates must be Float32 or Float64"),
    };
    if len % 3 != 0 {
        return io::err_file_str(path, &format!("Point buffer length {} is not a multiple of 3", len));
    }
    Ok(len)
}
