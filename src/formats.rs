/*!
 * This is the mesh file formats module.
 * Adding new formats should be done here.
 *
 * New formats need:
 * - A variant in `FormatKind`
 * - A struct implementing `MeshFormat`
 * - An enum variant containing that struct in `FormatChoice`
 * - A suffix and constructor in `FORMAT_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;
use strum::{Display, EnumIter};

use crate::io;
use crate::mesh::MeshFile;
use crate::rotation;

//
// ------------------------------------------------------------
// Code that requires modification to add a new format
//      |
//      V
//

// Source files for the formats
mod legacy_poly_data;
mod xml_poly_data;

pub use legacy_poly_data::LEGACY_FILE_VERSION;

/// Supported on-disk mesh formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter)]
pub enum FormatKind {
    /// VTK XML PolyData (`.vtp`).
    #[strum(serialize = "VTK XML PolyData")]
    XmlPolyData,
    /// VTK legacy PolyData (`.vtk`).
    #[strum(serialize = "VTK legacy PolyData")]
    LegacyPolyData,
}

/// Format reader/writer enum.
/// To add a new format:
/// include it here,
/// add its suffix and constructor in `FORMAT_CONSTRUCTION`,
/// and implement the `MeshFormat` trait for it.
#[derive(Debug)]
#[enum_dispatch(MeshFormat)]
pub enum FormatChoice {
    /// XML PolyData reader/writer.
    XmlPolyData(xml_poly_data::Format),
    /// Legacy PolyData reader/writer, pinned to `LEGACY_FILE_VERSION`.
    LegacyPolyData(legacy_poly_data::Format),
}

/// Format construction array -- Written out in once place for easy modification.
/// Suffixes are matched case-sensitively against the end of the input path.
const FORMAT_CONSTRUCTION: &[FormatConstructor] = &[
    FormatConstructor{
        suffix: "vtp",
        kind: FormatKind::XmlPolyData,
        constructor: || {FormatChoice::XmlPolyData(xml_poly_data::Format::new())},
    },
    FormatConstructor{
        suffix: "vtk",
        kind: FormatKind::LegacyPolyData,
        constructor: || {FormatChoice::LegacyPolyData(legacy_poly_data::Format::new())},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new format
//      |
//      V
//

/// Mesh format trait.
/// A reader/writer pair for one on-disk format.
#[enum_dispatch]
pub trait MeshFormat {
    /// Get the format handled.
    fn get_format_kind(&self) -> FormatKind;

    /// Load a mesh from a file.
    fn read_mesh(&self, input_path: &str) -> io::IoResult<MeshFile>;

    /// Write a mesh to a file, overwriting it if it exists.
    fn write_mesh(&self, mesh: MeshFile, output_path: &str) -> io::IoResult<()>;
}

/// Format constructor.
struct FormatConstructor {
    /// Path suffix selecting the format.
    suffix: &'static str,
    /// Format kind built.
    kind: FormatKind,
    /// Constructor function.
    constructor: fn() -> FormatChoice,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

impl FormatKind {
    /// Detect the format from the end of a path.
    pub fn from_path(path: &str) -> Option<Self> {
        FORMAT_CONSTRUCTION.iter()
            .find(|constructor| path.ends_with(constructor.suffix))
            .map(|constructor| constructor.kind)
    }

    /// The path suffix for this format.
    pub fn suffix(&self) -> &'static str {
        FORMAT_CONSTRUCTION.iter()
            .find(|constructor| constructor.kind == *self)
            .map(|constructor| constructor.suffix)
            .unwrap_or_default()
    }
}

impl FormatChoice {
    /// Construct the reader/writer pair from the input path suffix.
    pub fn from_path(path: &str) -> rotation::ProcResult<Self> {
        match FORMAT_CONSTRUCTION.iter().find(|constructor| path.ends_with(constructor.suffix)) {
            Some(constructor) => Ok((constructor.constructor)()),
            None => Err(rotation::RotationError::UnrecognizedFormat(unrecognized_format_str(path))),
        }
    }
}

/// Message for a path that matches no format.
pub fn unrecognized_format_str(path: &str) -> String {
    let suffixes = FORMAT_CONSTRUCTION.iter()
        .map(|constructor| constructor.suffix)
        .collect::<Vec<_>>()
        .join(" or ");
    format!("Unrecognized input file: {}. Must be {}.", path, suffixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn suffix_selects_format() {
        assert_eq!(FormatKind::from_path("mesh.vtp"), Some(FormatKind::XmlPolyData));
        assert_eq!(FormatKind::from_path("dir.v1/track.vtk"), Some(FormatKind::LegacyPolyData));
        // Only the last three characters count
        assert_eq!(FormatKind::from_path("trackvtk"), Some(FormatKind::LegacyPolyData));
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(FormatKind::from_path("mesh.VTP"), None);
        assert_eq!(FormatKind::from_path("mesh.obj"), None);
        assert_eq!(FormatKind::from_path("mesh.vtu"), None);
        assert_eq!(FormatKind::from_path(""), None);
    }

    #[test]
    fn every_kind_has_a_constructor() {
        for kind in FormatKind::iter() {
            let path = format!("file.{}", kind.suffix());
            assert_eq!(FormatKind::from_path(&path), Some(kind));
            assert_eq!(FormatChoice::from_path(&path).unwrap().get_format_kind(), kind);
        }
    }

    #[test]
    fn unknown_suffix_is_unrecognized_format() {
        match FormatChoice::from_path("model.obj") {
            Err(rotation::RotationError::UnrecognizedFormat(msg)) => {
                assert!(msg.contains("model.obj"));
                assert!(msg.contains("vtp or vtk"));
            },
            other => panic!("Expected UnrecognizedFormat, got {:?}", other),
        }
    }
}
