use std::io::Write;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    Vtk(vtkio::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::Vtk(error) => write!(f, "- VTK Read/Write Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Deserialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    /// Attach a path to an error cause.
    pub fn with_file(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Create an `IoError` with a string cause for a given file.
pub fn err_file_str<T>(path: &str, error_str: &str) -> IoResult<T> {
    Err(IoError::with_file(path, IoErrorType::StringOnly(error_str.to_string())))
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path)
        .map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
/// An existing file at `path` is truncated.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path)
        .map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path)
        .map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes())
        .map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match path.split('.').last(){
        Some("json") => {
            serde_json::from_reader(std::io::BufReader::new(open(path)?))
                .map_err(|error| IoError::with_file(path, IoErrorType::SerdeJson(error)))
        },
        Some("toml") => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| IoError::with_file(path, IoErrorType::TomlDe(error)))
        },
        Some("yaml") | Some("yml") => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| IoError::with_file(path, IoErrorType::SerdeYaml(error)))
        },
        _ => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            err_file_str(path, &error_string)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Dummy {
        value: i32,
    }

    #[test]
    fn open_missing_file_names_the_path() {
        let err = open("definitely/not/here.vtk").unwrap_err();
        assert_eq!(err.file.as_deref(), Some("definitely/not/here.vtk"));
        assert!(matches!(err.cause, IoErrorType::File(_)));
        assert!(format!("{}", err).contains("definitely/not/here.vtk"));
    }

    #[test]
    fn cfg_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("cfg.yaml");
        std::fs::write(&yaml_path, "value: 3\n").unwrap();
        let dummy: Dummy = read_cfg_file(yaml_path.to_str().unwrap()).unwrap();
        assert_eq!(dummy.value, 3);

        let json_path = dir.path().join("cfg.json");
        std::fs::write(&json_path, "{\"value\": -4}").unwrap();
        let dummy: Dummy = read_cfg_file(json_path.to_str().unwrap()).unwrap();
        assert_eq!(dummy.value, -4);

        let toml_path = dir.path().join("cfg.toml");
        std::fs::write(&toml_path, "value = 90\n").unwrap();
        let dummy: Dummy = read_cfg_file(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(dummy.value, 90);
    }

    #[test]
    fn cfg_file_rejects_unknown_extension() {
        let err = read_cfg_file::<Dummy>("settings.ini").unwrap_err();
        assert!(matches!(err.cause, IoErrorType::StringOnly(_)));
    }
}
