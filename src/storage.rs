use crate::error::ProcessError;
use crate::task::ProcessedTask;
use serde_json::Value;
use std::fs::{self, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// File locations for one processing run
pub struct Storage {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl Storage {
    pub fn new(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn load(&self) -> Result<Value, ProcessError> {
        read_input(&self.input_path)
    }

    pub fn save(&self, tasks: &[ProcessedTask]) -> Result<(), ProcessError> {
        write_output(&self.output_path, tasks)
    }
}

/// Read and parse the input document
///
/// Missing files and permission problems get their own error variants;
/// anything the JSON parser rejects becomes `MalformedJson`.
pub fn read_input(path: &Path) -> Result<Value, ProcessError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ProcessError::InputNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => ProcessError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ProcessError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let data = serde_json::from_str(&content).map_err(|source| ProcessError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Successfully read input file: {}", path.display());
    Ok(data)
}

/// Write the processed records as pretty-printed JSON
///
/// The document goes to a uniquely named temporary file in the destination
/// directory and is then renamed over the destination, so the output path
/// only ever holds a complete document. An existing read-only destination is
/// refused, a symlinked destination is written through to its target, and an
/// existing file keeps its permissions.
pub fn write_output(path: &Path, tasks: &[ProcessedTask]) -> Result<(), ProcessError> {
    let content = serde_json::to_string_pretty(tasks).map_err(ProcessError::Serialize)?;

    let (target, permissions) = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|source| write_error(path, source))?;
    debug!("Writing output to temporary file {}", temp.path().display());

    temp.write_all(content.as_bytes())
        .map_err(|source| write_error(path, source))?;
    if let Some(permissions) = permissions {
        fs::set_permissions(temp.path(), permissions)
            .map_err(|source| write_error(path, source))?;
    }
    temp.persist(&target)
        .map_err(|e| write_error(path, e.error))?;

    info!("Successfully wrote output file: {}", path.display());
    Ok(())
}

// Follows symlinks, so the returned path is the file that actually gets replaced.
fn resolve_target(path: &Path) -> Result<(PathBuf, Option<Permissions>), ProcessError> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.permissions().readonly() => {
            Err(ProcessError::WritePermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Ok(metadata) => {
            let target = fs::canonicalize(path).map_err(|source| write_error(path, source))?;
            Ok((target, Some(metadata.permissions())))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok((path.to_path_buf(), None)),
        Err(source) => Err(write_error(path, source)),
    }
}

fn write_error(path: &Path, source: std::io::Error) -> ProcessError {
    match source.kind() {
        ErrorKind::PermissionDenied => ProcessError::WritePermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ProcessError::Write {
            path: path.to_path_buf(),
            source,
        },
    }
}
