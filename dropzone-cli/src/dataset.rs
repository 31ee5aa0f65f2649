//! Dataset resolution, loading, and JSON output shared by every command.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use dropzone_core::LocationCollection;
use dropzone_fs::{file_is_file, open_utf8_file};
use serde::Serialize;
use tracing::debug;

use crate::{ARG_DATASET, CliError};

/// Dataset file used when neither a flag, environment variable, nor config
/// file names one.
pub const DEFAULT_DATASET: &str = "poi_dataset.json";

/// Fall back to [`DEFAULT_DATASET`] in the working directory.
pub(crate) fn dataset_or_default(dataset: Option<Utf8PathBuf>) -> Utf8PathBuf {
    dataset.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET))
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load and validate the location dataset at `path`.
pub(crate) fn load_dataset(path: &Utf8Path) -> Result<LocationCollection, CliError> {
    require_existing(path, ARG_DATASET)?;
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDataset {
        path: path.to_path_buf(),
        source,
    })?;
    let collection = LocationCollection::from_reader(BufReader::new(file))
        .and_then(|collection| collection.validate().map(|()| collection))
        .map_err(|source| CliError::LoadDataset {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path,
        named_pois = collection.named_pois.len(),
        landmarks = collection.landmarks.len(),
        "loaded dataset"
    );
    Ok(collection)
}

/// Render `value` as pretty JSON.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = to_pretty_json(value)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
