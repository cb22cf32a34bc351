mod column;

use crate::pull_request::PullRequestRecord;
use chrono::FixedOffset;
use column::COLUMNS;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("Failed to write CSV")]
    Serialize {
        #[source]
        cause: csv::Error,
    },
}

/// Creates (or truncates) `path` and writes the report to it.
///
/// Nothing is cleaned up if serialization fails half way.
pub fn write(
    path: impl AsRef<Path>,
    records: &[PullRequestRecord],
    zone: &FixedOffset,
) -> Result<(), Error> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|cause| Error::CreateFile {
        path: path.to_path_buf(),
        cause,
    })?;

    write_to(file, records, zone)
}

/// Writes the header row followed by one row per record.
pub fn write_to<W: Write>(
    writer: W,
    records: &[PullRequestRecord],
    zone: &FixedOffset,
) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(COLUMNS.iter().map(|column| column.header))
        .map_err(|cause| Error::Serialize { cause })?;

    for record in records {
        writer
            .write_record(COLUMNS.iter().map(|column| column.value(record, zone)))
            .map_err(|cause| Error::Serialize { cause })?;
    }

    writer.flush().map_err(|cause| Error::Serialize {
        cause: cause.into(),
    })
}
