// File: crates/weather-core/src/export.rs
// Summary: One-shot export of the record list to a date-stamped JSON or CSV file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::ExportFormat;
use crate::record::WeatherRecord;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode JSON for {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode CSV for {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ExportError {
    pub fn path(&self) -> &Path {
        match self {
            ExportError::Io { path, .. } | ExportError::Json { path, .. } | ExportError::Csv { path, .. } => path,
        }
    }
}

/// `<slug>_weather_<YYYYMMDD>.<ext>`
pub fn export_file_name(slug: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!("{}_weather_{}.{}", slug, date.format("%Y%m%d"), format.extension())
}

/// Array of objects, two-space indentation.
pub fn write_json<W: Write>(records: &[WeatherRecord], writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, records)
}

/// Header row `date,city,temperature,humidity,condition`, then one row per record.
pub fn write_csv<W: Write>(records: &[WeatherRecord], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` into `dir` and return the file's path. The directory must exist.
/// Output goes to a temporary file in `dir` that is renamed into place once
/// complete, so a failed export leaves no partial file behind.
pub fn export_records(
    records: &[WeatherRecord],
    dir: &Path,
    slug: &str,
    date: NaiveDate,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(slug, date, format));
    let io_err = |source: std::io::Error| ExportError::Io { path: path.clone(), source };

    let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    let mut out = BufWriter::new(tmp);
    write_records(records, format, &mut out, &path)?;
    let tmp = out.into_inner().map_err(|e| io_err(e.into_error()))?;
    tmp.persist(&path).map_err(|e| io_err(e.error))?;
    log::debug!("wrote {} records to {}", records.len(), path.display());
    Ok(path)
}

/// Encode `records` to `writer`; errors name `path`. Writer failures surface as
/// `ExportError::Io` whichever encoder hit them.
pub fn write_records<W: Write>(
    records: &[WeatherRecord],
    format: ExportFormat,
    mut writer: W,
    path: &Path,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => {
            write_json(records, &mut writer).map_err(|source| json_err(path, source))?;
            writer
                .write_all(b"\n")
                .map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
        }
        ExportFormat::Csv => write_csv(records, &mut writer).map_err(|source| csv_err(path, source))?,
    }
    Ok(())
}

/// serde_json wraps writer failures; those are reported as I/O.
fn json_err(path: &Path, source: serde_json::Error) -> ExportError {
    if source.is_io() {
        ExportError::Io { path: path.to_path_buf(), source: source.into() }
    } else {
        ExportError::Json { path: path.to_path_buf(), source }
    }
}

fn csv_err(path: &Path, source: csv::Error) -> ExportError {
    if source.is_io_error() {
        ExportError::Io { path: path.to_path_buf(), source: source.into() }
    } else {
        ExportError::Csv { path: path.to_path_buf(), source }
    }
}
