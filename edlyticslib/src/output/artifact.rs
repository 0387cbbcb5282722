//! Export artifacts and where they get delivered.
//!
//! An [`ExportArtifact`] is the finished download: file name, content type,
//! and bytes. A [`DownloadSink`] receives it; [`DirectorySink`] saves it to
//! disk and [`MemorySink`] keeps it in memory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::error::DashboardError;
use crate::query::filter::{FilterState, FilteredView};
use crate::Result;

use super::csv::to_csv;
use super::json::JsonExport;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Filtered rows as CSV
    Csv,
    /// Complete state as JSON
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Json => "application/json;charset=utf-8;",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "edtech-analytics-filtered",
            ExportFormat::Json => "edtech-analytics-complete",
        }
    }

    /// `edtech-analytics-filtered-2025-06-01_09-30.csv`
    pub fn filename<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format!(
            "{}-{}.{}",
            self.file_stem(),
            file_timestamp(at),
            self.extension()
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(DashboardError::UnknownFormat(s.to_string())),
        }
    }
}

/// `YYYY-MM-DD_HH-MM` in the timestamp's own zone.
pub fn file_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%Y-%m-%d_%H-%M").to_string()
}

/// A finished export, ready to hand to a [`DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Serialize the current state in `format`.
    pub fn build<Tz: TimeZone>(
        format: ExportFormat,
        data: &Dataset,
        filters: &FilterState,
        view: &FilteredView,
        at: &DateTime<Tz>,
    ) -> Result<Self>
    where
        Tz::Offset: fmt::Display,
    {
        let text = match format {
            ExportFormat::Csv => to_csv(&data.survey, view, filters),
            ExportFormat::Json => JsonExport::new(data, filters, view, at).to_json_pretty()?,
        };

        Ok(ExportArtifact {
            format,
            filename: format.filename(at),
            content_type: format.content_type(),
            bytes: text.into_bytes(),
        })
    }

    pub fn as_text(&self) -> std::result::Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

/// Receives finished exports.
pub trait DownloadSink {
    /// Deliver an artifact, returning where it ended up.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf>;
}

/// Writes artifacts into a directory under their own file names.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.filename);
        fs::write(&path, &artifact.bytes)?;
        tracing::info!(
            path = %path.display(),
            bytes = artifact.bytes.len(),
            content_type = artifact.content_type,
            "export written"
        );
        Ok(path)
    }
}

/// Keeps delivered artifacts in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub delivered: Vec<ExportArtifact>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf> {
        self.delivered.push(artifact.clone());
        Ok(PathBuf::from(&artifact.filename))
    }
}
