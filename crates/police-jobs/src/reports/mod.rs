mod csv;
mod html;
pub mod map;
mod summary;
pub mod table;

pub use self::csv::{render_csv, write_csv, CSV_COLUMNS};
pub use map::{render_map, MarkerBucket};
pub use summary::{CountySummaryEntry, RunSummary};
pub use table::{render_table, TABLE_COLUMNS};

use crate::counties::CountyGroups;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const CSV_FILE_NAME: &str = "indiana_police_jobs.csv";
pub const MAP_FILE_NAME: &str = "indiana_police_jobs_map.html";
pub const TABLE_FILE_NAME: &str = "indiana_police_jobs_table.html";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode csv: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to render html: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Locations of the three artifacts written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub csv: PathBuf,
    pub map: PathBuf,
    pub table: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(directory: &Path) -> Self {
        Self {
            csv: directory.join(CSV_FILE_NAME),
            map: directory.join(MAP_FILE_NAME),
            table: directory.join(TABLE_FILE_NAME),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.csv.as_path(), self.map.as_path(), self.table.as_path()].into_iter()
    }
}

/// Renders every artifact, then writes them into `directory`, overwriting
/// earlier runs. Nothing is written if rendering fails.
pub fn write_artifacts(
    groups: &CountyGroups,
    directory: &Path,
) -> Result<ArtifactPaths, ReportError> {
    let paths = ArtifactPaths::in_dir(directory);

    let csv = render_csv(groups)?;
    let map = render_map(groups)?;
    let table = render_table(groups)?;

    write_file(&paths.csv, &csv)?;
    info!(path = %paths.csv.display(), "saved jobs to csv");
    write_file(&paths.map, &map)?;
    info!(path = %paths.map.display(), "saved map");
    write_file(&paths.table, &table)?;
    info!(path = %paths.table.display(), "saved table report");

    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postings::sample_postings;

    #[test]
    fn artifacts_land_in_the_output_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (groups, _) = CountyGroups::classify(sample_postings("https://board.test/"));

        let paths = write_artifacts(&groups, dir.path()).expect("artifacts written");

        assert_eq!(paths.csv, dir.path().join("indiana_police_jobs.csv"));
        for path in paths.iter() {
            assert!(path.is_file(), "{} missing", path.display());
        }
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("not-here");

        let err = write_artifacts(&CountyGroups::default(), &missing).expect_err("should fail");
        match err {
            ReportError::Io { path, .. } => assert_eq!(path, missing.join(CSV_FILE_NAME)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
