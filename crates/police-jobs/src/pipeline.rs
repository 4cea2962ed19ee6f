use crate::counties::CountyGroups;
use crate::postings::{collect_postings, DataSource, PageSource};
use crate::reports::{write_artifacts, ArtifactPaths, ReportError, RunSummary};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Fetch, classify, and report in one pass.
#[derive(Debug, Clone)]
pub struct JobsPipeline {
    source_url: String,
    output_dir: PathBuf,
}

/// Everything a run produced, for the caller to summarise.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub groups: CountyGroups,
    pub data_source: DataSource,
    pub unclassified: usize,
    pub artifacts: ArtifactPaths,
}

impl PipelineOutcome {
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(&self.groups, self.data_source, self.unclassified)
    }
}

impl JobsPipeline {
    pub fn new(source_url: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn output_dir(&self) -> &std::path::Path {
        &self.output_dir
    }

    /// Runs every stage. Fetch problems fall back to sample data; only
    /// output failures are errors.
    pub fn run(
        &self,
        source: &dyn PageSource,
        run_date: NaiveDate,
    ) -> Result<PipelineOutcome, ReportError> {
        info!("starting Indiana police jobs scraper");

        let postings = collect_postings(source, &self.source_url, run_date);
        info!(count = postings.records.len(), "found job postings");

        info!("organizing jobs by county");
        let (groups, unclassified) = CountyGroups::classify(postings.records);
        info!(
            counties = groups.county_count(),
            unclassified, "jobs grouped by county"
        );

        fs::create_dir_all(&self.output_dir).map_err(|source| ReportError::Io {
            path: self.output_dir.clone(),
            source,
        })?;
        let artifacts = write_artifacts(&groups, &self.output_dir)?;

        Ok(PipelineOutcome {
            groups,
            data_source: postings.source,
            unclassified,
            artifacts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postings::FetchError;

    #[derive(Debug)]
    struct Unreachable;

    impl PageSource for Unreachable {
        fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Status {
                url: url.to_string(),
                status: 502,
            })
        }
    }

    #[test]
    fn offline_run_reports_the_sample_set() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("reports");
        let pipeline = JobsPipeline::new("https://board.test/", &output);
        let run_date = NaiveDate::from_ymd_opt(2025, 5, 5).expect("valid date");

        let outcome = pipeline.run(&Unreachable, run_date).expect("pipeline runs");

        assert_eq!(outcome.data_source, DataSource::Sample);
        assert_eq!(outcome.groups.total_jobs(), 3);
        assert_eq!(outcome.summary().county_count, 3);
        assert!(outcome.artifacts.map.starts_with(&output));
        assert!(outcome.artifacts.map.is_file());
    }
}
