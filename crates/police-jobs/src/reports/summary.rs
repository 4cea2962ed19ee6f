use crate::counties::CountyGroups;
use crate::postings::DataSource;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountySummaryEntry {
    pub county: String,
    pub jobs: usize,
}

/// End-of-run totals, ready for console or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub data_source: DataSource,
    pub data_source_label: &'static str,
    pub total_jobs: usize,
    pub county_count: usize,
    pub unclassified: usize,
    pub counties: Vec<CountySummaryEntry>,
}

impl RunSummary {
    pub fn new(groups: &CountyGroups, data_source: DataSource, unclassified: usize) -> Self {
        let counties = groups
            .sorted()
            .into_iter()
            .map(|(county, records)| CountySummaryEntry {
                county: county.to_string(),
                jobs: records.len(),
            })
            .collect();

        Self {
            data_source,
            data_source_label: data_source.label(),
            total_jobs: groups.total_jobs(),
            county_count: groups.county_count(),
            unclassified,
            counties,
        }
    }
}
