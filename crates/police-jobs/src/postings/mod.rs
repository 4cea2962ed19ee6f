pub mod domain;
mod extractor;
pub mod fields;
mod sample;
pub mod source;

pub use domain::{DataSource, JobRecord, Postings};
pub use extractor::PostingExtractor;
pub use sample::sample_postings;
pub use source::{FetchError, HttpPageSource, PageSource};

use chrono::NaiveDate;
use tracing::{info, warn};

/// Fetches the board and extracts its postings. A failed fetch or an empty
/// extraction both yield the embedded sample set instead of an error.
pub fn collect_postings(source: &dyn PageSource, url: &str, run_date: NaiveDate) -> Postings {
    info!(%url, "scraping job opportunities");

    let html = match source.fetch_page(url) {
        Ok(html) => html,
        Err(err) => {
            warn!(error = %err, "error scraping website, using sample data for demonstration");
            return sample(url);
        }
    };

    let records = PostingExtractor::new(url, run_date).extract(&html);
    if records.is_empty() {
        warn!("no job listings found on website, using sample data for demonstration");
        return sample(url);
    }

    Postings {
        records,
        source: DataSource::Live,
    }
}

fn sample(url: &str) -> Postings {
    Postings {
        records: sample_postings(url),
        source: DataSource::Sample,
    }
}
