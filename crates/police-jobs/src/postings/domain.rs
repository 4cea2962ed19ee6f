use serde::Serialize;

/// One posting from the bulletin board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    pub department: String,
    pub location: String,
    pub details: String,
    pub full_description: String,
    pub closing_date: Option<String>,
    pub contact_info: String,
    pub anchor_id: String,
    pub ilea_link: String,
    pub date_posted: String,
    pub county: Option<String>,
}

/// Where the records of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Sample,
}

impl DataSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "ILEA bulletin board",
            Self::Sample => "Embedded sample data (demonstration only)",
        }
    }
}

/// Records produced by the fetch stage, tagged with their provenance.
#[derive(Debug, Clone)]
pub struct Postings {
    pub records: Vec<JobRecord>,
    pub source: DataSource,
}
