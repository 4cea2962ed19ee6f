pub mod config;
pub mod counties;
pub mod error;
pub mod pipeline;
pub mod postings;
pub mod reports;
pub mod telemetry;
