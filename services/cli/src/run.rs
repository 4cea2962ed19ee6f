use chrono::{Local, NaiveDate};
use clap::Args;
use police_jobs::config::AppConfig;
use police_jobs::error::AppError;
use police_jobs::pipeline::{JobsPipeline, PipelineOutcome};
use police_jobs::postings::HttpPageSource;
use police_jobs::reports::{ArtifactPaths, RunSummary};
use std::path::PathBuf;

/// Overrides shared by every command that runs the pipeline.
#[derive(Args, Debug, Default)]
pub(crate) struct PipelineArgs {
    /// Bulletin board URL (defaults to JOBS_SOURCE_URL or the ILEA page)
    #[arg(long)]
    pub(crate) source_url: Option<String>,
    /// Directory for the CSV and HTML reports (defaults to JOBS_OUTPUT_DIR or .)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Date stamped on each posting (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    pub(crate) pipeline: PipelineArgs,
    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn build_pipeline(config: &AppConfig, args: &PipelineArgs) -> JobsPipeline {
    let source_url = args
        .source_url
        .clone()
        .unwrap_or_else(|| config.source.url.clone());
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    JobsPipeline::new(source_url, output_dir)
}

pub(crate) fn execute(
    config: &AppConfig,
    pipeline: &JobsPipeline,
    today: Option<NaiveDate>,
) -> Result<PipelineOutcome, AppError> {
    let source = HttpPageSource::from_config(&config.source)?;
    let run_date = today.unwrap_or_else(|| Local::now().date_naive());
    Ok(pipeline.run(&source, run_date)?)
}

pub(crate) fn run_once(config: AppConfig, args: RunArgs) -> Result<(), AppError> {
    let pipeline = build_pipeline(&config, &args.pipeline);
    let outcome = execute(&config, &pipeline, args.pipeline.today)?;
    let summary = outcome.summary();

    if args.json {
        let body = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print!("{}", render_summary(&summary, &outcome.artifacts));
    }

    Ok(())
}

pub(crate) fn render_summary(summary: &RunSummary, artifacts: &ArtifactPaths) -> String {
    let rule = "=".repeat(50);
    let mut out = String::new();

    out.push_str(&format!("\n{rule}\nSUMMARY\n{rule}\n"));
    out.push_str(&format!("Data source: {}\n", summary.data_source_label));
    out.push_str(&format!(
        "Total job opportunities found: {}\n",
        summary.total_jobs
    ));
    out.push_str(&format!(
        "Counties with job opportunities: {}\n",
        summary.county_count
    ));
    for entry in &summary.counties {
        out.push_str(&format!("{} County: {} job(s)\n", entry.county, entry.jobs));
    }
    if summary.unclassified > 0 {
        out.push_str(&format!(
            "Postings without a county match: {}\n",
            summary.unclassified
        ));
    }

    out.push_str("\nFiles created:\n");
    out.push_str(&format!("- {} (Interactive map)\n", artifacts.map.display()));
    out.push_str(&format!("- {} (Jobs table)\n", artifacts.table.display()));
    out.push_str(&format!("- {} (Job data)\n", artifacts.csv.display()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use police_jobs::counties::CountyGroups;
    use police_jobs::postings::{sample_postings, DataSource};
    use std::path::Path;

    #[test]
    fn flags_override_configuration() {
        let config = AppConfig::default();
        let args = PipelineArgs {
            source_url: Some("https://board.test/".to_string()),
            output_dir: Some(PathBuf::from("reports")),
            today: None,
        };

        let pipeline = build_pipeline(&config, &args);
        assert_eq!(pipeline.source_url(), "https://board.test/");
        assert_eq!(pipeline.output_dir(), Path::new("reports"));

        let defaults = build_pipeline(&config, &PipelineArgs::default());
        assert_eq!(defaults.source_url(), config.source.url);
        assert_eq!(defaults.output_dir(), Path::new("."));
    }

    #[test]
    fn summary_lists_counties_and_files() {
        let (groups, _) = CountyGroups::classify(sample_postings("https://board.test/"));
        let summary = RunSummary::new(&groups, DataSource::Sample, 2);
        let artifacts = ArtifactPaths::in_dir(Path::new("out"));

        let text = render_summary(&summary, &artifacts);
        assert!(text.contains("SUMMARY"));
        assert!(text.contains("Total job opportunities found: 3"));
        assert!(text.contains("Counties with job opportunities: 3"));
        assert!(text.contains("Allen County: 1 job(s)\nMarion County: 1 job(s)\n"));
        assert!(text.contains("Postings without a county match: 2"));
        assert!(text.contains("Embedded sample data"));
        assert!(text.contains("indiana_police_jobs_map.html (Interactive map)"));
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-04-01 ").expect("parses"),
            NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date")
        );
        assert!(parse_date("April 1").is_err());
    }
}
