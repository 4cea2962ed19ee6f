use chrono::NaiveDate;
use police_jobs::pipeline::{JobsPipeline, PipelineOutcome};
use police_jobs::postings::{DataSource, FetchError, PageSource};
use std::fs;
use std::path::Path;

const BOARD_URL: &str = "https://board.test/jobs/";
const FIXTURE: &str = include_str!("fixtures/bulletin_board.html");

#[derive(Debug)]
struct Offline;

impl PageSource for Offline {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        Err(FetchError::Status {
            url: url.to_string(),
            status: 503,
        })
    }
}

#[derive(Debug)]
struct FixturePage;

impl PageSource for FixturePage {
    fn fetch_page(&self, _url: &str) -> Result<String, FetchError> {
        Ok(FIXTURE.to_string())
    }
}

fn run_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).expect("valid run date")
}

fn run(source: &dyn PageSource, dir: &Path, day: u32) -> PipelineOutcome {
    JobsPipeline::new(BOARD_URL, dir)
        .run(source, run_date(day))
        .expect("pipeline succeeds")
}

fn csv_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("csv opens");
    reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("csv parses")
}

#[test]
fn offline_run_writes_sample_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outcome = run(&Offline, dir.path(), 1);

    assert_eq!(outcome.data_source, DataSource::Sample);
    let rows = csv_rows(&outcome.artifacts.csv);
    assert_eq!(rows.len(), 3);

    let mut counties: Vec<&str> = outcome.groups.iter().map(|(county, _)| county).collect();
    counties.sort_unstable();
    assert_eq!(counties, ["Allen", "Marion", "Vanderburgh"]);

    let map = fs::read_to_string(&outcome.artifacts.map).expect("map readable");
    let table = fs::read_to_string(&outcome.artifacts.table).expect("table readable");
    for department in [
        "Indianapolis Metropolitan Police Department",
        "Fort Wayne Police Department",
        "Evansville Police Department",
    ] {
        assert!(map.contains(department), "map lacks {department}");
        assert!(table.contains(department), "table lacks {department}");
    }
}

#[test]
fn fixture_page_is_extracted_and_classified() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outcome = run(&FixturePage, dir.path(), 1);

    assert_eq!(outcome.data_source, DataSource::Live);
    assert_eq!(outcome.unclassified, 1);

    let lake = outcome.groups.get("Lake").expect("lake group");
    assert_eq!(lake[0].location, "Lake County");
    assert_eq!(lake[0].closing_date.as_deref(), Some("MARCH 14, 2025"));
    assert_eq!(lake[0].contact_info, "hr@lakecountyin.gov; (219) 755-3000");
    assert_eq!(lake[0].ilea_link, "https://board.test/jobs/#lake-sheriff");

    let hamilton = outcome.groups.get("Hamilton").expect("carmel resolves to hamilton");
    assert_eq!(hamilton[0].department, "Carmel Police Department");

    let table = fs::read_to_string(&outcome.artifacts.table).expect("table readable");
    assert!(table.contains("Lake County - 1 Job(s)"));
    assert!(!table.contains("Indiana Excise Police"));
}

#[test]
fn csv_county_matches_report_groups() {
    let dir = tempfile::tempdir().expect("temp dir");
    let outcome = run(&FixturePage, dir.path(), 1);

    let rows = csv_rows(&outcome.artifacts.csv);
    assert_eq!(rows.len(), outcome.groups.total_jobs());
    for row in &rows {
        let department = row.get(0).expect("department column");
        let county = row.get(8).expect("county column");
        let grouped = outcome.groups.get(county).expect("county has a group");
        assert!(grouped.iter().any(|job| job.department == department));
    }

    let map = fs::read_to_string(&outcome.artifacts.map).expect("map readable");
    for (county, records) in outcome.groups.iter() {
        let tooltip = format!("{county} County: {} job(s)", records.len());
        assert!(map.contains(&tooltip), "map lacks {tooltip}");
    }
}

#[test]
fn repeated_runs_differ_only_in_posted_date() {
    let first_dir = tempfile::tempdir().expect("temp dir");
    let second_dir = tempfile::tempdir().expect("temp dir");
    let first = run(&FixturePage, first_dir.path(), 1);
    let second = run(&FixturePage, second_dir.path(), 2);

    let strip_date = |rows: Vec<csv::StringRecord>| -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().take(9).map(str::to_string).collect())
            .collect()
    };
    let first_rows = csv_rows(&first.artifacts.csv);
    let second_rows = csv_rows(&second.artifacts.csv);
    assert_eq!(&first_rows[0][9], "2025-03-01");
    assert_eq!(&second_rows[0][9], "2025-03-02");
    assert_eq!(strip_date(first_rows), strip_date(second_rows));

    let same_day = tempfile::tempdir().expect("temp dir");
    let repeat = run(&FixturePage, same_day.path(), 1);
    assert_eq!(
        fs::read(&first.artifacts.csv).expect("first csv"),
        fs::read(&repeat.artifacts.csv).expect("repeat csv")
    );
}
