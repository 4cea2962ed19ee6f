use crate::run::{build_pipeline, execute, render_summary, PipelineArgs};
use clap::Args;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use police_jobs::config::AppConfig;
use police_jobs::error::AppError;
use police_jobs::reports::ArtifactPaths;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

const WRITE_PROBE: &str = ".indiana-police-jobs-write-check";

#[derive(Args, Debug, Default)]
pub(crate) struct LaunchArgs {
    #[command(flatten)]
    pub(crate) pipeline: PipelineArgs,
    /// Skip the offer to open the map when the run finishes
    #[arg(long)]
    pub(crate) no_prompt: bool,
}

pub(crate) fn launch(config: AppConfig, args: LaunchArgs) -> Result<(), AppError> {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("Indiana Police Jobs Scraper and Mapper");
    println!("{rule}");
    println!();

    let pipeline = build_pipeline(&config, &args.pipeline);
    if let Err(err) = preflight(pipeline.output_dir()) {
        println!(
            "✗ Output directory is not writable: {}",
            pipeline.output_dir().display()
        );
        return Err(err.into());
    }
    println!(
        "✓ Output directory is writable: {}",
        pipeline.output_dir().display()
    );

    println!();
    println!("Starting the scraper...");
    println!("This will:");
    println!("1. Scrape job opportunities from the ILEA website");
    println!("2. Create an interactive map showing job locations");
    println!("3. Save data to a CSV file and an HTML table report");
    println!();

    let outcome = execute(&config, &pipeline, args.pipeline.today)?;
    print!("{}", render_summary(&outcome.summary(), &outcome.artifacts));

    println!();
    println!("{rule}");
    println!("SCRAPER COMPLETED SUCCESSFULLY!");
    println!("{rule}");
    print!("{}", artifact_report(&outcome.artifacts));

    println!();
    println!("To view the interactive map:");
    println!(
        "1. Open {} in your web browser",
        outcome.artifacts.map.display()
    );
    println!("2. Or run `indiana-police-jobs launch` and answer yes below");

    if !args.no_prompt {
        offer_to_open(&outcome.artifacts.map);
    }

    println!();
    println!("Thank you for using the Indiana Police Jobs Scraper!");
    Ok(())
}

/// Creates the output directory if needed and proves a file can be written there.
pub(crate) fn preflight(directory: &Path) -> io::Result<()> {
    fs::create_dir_all(directory)?;
    let probe = directory.join(WRITE_PROBE);
    fs::write(&probe, b"ok")?;
    fs::remove_file(&probe)
}

pub(crate) fn artifact_report(artifacts: &ArtifactPaths) -> String {
    let mut out = String::new();
    for (label, path) in [
        ("Interactive map created", artifacts.map.as_path()),
        ("Jobs table created", artifacts.table.as_path()),
        ("Job data saved", artifacts.csv.as_path()),
    ] {
        match fs::metadata(path) {
            Ok(metadata) => {
                out.push_str(&format!("✓ {label}: {}\n", path.display()));
                out.push_str(&format!("  File size: {} bytes\n", metadata.len()));
            }
            Err(_) => out.push_str(&format!("✗ File not found: {}\n", path.display())),
        }
    }
    out
}

fn offer_to_open(map: &Path) {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Would you like to open the map in your browser now?")
        .default(false)
        .interact_opt();

    match answer {
        Ok(Some(true)) => {
            println!("Opening map in browser...");
            if let Err(err) = open::that(map) {
                warn!(error = %err, path = %map.display(), "failed to open map");
            }
        }
        Ok(Some(false)) => {}
        Ok(None) => println!("\nMap opening cancelled."),
        Err(err) => {
            warn!(error = %err, "prompt unavailable");
            println!("\nMap opening cancelled.");
        }
    }
}
