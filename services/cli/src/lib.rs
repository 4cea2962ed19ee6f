mod cli;
mod launcher;
mod run;

use police_jobs::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
