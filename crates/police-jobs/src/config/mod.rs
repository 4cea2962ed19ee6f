use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str =
    "https://www.in.gov/ilea/bulletin-board/law-enforcement-job-opportunities/";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; indiana-police-jobs/0.1; +ILEA bulletin board mapper)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration for a scrape run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = env::var("JOBS_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());
        if url.trim().is_empty() {
            return Err(ConfigError::EmptySourceUrl);
        }

        let timeout_secs = match env::var("JOBS_HTTP_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let user_agent =
            env::var("JOBS_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let directory = env::var("JOBS_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string());
        let log_level = env::var("JOBS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            source: SourceConfig {
                url: url.trim().to_string(),
                timeout: Duration::from_secs(timeout_secs),
                user_agent,
            },
            output: OutputConfig {
                directory: PathBuf::from(directory),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_string(),
        }),
    }
}

/// Where the bulletin board lives and how to reach it.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Directory the three artifacts are written into.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptySourceUrl,
    InvalidTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySourceUrl => write!(f, "JOBS_SOURCE_URL must not be empty"),
            ConfigError::InvalidTimeout { value } => write!(
                f,
                "JOBS_HTTP_TIMEOUT_SECS must be a positive number of seconds (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
