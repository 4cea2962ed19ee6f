use crate::config::SourceConfig;
use std::fmt::Debug;
use tokio::runtime::{Builder, Runtime};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unable to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("fetch runtime unavailable: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unable to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can hand back the raw HTML of the bulletin board.
pub trait PageSource: Debug {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking facade over the async reqwest client: one GET, no retries.
pub struct HttpPageSource {
    client: reqwest::Client,
    runtime: Runtime,
}

impl HttpPageSource {
    pub fn new(client: reqwest::Client, runtime: Runtime) -> Self {
        Self { client, runtime }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        Ok(Self::new(client, runtime))
    }
}

impl Debug for HttpPageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPageSource").finish_non_exhaustive()
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            response.text().await.map_err(|source| FetchError::Body {
                url: url.to_string(),
                source,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn unreachable_host_reports_request_error() {
        let config = SourceConfig {
            url: "http://127.0.0.1:9/".to_string(),
            timeout: Duration::from_secs(2),
            ..SourceConfig::default()
        };
        let source = HttpPageSource::from_config(&config).expect("client builds");

        let error = source
            .fetch_page(&config.url)
            .expect_err("nothing listens on the discard port");
        match error {
            FetchError::Request { url, .. } => assert_eq!(url, "http://127.0.0.1:9/"),
            other => panic!("expected request error, got {other:?}"),
        }
    }
}
