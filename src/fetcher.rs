use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Everything that makes the collector fall back to sample data.
#[derive(Debug, thiserror::Error)]
pub enum AcquisitionError {
    #[error("invalid search url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no usable listings in response")]
    NoListings,
}

/// Something that can hand back the body of a page.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, AcquisitionError>;
}

/// Blocking HTTP fetcher with a fixed timeout and browser-like headers.
pub struct HttpFetcher {
    client: Client,
    dump_path: Option<PathBuf>,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, AcquisitionError> {
        let redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() > MAX_REDIRECTS {
                attempt.error(format!("Too many redirects (>{MAX_REDIRECTS})"))
            } else {
                attempt.follow()
            }
        });

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));

        let client = Client::builder()
            .redirect(redirect_policy)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            dump_path: None,
        })
    }

    /// Also write every fetched body to `path`, for debugging selectors.
    pub fn with_dump_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(path.into());
        self
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, AcquisitionError> {
        let response = self.client.get(url).send()?;
        let status_error = response.error_for_status_ref().err();
        let body = match response.text() {
            Ok(body) => body,
            Err(e) => return Err(status_error.unwrap_or(e).into()),
        };

        // Error pages get dumped too; they are what breaks the selectors.
        if let Some(path) = &self.dump_path {
            match fs::write(path, &body) {
                Ok(()) => log::debug!("Dumped {} bytes of HTML to {}", body.len(), path.display()),
                Err(e) => log::warn!("Could not dump HTML to {}: {e}", path.display()),
            }
        }

        match status_error {
            Some(e) => Err(e.into()),
            None => Ok(body),
        }
    }
}
