use std::io;

use thiserror::Error;

use crate::table::{CaseTable, ParseError};

/// Daily per-voivodeship case counts, published as CSV.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/covid19-poland/data/master/voivodeships.csv";

/// Upstream data source: fetches the current case table over HTTP.
#[derive(Debug, Clone)]
pub struct CovidStats {
    url: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not fetch case data: {0}")]
    Http(#[from] ureq::Error),
    #[error("could not read the response body: {0}")]
    Body(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CovidStats {
    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One-shot blocking GET of the current case table. Any failure is
    /// fatal for the run, there is no retry.
    pub fn get_data(&self) -> Result<CaseTable, FetchError> {
        let response = ureq::get(&self.url).call()?;
        let body = response.into_string()?;
        Ok(body.parse()?)
    }
}

impl Default for CovidStats {
    fn default() -> Self {
        Self::new()
    }
}
