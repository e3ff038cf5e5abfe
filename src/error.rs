use thiserror::Error;

pub const RATE_LIMITED: u16 = 429;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("invalid HTTP status: {code}")]
    HttpStatus { code: u16 },

    #[error("failed to parse HTML: {0}")]
    Parse(String),

    #[error("maximum retry count reached after {attempts} attempts: {last}")]
    MaxRetriesExceeded {
        attempts: u32,
        last: Box<ScrapeError>,
    },
}

impl ScrapeError {
    /// Only rate-limit responses are worth another attempt.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::HttpStatus { code } if *code == RATE_LIMITED)
    }
}
