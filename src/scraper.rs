use std::time::Instant;

use select::document::Document;

use crate::delay::{DelayRange, Sleep};
use crate::download::Download;
use crate::error::ScrapeError;
use crate::extract::extract_record;
use crate::record::PluginMetadataRecord;

const HTTP_OK: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: DelayRange,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: DelayRange::new(30, 59),
        }
    }
}

/// Single attempt: download, check status, parse and extract.
pub fn scrap_page<D>(downloader: &D, url: &str) -> Result<PluginMetadataRecord, ScrapeError>
where
    D: Download + ?Sized,
{
    log::info!("Starting scrape: {url}");
    let start = Instant::now();

    let page = downloader.download(url)?;
    if page.status != HTTP_OK {
        log::warn!("Invalid HTTP status: {} for {url}", page.status);
        return Err(ScrapeError::HttpStatus { code: page.status });
    }

    let document = Document::from_read(&page.body[..]).map_err(|e| {
        log::error!("Failed to parse HTML: {e}");
        ScrapeError::Parse(e.to_string())
    })?;

    let mut record = extract_record(&document);
    record.url = url.to_string();
    record.fill_defaults();

    log::info!("Completed scrape: {url} (duration: {:?})", start.elapsed());

    Ok(record)
}

/// Retries [`scrap_page`] on rate limiting only, sleeping a random backoff
/// after every rate-limited attempt.
pub fn scrap_with_retry<D, S>(
    downloader: &D,
    sleeper: &S,
    url: &str,
    policy: &RetryPolicy,
) -> Result<PluginMetadataRecord, ScrapeError>
where
    D: Download + ?Sized,
    S: Sleep + ?Sized,
{
    let attempts = policy.max_attempts.max(1);
    let mut last = None;

    for attempt in 1..=attempts {
        match scrap_page(downloader, url) {
            Ok(record) => return Ok(record),
            Err(e) if e.is_rate_limited() => {
                // also after the last attempt
                let backoff = policy.backoff.pick();
                log::warn!(
                    "429 error (attempt {attempt}/{attempts}). Retrying after {backoff:?}: {url}"
                );
                sleeper.sleep(backoff);
                last = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(ScrapeError::MaxRetriesExceeded {
        attempts,
        last: Box::new(last.unwrap_or(ScrapeError::HttpStatus {
            code: crate::error::RATE_LIMITED,
        })),
    })
}
