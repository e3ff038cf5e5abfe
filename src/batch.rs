use std::time::Instant;

use crate::delay::{DelayRange, Sleep};
use crate::download::Download;
use crate::record::PluginMetadataRecord;
use crate::scraper::{scrap_with_retry, RetryPolicy};

/// Scraps URLs one after the other, never more than one request in flight.
pub struct Batch<D, S> {
    downloader: D,
    sleeper: S,
    retry: RetryPolicy,
    delay: DelayRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

impl<D, S> Batch<D, S>
where
    D: Download,
    S: Sleep,
{
    pub fn new(downloader: D, sleeper: S, retry: RetryPolicy, delay: DelayRange) -> Self {
        Self {
            downloader,
            sleeper,
            retry,
            delay,
        }
    }

    /// Returns one record per URL, in input order. URLs that couldn't be
    /// scraped get a default-filled record.
    pub fn scrap_all(&self, urls: &[String]) -> Vec<PluginMetadataRecord> {
        self.scrap_all_with_stats(urls).0
    }

    pub fn scrap_all_with_stats(&self, urls: &[String]) -> (Vec<PluginMetadataRecord>, BatchStats) {
        let mut records = Vec::with_capacity(urls.len());
        let mut stats = BatchStats {
            total: urls.len(),
            ..Default::default()
        };

        for (i, url) in urls.iter().enumerate() {
            log::info!("Processing URL: {url}");
            let start = Instant::now();

            match scrap_with_retry(&self.downloader, &self.sleeper, url, &self.retry) {
                Ok(record) => {
                    stats.ok += 1;
                    records.push(record);
                }
                Err(e) => {
                    log::warn!("Error processing {url}: {e}");
                    stats.errors += 1;
                    records.push(PluginMetadataRecord::placeholder(url));
                }
            }

            log::info!(
                "Completed processing URL: {url} (duration: {:?})",
                start.elapsed()
            );

            if i + 1 < urls.len() {
                let pause = self.delay.pick();
                log::debug!("Waiting {pause:?} before next URL");
                self.sleeper.sleep(pause);
            }
        }

        log::info!(
            "Scraped {} pages ({} ok, {} errors)",
            stats.total,
            stats.ok,
            stats.errors
        );

        (records, stats)
    }
}
