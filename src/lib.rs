mod batch;
mod config;
mod delay;
mod download;
mod error;
mod extract;
pub mod logging;
mod record;
mod scraper;
pub mod table;

pub use batch::{Batch, BatchStats};
pub use config::ScraperConfig;
pub use delay::{DelayRange, Sleep, ThreadSleep};
pub use download::{Download, HttpDownloader, Page};
pub use error::{ScrapeError, RATE_LIMITED};
pub use extract::{classify, extract_from_html, extract_record, Rule, LABEL_RULES};
pub use record::{Field, PluginMetadataRecord, DEFAULTS, PLUGIN_META_HEADERS};
pub use scraper::{scrap_page, scrap_with_retry, RetryPolicy};

pub fn run_scrap(conf: &ScraperConfig) -> anyhow::Result<BatchStats> {
    log::info!("Starting scraping process");

    let urls = table::read_urls(&conf.input_file)?;
    log::info!("Loaded {} URLs", urls.len());

    let downloader = HttpDownloader::new(&conf.user_agent)?;
    let batch = Batch::new(downloader, ThreadSleep, conf.retry_policy(), conf.delay);
    let (records, stats) = batch.scrap_all_with_stats(&urls);

    table::write_records(&records, &conf.output_file)?;

    log::info!("Scraping process completed");
    Ok(stats)
}
