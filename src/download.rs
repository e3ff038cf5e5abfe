use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::error::ScrapeError;

/// Raw response of a single GET.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub trait Download {
    fn download(&self, url: &str) -> Result<Page, ScrapeError>;
}

impl<T: Download + ?Sized> Download for &T {
    fn download(&self, url: &str) -> Result<Page, ScrapeError> {
        (**self).download(url)
    }
}

pub struct HttpDownloader {
    client: Client,
    user_agent: String,
}

impl HttpDownloader {
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder().gzip(true).deflate(true).build()?;
        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }
}

impl Download for HttpDownloader {
    fn download(&self, url: &str) -> Result<Page, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| {
                log::error!("HTTP GET request failed: {e}");
                e
            })?;

        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();

        Ok(Page { status, body })
    }
}
