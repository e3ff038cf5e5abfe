#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::time::Duration;

use wp_plugin_meta::{Download, HttpDownloader, Page, ScrapeError, Sleep};

/// Serves queued responses per URL; unknown URLs or exhausted queues get a 404.
#[derive(Default)]
pub struct ScriptedDownloader {
    pages: RefCell<HashMap<String, VecDeque<Result<Page, ScrapeError>>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, url: &str, page: Page) -> &Self {
        self.respond(url, Ok(page))
    }

    pub fn fail(&self, url: &str, err: ScrapeError) -> &Self {
        self.respond(url, Err(err))
    }

    fn respond(&self, url: &str, response: Result<Page, ScrapeError>) -> &Self {
        self.pages
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Download for ScriptedDownloader {
    fn download(&self, url: &str) -> Result<Page, ScrapeError> {
        self.calls.borrow_mut().push(url.to_string());
        self.pages
            .borrow_mut()
            .get_mut(url)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Ok(Page::new(404, "not found")))
    }
}

#[derive(Default)]
pub struct RecordingSleep {
    slept: RefCell<Vec<Duration>>,
}

impl RecordingSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Sleep for RecordingSleep {
    fn sleep(&self, delay: Duration) {
        self.slept.borrow_mut().push(delay);
    }
}

pub fn plugin_page(name: &str, items: &[&str]) -> String {
    let items = items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html>
<body>
  <header class="plugin-header">
    <h1 class="plugin-title">
      {name}
    </h1>
  </header>
  <div class="entry-meta">
    <div class="widget plugin-meta">
      <h3 class="screen-reader-text">Meta</h3>
      <ul>
        {items}
      </ul>
    </div>
  </div>
</body>
</html>"#
    )
}

pub fn full_plugin_page() -> String {
    plugin_page(
        "Akismet Anti-spam: Spam Protection",
        &[
            "Version <strong>5.3.1</strong>",
            "Last updated <strong><span>3 weeks</span> ago</strong>",
            "Active installations <strong>6+ million</strong>",
            "WordPress version <strong>5.8 or higher</strong>",
            "Tested up to <strong>6.4.3</strong>",
            "PHP version <strong> 5.6.20 or higher </strong>",
            r#"Languages <div class="languages"><button type="button">See all 58</button></div>"#,
            r#"Tags <div class="tags"><a href="/tags/antispam/" rel="tag">antispam</a><a href="/tags/comments/" rel="tag">comments</a></div>"#,
        ],
    )
}

/// Local address nothing listens on anymore.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/plugins/akismet/")
}

/// A genuine transport error, obtained from a refused connection.
pub fn connection_refused() -> ScrapeError {
    let downloader = HttpDownloader::new("wp-plugin-meta-tests").unwrap();
    match downloader.download(&closed_url()) {
        Err(e) => e,
        Ok(page) => panic!("unexpected page with status {}", page.status),
    }
}
