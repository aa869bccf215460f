// src/core/net.rs
// Page fetching. `Fetch` is the seam: the console and batch runner only see the trait,
// tests substitute canned pages.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::FetchOptions;
use crate::error::ScrapeError;

/// A response as it came off the wire, before any judgement about it.
#[derive(Clone, Debug)]
pub struct RawPage {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawPage {
    /// A 200 `text/html` page, mostly for fakes and offline use.
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: Some(s!("text/html; charset=UTF-8")),
            body: body.into(),
        }
    }
}

pub trait Fetch {
    fn fetch(&self, entity: &str) -> Result<RawPage, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
    opts: FetchOptions,
}

impl HttpFetcher {
    pub fn new(opts: FetchOptions) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client, opts })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, entity: &str) -> Result<RawPage, ScrapeError> {
        let url = self.opts.page_url(entity);
        logd!("GET {url}");

        let resp = self.client.get(&url).send()?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes()?.to_vec();

        logd!("{url} -> {status}, {} bytes", body.len());
        Ok(RawPage { status, content_type, body })
    }
}

/// Admit a page only if it is a successful HTML response; hand back its text.
pub fn accept(page: RawPage) -> Result<String, ScrapeError> {
    let is_html = page
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("html"));
    let ok = (200..300).contains(&page.status);

    if !ok || !is_html {
        return Err(ScrapeError::BadResponse {
            status: page.status,
            content_type: page.content_type,
        });
    }
    Ok(String::from_utf8_lossy(&page.body).into_owned())
}
