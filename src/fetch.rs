use reqwest::Client;

use crate::config::CrawlConfig;
use crate::error::Error;

/// Build the listing URL for `page`, e.g. `.../page/` + 3 -> `.../page/3`.
pub fn page_url(base: &str, page: u32) -> String {
    if base.ends_with('/') {
        format!("{base}{page}")
    } else {
        format!("{base}/{page}")
    }
}

/// HTTP client shared by every page request of a run.
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Fetcher { client, base_url: config.base_url.clone() })
    }

    pub fn url(&self, page: u32) -> String {
        page_url(&self.base_url, page)
    }

    /// GET one listing page and return its body.
    ///
    /// Non-2xx responses are errors. The body is always decoded as UTF-8,
    /// whatever charset the server declares.
    pub async fn fetch_page(&self, page: u32) -> Result<String, Error> {
        let bytes = self
            .client
            .get(self.url(page))
            .send().await?
            .error_for_status()?
            .bytes().await?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
