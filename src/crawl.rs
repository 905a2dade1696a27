use log::{debug, error, info};

use crate::config::CrawlConfig;
use crate::error::Error;
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::movie::Movie;

/// Outcome of a full pass over the page range.
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Page order, then document order within a page
    pub movies: Vec<Movie>,
    pub failed_pages: Vec<u32>,
}

pub struct Crawler {
    config: CrawlConfig,
    fetcher: Fetcher,
    extractor: Extractor,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self, Error> {
        let fetcher = Fetcher::new(&config)?;
        let extractor = Extractor::new()?;
        Ok(Crawler { config, fetcher, extractor })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Fetch and extract every page in the configured range, one at a time.
    ///
    /// A page that fails to download is logged and skipped; it is never retried.
    pub async fn run(&self) -> CrawlReport {
        let mut report = CrawlReport::default();

        for page in self.config.start_page..=self.config.end_page {
            let url = self.fetcher.url(page);
            info!("Fetching {url}");

            let body = match self.fetcher.fetch_page(page).await {
                Ok(body) => body,
                Err(e) => {
                    error!("Failed to fetch {url}: {e}");
                    report.failed_pages.push(page);
                    continue;
                }
            };

            let movies = self.extractor.extract(&body);
            info!("Found {} movies on page {page}", movies.len());
            for movie in &movies {
                info!("  {} | score: {} | genres: {}", movie.title, movie.score, movie.genres);
            }
            let added = movies.len();
            report.movies.extend(movies);
            info!("Page {page} done, {added} movies added");

            debug!("Sleeping {:?} before the next page", self.config.page_delay);
            tokio::time::sleep(self.config.page_delay).await;
        }

        if report.failed_pages.is_empty() {
            info!("Crawl finished with {} movies", report.movies.len());
        } else {
            error!(
                "Crawl finished with {} movies; pages {:?} contributed nothing",
                report.movies.len(),
                report.failed_pages
            );
        }

        report
    }
}
