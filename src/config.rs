use std::path::PathBuf;
use std::time::Duration;

pub const BASE_URL: &str = "https://ssr1.scrape.center/page/";
pub const START_PAGE: u32 = 1;
pub const END_PAGE: u32 = 10;
pub const OUTPUT_FILE: &str = "movie.csv";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Pause after every successfully fetched page
pub const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Substituted for any field missing from an item
pub const PLACEHOLDER: &str = "N/A";
pub const GENRE_SEPARATOR: &str = " | ";

/// Everything a run needs, defaulting to the constants above.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub start_page: u32,
    pub end_page: u32,
    pub output_file: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    pub page_delay: Duration,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            base_url: BASE_URL.to_string(),
            start_page: START_PAGE,
            end_page: END_PAGE,
            output_file: PathBuf::from(OUTPUT_FILE),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
            page_delay: PAGE_DELAY,
        }
    }
}
