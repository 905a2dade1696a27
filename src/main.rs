use std::error::Error;
use std::process;

use log::{error, info};

use movie_crawler::config::CrawlConfig;
use movie_crawler::crawl::Crawler;
use movie_crawler::output::write_movies;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize the logger
    pretty_env_logger::formatted_builder()
        .filter(None, log::LevelFilter::Info)
        .init();

    let config = CrawlConfig::default();
    info!(
        "Crawling pages {} to {} of {}",
        config.start_page, config.end_page, config.base_url
    );

    let crawler = Crawler::new(config)?;
    let report = crawler.run().await;

    // Single write, once every page has been visited
    let path = &crawler.config().output_file;
    info!("Saving {} movies to {}", report.movies.len(), path.display());
    if let Err(e) = write_movies(path, &report.movies) {
        error!("Failed to write {}: {e}", path.display());
        process::exit(1);
    }

    info!("Saved {} movies to {}", report.movies.len(), path.display());
    Ok(())
}
