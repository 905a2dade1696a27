pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod movie;
pub mod output;

pub use error::Error;
