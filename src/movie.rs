use serde::{Deserialize, Serialize};

/// Column labels of the output file, in field order.
pub const HEADERS: [&str; 4] = ["電影名稱", "電影圖片 URL", "評分", "類型"];

/// One listing item scraped from a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "電影名稱")]
    pub title: String,
    #[serde(rename = "電影圖片 URL")]
    pub image_url: String,
    /// Kept as the site prints it, e.g. "9.5"
    #[serde(rename = "評分")]
    pub score: String,
    #[serde(rename = "類型")]
    pub genres: String,
}
