use scraper::{ElementRef, Html, Selector};

use crate::config::{GENRE_SEPARATOR, PLACEHOLDER};
use crate::error::Error;
use crate::movie::Movie;

const ITEM_SELECTOR: &str = ".item";
const TITLE_SELECTOR: &str = "h2";
const IMAGE_SELECTOR: &str = "img.cover";
const SCORE_SELECTOR: &str = ".score";
const GENRE_SELECTOR: &str = ".categories button span";

/// What to pull out of the elements a [`FieldSpec`] selects.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// First non-blank text node directly under a matched element
    Text,
    /// First non-blank value of the named attribute
    Attr(&'static str),
    /// Every text node, joined with [`GENRE_SEPARATOR`]; blank ones stay as empty entries
    TextList,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    selector: Selector,
    kind: FieldKind,
}

impl FieldSpec {
    pub fn new(css: &str, kind: FieldKind) -> Result<Self, Error> {
        Ok(FieldSpec { selector: parse_selector(css)?, kind })
    }
}

fn parse_selector(css: &str) -> Result<Selector, Error> {
    Selector::parse(css).map_err(|e| Error::Selector {
        selector: css.to_string(),
        reason: format!("{e:?}"),
    })
}

/// Text nodes that are direct children of `element`, trimmed.
fn direct_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.trim())
}

/// Extract one field from an item fragment.
///
/// Never fails: a missing value yields [`PLACEHOLDER`], as does a blank one
/// for single-valued kinds.
pub fn extract_field(fragment: ElementRef<'_>, spec: &FieldSpec) -> String {
    let matches = fragment.select(&spec.selector);

    let value = match spec.kind {
        FieldKind::Text => matches
            .flat_map(direct_text)
            .find(|text| !text.is_empty())
            .map(str::to_string),
        FieldKind::Attr(name) => matches
            .filter_map(|element| element.value().attr(name))
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string),
        FieldKind::TextList => {
            let parts: Vec<&str> = matches.flat_map(direct_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(GENRE_SEPARATOR))
            }
        }
    };

    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Turns one listing page into movies, in document order.
#[derive(Debug, Clone)]
pub struct Extractor {
    item: Selector,
    title: FieldSpec,
    image_url: FieldSpec,
    score: FieldSpec,
    genres: FieldSpec,
}

impl Extractor {
    pub fn new() -> Result<Self, Error> {
        Ok(Extractor {
            item: parse_selector(ITEM_SELECTOR)?,
            title: FieldSpec::new(TITLE_SELECTOR, FieldKind::Text)?,
            image_url: FieldSpec::new(IMAGE_SELECTOR, FieldKind::Attr("src"))?,
            score: FieldSpec::new(SCORE_SELECTOR, FieldKind::Text)?,
            genres: FieldSpec::new(GENRE_SELECTOR, FieldKind::TextList)?,
        })
    }

    pub fn extract(&self, html: &str) -> Vec<Movie> {
        let document = Html::parse_document(html);
        document
            .select(&self.item)
            .map(|item| self.extract_movie(item))
            .collect()
    }

    pub fn extract_movie(&self, item: ElementRef<'_>) -> Movie {
        Movie {
            title: extract_field(item, &self.title),
            image_url: extract_field(item, &self.image_url),
            score: extract_field(item, &self.score),
            genres: extract_field(item, &self.genres),
        }
    }
}
