// ABOUTME: The single table of CSS selectors used to locate listing blocks and their fields.
// ABOUTME: Selectors are compiled once on first use and shared read-only afterwards.

//! Selector table for the results page markup.
//!
//! The class names below are generated by the target site and change without
//! notice. When the markup drifts, this file is the only place that needs to
//! be updated.

use once_cell::sync::Lazy;
use scraper::Selector;

/// A listing card.
pub const LISTING: &str = r#"div[role="listitem"]"#;
pub const NAME: &str = "div.b87c397a13.a3e0b4ffd1";
pub const LOCATION: &str = "span.d823fbbeed.f9b3563dd4";
pub const PRICE: &str = "span.b87c397a13.f2f358d1de.ab607752a2";
/// Gates Rating, Score and Review. Also holds the review text itself.
pub const REVIEW_CONTAINER: &str = "div.fff1944c52.fb14de7f14.eaa8455879";
pub const RATING: &str = "div.f63b14ab7a.f546354b44.becbee2f63";
pub const SCORE: &str = "div.f63b14ab7a.dff2e52086";
pub const REVIEW: &str = REVIEW_CONTAINER;
pub const LINK: &str = "a[href]";

/// Attribute read for the link field.
pub const LINK_ATTR: &str = "href";

/// A selector string paired with its compiled form.
#[derive(Debug)]
pub struct FieldSelector {
    pub css: &'static str,
    pub selector: Selector,
}

impl FieldSelector {
    fn compile(css: &'static str) -> Self {
        // Every entry is a literal above; a parse failure is a programming error.
        let selector = Selector::parse(css).unwrap();
        Self { css, selector }
    }
}

/// All compiled selectors, in one place.
#[derive(Debug)]
pub struct SelectorTable {
    pub listing: FieldSelector,
    pub name: FieldSelector,
    pub location: FieldSelector,
    pub price: FieldSelector,
    pub review_container: FieldSelector,
    pub rating: FieldSelector,
    pub score: FieldSelector,
    pub review: FieldSelector,
    pub link: FieldSelector,
}

pub static TABLE: Lazy<SelectorTable> = Lazy::new(|| SelectorTable {
    listing: FieldSelector::compile(LISTING),
    name: FieldSelector::compile(NAME),
    location: FieldSelector::compile(LOCATION),
    price: FieldSelector::compile(PRICE),
    review_container: FieldSelector::compile(REVIEW_CONTAINER),
    rating: FieldSelector::compile(RATING),
    score: FieldSelector::compile(SCORE),
    review: FieldSelector::compile(REVIEW),
    link: FieldSelector::compile(LINK),
});
