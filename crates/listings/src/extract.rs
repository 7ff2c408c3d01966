// ABOUTME: Turns a results page into Records: finds listing blocks, reads seven fields with fallbacks.
// ABOUTME: Per-field failures become defaults; only blocks with no data at all are dropped.

//! Listing extraction.
//!
//! Key behaviors:
//! - Listing blocks are matched in document order and never deduplicated.
//! - Each field is looked up independently inside its block; a missing
//!   element becomes the field's default instead of an error.
//! - Rating, Score and Review are only read when the review container is
//!   present. Without it all three take their sentinels together.
//! - A block is dropped only when every raw field is empty, checked before
//!   sentinels are applied.

use scraper::{ElementRef, Html};
use tracing::{debug, info};

use crate::error::ParseFieldError;
use crate::models::{Record, NO_RATING, NO_REVIEWS};
use crate::selectors::{FieldSelector, LINK_ATTR, TABLE};

/// Currency codes stripped from the front of a price.
pub const CURRENCY_CODES: &[&str] = &[
    "NZD", "AUD", "USD", "CAD", "EUR", "GBP", "JPY", "CNY", "HKD", "SGD", "INR", "CHF", "SEK",
    "NOK", "DKK", "THB", "MYR", "IDR", "PHP", "KRW", "ZAR", "BRL", "MXN", "AED", "FJD",
];

/// Returns the trimmed text of the first element in `block` matching `field`.
pub fn lookup(block: &ElementRef<'_>, field: &FieldSelector) -> Result<String, ParseFieldError> {
    block
        .select(&field.selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or(ParseFieldError::Missing {
            selector: field.css,
        })
}

/// Returns the trimmed `attr` value of the first element in `block` matching `field`.
pub fn lookup_attr(
    block: &ElementRef<'_>,
    field: &FieldSelector,
    attr: &'static str,
) -> Result<String, ParseFieldError> {
    let el = block
        .select(&field.selector)
        .next()
        .ok_or(ParseFieldError::Missing {
            selector: field.css,
        })?;
    el.value()
        .attr(attr)
        .map(|v| v.trim().to_string())
        .ok_or(ParseFieldError::MissingAttr {
            selector: field.css,
            attr,
        })
}

/// Like [`lookup`], but any failure yields `default`.
pub fn lookup_or(block: &ElementRef<'_>, field: &FieldSelector, default: &str) -> String {
    lookup(block, field).unwrap_or_else(|err| {
        debug!(%err, "field lookup fell back to default");
        default.to_string()
    })
}

/// Removes a leading currency code and the single space after it.
///
/// "NZD 120" becomes "120". Anything else is returned unchanged.
pub fn strip_currency_prefix(price: &str) -> &str {
    for code in CURRENCY_CODES {
        if let Some(rest) = price.strip_prefix(code) {
            if let Some(amount) = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('\u{a0}')) {
                return amount;
            }
        }
    }
    price
}

/// Texts read from inside a present review container.
#[derive(Debug)]
struct ReviewFields {
    rating: String,
    score: String,
    review: String,
}

/// Field values as found in the markup, before sentinels are applied.
#[derive(Debug)]
struct RawListing {
    name: String,
    location: String,
    price: String,
    reviews: Option<ReviewFields>,
    link: String,
}

impl RawListing {
    fn read(block: &ElementRef<'_>) -> Self {
        let table = &*TABLE;

        let price = lookup_or(block, &table.price, "");
        let price = strip_currency_prefix(&price).to_string();

        // One presence check decides all three review-derived fields.
        let reviews = lookup(block, &table.review_container)
            .ok()
            .map(|_| ReviewFields {
                rating: lookup_or(block, &table.rating, ""),
                score: lookup_or(block, &table.score, ""),
                review: lookup_or(block, &table.review, ""),
            });

        let link = lookup_attr(block, &table.link, LINK_ATTR).unwrap_or_else(|err| {
            debug!(%err, "link lookup fell back to default");
            String::new()
        });

        Self {
            name: lookup_or(block, &table.name, ""),
            location: lookup_or(block, &table.location, ""),
            price,
            reviews,
            link,
        }
    }

    fn is_empty(&self) -> bool {
        let reviews_empty = self.reviews.as_ref().map_or(true, |r| {
            r.rating.is_empty() && r.score.is_empty() && r.review.is_empty()
        });
        self.name.is_empty()
            && self.location.is_empty()
            && self.price.is_empty()
            && self.link.is_empty()
            && reviews_empty
    }

    fn into_record(self) -> Record {
        let (rating, score, review) = match self.reviews {
            Some(r) => (r.rating, r.score, r.review),
            None => (
                NO_RATING.to_string(),
                NO_RATING.to_string(),
                NO_REVIEWS.to_string(),
            ),
        };
        Record {
            name: self.name,
            location: self.location,
            price: self.price,
            rating,
            score,
            review,
            link: self.link,
        }
    }
}

/// Extracts one Record per non-empty listing block, in document order.
///
/// Never fails: malformed markup is tolerated by the parser, and a page
/// without listing blocks yields an empty vector.
pub fn extract(html: &str) -> Vec<Record> {
    let doc = Html::parse_document(html);
    extract_from_document(&doc)
}

/// Same as [`extract`] for an already parsed document.
pub fn extract_from_document(doc: &Html) -> Vec<Record> {
    let mut records = Vec::new();
    let mut blocks = 0usize;

    for (index, block) in doc.select(&TABLE.listing.selector).enumerate() {
        blocks += 1;
        let raw = RawListing::read(&block);
        if raw.is_empty() {
            debug!(index, "skipping listing block with no data");
            continue;
        }
        records.push(raw.into_record());
    }

    info!(blocks, records = records.len(), "extracted listings");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_block(doc: &Html) -> ElementRef<'_> {
        doc.select(&TABLE.listing.selector).next().unwrap()
    }

    #[test]
    fn test_lookup_trims_text() {
        let doc = Html::parse_document(
            r#"<div role="listitem"><div class="b87c397a13 a3e0b4ffd1">  Hotel A
            </div></div>"#,
        );
        let block = first_block(&doc);
        assert_eq!(lookup(&block, &TABLE.name).unwrap(), "Hotel A");
    }

    #[test]
    fn test_lookup_reports_missing_selector() {
        let doc = Html::parse_document(r#"<div role="listitem"></div>"#);
        let block = first_block(&doc);
        assert_eq!(
            lookup(&block, &TABLE.name),
            Err(ParseFieldError::Missing {
                selector: crate::selectors::NAME
            })
        );
        assert_eq!(lookup_or(&block, &TABLE.name, "fallback"), "fallback");
    }

    #[test]
    fn test_lookup_attr_reads_href() {
        let doc = Html::parse_document(
            r#"<div role="listitem"><a>no target</a><a href=" /hotel-a ">Hotel A</a></div>"#,
        );
        let block = first_block(&doc);
        assert_eq!(
            lookup_attr(&block, &TABLE.link, LINK_ATTR).unwrap(),
            "/hotel-a"
        );
    }

    #[test]
    fn test_lookup_is_scoped_to_block() {
        let doc = Html::parse_document(
            r#"<div class="b87c397a13 a3e0b4ffd1">Outside</div><div role="listitem"></div>"#,
        );
        let block = first_block(&doc);
        assert!(lookup(&block, &TABLE.name).is_err());
    }

    #[test]
    fn test_strip_currency_prefix() {
        assert_eq!(strip_currency_prefix("NZD 120"), "120");
        assert_eq!(strip_currency_prefix("EUR\u{a0}95"), "95");
        assert_eq!(strip_currency_prefix("120"), "120");
        assert_eq!(strip_currency_prefix("NZD120"), "NZD120");
        assert_eq!(strip_currency_prefix("$120"), "$120");
        assert_eq!(strip_currency_prefix("NZD  120"), " 120");
        assert_eq!(strip_currency_prefix(""), "");
    }

    #[test]
    fn test_review_fields_empty_when_container_present_but_blank() {
        let doc = Html::parse_document(
            r#"<div role="listitem"><div class="fff1944c52 fb14de7f14 eaa8455879"> </div></div>"#,
        );
        let raw = RawListing::read(&first_block(&doc));
        assert!(raw.reviews.is_some());
        assert!(raw.is_empty());
    }
}
