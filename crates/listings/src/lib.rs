// ABOUTME: Hotel search-results scraping core: fetch one results page and extract listing records.
// ABOUTME: Provides the fetcher, the fault-tolerant extractor, the search URL builder and CSV export.

//! Staylist listings core.
//!
//! ```no_run
//! use staylist_listings::{extract, fetch, to_csv_string};
//!
//! let html = fetch("https://www.booking.com/searchresults.html?ss=Auckland")?;
//! let records = extract(&html);
//! print!("{}", to_csv_string(&records)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod options;
pub mod search_url;
pub mod selectors;

pub use error::{ExportError, FetchError, ParseFieldError, SearchUrlError};
pub use export::{to_csv_string, write_csv};
pub use extract::{extract, extract_from_document, lookup, lookup_attr, lookup_or, strip_currency_prefix};
pub use fetch::{fetch, Fetcher};
pub use models::{Record, COLUMNS, NO_RATING, NO_REVIEWS};
pub use options::{FetchOptions, FetcherBuilder, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use search_url::{build_search_url, SearchParams, SortOrder, SEARCH_BASE_URL};

/// Fetches `url` and extracts its listings in one call.
pub fn scrape(fetcher: &Fetcher, url: &str) -> Result<Vec<Record>, FetchError> {
    let html = fetcher.fetch(url)?;
    Ok(extract(&html))
}
