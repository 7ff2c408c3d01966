// ABOUTME: Builds a results-page URL from destination, dates, party size and sort order.
// ABOUTME: Validates the parameters and emits the query keys the listing site expects.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use url::Url;

use crate::error::SearchUrlError;

/// Results page every search URL starts from.
pub const SEARCH_BASE_URL: &str = "https://www.booking.com/searchresults.html";

/// Result ordering offered by the listing site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Popularity,
    Price,
    ReviewScore,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popularity => "popularity",
            SortOrder::Price => "price",
            SortOrder::ReviewScore => "bayesian_review_score",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SearchUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "popularity" => Ok(SortOrder::Popularity),
            "price" => Ok(SortOrder::Price),
            "bayesian_review_score" | "review" | "review_score" => Ok(SortOrder::ReviewScore),
            other => Err(SearchUrlError::UnknownSort(other.to_string())),
        }
    }
}

/// Search form values. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub destination: String,
    pub checkin: String,
    pub checkout: String,
    pub adults: u32,
    pub rooms: u32,
    pub sort: SortOrder,
}

impl SearchParams {
    pub fn new(
        destination: impl Into<String>,
        checkin: impl Into<String>,
        checkout: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            checkin: checkin.into(),
            checkout: checkout.into(),
            adults: 2,
            rooms: 1,
            sort: SortOrder::default(),
        }
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, SearchUrlError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| SearchUrlError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Builds the results-page URL for `params`.
pub fn build_search_url(params: &SearchParams) -> Result<Url, SearchUrlError> {
    let destination = params.destination.trim();
    if destination.is_empty() {
        return Err(SearchUrlError::EmptyDestination);
    }
    let checkin = parse_date("checkin", &params.checkin)?;
    let checkout = parse_date("checkout", &params.checkout)?;
    if checkout <= checkin {
        return Err(SearchUrlError::DateOrder {
            checkin: checkin.to_string(),
            checkout: checkout.to_string(),
        });
    }
    if params.adults == 0 {
        return Err(SearchUrlError::ZeroCount { field: "adults" });
    }
    if params.rooms == 0 {
        return Err(SearchUrlError::ZeroCount { field: "rooms" });
    }

    // The base is a literal and always parses.
    let mut url = Url::parse(SEARCH_BASE_URL).expect("valid base URL");
    url.query_pairs_mut()
        .append_pair("ss", destination)
        .append_pair("checkin_year", &checkin.year().to_string())
        .append_pair("checkin_month", &checkin.month().to_string())
        .append_pair("checkin_monthday", &checkin.day().to_string())
        .append_pair("checkout_year", &checkout.year().to_string())
        .append_pair("checkout_month", &checkout.month().to_string())
        .append_pair("checkout_monthday", &checkout.day().to_string())
        .append_pair("group_adults", &params.adults.to_string())
        .append_pair("no_rooms", &params.rooms.to_string())
        .append_pair("order", params.sort.as_str());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_full_query() {
        let params = SearchParams {
            adults: 3,
            rooms: 2,
            sort: SortOrder::Price,
            ..SearchParams::new("Auckland", "2025-03-05", "2025-03-09")
        };
        let url = build_search_url(&params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.booking.com/searchresults.html?ss=Auckland&checkin_year=2025\
             &checkin_month=3&checkin_monthday=5&checkout_year=2025&checkout_month=3\
             &checkout_monthday=9&group_adults=3&no_rooms=2&order=price"
        );
    }

    #[test]
    fn encodes_destination() {
        let params = SearchParams::new("New York", "2025-12-30", "2026-01-02");
        let url = build_search_url(&params).unwrap();
        let ss = url
            .query_pairs()
            .find(|(k, _)| k == "ss")
            .map(|(_, v)| v.into_owned());
        assert_eq!(ss.as_deref(), Some("New York"));
        assert!(url.as_str().contains("ss=New+York"));
        assert!(url.as_str().ends_with("order=popularity"));
    }

    #[test]
    fn rejects_invalid_params() {
        let base = SearchParams::new("Auckland", "2025-03-05", "2025-03-09");

        let empty = SearchParams {
            destination: "  ".into(),
            ..base.clone()
        };
        assert_eq!(build_search_url(&empty), Err(SearchUrlError::EmptyDestination));

        let bad_date = SearchParams {
            checkin: "05/03/2025".into(),
            ..base.clone()
        };
        assert!(matches!(
            build_search_url(&bad_date),
            Err(SearchUrlError::InvalidDate { field: "checkin", .. })
        ));

        let reversed = SearchParams {
            checkout: "2025-03-05".into(),
            ..base.clone()
        };
        assert!(matches!(
            build_search_url(&reversed),
            Err(SearchUrlError::DateOrder { .. })
        ));

        let no_rooms = SearchParams { rooms: 0, ..base };
        assert_eq!(
            build_search_url(&no_rooms),
            Err(SearchUrlError::ZeroCount { field: "rooms" })
        );
    }

    #[test]
    fn parses_sort_order() {
        assert_eq!("price".parse::<SortOrder>(), Ok(SortOrder::Price));
        assert_eq!(
            "bayesian_review_score".parse::<SortOrder>(),
            Ok(SortOrder::ReviewScore)
        );
        assert_eq!("".parse::<SortOrder>(), Ok(SortOrder::Popularity));
        assert!("distance".parse::<SortOrder>().is_err());
    }
}
