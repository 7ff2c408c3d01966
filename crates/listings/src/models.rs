// ABOUTME: The Record row type produced by the extractor and consumed by the CSV writer.
// ABOUTME: Defines the fixed column header and the sentinel placeholders for missing review data.

use serde::Serialize;

/// Column header in output order. Consumers match on these names exactly.
pub const COLUMNS: [&str; 7] = [
    "Hotel Name",
    "Location",
    "Price",
    "Rating",
    "Score",
    "Review",
    "Link",
];

/// Placeholder for Rating and Score when a listing has no review container.
pub const NO_RATING: &str = "New to Booking.com";

/// Placeholder for Review when a listing has no review container.
pub const NO_REVIEWS: &str = "No reviews yet";

/// One hotel listing extracted from a results page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Hotel Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Score")]
    pub score: String,
    #[serde(rename = "Review")]
    pub review: String,
    #[serde(rename = "Link")]
    pub link: String,
}
