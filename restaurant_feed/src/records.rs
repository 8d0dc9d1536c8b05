//! The feed's output contract and the row-to-record transform.
//!
//! Column order follows the sheet: id, name, category, address, latitude,
//! longitude, rating, priceRange, imageUrl, phoneNumber, openingHours,
//! description, reviewCount. Rows missing either of the first two columns
//! are dropped; every other cell degrades to a fixed default.

use csv::StringRecord;
use serde::Serialize;

/// Fallback latitude (Tokyo) for absent or unparsable cells.
pub const DEFAULT_LATITUDE: f64 = 35.6762;

/// Fallback longitude (Tokyo) for absent or unparsable cells.
pub const DEFAULT_LONGITUDE: f64 = 139.6503;

/// Placeholder card image for rows without one.
pub const DEFAULT_IMAGE_URL: &str = "https://placehold.co/280x180";

/// Every record reports the same distance; the consuming app computes
/// real distances client-side.
pub const FIXED_DISTANCE: f64 = 1.0;

/// One restaurant as the consumer sees it (camelCase JSON).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub category: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub price_range: String,
    pub image_url: String,
    pub phone_number: String,
    pub opening_hours: String,
    pub description: String,
    pub review_count: u32,
    pub distance: f64,
}

impl Restaurant {
    /// Build a record from one sheet row, or `None` when the row is
    /// missing its id or name and must be skipped.
    pub fn from_row(row: &StringRecord) -> Option<Self> {
        let id = cell(row, 0);
        let name = cell(row, 1);
        if id.is_empty() || name.is_empty() {
            return None;
        }

        Some(Self {
            id: id.to_string(),
            name: name.to_string(),
            category: cell(row, 2).to_string(),
            address: cell(row, 3).to_string(),
            latitude: number_or(cell(row, 4), DEFAULT_LATITUDE),
            longitude: number_or(cell(row, 5), DEFAULT_LONGITUDE),
            rating: number_or(cell(row, 6), 0.0),
            price_range: text_or(cell(row, 7), "¥"),
            image_url: text_or(cell(row, 8), DEFAULT_IMAGE_URL),
            phone_number: cell(row, 9).to_string(),
            opening_hours: cell(row, 10).to_string(),
            description: cell(row, 11).to_string(),
            review_count: cell(row, 12).parse().unwrap_or(0),
            distance: FIXED_DISTANCE,
        })
    }
}

fn cell<'a>(row: &'a StringRecord, index: usize) -> &'a str {
    row.get(index).map(str::trim).unwrap_or("")
}

fn number_or(cell: &str, default: f64) -> f64 {
    cell.parse().unwrap_or(default)
}

fn text_or(cell: &str, default: &str) -> String {
    if cell.is_empty() {
        default.to_string()
    } else {
        cell.to_string()
    }
}
