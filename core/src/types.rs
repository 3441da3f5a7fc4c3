//! Shared primitive types used across the reporting pipeline.

/// A hotel (property) identifier as stored in the `hotel` column.
pub type HotelName = String;

/// Name of a derived table persisted back to the store.
pub type TableName = String;

/// Label reported when a frequency table has no eligible rows.
pub const NOT_AVAILABLE: &str = "N/A";
