//! Booking CSV import (the hotel booking dataset export format).

use crate::{booking::BookingRecord, error::ReportResult};
use std::io::Read;

/// Parse booking rows from any CSV reader with a header line.
pub fn read_bookings<R: Read>(reader: R) -> ReportResult<Vec<BookingRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Parse a booking CSV file from disk.
pub fn read_bookings_file(path: &str) -> ReportResult<Vec<BookingRecord>> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let records = read_bookings(file)?;
    log::info!("read {} bookings from {path}", records.len());
    Ok(records)
}
