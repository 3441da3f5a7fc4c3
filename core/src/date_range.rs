//! Inclusive arrival-date window applied before any aggregation.

use crate::{
    booking::BookingRecord,
    error::{ReportError, ReportResult},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Parse optional `YYYY-MM-DD` bounds. Blank strings count as absent.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> ReportResult<Self> {
        Ok(Self {
            start: parse_bound(start)?,
            end: parse_bound(end)?,
        })
    }

    /// Both bounds present; otherwise the range filters nothing.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    /// Inclusive on both ends. A range missing either bound contains
    /// every date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

fn parse_bound(raw: Option<&str>) -> ReportResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ReportError::InvalidDate {
                value: s.to_string(),
            }),
    }
}

/// Keep the records whose synthesized arrival date falls in `range`.
///
/// With either bound missing the input is returned unchanged and month
/// names are not inspected.
pub fn filter_by_arrival(
    records: &[BookingRecord],
    range: &DateRange,
) -> ReportResult<Vec<BookingRecord>> {
    let Some((start, end)) = range.bounds() else {
        return Ok(records.to_vec());
    };

    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        if range.contains(record.arrival_date()?) {
            kept.push(record.clone());
        }
    }
    log::debug!(
        "date filter {start}..={end}: kept {} of {} bookings",
        kept.len(),
        records.len()
    );
    Ok(kept)
}
