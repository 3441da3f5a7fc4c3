//! Per-hotel basic statistics: stay length, cancellations, arrival span.

use crate::{
    booking::EnrichedBooking,
    table::{CellValue, Column, ColumnKind, DerivedTable},
    types::HotelName,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStatsRow {
    pub hotel: HotelName,
    pub average_nights: f64,
    pub cancellation_rate: f64,
    pub first_arrival: NaiveDate,
    pub last_arrival: NaiveDate,
    pub total_cancellations: u64,
    pub total_bookings: u64,
    pub cancellation_percentage: f64,
}

/// Group by hotel (rows ordered by hotel name) and summarise each group.
/// No records means no rows.
pub fn basic_statistics(records: &[EnrichedBooking]) -> Vec<BasicStatsRow> {
    let mut groups: BTreeMap<&str, Vec<&EnrichedBooking>> = BTreeMap::new();
    for r in records {
        groups.entry(r.hotel()).or_default().push(r);
    }

    groups
        .into_iter()
        .filter_map(|(hotel, rows)| {
            let first_arrival = rows.iter().map(|r| r.arrival_date).min()?;
            let last_arrival = rows.iter().map(|r| r.arrival_date).max()?;
            let total_bookings = rows.len() as u64;
            let total_cancellations = rows.iter().filter(|r| r.record.is_canceled).count() as u64;
            let total_nights: u64 = rows.iter().map(|r| u64::from(r.total_nights())).sum();

            let n = total_bookings as f64;
            let cancellation_rate = total_cancellations as f64 / n;
            Some(BasicStatsRow {
                hotel: hotel.to_string(),
                average_nights: total_nights as f64 / n,
                cancellation_rate,
                first_arrival,
                last_arrival,
                total_cancellations,
                total_bookings,
                cancellation_percentage: cancellation_rate * 100.0,
            })
        })
        .collect()
}

impl BasicStatsRow {
    pub fn columns() -> Vec<Column> {
        vec![
            Column::new("hotel", ColumnKind::Text),
            Column::new("average_nights", ColumnKind::Real),
            Column::new("cancellation_rate", ColumnKind::Real),
            Column::new("first_arrival", ColumnKind::Text),
            Column::new("last_arrival", ColumnKind::Text),
            Column::new("total_cancellations", ColumnKind::Integer),
            Column::new("total_bookings", ColumnKind::Integer),
            Column::new("cancellation_percentage", ColumnKind::Real),
        ]
    }

    fn cells(&self) -> Vec<CellValue> {
        vec![
            CellValue::Text(self.hotel.clone()),
            CellValue::Real(self.average_nights),
            CellValue::Real(self.cancellation_rate),
            CellValue::date(self.first_arrival),
            CellValue::date(self.last_arrival),
            CellValue::Integer(self.total_cancellations as i64),
            CellValue::Integer(self.total_bookings as i64),
            CellValue::Real(self.cancellation_percentage),
        ]
    }
}

impl From<&[BasicStatsRow]> for DerivedTable {
    fn from(rows: &[BasicStatsRow]) -> Self {
        DerivedTable {
            columns: BasicStatsRow::columns(),
            rows: rows.iter().map(BasicStatsRow::cells).collect(),
        }
    }
}
