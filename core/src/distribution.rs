//! Booking distributions per hotel: frequency tables and their extremes.
//!
//! Tie-break rule for argmax/argmin: labels are ranked in the order they
//! first appear in the hotel's records. Among labels sharing the extreme
//! count, the earliest-seen one is reported.

use crate::{
    booking::{group_by_hotel, EnrichedBooking},
    classify::{CustomerType, Month, Season},
    table::{CellValue, Column, ColumnKind, DerivedTable},
    types::{HotelName, NOT_AVAILABLE},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label counts in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<L> {
    entries: Vec<(L, u64)>,
}

impl<L> Default for FrequencyTable<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L: PartialEq + Clone> FrequencyTable<L> {
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        let mut table = Self::default();
        for label in labels {
            table.add(label);
        }
        table
    }

    pub fn add(&mut self, label: L) {
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((label, 1)),
        }
    }

    pub fn entries(&self) -> &[(L, u64)] {
        &self.entries
    }

    /// Most frequent label; first-seen wins ties.
    pub fn argmax(&self) -> Option<L> {
        self.extreme(|count, best| count > best)
    }

    /// Least frequent label; first-seen wins ties.
    pub fn argmin(&self) -> Option<L> {
        self.extreme(|count, best| count < best)
    }

    fn extreme(&self, beats: impl Fn(u64, u64) -> bool) -> Option<L> {
        let mut best: Option<&(L, u64)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| beats(entry.1, b.1)) {
                best = Some(entry);
            }
        }
        best.map(|(l, _)| l.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub hotel: HotelName,
    pub max_month: Month,
    pub min_month: Month,
    pub max_season: Season,
    pub min_season: Season,
    pub max_room_type: String,
    pub min_room_type: String,
    /// `None` when every booking of the hotel classifies as Other.
    pub max_customer_type: Option<CustomerType>,
    pub min_customer_type: Option<CustomerType>,
}

/// Most and least frequent month, season, room type and customer type
/// per hotel, hotels in first-seen order.
pub fn booking_distribution(records: &[EnrichedBooking]) -> Vec<DistributionRow> {
    group_by_hotel(records)
        .into_iter()
        .filter_map(|(hotel, rows)| DistributionRow::for_hotel(hotel, &rows))
        .collect()
}

impl DistributionRow {
    /// Extremes for one hotel's bookings; `None` only for an empty group.
    fn for_hotel(hotel: &str, rows: &[&EnrichedBooking]) -> Option<Self> {
        let months = FrequencyTable::from_labels(rows.iter().map(|r| r.month));
        let seasons = FrequencyTable::from_labels(rows.iter().map(|r| r.season));
        let rooms =
            FrequencyTable::from_labels(rows.iter().map(|r| r.record.reserved_room_type.as_str()));
        let customers = FrequencyTable::from_labels(
            rows.iter()
                .map(|r| r.customer)
                .filter(|c| *c != CustomerType::Other),
        );

        Some(Self {
            hotel: hotel.to_string(),
            max_month: months.argmax()?,
            min_month: months.argmin()?,
            max_season: seasons.argmax()?,
            min_season: seasons.argmin()?,
            max_room_type: rooms.argmax()?.to_string(),
            min_room_type: rooms.argmin()?.to_string(),
            max_customer_type: customers.argmax(),
            min_customer_type: customers.argmin(),
        })
    }

    pub fn columns() -> Vec<Column> {
        [
            "hotel",
            "max_month",
            "min_month",
            "max_season",
            "min_season",
            "max_room_type",
            "min_room_type",
            "max_client_type",
            "min_client_type",
        ]
        .into_iter()
        .map(|name| Column::new(name, ColumnKind::Text))
        .collect()
    }

    fn cells(&self) -> Vec<CellValue> {
        let customer = |c: Option<CustomerType>| {
            CellValue::Text(c.map_or(NOT_AVAILABLE, CustomerType::name).to_string())
        };
        vec![
            CellValue::Text(self.hotel.clone()),
            CellValue::Text(self.max_month.to_string()),
            CellValue::Text(self.min_month.to_string()),
            CellValue::Text(self.max_season.to_string()),
            CellValue::Text(self.min_season.to_string()),
            CellValue::Text(self.max_room_type.clone()),
            CellValue::Text(self.min_room_type.clone()),
            customer(self.max_customer_type),
            customer(self.min_customer_type),
        ]
    }
}

impl From<&[DistributionRow]> for DerivedTable {
    fn from(rows: &[DistributionRow]) -> Self {
        DerivedTable {
            columns: DistributionRow::columns(),
            rows: rows.iter().map(DistributionRow::cells).collect(),
        }
    }
}

// ── Full distribution tables ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionDimension {
    Month,
    Season,
    RoomType,
    CustomerType,
}

impl FromStr for DistributionDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Self::Month),
            "season" => Ok(Self::Season),
            "room_type" | "room" => Ok(Self::RoomType),
            "customer_type" | "customer" | "client" => Ok(Self::CustomerType),
            other => Err(format!("unknown distribution dimension '{other}'")),
        }
    }
}

impl fmt::Display for DistributionDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Month => "month",
            Self::Season => "season",
            Self::RoomType => "room_type",
            Self::CustomerType => "customer_type",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelDistribution {
    pub hotel: HotelName,
    pub counts: Vec<(String, u64)>,
}

/// Booking counts per label for every hotel.
///
/// Months and seasons are listed in calendar order and customer types in
/// rule order, all zero-filled. Room types present in the hotel's bookings
/// are listed in ascending order. Other customers are left out.
pub fn distribution_counts(
    records: &[EnrichedBooking],
    dimension: DistributionDimension,
) -> Vec<HotelDistribution> {
    group_by_hotel(records)
        .into_iter()
        .map(|(hotel, rows)| {
            let counts = match dimension {
                DistributionDimension::Month => Month::ALL
                    .iter()
                    .map(|m| (m.to_string(), count(&rows, |r| r.month == *m)))
                    .collect(),
                DistributionDimension::Season => Season::ALL
                    .iter()
                    .map(|s| (s.to_string(), count(&rows, |r| r.season == *s)))
                    .collect(),
                DistributionDimension::CustomerType => CustomerType::RANKED
                    .iter()
                    .map(|c| (c.to_string(), count(&rows, |r| r.customer == *c)))
                    .collect(),
                DistributionDimension::RoomType => {
                    let mut rooms: Vec<(String, u64)> = FrequencyTable::from_labels(
                        rows.iter().map(|r| r.record.reserved_room_type.as_str()),
                    )
                    .entries()
                    .iter()
                    .map(|(room, n)| (room.to_string(), *n))
                    .collect();
                    rooms.sort_by(|a, b| a.0.cmp(&b.0));
                    rooms
                }
            };
            HotelDistribution {
                hotel: hotel.to_string(),
                counts,
            }
        })
        .collect()
}

fn count(rows: &[&EnrichedBooking], pred: impl Fn(&EnrichedBooking) -> bool) -> u64 {
    rows.iter().filter(|r| pred(r)).count() as u64
}
