//! Booking trends per hotel over time buckets.
//!
//! Buckets are emitted in calendar order over the full range of the
//! filtered record set, shared by all hotels; buckets a hotel has no
//! bookings in carry zero counts.

use crate::{
    booking::{group_by_hotel, EnrichedBooking},
    classify::{Month, Season},
    types::HotelName,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendBucket {
    /// January..December, all years folded together.
    MonthOfYear,
    /// Year + month, e.g. 2016-03.
    CalendarMonth,
    Year,
    Season,
}

impl FromStr for TrendBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" | "month_of_year" => Ok(Self::MonthOfYear),
            "calendar_month" => Ok(Self::CalendarMonth),
            "year" => Ok(Self::Year),
            "season" => Ok(Self::Season),
            other => Err(format!("unknown trend bucket '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BucketKey {
    MonthOfYear(Month),
    CalendarMonth { year: i32, month: Month },
    Year(i32),
    Season(Season),
}

impl BucketKey {
    pub fn of(bucket: TrendBucket, r: &EnrichedBooking) -> Self {
        match bucket {
            TrendBucket::MonthOfYear => BucketKey::MonthOfYear(r.month),
            TrendBucket::CalendarMonth => BucketKey::CalendarMonth {
                year: r.record.arrival_date_year,
                month: r.month,
            },
            TrendBucket::Year => BucketKey::Year(r.record.arrival_date_year),
            TrendBucket::Season => BucketKey::Season(r.season),
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::MonthOfYear(m) => write!(f, "{m}"),
            BucketKey::CalendarMonth { year, month } => {
                write!(f, "{year}-{:02}", month.number())
            }
            BucketKey::Year(y) => write!(f, "{y}"),
            BucketKey::Season(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub bucket: BucketKey,
    pub bookings: u64,
    pub cancellations: u64,
    /// Mean of weekend + week nights; 0.0 for an empty bucket.
    pub avg_stay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub hotel: HotelName,
    pub bucket: TrendBucket,
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn total_bookings(&self) -> u64 {
        self.points.iter().map(|p| p.bookings).sum()
    }
}

/// Every bucket between the earliest and latest record, in calendar order.
pub fn bucket_range(records: &[EnrichedBooking], bucket: TrendBucket) -> Vec<BucketKey> {
    match bucket {
        TrendBucket::MonthOfYear => Month::ALL.into_iter().map(BucketKey::MonthOfYear).collect(),
        TrendBucket::Season => Season::ALL.into_iter().map(BucketKey::Season).collect(),
        TrendBucket::Year => {
            let years = records.iter().map(|r| r.record.arrival_date_year);
            match (years.clone().min(), years.max()) {
                (Some(lo), Some(hi)) => (lo..=hi).map(BucketKey::Year).collect(),
                _ => Vec::new(),
            }
        }
        TrendBucket::CalendarMonth => {
            let dates = records.iter().map(|r| r.arrival_date);
            let (Some(lo), Some(hi)) = (dates.clone().min(), dates.max()) else {
                return Vec::new();
            };
            let mut keys = Vec::new();
            let (mut year, mut month) = (lo.year(), lo.month());
            let end = (hi.year(), hi.month());
            while (year, month) <= end {
                if let Some(m) = Month::from_number(month) {
                    keys.push(BucketKey::CalendarMonth { year, month: m });
                }
                month += 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
            }
            keys
        }
    }
}

/// Count, cancellations and mean stay per (hotel, bucket).
pub fn trends(records: &[EnrichedBooking], bucket: TrendBucket) -> Vec<TrendSeries> {
    let range = bucket_range(records, bucket);
    group_by_hotel(records)
        .into_iter()
        .map(|(hotel, rows)| TrendSeries {
            hotel: hotel.to_string(),
            bucket,
            points: range
                .iter()
                .map(|key| trend_point(*key, &rows, bucket))
                .collect(),
        })
        .collect()
}

fn trend_point(key: BucketKey, rows: &[&EnrichedBooking], bucket: TrendBucket) -> TrendPoint {
    let in_bucket: Vec<&&EnrichedBooking> = rows
        .iter()
        .filter(|r| BucketKey::of(bucket, r) == key)
        .collect();
    let bookings = in_bucket.len() as u64;
    let cancellations = in_bucket.iter().filter(|r| r.record.is_canceled).count() as u64;
    let nights: u64 = in_bucket.iter().map(|r| u64::from(r.total_nights())).sum();
    TrendPoint {
        bucket: key,
        bookings,
        cancellations,
        avg_stay: if bookings == 0 {
            0.0
        } else {
            nights as f64 / bookings as f64
        },
    }
}
