//! Booking records as stored in the `bookings` table.

use crate::{
    classify::{classify_customer, CustomerType, Month, Season},
    error::{ReportError, ReportResult},
    types::HotelName,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the source booking table.
///
/// Field names follow the dataset's column names so that CSV rows and
/// database rows map onto the struct directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub hotel: HotelName,
    #[serde(deserialize_with = "flag_from_int", serialize_with = "flag_to_int")]
    pub is_canceled: bool,
    pub lead_time: u32,
    pub arrival_date_year: i32,
    pub arrival_date_month: String,
    pub arrival_date_week_number: u32,
    pub arrival_date_day_of_month: u32,
    pub stays_in_weekend_nights: u32,
    pub stays_in_week_nights: u32,
    pub adults: u32,
    #[serde(default, deserialize_with = "optional_count")]
    pub children: Option<u32>,
    #[serde(default, deserialize_with = "optional_count")]
    pub babies: Option<u32>,
    pub meal: String,
    pub country: Option<String>,
    pub market_segment: String,
    pub distribution_channel: String,
    #[serde(deserialize_with = "flag_from_int", serialize_with = "flag_to_int")]
    pub is_repeated_guest: bool,
    pub previous_cancellations: u32,
    pub previous_bookings_not_canceled: u32,
    pub reserved_room_type: String,
    pub assigned_room_type: String,
    pub booking_changes: u32,
    pub deposit_type: String,
    #[serde(default, deserialize_with = "optional_count")]
    pub agent: Option<u32>,
    #[serde(default, deserialize_with = "optional_count")]
    pub company: Option<u32>,
    pub days_in_waiting_list: u32,
    /// Contract type from the dataset (Transient, Group, ...). Not the
    /// derived party classification.
    pub customer_type: String,
    pub adr: f64,
    pub required_car_parking_spaces: u32,
    pub total_of_special_requests: u32,
    pub reservation_status: String,
    pub reservation_status_date: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "phone-number")]
    pub phone_number: Option<String>,
    pub credit_card: Option<String>,
}

impl BookingRecord {
    /// Minimal record with the fields the aggregations read. Metadata
    /// columns get neutral values.
    pub fn new(hotel: &str, year: i32, month: &str, is_canceled: bool) -> Self {
        Self {
            hotel: hotel.to_string(),
            is_canceled,
            lead_time: 0,
            arrival_date_year: year,
            arrival_date_month: month.to_string(),
            arrival_date_week_number: 1,
            arrival_date_day_of_month: 1,
            stays_in_weekend_nights: 0,
            stays_in_week_nights: 0,
            adults: 2,
            children: Some(0),
            babies: Some(0),
            meal: "BB".into(),
            country: None,
            market_segment: "Online TA".into(),
            distribution_channel: "TA/TO".into(),
            is_repeated_guest: false,
            previous_cancellations: 0,
            previous_bookings_not_canceled: 0,
            reserved_room_type: "A".into(),
            assigned_room_type: "A".into(),
            booking_changes: 0,
            deposit_type: "No Deposit".into(),
            agent: None,
            company: None,
            days_in_waiting_list: 0,
            customer_type: "Transient".into(),
            adr: 0.0,
            required_car_parking_spaces: 0,
            total_of_special_requests: 0,
            reservation_status: if is_canceled { "Canceled" } else { "Check-Out" }.into(),
            reservation_status_date: format!("{year}-01-01"),
            name: None,
            email: None,
            phone_number: None,
            credit_card: None,
        }
    }

    pub fn with_nights(mut self, weekend: u32, week: u32) -> Self {
        self.stays_in_weekend_nights = weekend;
        self.stays_in_week_nights = week;
        self
    }

    pub fn with_party(mut self, adults: u32, children: Option<u32>, babies: Option<u32>) -> Self {
        self.adults = adults;
        self.children = children;
        self.babies = babies;
        self
    }

    pub fn with_room_type(mut self, room: &str) -> Self {
        self.reserved_room_type = room.to_string();
        self.assigned_room_type = room.to_string();
        self
    }

    pub fn month(&self) -> ReportResult<Month> {
        self.arrival_date_month.parse()
    }

    /// Arrival date synthesized as the first day of the arrival month.
    pub fn arrival_date(&self) -> ReportResult<NaiveDate> {
        let month = self.month()?;
        NaiveDate::from_ymd_opt(self.arrival_date_year, month.number(), 1).ok_or_else(|| {
            ReportError::InvalidDate {
                value: format!("{}-{}", self.arrival_date_year, month.name()),
            }
        })
    }

    pub fn total_nights(&self) -> u32 {
        self.stays_in_weekend_nights + self.stays_in_week_nights
    }
}

/// A booking with its classification columns attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBooking {
    pub record: BookingRecord,
    pub arrival_date: NaiveDate,
    pub month: Month,
    pub season: Season,
    pub customer: CustomerType,
}

impl EnrichedBooking {
    pub fn hotel(&self) -> &str {
        &self.record.hotel
    }

    pub fn total_nights(&self) -> u32 {
        self.record.total_nights()
    }
}

/// Shared enrichment pass. Runs once per report, before any grouping.
pub fn enrich(records: &[BookingRecord]) -> ReportResult<Vec<EnrichedBooking>> {
    records
        .iter()
        .map(|r| {
            let month = r.month()?;
            Ok(EnrichedBooking {
                arrival_date: r.arrival_date()?,
                month,
                season: month.season(),
                customer: classify_customer(r.adults, r.children, r.babies),
                record: r.clone(),
            })
        })
        .collect()
}

/// Distinct hotels in first-seen order.
pub fn hotels_in_order(records: &[EnrichedBooking]) -> Vec<&str> {
    let mut hotels: Vec<&str> = Vec::new();
    for r in records {
        if !hotels.contains(&r.hotel()) {
            hotels.push(r.hotel());
        }
    }
    hotels
}

/// Split records per hotel, hotels in first-seen order, records in input order.
pub fn group_by_hotel(records: &[EnrichedBooking]) -> Vec<(&str, Vec<&EnrichedBooking>)> {
    hotels_in_order(records)
        .into_iter()
        .map(|hotel| {
            let rows = records.iter().filter(|r| r.hotel() == hotel).collect();
            (hotel, rows)
        })
        .collect()
}

// ── serde helpers ─────────────────────────────────────────────────────

fn flag_from_int<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = u8::deserialize(d)?;
    Ok(v != 0)
}

fn flag_to_int<S>(v: &bool, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_u8(u8::from(*v))
}

/// Counts in the dataset may be blank, "NA", "NULL" or written as floats
/// ("1.0") where the source column was nullable. Negative or fractional
/// values are rejected.
fn optional_count<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(d)?;
    let Some(raw) = raw else { return Ok(None) };
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("na") || raw.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    let v: f64 = raw.parse().map_err(serde::de::Error::custom)?;
    if v.fract() != 0.0 || v < 0.0 || v > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "count must be a whole number >= 0, got '{raw}'"
        )));
    }
    Ok(Some(v as u32))
}
