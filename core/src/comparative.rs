//! Two-hotel comparisons: monthly percentage differences and seasonality.
//!
//! Only the first two hotels in record order take part; any further
//! hotels are ignored.

use crate::{
    booking::{hotels_in_order, EnrichedBooking},
    error::{ReportError, ReportResult},
    trends::{trends, BucketKey, TrendBucket, TrendPoint, TrendSeries},
    types::HotelName,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativePoint {
    pub bucket: BucketKey,
    /// `None` means no comparison is available for this bucket.
    pub bookings_diff_pct: Option<f64>,
    pub cancellations_diff_pct: Option<f64>,
    pub avg_stay_diff_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeSeries {
    pub hotel_a: HotelName,
    pub hotel_b: HotelName,
    pub points: Vec<ComparativePoint>,
}

/// `(a - b) / b * 100`, undefined when `b` is zero.
pub fn percentage_difference(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 || !a.is_finite() || !b.is_finite() {
        return None;
    }
    Some((a - b) / b * 100.0)
}

/// The first two hotels in record order.
fn first_two_hotels(records: &[EnrichedBooking]) -> ReportResult<(&str, &str)> {
    let hotels = hotels_in_order(records);
    match hotels.as_slice() {
        [a, b, rest @ ..] => {
            if !rest.is_empty() {
                log::warn!(
                    "comparing '{a}' and '{b}' only; ignoring {} other hotel(s)",
                    rest.len()
                );
            }
            Ok((*a, *b))
        }
        _ => Err(ReportError::InsufficientHotels {
            found: hotels.len(),
        }),
    }
}

/// Restrict the record set to two hotels and compute their series over
/// a shared bucket range.
fn paired_series(
    records: &[EnrichedBooking],
    bucket: TrendBucket,
) -> ReportResult<(TrendSeries, TrendSeries)> {
    let (a, b) = first_two_hotels(records)?;
    let pair: Vec<EnrichedBooking> = records
        .iter()
        .filter(|r| r.hotel() == a || r.hotel() == b)
        .cloned()
        .collect();

    let mut series = trends(&pair, bucket).into_iter();
    match (series.next(), series.next()) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(ReportError::InsufficientHotels { found: 1 }),
    }
}

/// Monthly percentage difference of hotel A against hotel B for booking
/// count, cancellation count and average stay.
pub fn comparative(records: &[EnrichedBooking]) -> ReportResult<ComparativeSeries> {
    let (a, b) = paired_series(records, TrendBucket::CalendarMonth)?;

    let points: Vec<ComparativePoint> = a
        .points
        .iter()
        .zip(&b.points)
        .map(|(pa, pb)| compare_point(pa, pb))
        .collect();

    let unavailable = points
        .iter()
        .filter(|p| p.bookings_diff_pct.is_none())
        .count();
    if unavailable > 0 {
        log::warn!(
            "{unavailable} of {} months have no bookings at '{}'; no comparison available",
            points.len(),
            b.hotel
        );
    }

    Ok(ComparativeSeries {
        hotel_a: a.hotel,
        hotel_b: b.hotel,
        points,
    })
}

fn compare_point(a: &TrendPoint, b: &TrendPoint) -> ComparativePoint {
    // an empty bucket has no mean stay
    let avg_stay = |p: &TrendPoint| (p.bookings > 0).then_some(p.avg_stay);
    ComparativePoint {
        bucket: a.bucket,
        bookings_diff_pct: percentage_difference(a.bookings as f64, b.bookings as f64),
        cancellations_diff_pct: percentage_difference(
            a.cancellations as f64,
            b.cancellations as f64,
        ),
        avg_stay_diff_pct: avg_stay(a)
            .zip(avg_stay(b))
            .and_then(|(x, y)| percentage_difference(x, y)),
    }
}

/// Month-of-year bookings and cancellations for the first two hotels.
pub fn seasonality(records: &[EnrichedBooking]) -> ReportResult<Vec<TrendSeries>> {
    let (a, b) = paired_series(records, TrendBucket::MonthOfYear)?;
    Ok(vec![a, b])
}
