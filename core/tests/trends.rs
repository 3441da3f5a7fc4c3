//! Trend series tests: bucket order, zero fill and count conservation.

use hotel_insights_core::{
    booking::{enrich, BookingRecord},
    classify::{Month, Season},
    trends::{trends, BucketKey, TrendBucket},
};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn arb_records() -> impl Strategy<Value = Vec<BookingRecord>> {
    prop::collection::vec(
        (
            prop_oneof![Just("City Hotel"), Just("Resort Hotel")],
            2015i32..=2017,
            1u32..=12,
            any::<bool>(),
            0u32..4,
            0u32..8,
        ),
        1..80,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(hotel, year, month, canceled, we, wk)| {
                let month = Month::from_number(month).unwrap();
                BookingRecord::new(hotel, year, month.name(), canceled).with_nights(we, wk)
            })
            .collect()
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn month_of_year_buckets_are_calendar_ordered_and_zero_filled() {
    let records = vec![
        BookingRecord::new("H", 2016, "November", true).with_nights(1, 2),
        BookingRecord::new("H", 2015, "February", false).with_nights(0, 2),
        BookingRecord::new("H", 2016, "February", false).with_nights(2, 2),
    ];
    let series = trends(&enrich(&records).unwrap(), TrendBucket::MonthOfYear);

    assert_eq!(series.len(), 1);
    let points = &series[0].points;
    assert_eq!(points.len(), 12);
    assert_eq!(points[0].bucket, BucketKey::MonthOfYear(Month::January));
    assert_eq!(points[0].bookings, 0);
    assert_eq!(points[0].avg_stay, 0.0);

    assert_eq!(points[1].bucket, BucketKey::MonthOfYear(Month::February));
    assert_eq!(points[1].bookings, 2);
    assert_eq!(points[1].cancellations, 0);
    assert!((points[1].avg_stay - 3.0).abs() < 1e-12);

    assert_eq!(points[10].bookings, 1);
    assert_eq!(points[10].cancellations, 1);
}

#[test]
fn season_buckets_run_winter_to_autumn() {
    let records = vec![
        BookingRecord::new("H", 2016, "October", false),
        BookingRecord::new("H", 2016, "December", false),
    ];
    let series = trends(&enrich(&records).unwrap(), TrendBucket::Season);
    let keys: Vec<BucketKey> = series[0].points.iter().map(|p| p.bucket).collect();
    assert_eq!(
        keys,
        Season::ALL.iter().map(|s| BucketKey::Season(*s)).collect::<Vec<_>>()
    );
    assert_eq!(series[0].points[0].bookings, 1);
    assert_eq!(series[0].points[3].bookings, 1);
}

#[test]
fn year_buckets_fill_gaps_across_hotels() {
    let records = vec![
        BookingRecord::new("A", 2017, "May", false),
        BookingRecord::new("B", 2015, "May", true),
    ];
    let series = trends(&enrich(&records).unwrap(), TrendBucket::Year);

    assert_eq!(series[0].hotel, "A");
    for s in &series {
        let years: Vec<BucketKey> = s.points.iter().map(|p| p.bucket).collect();
        assert_eq!(
            years,
            vec![BucketKey::Year(2015), BucketKey::Year(2016), BucketKey::Year(2017)]
        );
    }
    assert_eq!(series[0].points[0].bookings, 0);
    assert_eq!(series[1].points[0].cancellations, 1);
}

#[test]
fn calendar_month_buckets_cross_year_boundary() {
    let records = vec![
        BookingRecord::new("H", 2015, "November", false),
        BookingRecord::new("H", 2016, "February", false),
    ];
    let series = trends(&enrich(&records).unwrap(), TrendBucket::CalendarMonth);
    let labels: Vec<String> = series[0].points.iter().map(|p| p.bucket.to_string()).collect();
    assert_eq!(labels, vec!["2015-11", "2015-12", "2016-01", "2016-02"]);
}

#[test]
fn no_records_no_series() {
    assert!(trends(&[], TrendBucket::Year).is_empty());
}

proptest! {
    #[test]
    fn bucket_counts_sum_to_hotel_totals(records in arb_records()) {
        let enriched = enrich(&records).unwrap();
        for bucket in [
            TrendBucket::MonthOfYear,
            TrendBucket::CalendarMonth,
            TrendBucket::Year,
            TrendBucket::Season,
        ] {
            for s in trends(&enriched, bucket) {
                let expected = records.iter().filter(|r| r.hotel == s.hotel).count() as u64;
                prop_assert_eq!(s.total_bookings(), expected);
                for p in &s.points {
                    prop_assert!(p.cancellations <= p.bookings);
                }
            }
        }
    }
}
