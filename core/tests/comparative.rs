//! Two-hotel comparison and seasonality tests.

use hotel_insights_core::{
    booking::{enrich, BookingRecord},
    classify::Month,
    comparative::{comparative, percentage_difference, seasonality},
    error::ReportError,
    trends::BucketKey,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn many(hotel: &str, year: i32, month: &str, n: usize, canceled: usize, nights: u32) -> Vec<BookingRecord> {
    (0..n)
        .map(|i| BookingRecord::new(hotel, year, month, i < canceled).with_nights(0, nights))
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn percentage_difference_formula() {
    assert_eq!(percentage_difference(15.0, 10.0), Some(50.0));
    assert_eq!(percentage_difference(5.0, 10.0), Some(-50.0));
    assert_eq!(percentage_difference(5.0, 0.0), None);
    assert_eq!(percentage_difference(0.0, 0.0), None);
}

#[test]
fn monthly_differences_of_first_hotel_against_second() {
    let mut records = many("A", 2016, "January", 6, 2, 4);
    records.extend(many("B", 2016, "January", 4, 1, 2));
    records.extend(many("A", 2016, "February", 2, 0, 3));
    records.extend(many("B", 2016, "February", 4, 2, 3));

    let series = comparative(&enrich(&records).unwrap()).unwrap();
    assert_eq!(series.hotel_a, "A");
    assert_eq!(series.hotel_b, "B");
    assert_eq!(series.points.len(), 2);

    let jan = &series.points[0];
    assert_eq!(
        jan.bucket,
        BucketKey::CalendarMonth { year: 2016, month: Month::January }
    );
    assert_eq!(jan.bookings_diff_pct, Some(50.0));
    assert_eq!(jan.cancellations_diff_pct, Some(100.0));
    assert_eq!(jan.avg_stay_diff_pct, Some(100.0));

    let feb = &series.points[1];
    assert_eq!(feb.bookings_diff_pct, Some(-50.0));
    assert_eq!(feb.cancellations_diff_pct, Some(-100.0));
    assert_eq!(feb.avg_stay_diff_pct, Some(0.0));
}

/// Hotel B has no January bookings while A has five: that month has no
/// comparison, and the call still succeeds.
#[test]
fn zero_denominator_means_no_comparison() {
    let mut records = many("A", 2023, "January", 5, 1, 2);
    records.extend(many("B", 2023, "February", 3, 0, 2));
    records.extend(many("A", 2023, "February", 3, 0, 2));

    let series = comparative(&enrich(&records).unwrap()).unwrap();
    let jan = &series.points[0];
    assert_eq!(jan.bookings_diff_pct, None);
    assert_eq!(jan.cancellations_diff_pct, None);
    assert_eq!(jan.avg_stay_diff_pct, None);

    let feb = &series.points[1];
    assert_eq!(feb.bookings_diff_pct, Some(0.0));
    // no cancellations at B in February either
    assert_eq!(feb.cancellations_diff_pct, None);
}

#[test]
fn fewer_than_two_hotels_is_an_error() {
    let records = enrich(&many("Only", 2016, "May", 3, 0, 1)).unwrap();
    match comparative(&records) {
        Err(ReportError::InsufficientHotels { found }) => assert_eq!(found, 1),
        other => panic!("expected InsufficientHotels, got {other:?}"),
    }
    assert!(matches!(
        comparative(&[]),
        Err(ReportError::InsufficientHotels { found: 0 })
    ));
    assert!(matches!(
        seasonality(&records),
        Err(ReportError::InsufficientHotels { found: 1 })
    ));
}

#[test]
fn only_first_two_hotels_are_compared() {
    let mut records = many("B", 2016, "May", 2, 0, 1);
    records.extend(many("C", 2016, "June", 9, 0, 1));
    records.extend(many("A", 2016, "May", 4, 0, 1));

    let series = comparative(&enrich(&records).unwrap()).unwrap();
    assert_eq!(series.hotel_a, "B");
    assert_eq!(series.hotel_b, "C");
    // May: C has nothing; June: B has nothing
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.points[0].bookings_diff_pct, None);
    assert_eq!(series.points[1].bookings_diff_pct, Some(-100.0));
    assert_eq!(series.points[1].avg_stay_diff_pct, None);
}

#[test]
fn seasonality_covers_twelve_months_for_two_hotels() {
    let mut records = many("City Hotel", 2016, "August", 3, 1, 2);
    records.extend(many("Resort Hotel", 2015, "August", 2, 2, 2));
    records.extend(many("Resort Hotel", 2016, "January", 1, 0, 2));
    records.extend(many("Third", 2016, "January", 7, 0, 2));

    let series = seasonality(&enrich(&records).unwrap()).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].hotel, "City Hotel");
    assert_eq!(series[1].hotel, "Resort Hotel");
    for s in &series {
        assert_eq!(s.points.len(), 12);
    }
    assert_eq!(series[0].points[7].bookings, 3);
    assert_eq!(series[0].points[7].cancellations, 1);
    assert_eq!(series[1].points[0].bookings, 1);
    assert_eq!(series[1].points[7].bookings, 2);
    assert_eq!(series[1].points[7].cancellations, 2);
}
