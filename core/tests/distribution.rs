//! Booking distribution tests: extremes, tie-breaks and full count tables.

use hotel_insights_core::{
    booking::{enrich, BookingRecord},
    classify::{CustomerType, Month, Season},
    distribution::{
        booking_distribution, distribution_counts, DistributionDimension, FrequencyTable,
    },
    table::{CellValue, DerivedTable},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn stay(hotel: &str, month: &str, room: &str) -> BookingRecord {
    BookingRecord::new(hotel, 2016, month, false).with_room_type(room)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn frequency_ties_go_to_first_seen_label() {
    let table = FrequencyTable::from_labels(["B", "A", "A", "B", "C", "C"]);
    assert_eq!(table.argmax(), Some("B"));
    assert_eq!(table.argmin(), Some("B"));

    let table = FrequencyTable::from_labels(["C", "A", "A", "B"]);
    assert_eq!(table.argmax(), Some("A"));
    assert_eq!(table.argmin(), Some("C"));

    assert_eq!(FrequencyTable::<&str>::default().argmax(), None);
}

#[test]
fn frequency_table_keeps_typed_labels() {
    let table = FrequencyTable::from_labels([
        Month::March,
        Month::July,
        Month::July,
        Month::March,
        Month::May,
    ]);
    assert_eq!(table.argmax(), Some(Month::March));
    assert_eq!(table.argmin(), Some(Month::May));
    assert_eq!(
        table.entries(),
        &[(Month::March, 2), (Month::July, 2), (Month::May, 1)]
    );
}

#[test]
fn every_hotel_gets_a_distribution_row() {
    let records = vec![
        stay("C", "February", "B"),
        stay("A", "December", "A"),
        stay("B", "June", "F"),
        stay("A", "September", "A"),
    ];
    let rows = booking_distribution(&enrich(&records).unwrap());
    let hotels: Vec<&str> = rows.iter().map(|r| r.hotel.as_str()).collect();
    assert_eq!(hotels, vec!["C", "A", "B"]);
    assert_eq!(rows[1].max_season, Season::Winter);
    assert_eq!(rows[1].min_season, Season::Winter);
    assert_eq!(rows[2].max_month, Month::June);
}

#[test]
fn extremes_per_hotel() {
    let records = vec![
        stay("City Hotel", "August", "A"),
        stay("City Hotel", "August", "A"),
        stay("City Hotel", "July", "D"),
        stay("City Hotel", "January", "A"),
        stay("Resort Hotel", "March", "E"),
    ];
    let rows = booking_distribution(&enrich(&records).unwrap());

    assert_eq!(rows.len(), 2);
    let city = &rows[0];
    assert_eq!(city.hotel, "City Hotel");
    assert_eq!(city.max_month, Month::August);
    assert_eq!(city.min_month, Month::July);
    assert_eq!(city.max_season, Season::Summer);
    assert_eq!(city.min_season, Season::Winter);
    assert_eq!(city.max_room_type, "A");
    assert_eq!(city.min_room_type, "D");
    assert_eq!(city.max_customer_type, Some(CustomerType::Couple));
    assert_eq!(city.min_customer_type, Some(CustomerType::Couple));

    let resort = &rows[1];
    assert_eq!(resort.max_month, Month::March);
    assert_eq!(resort.min_month, Month::March);
}

/// Repeated runs over the same input give the same labels even when
/// every label ties.
#[test]
fn tied_extremes_are_reproducible() {
    let records = vec![
        stay("H", "October", "B"),
        stay("H", "April", "C"),
        stay("H", "June", "A"),
    ];
    let enriched = enrich(&records).unwrap();
    let first = booking_distribution(&enriched);
    for _ in 0..5 {
        assert_eq!(booking_distribution(&enriched), first);
    }
    assert_eq!(first[0].max_month, Month::October);
    assert_eq!(first[0].min_month, Month::October);
    assert_eq!(first[0].max_room_type, "B");
}

#[test]
fn only_other_customers_are_not_available() {
    let records = vec![
        BookingRecord::new("H", 2016, "May", false).with_party(1, Some(2), Some(0)),
        BookingRecord::new("H", 2016, "May", false).with_party(0, Some(0), Some(0)),
        BookingRecord::new("H", 2016, "June", false).with_party(2, None, Some(0)),
    ];
    let rows = booking_distribution(&enrich(&records).unwrap());
    assert_eq!(rows[0].max_customer_type, None);
    assert_eq!(rows[0].min_customer_type, None);

    let table = DerivedTable::from(rows.as_slice());
    assert_eq!(table.rows[0][7], CellValue::Text("N/A".into()));
    assert_eq!(table.rows[0][8], CellValue::Text("N/A".into()));
}

#[test]
fn other_customers_do_not_count_toward_customer_extremes() {
    let records = vec![
        BookingRecord::new("H", 2016, "May", false).with_party(0, Some(0), Some(0)),
        BookingRecord::new("H", 2016, "May", false).with_party(0, Some(0), Some(0)),
        BookingRecord::new("H", 2016, "May", false).with_party(2, Some(1), Some(0)),
        BookingRecord::new("H", 2016, "May", false).with_party(1, Some(0), Some(0)),
        BookingRecord::new("H", 2016, "May", false).with_party(1, Some(0), Some(0)),
    ];
    let rows = booking_distribution(&enrich(&records).unwrap());
    assert_eq!(rows[0].max_customer_type, Some(CustomerType::SoloTraveler));
    assert_eq!(rows[0].min_customer_type, Some(CustomerType::Family));
}

#[test]
fn distribution_table_column_order() {
    let rows = booking_distribution(&enrich(&[stay("H", "May", "A")]).unwrap());
    let table = DerivedTable::from(rows.as_slice());
    assert_eq!(
        table.column_names(),
        vec![
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
    );
}

#[test]
fn month_counts_are_calendar_ordered_and_zero_filled() {
    let records = vec![
        stay("H", "December", "A"),
        stay("H", "March", "A"),
        stay("H", "March", "A"),
    ];
    let tables = distribution_counts(&enrich(&records).unwrap(), DistributionDimension::Month);
    let counts = &tables[0].counts;
    assert_eq!(counts.len(), 12);
    assert_eq!(counts[0], ("January".to_string(), 0));
    assert_eq!(counts[2], ("March".to_string(), 2));
    assert_eq!(counts[11], ("December".to_string(), 1));
}

#[test]
fn season_room_and_customer_counts() {
    let records = vec![
        stay("H", "July", "G"),
        stay("H", "January", "A"),
        BookingRecord::new("H", 2016, "July", false)
            .with_room_type("C")
            .with_party(1, Some(0), Some(0)),
        BookingRecord::new("H", 2016, "July", false)
            .with_room_type("A")
            .with_party(1, Some(1), Some(0)),
    ];
    let enriched = enrich(&records).unwrap();

    let seasons = distribution_counts(&enriched, DistributionDimension::Season);
    assert_eq!(
        seasons[0].counts,
        vec![
            ("Winter".to_string(), 1),
            ("Spring".to_string(), 0),
            ("Summer".to_string(), 3),
            ("Autumn".to_string(), 0),
        ]
    );

    let rooms = distribution_counts(&enriched, DistributionDimension::RoomType);
    assert_eq!(
        rooms[0].counts,
        vec![("A".to_string(), 2), ("C".to_string(), 1), ("G".to_string(), 1)]
    );

    let customers = distribution_counts(&enriched, DistributionDimension::CustomerType);
    assert_eq!(
        customers[0].counts,
        vec![
            ("Family".to_string(), 0),
            ("Couple".to_string(), 2),
            ("Solo Traveler".to_string(), 1),
        ]
    );
}
