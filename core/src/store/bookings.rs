//! Store methods for the source `bookings` table.

use crate::{
    booking::BookingRecord,
    error::{ReportError, ReportResult},
};
use rusqlite::{params, Row};

use super::SqliteStore;

const BOOKING_COLUMNS: &str = "hotel, is_canceled, lead_time, arrival_date_year, arrival_date_month,
     arrival_date_week_number, arrival_date_day_of_month, stays_in_weekend_nights,
     stays_in_week_nights, adults, children, babies, meal, country,
     market_segment, distribution_channel, is_repeated_guest,
     previous_cancellations, previous_bookings_not_canceled, reserved_room_type,
     assigned_room_type, booking_changes, deposit_type, agent, company,
     days_in_waiting_list, customer_type, adr, required_car_parking_spaces,
     total_of_special_requests, reservation_status, reservation_status_date,
     name, email, phone_number, credit_card";

impl SqliteStore {
    /// Insert bookings in one transaction. Returns the number of rows written.
    pub fn insert_bookings(&self, records: &[BookingRecord]) -> ReportResult<usize> {
        let write_err = |e| ReportError::write("bookings", e);
        let tx = self.conn.unchecked_transaction().map_err(write_err)?;
        {
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO bookings ({BOOKING_COLUMNS}) VALUES (
                        ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                        ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24,
                        ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32, ?33, ?34, ?35, ?36)"
                ))
                .map_err(write_err)?;
            for r in records {
                stmt.execute(params![
                    r.hotel,
                    r.is_canceled,
                    r.lead_time,
                    r.arrival_date_year,
                    r.arrival_date_month,
                    r.arrival_date_week_number,
                    r.arrival_date_day_of_month,
                    r.stays_in_weekend_nights,
                    r.stays_in_week_nights,
                    r.adults,
                    r.children,
                    r.babies,
                    r.meal,
                    r.country,
                    r.market_segment,
                    r.distribution_channel,
                    r.is_repeated_guest,
                    r.previous_cancellations,
                    r.previous_bookings_not_canceled,
                    r.reserved_room_type,
                    r.assigned_room_type,
                    r.booking_changes,
                    r.deposit_type,
                    r.agent,
                    r.company,
                    r.days_in_waiting_list,
                    r.customer_type,
                    r.adr,
                    r.required_car_parking_spaces,
                    r.total_of_special_requests,
                    r.reservation_status,
                    r.reservation_status_date,
                    r.name,
                    r.email,
                    r.phone_number,
                    r.credit_card,
                ])
                .map_err(write_err)?;
            }
        }
        tx.commit().map_err(write_err)?;
        log::info!("inserted {} bookings", records.len());
        Ok(records.len())
    }

    /// Every booking in insertion order.
    pub fn all_bookings(&self) -> ReportResult<Vec<BookingRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY id ASC"
            ))
            .map_err(ReportError::unavailable)?;
        let records = stmt
            .query_map([], booking_from_row)
            .map_err(ReportError::unavailable)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(ReportError::unavailable)?;
        Ok(records)
    }

    /// Number of stored bookings.
    pub fn booking_count(&self) -> ReportResult<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
            .map_err(ReportError::unavailable)?;
        Ok(count)
    }
}

fn booking_from_row(row: &Row<'_>) -> rusqlite::Result<BookingRecord> {
    Ok(BookingRecord {
        hotel:                          row.get(0)?,
        is_canceled:                    row.get(1)?,
        lead_time:                      row.get(2)?,
        arrival_date_year:              row.get(3)?,
        arrival_date_month:             row.get(4)?,
        arrival_date_week_number:       row.get(5)?,
        arrival_date_day_of_month:      row.get(6)?,
        stays_in_weekend_nights:        row.get(7)?,
        stays_in_week_nights:           row.get(8)?,
        adults:                         row.get(9)?,
        children:                       row.get(10)?,
        babies:                         row.get(11)?,
        meal:                           row.get(12)?,
        country:                        row.get(13)?,
        market_segment:                 row.get(14)?,
        distribution_channel:           row.get(15)?,
        is_repeated_guest:              row.get(16)?,
        previous_cancellations:         row.get(17)?,
        previous_bookings_not_canceled: row.get(18)?,
        reserved_room_type:             row.get(19)?,
        assigned_room_type:             row.get(20)?,
        booking_changes:                row.get(21)?,
        deposit_type:                   row.get(22)?,
        agent:                          row.get(23)?,
        company:                        row.get(24)?,
        days_in_waiting_list:           row.get(25)?,
        customer_type:                  row.get(26)?,
        adr:                            row.get(27)?,
        required_car_parking_spaces:    row.get(28)?,
        total_of_special_requests:      row.get(29)?,
        reservation_status:             row.get(30)?,
        reservation_status_date:        row.get(31)?,
        name:                           row.get(32)?,
        email:                          row.get(33)?,
        phone_number:                   row.get(34)?,
        credit_card:                    row.get(35)?,
    })
}
