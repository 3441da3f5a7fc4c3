//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! Reports read one full booking snapshot per call and write derived
//! tables back as full replacements; they never execute SQL directly.

use crate::{
    booking::BookingRecord,
    error::{ReportError, ReportResult},
    table::DerivedTable,
};
use rusqlite::Connection;

mod bookings;
mod derived;

/// The record store collaborator the report service depends on.
pub trait BookingStore {
    /// Full snapshot of the booking table, in storage order.
    fn fetch_all_bookings(&self) -> ReportResult<Vec<BookingRecord>>;

    /// Drop any existing table called `name` and recreate it from `table`.
    /// Either the whole table is written or nothing is.
    fn replace_table(&self, name: &str, table: &DerivedTable) -> ReportResult<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the booking database at `path`.
    pub fn open(path: &str) -> ReportResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )
        .map_err(ReportError::unavailable)?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> ReportResult<Self> {
        let conn = Connection::open_in_memory().map_err(ReportError::unavailable)?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> ReportResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_bookings.sql"))
            .map_err(|e| ReportError::write("bookings", e))?;
        Ok(())
    }
}

impl BookingStore for SqliteStore {
    fn fetch_all_bookings(&self) -> ReportResult<Vec<BookingRecord>> {
        self.all_bookings()
    }

    fn replace_table(&self, name: &str, table: &DerivedTable) -> ReportResult<()> {
        self.write_derived_table(name, table)
    }
}

impl<T: BookingStore + ?Sized> BookingStore for &T {
    fn fetch_all_bookings(&self) -> ReportResult<Vec<BookingRecord>> {
        (**self).fetch_all_bookings()
    }

    fn replace_table(&self, name: &str, table: &DerivedTable) -> ReportResult<()> {
        (**self).replace_table(name, table)
    }
}
