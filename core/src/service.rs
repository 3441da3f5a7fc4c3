//! The report service: one pass per user action.
//!
//! DATA FLOW (fixed):
//!   1. Fetch a full booking snapshot from the store
//!   2. Filter by the call's arrival-date window
//!   3. Enrich (month, season, customer type)
//!   4. Aggregate
//!   5. Replace the derived table, only for persisted reports and only
//!      after step 4 succeeded
//!
//! RULES:
//!   - Date bounds are parsed into `ReportOptions` before step 1.
//!   - No report mutates its input or keeps state between calls.
//!   - Store failures are returned unchanged; nothing is retried.

use crate::{
    basic_statistics::{basic_statistics, BasicStatsRow},
    booking::{enrich, EnrichedBooking},
    comparative::{comparative, seasonality, ComparativeSeries},
    config::{ReportConfig, ReportOptions},
    date_range::filter_by_arrival,
    distribution::{
        booking_distribution, distribution_counts, DistributionDimension, DistributionRow,
        HotelDistribution,
    },
    error::ReportResult,
    store::BookingStore,
    table::DerivedTable,
    trends::{trends, TrendBucket, TrendSeries},
};

pub struct ReportService<S: BookingStore> {
    store: S,
    config: ReportConfig,
}

impl<S: BookingStore> ReportService<S> {
    pub fn new(store: S, config: ReportConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Steps 1-3: snapshot, filter, enrich.
    pub fn load(&self, options: &ReportOptions) -> ReportResult<Vec<EnrichedBooking>> {
        let snapshot = self.store.fetch_all_bookings()?;
        let filtered = filter_by_arrival(&snapshot, &options.range)?;
        enrich(&filtered)
    }

    /// Basic statistics per hotel, persisted to the configured table.
    pub fn basic_statistics(&self, options: &ReportOptions) -> ReportResult<Vec<BasicStatsRow>> {
        let records = self.load(options)?;
        let rows = basic_statistics(&records);

        let table = &self.config.basic_statistics_table;
        self.store
            .replace_table(table, &DerivedTable::from(rows.as_slice()))?;
        log::info!(
            "basic statistics: {} hotels from {} bookings -> '{table}'",
            rows.len(),
            records.len()
        );
        Ok(rows)
    }

    /// Max/min distribution per hotel, persisted to the configured table.
    pub fn booking_distribution(
        &self,
        options: &ReportOptions,
    ) -> ReportResult<Vec<DistributionRow>> {
        let records = self.load(options)?;
        let rows = booking_distribution(&records);

        let table = &self.config.booking_distribution_table;
        self.store
            .replace_table(table, &DerivedTable::from(rows.as_slice()))?;
        log::info!(
            "booking distribution: {} hotels from {} bookings -> '{table}'",
            rows.len(),
            records.len()
        );
        Ok(rows)
    }

    pub fn distribution_counts(
        &self,
        options: &ReportOptions,
        dimension: DistributionDimension,
    ) -> ReportResult<Vec<HotelDistribution>> {
        let records = self.load(options)?;
        Ok(distribution_counts(&records, dimension))
    }

    pub fn trends(
        &self,
        options: &ReportOptions,
        bucket: TrendBucket,
    ) -> ReportResult<Vec<TrendSeries>> {
        let records = self.load(options)?;
        let series = trends(&records, bucket);
        log::info!(
            "trends by {bucket:?}: {} hotel series over {} bookings",
            series.len(),
            records.len()
        );
        Ok(series)
    }

    pub fn comparative(&self, options: &ReportOptions) -> ReportResult<ComparativeSeries> {
        let records = self.load(options)?;
        comparative(&records)
    }

    pub fn seasonality(&self, options: &ReportOptions) -> ReportResult<Vec<TrendSeries>> {
        let records = self.load(options)?;
        seasonality(&records)
    }
}
