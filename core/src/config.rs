use crate::{
    date_range::DateRange,
    error::ReportResult,
    types::TableName,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub database_path: String,
    pub basic_statistics_table: TableName,
    pub booking_distribution_table: TableName,
    /// Default arrival window, `YYYY-MM-DD`. Either bound may be omitted.
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            database_path: "hotel_booking.db".into(),
            basic_statistics_table: "basic_statistics".into(),
            booking_distribution_table: "booking_distribution".into(),
            date_from: None,
            date_to: None,
        }
    }
}

impl ReportConfig {
    /// Load from a JSON file. Missing keys fall back to the defaults.
    /// In tests, use ReportConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn default_test() -> Self {
        Self {
            database_path: ":memory:".into(),
            ..Self::default()
        }
    }

    /// Report options for the configured default window.
    pub fn options(&self) -> ReportResult<ReportOptions> {
        ReportOptions::from_strings(self.date_from.as_deref(), self.date_to.as_deref())
    }
}

/// Per-call parameters for every report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub range: DateRange,
}

impl ReportOptions {
    pub fn all_dates() -> Self {
        Self::default()
    }

    /// Parse user-supplied bounds. Fails with `InvalidDate` before any data
    /// is fetched.
    pub fn from_strings(from: Option<&str>, to: Option<&str>) -> ReportResult<Self> {
        Ok(Self {
            range: DateRange::parse(from, to)?,
        })
    }
}
