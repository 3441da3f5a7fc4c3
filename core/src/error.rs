use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid date bound '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Unknown arrival month '{value}'")]
    UnknownMonth { value: String },

    #[error("Comparison needs at least two hotels, found {found}")]
    InsufficientHotels { found: usize },

    #[error("Booking store unavailable: {source}")]
    StoreUnavailable {
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to write table '{table}': {source}")]
    StoreWrite {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Invalid table name '{name}'")]
    InvalidTableName { name: String },

    #[error("CSV import error: {0}")]
    Import(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    pub(crate) fn unavailable(source: rusqlite::Error) -> Self {
        Self::StoreUnavailable { source }
    }

    pub(crate) fn write(table: &str, source: rusqlite::Error) -> Self {
        Self::StoreWrite {
            table: table.to_string(),
            source,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
