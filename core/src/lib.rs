//! Hotel booking reports: filter, classify and aggregate booking records,
//! and persist derived summary tables.

pub mod basic_statistics;
pub mod booking;
pub mod classify;
pub mod comparative;
pub mod config;
pub mod date_range;
pub mod distribution;
pub mod error;
pub mod import;
pub mod service;
pub mod store;
pub mod table;
pub mod trends;
pub mod types;
