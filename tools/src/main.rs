//! report-runner: headless report runner for the hotel booking database.
//!
//! Usage:
//!   report-runner --db hotel_booking.db --import-csv hotel_booking.csv
//!   report-runner --report basic --from 2016-01-01 --to 2016-12-31
//!   report-runner --report trends --bucket season --json
//!   report-runner --report distribution-counts --dimension room_type

use anyhow::{bail, Result};
use hotel_insights_core::{
    classify::CustomerType,
    config::{ReportConfig, ReportOptions},
    distribution::DistributionDimension,
    import::read_bookings_file,
    service::ReportService,
    store::SqliteStore,
    trends::{TrendBucket, TrendSeries},
    types::NOT_AVAILABLE,
};
use serde::Serialize;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match flag_value(&args, "--config") {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if let Some(db) = flag_value(&args, "--db") {
        config.database_path = db.to_string();
    }
    if let Some(from) = flag_value(&args, "--from") {
        config.date_from = Some(from.to_string());
    }
    if let Some(to) = flag_value(&args, "--to") {
        config.date_to = Some(to.to_string());
    }
    let report = flag_value(&args, "--report").unwrap_or("basic");
    let json = args.iter().any(|a| a == "--json");

    // Bounds are validated before the store is touched.
    let options = config.options()?;

    let store = SqliteStore::open(&config.database_path)?;
    store.migrate()?;

    if let Some(csv_path) = flag_value(&args, "--import-csv") {
        let records = read_bookings_file(csv_path)?;
        store.insert_bookings(&records)?;
    }

    if !json {
        println!("Hotel booking reports");
        println!("  db:        {}", config.database_path);
        println!("  bookings:  {}", store.booking_count()?);
        println!("  from:      {}", config.date_from.as_deref().unwrap_or("-"));
        println!("  to:        {}", config.date_to.as_deref().unwrap_or("-"));
        println!();
    }

    let service = ReportService::new(store, config);
    run_report(&service, report, &args, &options, json)
}

fn run_report(
    service: &ReportService<SqliteStore>,
    report: &str,
    args: &[String],
    options: &ReportOptions,
    json: bool,
) -> Result<()> {
    match report {
        "basic" => {
            let rows = service.basic_statistics(options)?;
            if json {
                return emit_json(&rows);
            }
            println!("=== BASIC STATISTICS ===");
            for r in &rows {
                println!(
                    "  {:<14} | bookings: {:>6} | cancellations: {:>6} ({:.2}%) | avg nights: {:.2} | {} .. {}",
                    r.hotel,
                    r.total_bookings,
                    r.total_cancellations,
                    r.cancellation_percentage,
                    r.average_nights,
                    r.first_arrival,
                    r.last_arrival,
                );
            }
        }
        "distribution" => {
            let rows = service.booking_distribution(options)?;
            if json {
                return emit_json(&rows);
            }
            println!("=== BOOKING DISTRIBUTION (max / min) ===");
            for r in &rows {
                let customer = |c: Option<CustomerType>| {
                    c.map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.to_string())
                };
                println!(
                    "  {:<14} | month: {} / {} | season: {} / {} | room: {} / {} | customer: {} / {}",
                    r.hotel,
                    r.max_month,
                    r.min_month,
                    r.max_season,
                    r.min_season,
                    r.max_room_type,
                    r.min_room_type,
                    customer(r.max_customer_type),
                    customer(r.min_customer_type),
                );
            }
        }
        "distribution-counts" => {
            let dimension: DistributionDimension = flag_value(args, "--dimension")
                .unwrap_or("month")
                .parse()
                .map_err(anyhow::Error::msg)?;
            let tables = service.distribution_counts(options, dimension)?;
            if json {
                return emit_json(&tables);
            }
            println!("=== BOOKINGS BY {} ===", dimension.to_string().to_uppercase());
            for t in &tables {
                println!("  {}", t.hotel);
                for (label, count) in &t.counts {
                    println!("    {label:<14} {count:>6}");
                }
            }
        }
        "trends" => {
            let bucket: TrendBucket = flag_value(args, "--bucket")
                .unwrap_or("month")
                .parse()
                .map_err(anyhow::Error::msg)?;
            let series = service.trends(options, bucket)?;
            if json {
                return emit_json(&series);
            }
            println!("=== BOOKING TRENDS ({bucket:?}) ===");
            print_series(&series);
        }
        "comparative" => {
            let series = service.comparative(options)?;
            if json {
                return emit_json(&series);
            }
            println!(
                "=== {} vs {} (% difference) ===",
                series.hotel_a, series.hotel_b
            );
            let pct = |v: Option<f64>| {
                v.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:+.1}%"))
            };
            for p in &series.points {
                println!(
                    "  {:<10} | bookings: {:>9} | cancellations: {:>9} | avg stay: {:>9}",
                    p.bucket.to_string(),
                    pct(p.bookings_diff_pct),
                    pct(p.cancellations_diff_pct),
                    pct(p.avg_stay_diff_pct),
                );
            }
        }
        "seasonality" => {
            let series = service.seasonality(options)?;
            if json {
                return emit_json(&series);
            }
            println!("=== SEASONALITY ===");
            print_series(&series);
        }
        other => bail!("unknown report '{other}'"),
    }
    Ok(())
}

fn print_series(series: &[TrendSeries]) {
    for s in series {
        println!("  {}", s.hotel);
        for p in &s.points {
            println!(
                "    {:<10} | bookings: {:>6} | cancellations: {:>6} | avg stay: {:.2}",
                p.bucket.to_string(),
                p.bookings,
                p.cancellations,
                p.avg_stay,
            );
        }
    }
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
