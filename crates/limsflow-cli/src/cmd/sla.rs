use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use limsflow_core::sla::{self, OrderSnapshot};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum SlaSubcommand {
    /// Classify each order in a JSON export and summarize compliance
    Report {
        /// Path to a JSON array of order records
        file: PathBuf,
        /// Evaluate as of this RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<String>,
    },
}

pub fn run(subcmd: SlaSubcommand, json: bool) -> anyhow::Result<i32> {
    match subcmd {
        SlaSubcommand::Report { file, at } => report(&file, at.as_deref(), json),
    }
}

fn report(file: &Path, at: Option<&str>, json: bool) -> anyhow::Result<i32> {
    let now: DateTime<Utc> = match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .context("--at must be an RFC 3339 timestamp")?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let orders: Vec<OrderSnapshot> =
        serde_json::from_str(&data).context("orders file is not a JSON array of orders")?;

    let statuses: Vec<_> = orders.iter().map(|o| sla::evaluate(o, now)).collect();
    let metrics = sla::summarize(&orders, now);

    if json {
        #[derive(serde::Serialize)]
        struct ReportOutput<'a> {
            evaluated_at: DateTime<Utc>,
            orders: &'a [limsflow_core::SlaStatus],
            metrics: &'a limsflow_core::SlaMetrics,
        }
        print_json(&ReportOutput {
            evaluated_at: now,
            orders: &statuses,
            metrics: &metrics,
        })?;
        return Ok(0);
    }

    let rows: Vec<Vec<String>> = orders
        .iter()
        .zip(&statuses)
        .map(|(o, s)| {
            let remaining = if s.hours_remaining.is_infinite() {
                "-".to_string()
            } else {
                format!("{:.2}", s.hours_remaining)
            };
            vec![
                o.order_number.clone(),
                s.level.to_string(),
                format!("{:.2}%", s.percent_elapsed),
                remaining,
                if s.is_completed { "yes".to_string() } else { String::new() },
            ]
        })
        .collect();
    print_table(&["ORDER", "LEVEL", "ELAPSED", "HOURS LEFT", "DONE"], &rows);

    println!();
    println!(
        "orders: {}  on-track: {}  at-risk: {}  breached: {}",
        metrics.total_orders, metrics.on_track, metrics.at_risk, metrics.breached
    );
    println!(
        "completed: {}  on-time rate: {:.2}%  avg completion: {:.2}h",
        metrics.completed_orders,
        metrics.on_time_completion_rate,
        metrics.average_completion_hours
    );
    Ok(0)
}
