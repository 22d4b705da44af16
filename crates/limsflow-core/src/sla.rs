use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Contract constants
// ---------------------------------------------------------------------------

/// Percent of the turnaround window elapsed at which an order becomes AT_RISK.
pub const AT_RISK_THRESHOLD: f64 = 75.0;

/// Percent elapsed at which an order is BREACHED.
pub const BREACH_THRESHOLD: f64 = 100.0;

/// Order statuses that count as "done" for SLA purposes. Narrower than the
/// Order machine's `is_final` flag: a REPORTED order still has a close-out
/// step ahead of it but its turnaround clock has stopped.
pub const SLA_COMPLETED_STATUSES: [&str; 2] = ["REPORTED", "COMPLETED"];

// ---------------------------------------------------------------------------
// OrderSnapshot
// ---------------------------------------------------------------------------

/// The order-like record handed in by the persistence collaborator. `status`
/// stays a string here; it crosses the boundary unvalidated and the SLA math
/// only cares about membership in `SLA_COMPLETED_STATUSES`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub id: String,
    pub order_number: String,
    #[serde(default)]
    pub received_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub turnaround_days: Option<u32>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    pub status: String,
}

// ---------------------------------------------------------------------------
// SlaLevel / SlaStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlaLevel {
    OnTrack,
    AtRisk,
    Breached,
}

impl SlaLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SlaLevel::OnTrack => "ON_TRACK",
            SlaLevel::AtRisk => "AT_RISK",
            SlaLevel::Breached => "BREACHED",
        }
    }
}

impl fmt::Display for SlaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turnaround-time health for one order. Derived, never persisted;
/// `hours_remaining` may be `+∞` (no due date) or negative (past due).
#[derive(Debug, Clone, Serialize)]
pub struct SlaStatus {
    pub order_id: String,
    pub level: SlaLevel,
    pub percent_elapsed: f64,
    pub hours_remaining: f64,
    pub is_completed: bool,
}

// ---------------------------------------------------------------------------
// SLACalculator
// ---------------------------------------------------------------------------

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

/// Round half-up to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn level_for(percent_elapsed: f64) -> SlaLevel {
    if percent_elapsed >= BREACH_THRESHOLD {
        SlaLevel::Breached
    } else if percent_elapsed >= AT_RISK_THRESHOLD {
        SlaLevel::AtRisk
    } else {
        SlaLevel::OnTrack
    }
}

/// Classify one order's turnaround health as of `now`. The clock is an
/// explicit argument so the calculator stays a pure function.
///
/// Without a due date no SLA can be computed; the order defaults to healthy
/// (ON_TRACK, 0% elapsed, infinite time remaining). Missing timestamps
/// substitute `now` rather than erroring.
pub fn evaluate(order: &OrderSnapshot, now: DateTime<Utc>) -> SlaStatus {
    let is_completed = SLA_COMPLETED_STATUSES.contains(&order.status.as_str());

    let Some(due) = order.due_date else {
        return SlaStatus {
            order_id: order.id.clone(),
            level: SlaLevel::OnTrack,
            percent_elapsed: 0.0,
            hours_remaining: f64::INFINITY,
            is_completed,
        };
    };

    let start = order.received_date.unwrap_or(now);
    let total_window_hours = hours_between(start, due);

    // Completed orders are judged at their completion time, open ones at now.
    let reference = if is_completed {
        order.completed_date.unwrap_or(now)
    } else {
        now
    };
    let elapsed_hours = hours_between(start, reference);

    let percent_elapsed = if total_window_hours > 0.0 {
        round2(elapsed_hours / total_window_hours * 100.0)
    } else {
        0.0
    };
    let hours_remaining = round2(hours_between(reference, due));

    SlaStatus {
        order_id: order.id.clone(),
        level: level_for(percent_elapsed),
        percent_elapsed,
        hours_remaining,
        is_completed,
    }
}

// ---------------------------------------------------------------------------
// SLAAggregator
// ---------------------------------------------------------------------------

/// Portfolio-level compliance metrics over a date-bounded set of orders.
/// Derived, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlaMetrics {
    pub total_orders: usize,
    pub on_track: usize,
    pub at_risk: usize,
    pub breached: usize,
    pub completed_orders: usize,
    pub on_time_completions: usize,
    pub on_time_completion_rate: f64,
    pub average_completion_hours: f64,
}

/// Fold every order through `evaluate` and tally. A malformed record never
/// aborts the batch; it degrades through `evaluate`'s own defaults and is
/// still counted.
pub fn summarize(orders: &[OrderSnapshot], now: DateTime<Utc>) -> SlaMetrics {
    let mut metrics = SlaMetrics::default();
    let mut total_completion_hours = 0.0;

    for order in orders {
        let status = evaluate(order, now);
        metrics.total_orders += 1;
        match status.level {
            SlaLevel::OnTrack => metrics.on_track += 1,
            SlaLevel::AtRisk => metrics.at_risk += 1,
            SlaLevel::Breached => metrics.breached += 1,
        }
        if status.is_completed {
            metrics.completed_orders += 1;
            if status.percent_elapsed < BREACH_THRESHOLD {
                metrics.on_time_completions += 1;
            }
            if let (Some(received), Some(completed)) =
                (order.received_date, order.completed_date)
            {
                total_completion_hours += hours_between(received, completed);
            }
        }
    }

    if metrics.completed_orders > 0 {
        let completed = metrics.completed_orders as f64;
        metrics.on_time_completion_rate =
            round2(metrics.on_time_completions as f64 / completed * 100.0);
        metrics.average_completion_hours = round2(total_completion_hours / completed);
    }

    metrics
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
    }

    fn order(
        received: Option<DateTime<Utc>>,
        due: Option<DateTime<Utc>>,
        completed: Option<DateTime<Utc>>,
        status: &str,
    ) -> OrderSnapshot {
        OrderSnapshot {
            id: "ord-1".to_string(),
            order_number: "LAB-0001".to_string(),
            received_date: received,
            due_date: due,
            turnaround_days: Some(10),
            completed_date: completed,
            status: status.to_string(),
        }
    }

    #[test]
    fn eighty_percent_elapsed_is_at_risk() {
        let o = order(Some(t0()), Some(t0() + Duration::hours(240)), None, "IN_PROGRESS");
        let s = evaluate(&o, t0() + Duration::hours(192));
        assert_eq!(s.level, SlaLevel::AtRisk);
        assert_eq!(s.percent_elapsed, 80.00);
        assert_eq!(s.hours_remaining, 48.00);
        assert!(!s.is_completed);
    }

    #[test]
    fn missing_due_date_defaults_to_healthy() {
        let o = order(Some(t0()), None, None, "IN_PROGRESS");
        let s = evaluate(&o, t0() + Duration::hours(500));
        assert_eq!(s.level, SlaLevel::OnTrack);
        assert_eq!(s.percent_elapsed, 0.0);
        assert!(s.hours_remaining.is_infinite());
        assert!(s.hours_remaining > 0.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive_on_the_lower_bound() {
        let window = Duration::hours(10000);
        let o = order(Some(t0()), Some(t0() + window), None, "IN_PROGRESS");

        let s = evaluate(&o, t0() + Duration::hours(7499));
        assert_eq!(s.percent_elapsed, 74.99);
        assert_eq!(s.level, SlaLevel::OnTrack);

        let s = evaluate(&o, t0() + Duration::hours(7500));
        assert_eq!(s.percent_elapsed, 75.00);
        assert_eq!(s.level, SlaLevel::AtRisk);

        let s = evaluate(&o, t0() + Duration::hours(9999));
        assert_eq!(s.percent_elapsed, 99.99);
        assert_eq!(s.level, SlaLevel::AtRisk);

        let s = evaluate(&o, t0() + Duration::hours(10000));
        assert_eq!(s.percent_elapsed, 100.00);
        assert_eq!(s.level, SlaLevel::Breached);
    }

    #[test]
    fn percent_elapsed_is_monotonic_in_time() {
        let o = order(Some(t0()), Some(t0() + Duration::hours(240)), None, "IN_PROGRESS");
        let mut last = f64::NEG_INFINITY;
        for h in (0..360).step_by(12) {
            let s = evaluate(&o, t0() + Duration::hours(h));
            assert!(s.percent_elapsed >= last, "regressed at {h}h");
            last = s.percent_elapsed;
        }
    }

    #[test]
    fn past_due_goes_negative_and_breaches() {
        let o = order(Some(t0()), Some(t0() + Duration::hours(100)), None, "IN_PROGRESS");
        let s = evaluate(&o, t0() + Duration::hours(130));
        assert_eq!(s.level, SlaLevel::Breached);
        assert_eq!(s.hours_remaining, -30.00);
        assert_eq!(s.percent_elapsed, 130.00);
    }

    #[test]
    fn completed_orders_are_judged_at_completion_time() {
        let o = order(
            Some(t0()),
            Some(t0() + Duration::hours(240)),
            Some(t0() + Duration::hours(120)),
            "REPORTED",
        );
        // Evaluated long after the due date: the clock stopped at completion.
        let s = evaluate(&o, t0() + Duration::hours(1000));
        assert!(s.is_completed);
        assert_eq!(s.percent_elapsed, 50.00);
        assert_eq!(s.level, SlaLevel::OnTrack);
        assert_eq!(s.hours_remaining, 120.00);
    }

    #[test]
    fn is_completed_follows_the_fixed_status_set() {
        let now = t0();
        for status in SLA_COMPLETED_STATUSES {
            let s = evaluate(&order(None, None, None, status), now);
            assert!(s.is_completed, "{status} should count as completed");
        }
        let s = evaluate(&order(None, None, None, "TESTING_COMPLETE"), now);
        assert!(!s.is_completed);
    }

    #[test]
    fn missing_received_date_substitutes_now() {
        let o = order(None, Some(t0() + Duration::hours(48)), None, "IN_PROGRESS");
        let s = evaluate(&o, t0());
        assert_eq!(s.percent_elapsed, 0.0);
        assert_eq!(s.level, SlaLevel::OnTrack);
        assert_eq!(s.hours_remaining, 48.00);
    }

    #[test]
    fn zero_width_window_reports_zero_percent() {
        let o = order(Some(t0()), Some(t0()), None, "IN_PROGRESS");
        let s = evaluate(&o, t0() + Duration::hours(5));
        assert_eq!(s.percent_elapsed, 0.0);
        assert_eq!(s.level, SlaLevel::OnTrack);
        assert_eq!(s.hours_remaining, -5.00);
    }

    #[test]
    fn summarize_tallies_levels_and_rates() {
        let now = t0() + Duration::hours(200);
        let orders = vec![
            // on track: 200 of 1000 hours elapsed
            order(Some(t0()), Some(t0() + Duration::hours(1000)), None, "IN_PROGRESS"),
            // at risk: 200 of 250 hours elapsed
            order(Some(t0()), Some(t0() + Duration::hours(250)), None, "IN_PROGRESS"),
            // breached open order: due after 100 hours
            order(Some(t0()), Some(t0() + Duration::hours(100)), None, "IN_PROGRESS"),
            // completed on time: done at 120 of 240 hours
            order(
                Some(t0()),
                Some(t0() + Duration::hours(240)),
                Some(t0() + Duration::hours(120)),
                "REPORTED",
            ),
            // completed late: done at 300 of 240 hours
            order(
                Some(t0()),
                Some(t0() + Duration::hours(240)),
                Some(t0() + Duration::hours(300)),
                "COMPLETED",
            ),
        ];

        let m = summarize(&orders, now);
        assert_eq!(m.total_orders, 5);
        assert_eq!(m.on_track, 2); // open on-track + on-time completion
        assert_eq!(m.at_risk, 1);
        assert_eq!(m.breached, 2); // open breach + late completion
        assert_eq!(m.completed_orders, 2);
        assert_eq!(m.on_time_completions, 1);
        assert_eq!(m.on_time_completion_rate, 50.00);
        assert_eq!(m.average_completion_hours, 210.00); // (120 + 300) / 2
    }

    #[test]
    fn summarize_is_robust_to_malformed_records() {
        let now = t0();
        let orders = vec![
            order(None, None, None, "IN_PROGRESS"),
            order(None, None, None, "REPORTED"), // completed, no timestamps
        ];
        let m = summarize(&orders, now);
        assert_eq!(m.total_orders, 2);
        assert_eq!(m.on_track, 2);
        assert_eq!(m.completed_orders, 1);
        // No due date: percent 0 < 100, still an on-time completion.
        assert_eq!(m.on_time_completions, 1);
        assert_eq!(m.on_time_completion_rate, 100.00);
        // No timestamps contribute, so the average stays 0.
        assert_eq!(m.average_completion_hours, 0.00);
    }

    #[test]
    fn summarize_of_nothing_is_all_zeroes() {
        let m = summarize(&[], t0());
        assert_eq!(m.total_orders, 0);
        assert_eq!(m.on_time_completion_rate, 0.0);
        assert_eq!(m.average_completion_hours, 0.0);
    }

    #[test]
    fn order_snapshot_deserializes_with_missing_fields() {
        let json = r#"{"id":"o1","order_number":"LAB-9","status":"RECEIVED"}"#;
        let o: OrderSnapshot = serde_json::from_str(json).unwrap();
        assert!(o.received_date.is_none());
        assert!(o.due_date.is_none());
        assert!(o.turnaround_days.is_none());
    }
}
