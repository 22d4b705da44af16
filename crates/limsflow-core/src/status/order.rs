use super::{StatusInfo, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Client order lifecycle. `REPORTED` and `COMPLETED` also form the SLA
/// completed set (`sla::SLA_COMPLETED_STATUSES`), which is a narrower notion
/// of "done" than this machine's single final status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Received,
    InProgress,
    TestingComplete,
    Reported,
    Completed,
}

impl WorkflowStatus for OrderStatus {
    fn all() -> &'static [Self] {
        &[
            OrderStatus::Received,
            OrderStatus::InProgress,
            OrderStatus::TestingComplete,
            OrderStatus::Reported,
            OrderStatus::Completed,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Received => "RECEIVED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::TestingComplete => "TESTING_COMPLETE",
            OrderStatus::Reported => "REPORTED",
            OrderStatus::Completed => "COMPLETED",
        }
    }

    fn info(self) -> StatusInfo {
        match self {
            OrderStatus::Received => StatusInfo {
                value: "RECEIVED",
                label: "Received",
                description: "Order and samples checked in",
                color: "#3b82f6",
                is_final: false,
            },
            OrderStatus::InProgress => StatusInfo {
                value: "IN_PROGRESS",
                label: "In Progress",
                description: "Testing underway",
                color: "#f59e0b",
                is_final: false,
            },
            OrderStatus::TestingComplete => StatusInfo {
                value: "TESTING_COMPLETE",
                label: "Testing Complete",
                description: "All tests reviewed; report being drafted",
                color: "#22c55e",
                is_final: false,
            },
            OrderStatus::Reported => StatusInfo {
                value: "REPORTED",
                label: "Reported",
                description: "Report delivered to the client",
                color: "#8b5cf6",
                is_final: false,
            },
            OrderStatus::Completed => StatusInfo {
                value: "COMPLETED",
                label: "Completed",
                description: "Billed and closed out",
                color: "#6b7280",
                is_final: true,
            },
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            OrderStatus::Received => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::TestingComplete),
            OrderStatus::TestingComplete => Some(OrderStatus::Reported),
            OrderStatus::Reported => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = crate::error::LimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lossy(s).ok_or_else(|| crate::error::LimsError::UnknownStatus {
            entity: "ORDER",
            value: s.to_string(),
        })
    }
}
