use super::{StatusInfo, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// InvoiceStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

impl WorkflowStatus for InvoiceStatus {
    fn all() -> &'static [Self] {
        &[InvoiceStatus::Draft, InvoiceStatus::Sent, InvoiceStatus::Paid]
    }

    fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Sent => "SENT",
            InvoiceStatus::Paid => "PAID",
        }
    }

    fn info(self) -> StatusInfo {
        match self {
            InvoiceStatus::Draft => StatusInfo {
                value: "DRAFT",
                label: "Draft",
                description: "Line items assembled; not yet issued",
                color: "#6b7280",
                is_final: false,
            },
            InvoiceStatus::Sent => StatusInfo {
                value: "SENT",
                label: "Sent",
                description: "Issued to the client; payment pending",
                color: "#3b82f6",
                is_final: false,
            },
            InvoiceStatus::Paid => StatusInfo {
                value: "PAID",
                label: "Paid",
                description: "Payment received in full",
                color: "#22c55e",
                is_final: true,
            },
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            InvoiceStatus::Draft => Some(InvoiceStatus::Sent),
            InvoiceStatus::Sent => Some(InvoiceStatus::Paid),
            InvoiceStatus::Paid => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = crate::error::LimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lossy(s).ok_or_else(|| crate::error::LimsError::UnknownStatus {
            entity: "INVOICE",
            value: s.to_string(),
        })
    }
}
