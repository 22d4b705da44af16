use super::{StatusInfo, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SampleStatus
// ---------------------------------------------------------------------------

/// Physical sample lifecycle, intake to archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleStatus {
    Received,
    Accessioned,
    InTesting,
    TestingComplete,
    Archived,
}

impl WorkflowStatus for SampleStatus {
    fn all() -> &'static [Self] {
        &[
            SampleStatus::Received,
            SampleStatus::Accessioned,
            SampleStatus::InTesting,
            SampleStatus::TestingComplete,
            SampleStatus::Archived,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            SampleStatus::Received => "RECEIVED",
            SampleStatus::Accessioned => "ACCESSIONED",
            SampleStatus::InTesting => "IN_TESTING",
            SampleStatus::TestingComplete => "TESTING_COMPLETE",
            SampleStatus::Archived => "ARCHIVED",
        }
    }

    fn info(self) -> StatusInfo {
        match self {
            SampleStatus::Received => StatusInfo {
                value: "RECEIVED",
                label: "Received",
                description: "Sample checked in at the lab",
                color: "#3b82f6",
                is_final: false,
            },
            SampleStatus::Accessioned => StatusInfo {
                value: "ACCESSIONED",
                label: "Accessioned",
                description: "Barcoded and linked to an order",
                color: "#6366f1",
                is_final: false,
            },
            SampleStatus::InTesting => StatusInfo {
                value: "IN_TESTING",
                label: "In Testing",
                description: "At least one assay in progress",
                color: "#f59e0b",
                is_final: false,
            },
            SampleStatus::TestingComplete => StatusInfo {
                value: "TESTING_COMPLETE",
                label: "Testing Complete",
                description: "All assays finished; awaiting disposal or storage",
                color: "#22c55e",
                is_final: false,
            },
            SampleStatus::Archived => StatusInfo {
                value: "ARCHIVED",
                label: "Archived",
                description: "Moved to long-term storage",
                color: "#6b7280",
                is_final: true,
            },
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            SampleStatus::Received => Some(SampleStatus::Accessioned),
            SampleStatus::Accessioned => Some(SampleStatus::InTesting),
            SampleStatus::InTesting => Some(SampleStatus::TestingComplete),
            SampleStatus::TestingComplete => Some(SampleStatus::Archived),
            SampleStatus::Archived => None,
        }
    }
}

impl fmt::Display for SampleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SampleStatus {
    type Err = crate::error::LimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lossy(s).ok_or_else(|| crate::error::LimsError::UnknownStatus {
            entity: "SAMPLE",
            value: s.to_string(),
        })
    }
}
