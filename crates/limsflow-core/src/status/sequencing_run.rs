use super::{StatusInfo, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SequencingRunStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a sequencing run, from bench setup through delivery of reads.
/// The chain is part of the external contract:
/// `SETUP → DNA_EXTRACTED → PCR_IN_PROGRESS → POOLED → SUBMITTED → SEQUENCED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SequencingRunStatus {
    Setup,
    DnaExtracted,
    PcrInProgress,
    Pooled,
    Submitted,
    Sequenced,
}

impl WorkflowStatus for SequencingRunStatus {
    fn all() -> &'static [Self] {
        &[
            SequencingRunStatus::Setup,
            SequencingRunStatus::DnaExtracted,
            SequencingRunStatus::PcrInProgress,
            SequencingRunStatus::Pooled,
            SequencingRunStatus::Submitted,
            SequencingRunStatus::Sequenced,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            SequencingRunStatus::Setup => "SETUP",
            SequencingRunStatus::DnaExtracted => "DNA_EXTRACTED",
            SequencingRunStatus::PcrInProgress => "PCR_IN_PROGRESS",
            SequencingRunStatus::Pooled => "POOLED",
            SequencingRunStatus::Submitted => "SUBMITTED",
            SequencingRunStatus::Sequenced => "SEQUENCED",
        }
    }

    fn info(self) -> StatusInfo {
        match self {
            SequencingRunStatus::Setup => StatusInfo {
                value: "SETUP",
                label: "Setup",
                description: "Run created; samples assigned and worksheet printed",
                color: "#6b7280",
                is_final: false,
            },
            SequencingRunStatus::DnaExtracted => StatusInfo {
                value: "DNA_EXTRACTED",
                label: "DNA Extracted",
                description: "Extraction complete; DNA quantified and normalized",
                color: "#3b82f6",
                is_final: false,
            },
            SequencingRunStatus::PcrInProgress => StatusInfo {
                value: "PCR_IN_PROGRESS",
                label: "PCR In Progress",
                description: "Amplicon PCR running on assigned plates",
                color: "#f59e0b",
                is_final: false,
            },
            SequencingRunStatus::Pooled => StatusInfo {
                value: "POOLED",
                label: "Pooled",
                description: "Libraries pooled and ready for loading",
                color: "#6366f1",
                is_final: false,
            },
            SequencingRunStatus::Submitted => StatusInfo {
                value: "SUBMITTED",
                label: "Submitted",
                description: "Pool loaded on the sequencer; run in flight",
                color: "#8b5cf6",
                is_final: false,
            },
            SequencingRunStatus::Sequenced => StatusInfo {
                value: "SEQUENCED",
                label: "Sequenced",
                description: "Run finished and reads delivered to analysis",
                color: "#22c55e",
                is_final: true,
            },
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            SequencingRunStatus::Setup => Some(SequencingRunStatus::DnaExtracted),
            SequencingRunStatus::DnaExtracted => Some(SequencingRunStatus::PcrInProgress),
            SequencingRunStatus::PcrInProgress => Some(SequencingRunStatus::Pooled),
            SequencingRunStatus::Pooled => Some(SequencingRunStatus::Submitted),
            SequencingRunStatus::Submitted => Some(SequencingRunStatus::Sequenced),
            SequencingRunStatus::Sequenced => None,
        }
    }
}

impl fmt::Display for SequencingRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SequencingRunStatus {
    type Err = crate::error::LimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lossy(s).ok_or_else(|| crate::error::LimsError::UnknownStatus {
            entity: "SEQUENCING_RUN",
            value: s.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
