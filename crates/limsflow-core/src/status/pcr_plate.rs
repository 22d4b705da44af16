use super::{StatusInfo, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PcrPlateStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a PCR plate:
/// `PLATE_SETUP → PCR_COMPLETE → GEL_CHECKED → POOLING_ASSIGNED → PLATE_DONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PcrPlateStatus {
    PlateSetup,
    PcrComplete,
    GelChecked,
    PoolingAssigned,
    PlateDone,
}

impl WorkflowStatus for PcrPlateStatus {
    fn all() -> &'static [Self] {
        &[
            PcrPlateStatus::PlateSetup,
            PcrPlateStatus::PcrComplete,
            PcrPlateStatus::GelChecked,
            PcrPlateStatus::PoolingAssigned,
            PcrPlateStatus::PlateDone,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            PcrPlateStatus::PlateSetup => "PLATE_SETUP",
            PcrPlateStatus::PcrComplete => "PCR_COMPLETE",
            PcrPlateStatus::GelChecked => "GEL_CHECKED",
            PcrPlateStatus::PoolingAssigned => "POOLING_ASSIGNED",
            PcrPlateStatus::PlateDone => "PLATE_DONE",
        }
    }

    fn info(self) -> StatusInfo {
        match self {
            PcrPlateStatus::PlateSetup => StatusInfo {
                value: "PLATE_SETUP",
                label: "Plate Setup",
                description: "Wells mapped; primers and template loaded",
                color: "#6b7280",
                is_final: false,
            },
            PcrPlateStatus::PcrComplete => StatusInfo {
                value: "PCR_COMPLETE",
                label: "PCR Complete",
                description: "Thermocycling finished",
                color: "#3b82f6",
                is_final: false,
            },
            PcrPlateStatus::GelChecked => StatusInfo {
                value: "GEL_CHECKED",
                label: "Gel Checked",
                description: "Amplification verified on gel",
                color: "#f59e0b",
                is_final: false,
            },
            PcrPlateStatus::PoolingAssigned => StatusInfo {
                value: "POOLING_ASSIGNED",
                label: "Pooling Assigned",
                description: "Plate assigned to a sequencing pool",
                color: "#8b5cf6",
                is_final: false,
            },
            PcrPlateStatus::PlateDone => StatusInfo {
                value: "PLATE_DONE",
                label: "Plate Done",
                description: "Plate consumed; no further bench work",
                color: "#22c55e",
                is_final: true,
            },
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            PcrPlateStatus::PlateSetup => Some(PcrPlateStatus::PcrComplete),
            PcrPlateStatus::PcrComplete => Some(PcrPlateStatus::GelChecked),
            PcrPlateStatus::GelChecked => Some(PcrPlateStatus::PoolingAssigned),
            PcrPlateStatus::PoolingAssigned => Some(PcrPlateStatus::PlateDone),
            PcrPlateStatus::PlateDone => None,
        }
    }
}

impl fmt::Display for PcrPlateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PcrPlateStatus {
    type Err = crate::error::LimsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lossy(s).ok_or_else(|| crate::error::LimsError::UnknownStatus {
            entity: "PCR_PLATE",
            value: s.to_string(),
        })
    }
}
