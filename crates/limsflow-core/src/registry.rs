use crate::error::{LimsError, Result};
use crate::status::{
    InvoiceStatus, OrderStatus, PcrPlateStatus, SampleStatus, SequencingRunStatus, StatusInfo,
    TestStatus, WorkflowStatus,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// The six entity lifecycles, each backed by its own status machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Sample,
    Test,
    Order,
    Invoice,
    SequencingRun,
    PcrPlate,
}

impl EntityType {
    pub fn all() -> &'static [EntityType] {
        &[
            EntityType::Sample,
            EntityType::Test,
            EntityType::Order,
            EntityType::Invoice,
            EntityType::SequencingRun,
            EntityType::PcrPlate,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Sample => "SAMPLE",
            EntityType::Test => "TEST",
            EntityType::Order => "ORDER",
            EntityType::Invoice => "INVOICE",
            EntityType::SequencingRun => "SEQUENCING_RUN",
            EntityType::PcrPlate => "PCR_PLATE",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = LimsError;

    fn from_str(s: &str) -> Result<Self> {
        EntityType::all()
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| LimsError::UnknownEntityType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// String-boundary registry
// ---------------------------------------------------------------------------

// Callers outside the core hold statuses as strings; everything below
// dispatches a string lookup into the right typed machine.

fn lookup<S: WorkflowStatus>(value: &str) -> Option<StatusInfo> {
    S::parse_lossy(value).map(|s| s.info())
}

fn all_info<S: WorkflowStatus>() -> Vec<StatusInfo> {
    S::all().iter().map(|s| s.info()).collect()
}

/// Metadata for one status of one machine. Unknown values are an error here,
/// unlike transition lookups which degrade to "nothing permitted".
pub fn info_for(entity: EntityType, value: &str) -> Result<StatusInfo> {
    let info = match entity {
        EntityType::Sample => lookup::<SampleStatus>(value),
        EntityType::Test => lookup::<TestStatus>(value),
        EntityType::Order => lookup::<OrderStatus>(value),
        EntityType::Invoice => lookup::<InvoiceStatus>(value),
        EntityType::SequencingRun => lookup::<SequencingRunStatus>(value),
        EntityType::PcrPlate => lookup::<PcrPlateStatus>(value),
    };
    info.ok_or_else(|| LimsError::UnknownStatus {
        entity: entity.as_str(),
        value: value.to_string(),
    })
}

/// Every status of a machine, in chain order. This is the read-only
/// reference-data surface UI consumers render from.
pub fn statuses(entity: EntityType) -> Vec<StatusInfo> {
    match entity {
        EntityType::Sample => all_info::<SampleStatus>(),
        EntityType::Test => all_info::<TestStatus>(),
        EntityType::Order => all_info::<OrderStatus>(),
        EntityType::Invoice => all_info::<InvoiceStatus>(),
        EntityType::SequencingRun => all_info::<SequencingRunStatus>(),
        EntityType::PcrPlate => all_info::<PcrPlateStatus>(),
    }
}

/// True iff `value` names the machine's final status. Unknown values are not
/// final.
pub fn is_final(entity: EntityType, value: &str) -> bool {
    info_for(entity, value).map(|i| i.is_final).unwrap_or(false)
}

/// The non-final statuses of a machine.
pub fn active_statuses(entity: EntityType) -> Vec<&'static str> {
    statuses(entity)
        .into_iter()
        .filter(|i| !i.is_final)
        .map(|i| i.value)
        .collect()
}

/// The final statuses of a machine (always exactly one).
pub fn final_statuses(entity: EntityType) -> Vec<&'static str> {
    statuses(entity)
        .into_iter()
        .filter(|i| i.is_final)
        .map(|i| i.value)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
