use crate::registry::EntityType;
use crate::role::{has_minimum_role_str, Role};
use crate::status::{
    InvoiceStatus, OrderStatus, PcrPlateStatus, SampleStatus, SequencingRunStatus, TestStatus,
    WorkflowStatus,
};

// ---------------------------------------------------------------------------
// Transition validation
// ---------------------------------------------------------------------------

// Every machine is a strict linear chain, so "what can `from` become" is its
// single successor. Unknown statuses degrade to "nothing permitted" rather
// than erroring; a denied transition is an expected outcome, not a failure.

fn successor<S: WorkflowStatus>(from: &str) -> Option<&'static str> {
    S::parse_lossy(from)?.next().map(|s| s.as_str())
}

fn successor_of(entity: EntityType, from: &str) -> Option<&'static str> {
    match entity {
        EntityType::Sample => successor::<SampleStatus>(from),
        EntityType::Test => successor::<TestStatus>(from),
        EntityType::Order => successor::<OrderStatus>(from),
        EntityType::Invoice => successor::<InvoiceStatus>(from),
        EntityType::SequencingRun => successor::<SequencingRunStatus>(from),
        EntityType::PcrPlate => successor::<PcrPlateStatus>(from),
    }
}

/// True iff `to` is the immediate successor of `from` on this machine.
/// Self-transitions are not listed in any graph and are therefore invalid;
/// a caller wanting idempotent re-application must special-case `from == to`
/// above this layer.
pub fn is_valid_transition(entity: EntityType, from: &str, to: &str) -> bool {
    successor_of(entity, from) == Some(to) && from != to
}

/// The statuses `from` may become next, in order. Empty for the final status
/// and for unknown input.
pub fn available_transitions(entity: EntityType, from: &str) -> Vec<&'static str> {
    successor_of(entity, from).into_iter().collect()
}

// ---------------------------------------------------------------------------
// Role gate
// ---------------------------------------------------------------------------

/// Minimum role configured for a transition, if any. Only the Test and Order
/// machines carry gates; the sign-off and close-out steps need seniority.
pub fn required_role(entity: EntityType, from: &str, to: &str) -> Option<Role> {
    if !is_valid_transition(entity, from, to) {
        return None;
    }
    match entity {
        EntityType::Test => match TestStatus::parse_lossy(from)? {
            TestStatus::Ordered | TestStatus::InProgress => Some(Role::LabTechnician),
            TestStatus::Completed | TestStatus::Reviewed => Some(Role::LabManager),
            TestStatus::Reported => None,
        },
        EntityType::Order => match OrderStatus::parse_lossy(from)? {
            OrderStatus::Received | OrderStatus::InProgress => Some(Role::LabTechnician),
            OrderStatus::TestingComplete => Some(Role::LabManager),
            OrderStatus::Reported => Some(Role::Admin),
            OrderStatus::Completed => None,
        },
        _ => None,
    }
}

/// Role-gated variant of `is_valid_transition`. Fails closed (returns false,
/// never errors) when the transition's configured minimum role is not met by
/// `actor_role`. Ungated transitions only require graph adjacency.
pub fn is_valid_transition_as(
    entity: EntityType,
    from: &str,
    to: &str,
    actor_role: &str,
) -> bool {
    if !is_valid_transition(entity, from, to) {
        return false;
    }
    match required_role(entity, from, to) {
        Some(minimum) => has_minimum_role_str(actor_role, minimum),
        None => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
