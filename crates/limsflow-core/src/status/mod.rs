pub mod invoice;
pub mod order;
pub mod pcr_plate;
pub mod sample;
pub mod sequencing_run;

pub use invoice::InvoiceStatus;
pub use order::OrderStatus;
pub use pcr_plate::PcrPlateStatus;
pub use sample::SampleStatus;
pub use sequencing_run::SequencingRunStatus;
pub use test::TestStatus;

use serde::Serialize;

// ---------------------------------------------------------------------------
// StatusInfo
// ---------------------------------------------------------------------------

/// Display metadata for one status, served to UI consumers as read-only
/// reference data. `value` is the wire string and always equals the status's
/// own `as_str()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub is_final: bool,
}

// ---------------------------------------------------------------------------
// WorkflowStatus
// ---------------------------------------------------------------------------

/// Common shape of the six entity status machines. Every machine is a strict
/// linear chain: each status either advances to exactly one successor via
/// `next()` or is the machine's single final status.
pub trait WorkflowStatus: Copy + Eq + std::fmt::Debug + Sized + 'static {
    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;

    fn info(self) -> StatusInfo;

    /// The immediate successor in the chain, or `None` for the final status.
    fn next(self) -> Option<Self>;

    fn is_final(self) -> bool {
        self.info().is_final
    }

    fn parse_lossy(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.as_str() == value)
    }
}

// ---------------------------------------------------------------------------
// Machine invariants
// ---------------------------------------------------------------------------

/// Check the structural invariants of one machine. Panics with a message on
/// violation; meant to run once under tests, not at request time.
pub fn verify<S: WorkflowStatus>() {
    let all = S::all();
    assert!(!all.is_empty(), "machine has no statuses");

    let finals: Vec<&S> = all.iter().filter(|s| s.is_final()).collect();
    assert_eq!(finals.len(), 1, "machine must have exactly one final status");
    assert!(
        finals[0].next().is_none(),
        "final status {} must have no successor",
        finals[0].as_str()
    );

    for &s in all {
        assert_eq!(s.info().value, s.as_str(), "info().value must match as_str()");
        assert_eq!(S::parse_lossy(s.as_str()), Some(s));
        if !s.is_final() {
            assert!(
                s.next().is_some(),
                "non-final status {} must have a successor",
                s.as_str()
            );
        }
    }

    // Walking next() from the head must visit every status exactly once and
    // end at the final status (linear, no skips, no cycles).
    let mut seen = vec![all[0]];
    let mut cursor = all[0];
    while let Some(n) = cursor.next() {
        assert!(!seen.contains(&n), "cycle at {}", n.as_str());
        seen.push(n);
        cursor = n;
    }
    assert!(cursor.is_final(), "chain must end at the final status");
    assert_eq!(seen.len(), all.len(), "chain must cover every status");
}
