pub mod error;
pub mod registry;
pub mod role;
pub mod sla;
pub mod status;
pub mod transition;

pub use error::{LimsError, Result};
pub use registry::EntityType;
pub use role::Role;
pub use sla::{SlaLevel, SlaMetrics, SlaStatus};
pub use status::{StatusInfo, WorkflowStatus};
