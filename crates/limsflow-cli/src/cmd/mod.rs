pub mod check;
pub mod entities;
pub mod sla;
pub mod statuses;
pub mod transitions;
