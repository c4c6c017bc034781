//! Clickstream Module
//!
//! Captures the time-ordered record of user interactions during a viewing
//! session and serializes it for process mining:
//! - ClickstreamEvent data model and the known event-type vocabulary
//! - EventLog, the append-only in-memory collection for the active session
//! - CSV export with process-mining column semantics (Case ID = session,
//!   Activity = event type)
//!
//! One EventLog exists per session, owned by the session; it is discarded
//! wholesale at logout and never persisted or transmitted by this core.

mod export;
mod log;
mod models;

// Re-export models
pub use models::{event_types, ClickstreamEvent};

pub use export::{to_csv, CSV_HEADER};
pub use log::EventLog;
