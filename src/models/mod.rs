//! State owned by the sync core.
mod controller;
mod indicator;
mod indicators;
mod lifecycle;
mod subscriptions;

pub use controller::SyncController;
pub use indicator::Indicator;
pub use indicators::Indicators;
pub use lifecycle::Lifecycle;
pub use subscriptions::Subscriptions;

/// Position of a workspace in the host's registry; all event routing is by
/// this index, not by handle identity.
pub type WorkspaceIndex = usize;
pub type DisplayId = u32;
pub type EventTime = u32;
