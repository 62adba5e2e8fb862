//! Per-workspace panel indicators kept in sync with live desktop state.
//!
//! The crate owns the state model and the event wiring only: the host
//! desktop shell is reached exclusively through the [`ShellServer`]
//! contract, and the host's glue code drives this crate by translating its
//! native signals into [`ShellEvent`] values. Everything runs on the host's
//! event loop; no threads, timers, or polling live here.
#![warn(clippy::pedantic)]
// Globally allowed as they otherwise make a lot of noise around small
// index/handle conversions.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod config;
pub mod errors;
mod handlers;
pub mod logging;
pub mod models;
pub mod shell;
mod shell_event;
pub mod utils;

pub use config::Config;
pub use errors::SimplyError;
pub use models::{DisplayId, EventTime, WorkspaceIndex};
pub use models::{Indicator, Indicators, Lifecycle, Subscriptions, SyncController};
pub use shell::{Handle, ShellServer, Signal};
pub use shell_event::{PointerButton, Propagation, ShellEvent};
pub use utils::window_count::primary_window_count;
