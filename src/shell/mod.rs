//! The host desktop shell, as seen from the sync core.

use crate::config::Config;
use crate::models::{DisplayId, EventTime, WorkspaceIndex};
use std::fmt::Debug;

#[cfg(test)]
mod mock_shell_server;

#[cfg(test)]
pub use mock_shell_server::{Activation, MockShellServer, MockWindow, MockWorkspace};

/// A trait which host-specific object references need to implement.
///
/// Handles are opaque to this crate: they are held, compared, and passed
/// back to the host, never inspected.
pub trait Handle: Debug + Clone + Copy + PartialEq + 'static {}

/// Handle for testing purposes.
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// A signal this crate asks the host to deliver, named by the object it is
/// attached to. One subscription per value; the host hands back an id that
/// is both the delivery key and the teardown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<W, N> {
    /// The workspace registry's active workspace changed.
    ActiveWorkspaceChanged,
    /// A window joined the given workspace.
    WindowAdded(W),
    /// A window left the given workspace.
    WindowRemoved(W),
    /// A pointer button was released over the given indicator widget.
    ButtonRelease(N),
}

/// Everything the sync core needs from the host desktop: workspace and
/// window queries, activation, signal subscription, indicator widgets, the
/// panel mount point, and the overview/notification surfaces.
///
/// All calls are synchronous and run on the host's event loop. Queries
/// either succeed or fail fatally; nothing here is retried.
pub trait ShellServer {
    type WorkspaceHandle: Handle;
    type WindowHandle: Handle;
    type WidgetHandle: Handle;
    type SignalId: Handle;

    fn new(config: &impl Config) -> Self;

    // Workspace registry.
    fn active_workspace_index(&self) -> WorkspaceIndex;
    fn workspace_by_index(&self, index: WorkspaceIndex) -> Self::WorkspaceHandle;
    fn window_count_hint(&self, workspace: Self::WorkspaceHandle) -> usize;
    fn list_windows(&self, workspace: Self::WorkspaceHandle) -> Vec<Self::WindowHandle>;
    fn activate_workspace(&mut self, workspace: Self::WorkspaceHandle, time: EventTime);
    fn activate_workspace_with_focus(
        &mut self,
        workspace: Self::WorkspaceHandle,
        window: Self::WindowHandle,
        time: EventTime,
    );

    // Windows and displays.
    fn window_display(&self, window: Self::WindowHandle) -> DisplayId;
    fn window_appears_focused(&self, window: Self::WindowHandle) -> bool;
    fn primary_display(&self) -> DisplayId;

    /// Timestamp of the event being dispatched, for input-focus
    /// arbitration. Read fresh per activation, never cached.
    fn current_event_time(&self) -> EventTime;

    // Signals.
    fn subscribe(
        &mut self,
        signal: Signal<Self::WorkspaceHandle, Self::WidgetHandle>,
    ) -> Self::SignalId;
    fn unsubscribe(&mut self, id: Self::SignalId);

    // Indicator widgets and the panel mount point.
    fn create_indicator(
        &mut self,
        label: &str,
        active: bool,
        window_count: usize,
    ) -> Self::WidgetHandle;
    fn render_indicator(&mut self, node: Self::WidgetHandle, active: bool, window_count: usize);
    fn create_container(&mut self, children: &[Self::WidgetHandle]) -> Self::WidgetHandle;
    fn insert_panel_child(&mut self, node: Self::WidgetHandle, index: usize);
    fn remove_panel_child(&mut self, node: Self::WidgetHandle);

    // Host surfaces.
    fn show_overview(&mut self);
    fn show_apps(&mut self);
    fn notify_error(&mut self, title: &str, message: &str);
}
