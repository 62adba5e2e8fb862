use crate::config::Config;
use crate::models::SyncController;
use crate::shell::ShellServer;
use crate::shell_event::{Propagation, ShellEvent};

impl<C: Config, SERVER: ShellServer> SyncController<C, SERVER> {
    /// Route one host event to the matching mutation or host action.
    ///
    /// Events arrive in host-delivery order on the host's event loop and
    /// each one is handled to completion before the next; nothing here
    /// reorders or batches. The verdict is always to propagate — handling
    /// an event never removes it from the host's chain.
    pub fn shell_event_handler(&mut self, event: ShellEvent) -> Propagation {
        match event {
            ShellEvent::ActiveWorkspaceChanged => {
                self.workspace_changed_handler();
                Propagation::Propagate
            }
            // Added and removed converge on the same recompute.
            ShellEvent::WindowAdded(index) | ShellEvent::WindowRemoved(index) => {
                self.window_count_handler(index);
                Propagation::Propagate
            }
            ShellEvent::ButtonRelease(index, button) => self.button_release_handler(index, button),
        }
    }
}
