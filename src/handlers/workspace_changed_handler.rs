use crate::config::Config;
use crate::models::SyncController;
use crate::shell::ShellServer;

impl<C: Config, SERVER: ShellServer> SyncController<C, SERVER> {
    /// The host's active workspace changed: re-read the active index and
    /// rescan the whole set. A full rescan stays correct even when the
    /// host coalesces several switches into one notification.
    pub fn workspace_changed_handler(&mut self) {
        let active_index = self.shell.active_workspace_index();
        for index in 0..self.indicators.len() {
            if index == active_index {
                self.indicators[index].set_active(&mut self.shell);
            } else {
                self.indicators[index].set_inactive(&mut self.shell);
            }
        }
    }
}
