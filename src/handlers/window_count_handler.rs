use crate::config::Config;
use crate::models::{SyncController, WorkspaceIndex};
use crate::shell::ShellServer;
use crate::utils::window_count::primary_window_count;

impl<C: Config, SERVER: ShellServer> SyncController<C, SERVER> {
    /// A window joined or left workspace `index`: re-derive the count from
    /// the host instead of adjusting the stored one, so repeated or
    /// reordered deliveries converge on the truth instead of drifting.
    pub fn window_count_handler(&mut self, index: WorkspaceIndex) {
        let workspace = self.shell.workspace_by_index(index);
        let window_count = primary_window_count(&self.shell, workspace);
        self.indicators[index].set_window_count(&mut self.shell, window_count);
    }
}
