use crate::config::Config;
use crate::models::{SyncController, WorkspaceIndex};
use crate::shell::ShellServer;
use crate::shell_event::{PointerButton, Propagation};

impl<C: Config, SERVER: ShellServer> SyncController<C, SERVER> {
    /// A pointer button was released over indicator `index`: primary
    /// switches to that workspace, secondary opens the overview, middle
    /// opens the applications view. The event always propagates onward.
    pub fn button_release_handler(
        &mut self,
        index: WorkspaceIndex,
        button: PointerButton,
    ) -> Propagation {
        match button {
            PointerButton::Primary => self.switch_to_workspace(index),
            PointerButton::Secondary => self.shell.show_overview(),
            PointerButton::Middle => self.shell.show_apps(),
            PointerButton::Other(_) => {}
        }
        Propagation::Propagate
    }

    // Activating the workspace we are already on would only churn the
    // host's focus arbitration, so that case is skipped. When a window on
    // the target workspace appears focused, activation carries it along;
    // otherwise the workspace is activated bare.
    fn switch_to_workspace(&mut self, index: WorkspaceIndex) {
        if self.indicators[index].is_active() {
            return;
        }

        let workspace = self.shell.workspace_by_index(index);
        let focused = self
            .shell
            .list_windows(workspace)
            .into_iter()
            .find(|&window| self.shell.window_appears_focused(window));

        let time = self.shell.current_event_time();
        match focused {
            Some(window) => self
                .shell
                .activate_workspace_with_focus(workspace, window, time),
            None => self.shell.activate_workspace(workspace, time),
        }
    }
}
