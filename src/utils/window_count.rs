//! Counting the windows a workspace has on the primary display.

use crate::shell::ShellServer;

/// How many of `workspace`'s windows sit on the primary display.
///
/// The host's count hint is checked first: an empty workspace resolves to
/// zero without touching the display registry. Side-effect-free; host
/// query failures propagate untouched.
pub fn primary_window_count<S: ShellServer>(shell: &S, workspace: S::WorkspaceHandle) -> usize {
    if shell.window_count_hint(workspace) == 0 {
        return 0;
    }

    let primary = shell.primary_display();
    shell
        .list_windows(workspace)
        .into_iter()
        .filter(|&window| shell.window_display(window) == primary)
        .count()
}
