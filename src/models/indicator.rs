use crate::models::WorkspaceIndex;
use crate::shell::{Handle, ShellServer};

/// View model for one workspace's panel indicator.
///
/// Mutators re-render the bound widget before returning, so the visual
/// state never trails the field state; with all work on the host's single
/// event loop the pair is atomic as far as any caller can observe.
#[derive(Debug, Clone)]
pub struct Indicator<N: Handle> {
    index: WorkspaceIndex,
    label: String,
    active: bool,
    window_count: usize,
    node: N,
}

impl<N: Handle> Indicator<N> {
    pub(crate) fn new(
        index: WorkspaceIndex,
        label: String,
        active: bool,
        window_count: usize,
        node: N,
    ) -> Self {
        Self {
            index,
            label,
            active,
            window_count,
            node,
        }
    }

    pub fn index(&self) -> WorkspaceIndex {
        self.index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn window_count(&self) -> usize {
        self.window_count
    }

    /// The mounted widget, used only for event attachment and rendering.
    pub fn node(&self) -> N {
        self.node
    }

    pub fn set_active<S>(&mut self, shell: &mut S)
    where
        S: ShellServer<WidgetHandle = N>,
    {
        self.active = true;
        self.sync(shell);
    }

    pub fn set_inactive<S>(&mut self, shell: &mut S)
    where
        S: ShellServer<WidgetHandle = N>,
    {
        self.active = false;
        self.sync(shell);
    }

    /// Takes the host-reported count as-is.
    pub fn set_window_count<S>(&mut self, shell: &mut S, window_count: usize)
    where
        S: ShellServer<WidgetHandle = N>,
    {
        self.window_count = window_count;
        self.sync(shell);
    }

    fn sync<S>(&self, shell: &mut S)
    where
        S: ShellServer<WidgetHandle = N>,
    {
        shell.render_indicator(self.node, self.active, self.window_count);
    }
}
