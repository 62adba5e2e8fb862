use crate::config::Config;
use crate::models::Indicator;
use crate::shell::{Handle, ShellServer};
use crate::utils::window_count::primary_window_count;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use super::WorkspaceIndex;

/// The ordered indicator set, one entry per configured workspace,
/// index-aligned with the host's workspace indices.
///
/// Built once per enable cycle and discarded whole on disable. Indexed
/// access panics on an out-of-range workspace index: that only happens when
/// the host delivers an event for a workspace it never enumerated, which is
/// a contract violation this crate does not absorb.
#[derive(Debug, Clone)]
pub struct Indicators<N: Handle> {
    inner: Vec<Indicator<N>>,
}

impl<N: Handle> Default for Indicators<N> {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl<N: Handle> Indicators<N> {
    /// Build the set from the desktop state of this instant: one indicator
    /// per configured workspace, labelled by position starting at "1",
    /// active where the host reports its active index, window counts
    /// computed fresh. Construction is in index order; routing relies on it.
    pub fn snapshot<S>(config: &impl Config, shell: &mut S) -> Self
    where
        S: ShellServer<WidgetHandle = N>,
    {
        let workspace_count = config.workspace_count();
        let active_index = shell.active_workspace_index();
        let mut inner = Vec::with_capacity(workspace_count);
        for index in 0..workspace_count {
            let workspace = shell.workspace_by_index(index);
            let window_count = primary_window_count(shell, workspace);
            let label = (index + 1).to_string();
            let active = index == active_index;
            let node = shell.create_indicator(&label, active, window_count);
            inner.push(Indicator::new(index, label, active, window_count, node));
        }
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Indicator<N>> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, Indicator<N>> {
        self.inner.iter_mut()
    }

    /// Widget handles in index order, for container assembly.
    pub fn nodes(&self) -> Vec<N> {
        self.inner.iter().map(Indicator::node).collect()
    }
}

impl<N: Handle> Index<WorkspaceIndex> for Indicators<N> {
    type Output = Indicator<N>;

    fn index(&self, index: WorkspaceIndex) -> &Self::Output {
        &self.inner[index]
    }
}

impl<N: Handle> IndexMut<WorkspaceIndex> for Indicators<N> {
    fn index_mut(&mut self, index: WorkspaceIndex) -> &mut Self::Output {
        &mut self.inner[index]
    }
}
