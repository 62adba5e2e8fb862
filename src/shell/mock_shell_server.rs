use super::{MockHandle, ShellServer, Signal};
use crate::config::Config;
use crate::models::{DisplayId, EventTime, WorkspaceIndex};
use std::cell::Cell;

const WORKSPACE_BASE: MockHandle = 100;
const WINDOW_BASE: MockHandle = 500;
const WIDGET_BASE: MockHandle = 900;

pub type MockSignal = Signal<MockHandle, MockHandle>;

#[derive(Debug, Default, Clone)]
pub struct MockWorkspace {
    pub handle: MockHandle,
    pub windows: Vec<MockWindow>,
}

#[derive(Debug, Clone, Copy)]
pub struct MockWindow {
    pub handle: MockHandle,
    pub display: DisplayId,
    pub appears_focused: bool,
}

#[derive(Debug, Clone)]
pub struct MockWidget {
    pub handle: MockHandle,
    pub label: String,
    pub active: bool,
    pub window_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Plain(MockHandle, EventTime),
    WithFocus(MockHandle, MockHandle, EventTime),
}

/// Scripted host double. Desktop state is plain data the test mutates
/// directly; every host action is recorded so call counts can be asserted.
#[derive(Debug, Default)]
pub struct MockShellServer {
    pub workspaces: Vec<MockWorkspace>,
    pub active_index: WorkspaceIndex,
    pub primary: DisplayId,
    pub event_time: EventTime,
    pub live: Vec<(MockHandle, MockSignal)>,
    pub unsubscribed: Vec<MockHandle>,
    pub widgets: Vec<MockWidget>,
    pub containers: Vec<(MockHandle, Vec<MockHandle>)>,
    pub panel_children: Vec<MockHandle>,
    pub activations: Vec<Activation>,
    pub overview_calls: usize,
    pub apps_calls: usize,
    pub notifications: Vec<(String, String)>,
    pub primary_display_queries: Cell<usize>,
    next_signal_id: MockHandle,
    next_window: MockHandle,
    next_widget: MockHandle,
}

impl MockShellServer {
    pub fn add_window(
        &mut self,
        index: WorkspaceIndex,
        display: DisplayId,
        appears_focused: bool,
    ) -> MockHandle {
        let handle = self.next_window;
        self.next_window += 1;
        self.workspaces[index].windows.push(MockWindow {
            handle,
            display,
            appears_focused,
        });
        handle
    }

    pub fn remove_window(&mut self, index: WorkspaceIndex, window: MockHandle) {
        let windows = &mut self.workspaces[index].windows;
        let position = windows
            .iter()
            .position(|w| w.handle == window)
            .expect("removing a window that was never added");
        windows.remove(position);
    }

    pub fn subscription_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_subscribed(&self, signal: MockSignal) -> bool {
        self.live.iter().any(|(_, s)| *s == signal)
    }

    pub fn widget(&self, node: MockHandle) -> &MockWidget {
        self.widgets
            .iter()
            .find(|w| w.handle == node)
            .expect("unknown widget handle")
    }

    fn workspace(&self, handle: MockHandle) -> &MockWorkspace {
        self.workspaces
            .iter()
            .find(|w| w.handle == handle)
            .expect("unknown workspace handle")
    }

    fn window(&self, handle: MockHandle) -> MockWindow {
        self.workspaces
            .iter()
            .flat_map(|w| w.windows.iter())
            .find(|w| w.handle == handle)
            .copied()
            .expect("unknown window handle")
    }
}

impl ShellServer for MockShellServer {
    type WorkspaceHandle = MockHandle;
    type WindowHandle = MockHandle;
    type WidgetHandle = MockHandle;
    type SignalId = MockHandle;

    fn new(config: &impl Config) -> Self {
        let workspaces = (0..config.workspace_count())
            .map(|index| MockWorkspace {
                handle: WORKSPACE_BASE + index as MockHandle,
                windows: Vec::new(),
            })
            .collect();
        Self {
            workspaces,
            primary: 1,
            event_time: 11_000,
            next_signal_id: 1,
            next_window: WINDOW_BASE,
            next_widget: WIDGET_BASE,
            ..Self::default()
        }
    }

    fn active_workspace_index(&self) -> WorkspaceIndex {
        self.active_index
    }

    fn workspace_by_index(&self, index: WorkspaceIndex) -> MockHandle {
        self.workspaces[index].handle
    }

    fn window_count_hint(&self, workspace: MockHandle) -> usize {
        self.workspace(workspace).windows.len()
    }

    fn list_windows(&self, workspace: MockHandle) -> Vec<MockHandle> {
        self.workspace(workspace)
            .windows
            .iter()
            .map(|w| w.handle)
            .collect()
    }

    fn activate_workspace(&mut self, workspace: MockHandle, time: EventTime) {
        self.activations.push(Activation::Plain(workspace, time));
    }

    fn activate_workspace_with_focus(
        &mut self,
        workspace: MockHandle,
        window: MockHandle,
        time: EventTime,
    ) {
        self.activations
            .push(Activation::WithFocus(workspace, window, time));
    }

    fn window_display(&self, window: MockHandle) -> DisplayId {
        self.window(window).display
    }

    fn window_appears_focused(&self, window: MockHandle) -> bool {
        self.window(window).appears_focused
    }

    fn primary_display(&self) -> DisplayId {
        self.primary_display_queries
            .set(self.primary_display_queries.get() + 1);
        self.primary
    }

    fn current_event_time(&self) -> EventTime {
        self.event_time
    }

    fn subscribe(&mut self, signal: MockSignal) -> MockHandle {
        let id = self.next_signal_id;
        self.next_signal_id += 1;
        self.live.push((id, signal));
        id
    }

    fn unsubscribe(&mut self, id: MockHandle) {
        let position = self
            .live
            .iter()
            .position(|(live_id, _)| *live_id == id)
            .expect("unsubscribe of a signal id that is not live");
        self.live.remove(position);
        self.unsubscribed.push(id);
    }

    fn create_indicator(&mut self, label: &str, active: bool, window_count: usize) -> MockHandle {
        let handle = self.next_widget;
        self.next_widget += 1;
        self.widgets.push(MockWidget {
            handle,
            label: label.to_string(),
            active,
            window_count,
        });
        handle
    }

    fn render_indicator(&mut self, node: MockHandle, active: bool, window_count: usize) {
        let widget = self
            .widgets
            .iter_mut()
            .find(|w| w.handle == node)
            .expect("rendering an unknown widget handle");
        widget.active = active;
        widget.window_count = window_count;
    }

    fn create_container(&mut self, children: &[MockHandle]) -> MockHandle {
        let handle = self.next_widget;
        self.next_widget += 1;
        self.containers.push((handle, children.to_vec()));
        handle
    }

    fn insert_panel_child(&mut self, node: MockHandle, index: usize) {
        self.panel_children.insert(index, node);
    }

    fn remove_panel_child(&mut self, node: MockHandle) {
        let position = self
            .panel_children
            .iter()
            .position(|child| *child == node)
            .expect("removing a panel child that was never inserted");
        self.panel_children.remove(position);
    }

    fn show_overview(&mut self) {
        self.overview_calls += 1;
    }

    fn show_apps(&mut self) {
        self.apps_calls += 1;
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        self.notifications
            .push((title.to_string(), message.to_string()));
    }
}
