use crate::models::WorkspaceIndex;

/// Host signals the glue code translates into, after matching them to the
/// subscription they were delivered for. Routing is positional: the index
/// is the workspace/indicator the subscription was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ActiveWorkspaceChanged,
    WindowAdded(WorkspaceIndex),
    WindowRemoved(WorkspaceIndex),
    ButtonRelease(WorkspaceIndex, PointerButton),
}

/// Pointer button identity, following the conventional 1/2/3 numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u8),
}

impl PointerButton {
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Primary,
            2 => Self::Middle,
            3 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// Verdict reported back to the host's event chain after a pointer event.
/// This crate always reports [`Propagation::Propagate`]; whether the event
/// travels further is the host's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Propagate,
    Stop,
}
