/// Top-level state of the sync core. Nothing survives the trip back to
/// `Disabled` except the host's own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Disabled,
    Enabled,
}
