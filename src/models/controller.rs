use crate::config::Config;
use crate::errors::{Result, SimplyError};
use crate::models::{Indicators, Lifecycle, Subscriptions};
use crate::shell::{ShellServer, Signal};

const NOTIFICATION_TITLE: &str = "Simply Workspaces";

/// Orchestrates one enable/disable cycle: builds the indicator set from
/// live desktop state, wires the host signals up, and owns everything it
/// created until teardown. There is no ambient state anywhere; a fresh
/// cycle starts from fresh fields.
///
/// `enable` and `disable` are trusted to be called alternately by the host
/// glue; calling either twice in a row is outside the contract.
#[derive(Debug)]
pub struct SyncController<C, SERVER: ShellServer> {
    pub config: C,
    pub shell: SERVER,
    pub lifecycle: Lifecycle,
    pub indicators: Indicators<SERVER::WidgetHandle>,
    pub subscriptions: Subscriptions<SERVER::SignalId>,
    container: Option<SERVER::WidgetHandle>,
}

impl<C, SERVER> SyncController<C, SERVER>
where
    C: Config,
    SERVER: ShellServer,
{
    pub fn new(config: C) -> Self {
        let shell = SERVER::new(&config);
        Self {
            config,
            shell,
            lifecycle: Lifecycle::default(),
            indicators: Indicators::default(),
            subscriptions: Subscriptions::default(),
            container: None,
        }
    }

    /// Build the indicators, attach all subscriptions, and mount the
    /// container into the panel.
    ///
    /// # Errors
    ///
    /// Refuses to run under dynamic workspace management: reports the error
    /// to the host's notification surface and returns without having built,
    /// subscribed to, or mounted anything.
    pub fn enable(&mut self) -> Result<()> {
        if self.config.dynamic_workspaces() {
            log::error!("host manages workspaces dynamically; indicators need a fixed count");
            self.shell
                .notify_error(NOTIFICATION_TITLE, "Dynamic workspaces are not supported");
            return Err(SimplyError::DynamicWorkspaces);
        }

        self.indicators = Indicators::snapshot(&self.config, &mut self.shell);
        self.attach_subscriptions();
        let container = self.shell.create_container(&self.indicators.nodes());
        self.shell.insert_panel_child(container, 0);
        self.container = Some(container);
        self.lifecycle = Lifecycle::Enabled;
        Ok(())
    }

    /// Tear down every subscription, unmount the container, and discard
    /// the indicator set. Runs synchronously: once this returns, no host
    /// signal has a live subscription left to arrive through.
    pub fn disable(&mut self) {
        self.subscriptions.teardown(&mut self.shell);
        if let Some(container) = self.container.take() {
            self.shell.remove_panel_child(container);
        }
        self.indicators = Indicators::default();
        self.lifecycle = Lifecycle::Disabled;
    }

    // Subscribe to the three signal classes. Each id lands in the ledger
    // the moment the host hands it out.
    fn attach_subscriptions(&mut self) {
        let Self {
            shell,
            indicators,
            subscriptions,
            ..
        } = self;

        subscriptions.record(shell.subscribe(Signal::ActiveWorkspaceChanged));
        for indicator in indicators.iter() {
            let workspace = shell.workspace_by_index(indicator.index());
            subscriptions.record(shell.subscribe(Signal::WindowAdded(workspace)));
            subscriptions.record(shell.subscribe(Signal::WindowRemoved(workspace)));
            subscriptions.record(shell.subscribe(Signal::ButtonRelease(indicator.node())));
        }
    }
}

#[cfg(test)]
impl SyncController<crate::config::TestConfig, crate::shell::MockShellServer> {
    pub fn new_test(workspace_count: usize) -> Self {
        Self::new(crate::config::TestConfig {
            workspace_count,
            dynamic_workspaces: false,
        })
    }

    pub fn new_test_dynamic(workspace_count: usize) -> Self {
        Self::new(crate::config::TestConfig {
            workspace_count,
            dynamic_workspaces: true,
        })
    }
}
