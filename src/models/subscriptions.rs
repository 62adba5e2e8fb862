use crate::shell::{Handle, ShellServer};

/// Ledger of host signal subscriptions awaiting teardown.
///
/// Every id the host hands out is recorded here at the moment of
/// subscribing, before the signal can fire. Teardown is all-or-nothing:
/// one call unsubscribes every entry, newest first, and leaves the ledger
/// empty. A subscription that is not in the ledger would leak across
/// enable/disable cycles, so there is deliberately no other way to hold
/// one.
#[derive(Debug)]
pub struct Subscriptions<Id: Handle> {
    ledger: Vec<Id>,
}

impl<Id: Handle> Default for Subscriptions<Id> {
    fn default() -> Self {
        Self { ledger: Vec::new() }
    }
}

impl<Id: Handle> Subscriptions<Id> {
    pub fn record(&mut self, id: Id) {
        self.ledger.push(id);
    }

    /// Unsubscribe everything, newest first, and clear the ledger.
    pub fn teardown<S>(&mut self, shell: &mut S)
    where
        S: ShellServer<SignalId = Id>,
    {
        while let Some(id) = self.ledger.pop() {
            shell.unsubscribe(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }
}
