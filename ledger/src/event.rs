//! Events emitted after ledger mutations commit.

use ballot_types::VoterAddress;

/// What a delegation did once its chain was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DelegationOutcome {
    /// The terminal delegate had voted; the weight went straight into this
    /// proposal's tally.
    Counted { proposal: usize },
    /// The terminal delegate had not voted; it now holds this total weight.
    Accumulated { delegate_weight: u64 },
}

/// Ledger-level events that observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// The chairperson enfranchised a voter.
    RightGranted { voter: VoterAddress },
    /// A voter delegated its weight.
    Delegated {
        from: VoterAddress,
        to: VoterAddress,
        terminal: VoterAddress,
        weight: u64,
        outcome: DelegationOutcome,
    },
    /// A voter voted directly.
    VoteCast {
        voter: VoterAddress,
        proposal: usize,
        weight: u64,
    },
}

/// Synchronous fan-out event bus for ledger events.
///
/// Listeners run inline while the ledger is borrowed (and locked, behind a
/// [`crate::SharedLedger`]); they must not call back into the ledger.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&LedgerEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    /// Deliver `event` to every listener in subscription order.
    pub fn emit(&self, event: &LedgerEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
