//! Background identity refresh.
//!
//! The tracker holds the latest [`NetworkIdentity`] in a watch channel.
//! Every refresh bumps a generation counter; a lookup only publishes its
//! result if no newer refresh (or explicit [`IdentityTracker::set`]) has
//! happened since it started.

use std::sync::Arc;

use sf_core::NetworkIdentity;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::IdentityResolver;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tracked {
    generation: u64,
    identity: NetworkIdentity,
}

#[derive(Debug, Clone)]
pub struct IdentityTracker {
    state: watch::Sender<Tracked>,
}

impl Default for IdentityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityTracker {
    /// Starts out [`NetworkIdentity::Pending`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(Tracked {
                generation: 0,
                identity: NetworkIdentity::Pending,
            }),
        }
    }

    #[must_use]
    pub fn current(&self) -> NetworkIdentity {
        self.state.borrow().identity.clone()
    }

    /// Replace the identity directly, superseding any lookup in flight.
    pub fn set(&self, identity: NetworkIdentity) {
        self.state.send_modify(|tracked| {
            tracked.generation += 1;
            tracked.identity = identity;
        });
    }

    /// Reset to pending and resolve on a spawned task. Returns immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn refresh(&self, resolver: Arc<IdentityResolver>) -> JoinHandle<()> {
        let mut generation = 0;
        self.state.send_modify(|tracked| {
            tracked.generation += 1;
            tracked.identity = NetworkIdentity::Pending;
            generation = tracked.generation;
        });

        let state = self.state.clone();
        tokio::spawn(async move {
            let identity = resolver.resolve().await;
            let published = state.send_if_modified(|tracked| {
                if tracked.generation != generation {
                    return false;
                }
                tracked.identity = identity;
                true
            });
            if !published {
                tracing::debug!(generation, "discarding superseded identity lookup");
            }
        })
    }

    /// Watch identity changes, e.g. to swap the placeholder for the address.
    #[must_use]
    pub fn subscribe(&self) -> IdentityUpdates {
        IdentityUpdates {
            rx: self.state.subscribe(),
        }
    }
}

/// Receiving side of an [`IdentityTracker`].
#[derive(Debug)]
pub struct IdentityUpdates {
    rx: watch::Receiver<Tracked>,
}

impl IdentityUpdates {
    /// Wait for the next published identity. `None` once the tracker is
    /// dropped.
    pub async fn changed(&mut self) -> Option<NetworkIdentity> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().identity.clone())
    }

    #[must_use]
    pub fn current(&self) -> NetworkIdentity {
        self.rx.borrow().identity.clone()
    }
}
