//! Live query subscription layer.
//!
//! A minimal publish/subscribe mechanism scoped to the two store tables.
//! Each live query registers a recompute closure against one table; writes
//! to that table re-run the closure, which pushes a freshly computed result
//! set into the subscriber's channel. Dropping the subscriber handle
//! releases the registration.

use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Logical topics a live query can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Table {
    Airport,
    Favorite,
}

/// Identifier for one active registration.
pub(crate) type SubscriptionId = u64;

/// Re-runs the query and pushes the fresh result to the subscriber.
/// Reports `false` once every receiver is gone so the registry can prune
/// the entry.
pub(crate) type Recompute = Box<dyn FnMut() -> bool + Send>;

struct Registration {
    id: SubscriptionId,
    table: Table,
    recompute: Recompute,
}

/// The set of active live queries, keyed by the table they depend on.
pub(crate) struct QueryRegistry {
    next_id: SubscriptionId,
    registrations: Vec<Registration>,
}

impl QueryRegistry {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            registrations: Vec::new(),
        }
    }

    pub(crate) fn register(&mut self, table: Table, recompute: Recompute) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.registrations.push(Registration {
            id,
            table,
            recompute,
        });
        id
    }

    pub(crate) fn unregister(&mut self, id: SubscriptionId) {
        self.registrations.retain(|r| r.id != id);
    }

    /// Re-run every query registered against `table`. Entries whose
    /// subscribers have all gone away are dropped.
    pub(crate) fn notify(&mut self, table: Table) {
        self.registrations.retain_mut(|registration| {
            if registration.table != table {
                return true;
            }
            (registration.recompute)()
        });
    }

    pub(crate) fn len(&self) -> usize {
        self.registrations.len()
    }
}

/// Subscriber handle to a live query result.
///
/// The latest result set is always available synchronously via
/// [`current`](Self::current); [`next`](Self::next) suspends until the
/// query re-emits after a relevant write. Dropping the handle unsubscribes
/// and stops update delivery.
pub struct LiveQuery<T> {
    rx: watch::Receiver<Vec<T>>,
    registry: Arc<Mutex<QueryRegistry>>,
    id: SubscriptionId,
}

impl<T: Clone> LiveQuery<T> {
    pub(crate) fn new(
        rx: watch::Receiver<Vec<T>>,
        registry: Arc<Mutex<QueryRegistry>>,
        id: SubscriptionId,
    ) -> Self {
        Self { rx, registry, id }
    }

    /// The most recently computed result set.
    pub fn current(&self) -> Vec<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next re-emission and return it.
    ///
    /// Returns `None` if the publishing side has gone away, which ends the
    /// stream.
    pub async fn next(&mut self) -> Option<Vec<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl<T> Drop for LiveQuery<T> {
    fn drop(&mut self) {
        // Unsubscribe. A poisoned registry lock means the process is
        // already tearing down; the failed-send path prunes the entry then.
        if let Ok(mut registry) = self.registry.lock() {
            registry.unregister(self.id);
        }
    }
}
