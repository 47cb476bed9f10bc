// crates/vouch-state/src/store.rs

use std::sync::Arc;

use vouch_core::Operation;
use vouch_graph::{apply_batch, MemberGraph};

/// What the operation feed asks the store to do.
#[derive(Debug, Clone)]
pub enum Action {
    /// New operations arrived; fold them onto the current snapshot and
    /// append them to the log.
    AddOperations(Vec<Operation>),
    /// Full resync: replace the log and rebuild the graph from scratch.
    SetOperations(Vec<Operation>),
}

/// Holds the full known operation history and the snapshot folded from it.
///
/// Calls for one store must be sequenced by the caller; the fold itself is
/// purely functional, so the store has no interior locking.
#[derive(Debug, Default)]
pub struct MemberStore {
    operations: Vec<Operation>,
    current: Arc<MemberGraph>,
}

impl MemberStore {
    pub fn new() -> Self {
        MemberStore::default()
    }

    /// The current snapshot. Cheap to clone and hand out; later dispatches
    /// never mutate a snapshot already published.
    pub fn snapshot(&self) -> Arc<MemberGraph> {
        Arc::clone(&self.current)
    }

    /// The full operation history as received, rejected records included.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::AddOperations(operations) => {
                let next = apply_batch((*self.current).clone(), &operations);
                self.operations.extend(operations);
                self.current = Arc::new(next);
            }
            Action::SetOperations(operations) => {
                tracing::info!(
                    count = operations.len(),
                    "rebuilding member graph from full operation history"
                );
                let next = apply_batch(MemberGraph::empty(), &operations);
                self.operations = operations;
                self.current = Arc::new(next);
            }
        }
    }
}
