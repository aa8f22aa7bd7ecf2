//! Single-flight discipline for reorder operations.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

choice_enum! {
    /// What a move does while another move on the same list is in flight.
    #[derive(Default)]
    BusyPolicy as "busy_policy" {
        /// Wait for the running move (and its refetch), then re-plan.
        #[default]
        Queue => "queue",
        /// Reject the move without touching the backend.
        Drop => "drop",
    }
}

/// At most one in-flight reorder per list, keyed by entity path.
#[derive(Debug, Default)]
pub struct ReorderGate {
    lists: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    policy: BusyPolicy,
}

impl ReorderGate {
    #[must_use]
    pub fn new(policy: BusyPolicy) -> Self {
        Self {
            lists: Mutex::new(HashMap::new()),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> BusyPolicy {
        self.policy
    }

    /// Acquire the slot for `list`.
    ///
    /// Under [`BusyPolicy::Drop`] returns `None` if another move holds it.
    /// The slot is released when the guard is dropped, which callers do only
    /// after the post-move refetch has settled.
    pub async fn enter(&self, list: &str) -> Option<OwnedMutexGuard<()>> {
        let slot = {
            let mut lists = self.lists.lock().await;
            Arc::clone(
                lists
                    .entry(list.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        match self.policy {
            BusyPolicy::Queue => Some(slot.lock_owned().await),
            BusyPolicy::Drop => {
                let guard = slot.try_lock_owned().ok();
                if guard.is_none() {
                    debug!(list, "Reorder already in flight, dropping move");
                }
                guard
            }
        }
    }
}
