use crate::core::store::QueryStore;
use crate::core::supervisor::WorkflowSupervisor;
use crate::core::workflow;
use crate::domain::ports::LookupClient;
use std::sync::Arc;
use std::time::Duration;

/// Search-form use case: one store, one client, latest-wins lookups of the
/// current name.
pub struct SearchRealmFlow<C: LookupClient> {
    store: Arc<QueryStore>,
    client: Arc<C>,
    supervisor: WorkflowSupervisor,
    settle: Duration,
}

impl<C: LookupClient + 'static> SearchRealmFlow<C> {
    pub fn new(client: Arc<C>, settle: Duration) -> Self {
        Self {
            store: Arc::new(QueryStore::new()),
            client,
            supervisor: WorkflowSupervisor::new(),
            settle,
        }
    }

    pub fn store(&self) -> Arc<QueryStore> {
        Arc::clone(&self.store)
    }

    pub fn change_name(&self, name: impl Into<String>) {
        self.store.change_name(name);
    }

    /// Requests a lookup for the current name. A still-pending earlier
    /// request is superseded; only this one's outcome can reach the store.
    pub fn lookup_requested(&mut self) {
        let attempt = self.store.begin_attempt();
        let store = Arc::clone(&self.store);
        let client = Arc::clone(&self.client);
        let settle = self.settle;
        tracing::debug!(name = %self.store.name(), "lookup requested");
        self.supervisor.supersede(move |_cancel| async move {
            workflow::run_lookup(store.as_ref(), client.as_ref(), attempt, settle).await;
        });
    }

    /// Waits for the in-flight attempt to wind down.
    pub async fn join(&mut self) {
        self.supervisor.join_current().await;
    }
}
