use crate::core::store::QueryStore;
use crate::core::supervisor::WorkflowSupervisor;
use crate::core::workflow;
use crate::domain::ports::LookupClient;
use std::sync::Arc;
use std::time::Duration;

/// Owner view use case: lists the realms held by a scripthash, with the
/// same latest-wins discipline as the search flow.
pub struct RealmsViewFlow<C: LookupClient> {
    store: Arc<QueryStore>,
    client: Arc<C>,
    supervisor: WorkflowSupervisor,
    settle: Duration,
}

impl<C: LookupClient + 'static> RealmsViewFlow<C> {
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

    pub fn change_scripthash(&self, scripthash: impl Into<String>) {
        self.store.change_name(scripthash);
    }

    pub fn load_requested(&mut self) {
        let attempt = self.store.begin_attempt();
        let store = Arc::clone(&self.store);
        let client = Arc::clone(&self.client);
        let settle = self.settle;
        tracing::debug!(scripthash = %self.store.name(), "owner view load requested");
        self.supervisor.supersede(move |_cancel| async move {
            workflow::run_realms_by_scripthash(store.as_ref(), client.as_ref(), attempt, settle)
                .await;
        });
    }

    pub async fn join(&mut self) {
        self.supervisor.join_current().await;
    }
}
