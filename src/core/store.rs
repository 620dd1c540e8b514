use crate::domain::model::LookupOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Identity of one lookup attempt, captured at `begin_attempt`. The store
/// re-checks it before any outcome write, so an attempt that has been
/// superseded cannot clobber state produced by a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuerySnapshot {
    pub name: String,
    pub outcome: LookupOutcome,
}

impl QuerySnapshot {
    pub fn is_loading(&self) -> bool {
        self.outcome.is_pending()
    }
}

/// Owns the query text and the latest lookup outcome. Written only by the
/// workflow side, read by any number of subscribers through watch snapshots.
pub struct QueryStore {
    seq: AtomicU64,
    tx: watch::Sender<QuerySnapshot>,
}

impl QueryStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(QuerySnapshot::default());
        Self {
            seq: AtomicU64::new(0),
            tx,
        }
    }

    pub fn change_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.tx.send_modify(|state| state.name = name);
    }

    pub fn name(&self) -> String {
        self.tx.borrow().name.clone()
    }

    /// Starts a new attempt: bumps the sequence counter and flips the
    /// outcome to `Pending`. Every attempt started earlier is superseded
    /// from this point on.
    pub fn begin_attempt(&self) -> AttemptId {
        let id = self.seq.fetch_add(1, Ordering::AcqRel) + 1;
        self.tx
            .send_modify(|state| state.outcome = LookupOutcome::Pending);
        AttemptId(id)
    }

    /// Applies a terminal outcome for `attempt`. Returns false and leaves
    /// the state untouched when the attempt is no longer the current one.
    pub fn apply(&self, attempt: AttemptId, outcome: LookupOutcome) -> bool {
        let mut applied = false;
        self.tx.send_modify(|state| {
            // 檢查要在鎖裡做，begin_attempt 和 apply 才不會交錯
            if attempt.0 == self.seq.load(Ordering::Acquire) {
                state.outcome = outcome;
                applied = true;
            }
        });
        if !applied {
            tracing::debug!(attempt = attempt.0, "superseded attempt dropped");
        }
        applied
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<QuerySnapshot> {
        self.tx.subscribe()
    }

    /// Waits until the store holds a terminal outcome and returns it.
    pub async fn wait_for_terminal(&self) -> LookupOutcome {
        let mut rx = self.subscribe();
        loop {
            let outcome = rx.borrow_and_update().outcome.clone();
            if outcome.is_terminal() {
                return outcome;
            }
            if rx.changed().await.is_err() {
                return outcome;
            }
        }
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new()
    }
}
