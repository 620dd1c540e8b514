use crate::domain::model::{RealmInfoResponse, RealmRecord};
use crate::domain::ports::LookupClient;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory gateway double, the offline-development counterpart of the
/// real ElectrumX adapter (`--mock` on the CLI). Tests also lean on its
/// per-operation call counters.
pub struct MockLookupClient {
    realms: HashMap<String, (String, RealmRecord)>,
    owned: HashMap<String, RealmRecord>,
    latency: Option<Duration>,
    realm_info_calls: AtomicUsize,
    location_calls: AtomicUsize,
    scripthash_calls: AtomicUsize,
    open_calls: AtomicUsize,
    close_calls: AtomicUsize,
    last_location_arg: Mutex<Option<String>>,
}

impl MockLookupClient {
    pub fn new() -> Self {
        Self {
            realms: HashMap::new(),
            owned: HashMap::new(),
            latency: None,
            realm_info_calls: AtomicUsize::new(0),
            location_calls: AtomicUsize::new(0),
            scripthash_calls: AtomicUsize::new(0),
            open_calls: AtomicUsize::new(0),
            close_calls: AtomicUsize::new(0),
            last_location_arg: Mutex::new(None),
        }
    }

    /// Seeds a claimed realm: name → identifier → record.
    pub fn with_realm(
        mut self,
        name: impl Into<String>,
        atomical_id: impl Into<String>,
        record: serde_json::Value,
    ) -> Self {
        self.realms
            .insert(name.into(), (atomical_id.into(), RealmRecord::new(record)));
        self
    }

    /// Seeds the realms held by a scripthash.
    pub fn with_owned(mut self, scripthash: impl Into<String>, record: serde_json::Value) -> Self {
        self.owned.insert(scripthash.into(), RealmRecord::new(record));
        self
    }

    /// Adds an artificial delay in front of every remote operation.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// 給 --mock 用的示範資料
    pub fn demo() -> Self {
        Self::new()
            .with_realm(
                "atom",
                "atom0000id",
                serde_json::json!({
                    "atomical_id": "atom0000id",
                    "location": "demo-outpoint:0",
                    "owner": "bc1qdemo"
                }),
            )
            .with_realm(
                "bitcoin",
                "btc0000id",
                serde_json::json!({
                    "atomical_id": "btc0000id",
                    "location": "demo-outpoint:1",
                    "owner": "bc1qdemo"
                }),
            )
    }

    pub fn realm_info_calls(&self) -> usize {
        self.realm_info_calls.load(Ordering::SeqCst)
    }

    pub fn location_calls(&self) -> usize {
        self.location_calls.load(Ordering::SeqCst)
    }

    pub fn scripthash_calls(&self) -> usize {
        self.scripthash_calls.load(Ordering::SeqCst)
    }

    pub fn open_calls(&self) -> usize {
        self.open_calls.load(Ordering::SeqCst)
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }

    pub fn last_location_arg(&self) -> Option<String> {
        self.last_location_arg
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    async fn settle(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for MockLookupClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupClient for MockLookupClient {
    async fn realm_info(&self, name: &str) -> Result<RealmInfoResponse> {
        self.realm_info_calls.fetch_add(1, Ordering::SeqCst);
        self.settle().await;
        match self.realms.get(name) {
            Some((atomical_id, _)) => Ok(RealmInfoResponse::claimed(atomical_id.clone())),
            None => Ok(RealmInfoResponse::unclaimed()),
        }
    }

    async fn location(&self, identifier: &str) -> Result<RealmRecord> {
        self.location_calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_location_arg
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(identifier.to_string());
        self.settle().await;
        self.realms
            .values()
            .find(|(atomical_id, _)| atomical_id == identifier)
            .map(|(_, record)| record.clone())
            .ok_or_else(|| LookupError::GatewayError {
                message: format!("unknown atomical id: {}", identifier),
            })
    }

    async fn realms_by_scripthash(&self, scripthash: &str) -> Result<RealmRecord> {
        self.scripthash_calls.fetch_add(1, Ordering::SeqCst);
        self.settle().await;
        self.owned
            .get(scripthash)
            .cloned()
            .ok_or_else(|| LookupError::GatewayError {
                message: format!("unknown scripthash: {}", scripthash),
            })
    }

    async fn open(&self) -> Result<()> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.close_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
