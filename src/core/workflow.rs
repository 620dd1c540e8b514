use crate::core::classifier;
use crate::core::store::{AttemptId, QueryStore};
use crate::domain::model::{FailureReason, LookupOutcome, RealmRecord};
use crate::domain::ports::LookupClient;
use crate::utils::error::Result;
use std::time::Duration;

/// Runs one name-lookup attempt end to end: settle, validate, query the
/// gateway, classify. Exactly one terminal outcome is offered to the store;
/// the sequence guard there decides whether it still lands.
pub async fn run_lookup<C: LookupClient>(
    store: &QueryStore,
    client: &C,
    attempt: AttemptId,
    settle: Duration,
) {
    // 等輸入靜止，連續觸發才不會每一下都打到 gateway
    tokio::time::sleep(settle).await;

    let name = store.name();
    if name.trim().is_empty() {
        store.apply(attempt, LookupOutcome::Failed(FailureReason::EmptyQuery));
        return;
    }

    let outcome = lookup_by_name(client, &name).await;

    // close 是 best-effort，不能蓋掉已經確定的結果
    if let Err(err) = client.close().await {
        tracing::debug!("client close failed: {}", err);
    }

    store.apply(attempt, outcome);
}

async fn lookup_by_name<C: LookupClient>(client: &C, name: &str) -> LookupOutcome {
    let info = match client.realm_info(name).await {
        Ok(info) => info,
        Err(err) => {
            tracing::debug!(name, "realm info lookup failed: {}", err);
            return LookupOutcome::Failed(classifier::classify_failure(&err));
        }
    };
    tracing::debug!(name, "realm info received");

    let Some(identifier) = classifier::realm_identifier(&info) else {
        return LookupOutcome::Failed(FailureReason::NotFound);
    };

    match client.location(identifier).await {
        Ok(record) => LookupOutcome::Found(record),
        Err(err) => {
            tracing::debug!(identifier, "location lookup failed: {}", err);
            LookupOutcome::Failed(classifier::classify_failure(&err))
        }
    }
}

/// Owner view: lists the realms held by a scripthash. Any remote failure
/// collapses into `TransientError`; only the empty-input case is classified
/// locally.
pub async fn run_realms_by_scripthash<C: LookupClient>(
    store: &QueryStore,
    client: &C,
    attempt: AttemptId,
    settle: Duration,
) {
    tokio::time::sleep(settle).await;

    let scripthash = store.name();
    if scripthash.trim().is_empty() {
        store.apply(attempt, LookupOutcome::Failed(FailureReason::EmptyQuery));
        return;
    }

    let outcome = match list_owned(client, &scripthash).await {
        Ok(record) => LookupOutcome::Found(record),
        Err(err) => {
            tracing::debug!(%scripthash, "owner lookup failed: {}", err);
            LookupOutcome::Failed(FailureReason::TransientError)
        }
    };

    if let Err(err) = client.close().await {
        tracing::debug!("client close failed: {}", err);
    }

    store.apply(attempt, outcome);
}

async fn list_owned<C: LookupClient>(client: &C, scripthash: &str) -> Result<RealmRecord> {
    client.open().await?;
    client.realms_by_scripthash(scripthash).await
}
