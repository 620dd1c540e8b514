use crate::domain::model::{RealmInfoResponse, RealmRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Gateway operations the lookup workflows depend on. `open`/`close` are
/// optional lifecycle hooks; connectionless clients keep the no-op defaults.
#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn realm_info(&self, name: &str) -> Result<RealmInfoResponse>;

    async fn location(&self, identifier: &str) -> Result<RealmRecord>;

    /// 列出某個 scripthash 名下的 realm
    async fn realms_by_scripthash(&self, scripthash: &str) -> Result<RealmRecord>;

    async fn open(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

pub trait ConfigProvider: Send + Sync {
    fn gateway_url(&self) -> &str;
    fn settle_delay(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
}
