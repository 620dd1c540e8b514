use crate::domain::model::{RealmInfoResponse, RealmRecord};
use crate::domain::ports::{ConfigProvider, LookupClient};
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

const REALM_INFO_METHOD: &str = "blockchain.atomicals.get_realm_info";
const LOCATION_METHOD: &str = "blockchain.atomicals.get_location";
const LIST_SCRIPTHASH_METHOD: &str = "blockchain.atomicals.listscripthash";

/// ElectrumX proxy 回應的統一外層
#[derive(Debug, Deserialize)]
struct GatewayEnvelope<T> {
    #[serde(default)]
    success: bool,
    response: Option<T>,
    message: Option<String>,
}

/// HTTP client for an ElectrumX proxy gateway. Methods are exposed as
/// `GET {base}/{method}?params=<json array>`.
pub struct ElectrumGateway {
    base: String,
    http: Client,
}

impl ElectrumGateway {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        // 先確認是合法的 http(s) URL 再收下來
        Url::parse(config.gateway_url())?;
        let http = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            base: config.gateway_url().trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: &[&str]) -> Result<T> {
        let url = format!("{}/{}", self.base, method);
        let params_json = serde_json::to_string(params)?;
        tracing::debug!(%url, params = %params_json, "gateway request");

        let response = self
            .http
            .get(&url)
            .query(&[("params", params_json.as_str())])
            .send()
            .await?
            .error_for_status()?;
        tracing::debug!(status = %response.status(), "gateway response");

        let envelope: GatewayEnvelope<T> = response.json().await?;
        if !envelope.success {
            return Err(LookupError::GatewayError {
                message: envelope
                    .message
                    .unwrap_or_else(|| "gateway reported failure".to_string()),
            });
        }
        envelope.response.ok_or_else(|| LookupError::GatewayError {
            message: "gateway response missing payload".to_string(),
        })
    }
}

#[async_trait]
impl LookupClient for ElectrumGateway {
    async fn realm_info(&self, name: &str) -> Result<RealmInfoResponse> {
        self.call(REALM_INFO_METHOD, &[name]).await
    }

    async fn location(&self, identifier: &str) -> Result<RealmRecord> {
        self.call(LOCATION_METHOD, &[identifier]).await
    }

    async fn realms_by_scripthash(&self, scripthash: &str) -> Result<RealmRecord> {
        self.call(LIST_SCRIPTHASH_METHOD, &[scripthash]).await
    }
}
