use serde::{Deserialize, Serialize};

/// Opaque realm payload returned by the location lookup. The core never
/// looks inside it; the UI renders it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealmRecord(serde_json::Value);

impl RealmRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}

/// 名稱查詢的回應：有沒有 atomical_id 決定後續怎麼走
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealmInfoResponse {
    #[serde(default)]
    pub result: Option<RealmInfoResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealmInfoResult {
    #[serde(default)]
    pub atomical_id: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RealmInfoResponse {
    /// Response for a claimed realm.
    pub fn claimed(atomical_id: impl Into<String>) -> Self {
        Self {
            result: Some(RealmInfoResult {
                atomical_id: Some(atomical_id.into()),
                extra: serde_json::Map::new(),
            }),
        }
    }

    /// Response for an unclaimed realm (no identifier).
    pub fn unclaimed() -> Self {
        Self { result: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    EmptyQuery,
    NotFound,
    RateLimited,
    TransientError,
}

impl FailureReason {
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::EmptyQuery => "Type any Realm name",
            FailureReason::NotFound => "That Realm name is not yet claimed!",
            FailureReason::RateLimited => "Rate limited",
            FailureReason::TransientError => "An error has occurred!",
        }
    }
}

/// Result state of a lookup attempt. A new attempt overwrites any prior
/// state; a superseded attempt must never overwrite a later one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupOutcome {
    #[default]
    Idle,
    Pending,
    Found(RealmRecord),
    Failed(FailureReason),
}

impl LookupOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LookupOutcome::Found(_) | LookupOutcome::Failed(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LookupOutcome::Pending)
    }
}
