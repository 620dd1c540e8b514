use crate::domain::model::{FailureReason, RealmInfoResponse};
use crate::utils::error::LookupError;

/// Extracts the identifier from a name-lookup response. `None` means the
/// realm is unclaimed: either no result at all or an empty identifier.
pub fn realm_identifier(response: &RealmInfoResponse) -> Option<&str> {
    response
        .result
        .as_ref()
        .and_then(|result| result.atomical_id.as_deref())
        .filter(|id| !id.is_empty())
}

/// Maps a failed gateway call into one of the four user-facing categories.
///
/// 連線層的失敗歸到 RateLimited，跟 UI 文案一致
pub fn classify_failure(err: &LookupError) -> FailureReason {
    match err {
        LookupError::ApiError(e) => {
            if e.status().map(|s| s.as_u16()) == Some(404) {
                FailureReason::NotFound
            } else if e.is_connect() {
                FailureReason::RateLimited
            } else {
                FailureReason::TransientError
            }
        }
        _ => FailureReason::TransientError,
    }
}
