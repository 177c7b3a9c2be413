//! Concurrent fan-out of planned moderation requests.

use crate::core::error::ApiError;
use crate::features::moderation::logic::PlannedRequest;
use crate::services::api::ApiClient;
use futures_util::future::try_join_all;

/// Issue one POST per planned request, all launched before any is awaited.
///
/// The first failure resolves the whole call, so requests that already landed
/// server-side are not itemized back to the caller. No automatic retry.
pub(crate) async fn submit_requests(
    client: &ApiClient,
    plan: &[PlannedRequest],
) -> Result<(), ApiError> {
    try_join_all(plan.iter().map(|request| client.post_planned(request)))
        .await
        .map(|_| ())
        .map_err(|err| match err.status {
            Some(status) => err.with_message(format!("Ошибка отправки ({status})")),
            None => err.or_fallback("Неизвестная ошибка при обновлении"),
        })
}
