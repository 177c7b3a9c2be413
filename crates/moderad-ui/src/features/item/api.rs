//! Detail fetch and single-item decisions.

use crate::core::error::ApiError;
use crate::features::moderation::actions::ModerationAction;
use crate::services::api::ApiClient;
use moderad_api_models::{AdActionResponse, AdDetails, ModerationRequest};

pub(crate) async fn fetch_ad(client: &ApiClient, id: u64) -> Result<AdDetails, ApiError> {
    client
        .get_json(&format!("/api/v1/ads/{id}"))
        .await
        .map_err(|err| match err.status {
            Some(404) => err.with_message("Объявление не найдено"),
            Some(_) => err,
            None => err.or_fallback("Неизвестная ошибка загрузки"),
        })
}

pub(crate) async fn approve(client: &ApiClient, id: u64) -> Result<AdActionResponse, ApiError> {
    client
        .post_empty_json(&format!("/api/v1/ads/{id}/approve"))
        .await
        .map_err(|err| match err.status {
            Some(status) => err.with_message(format!("Ошибка одобрения ({status})")),
            None => err.or_fallback("Неизвестная ошибка при одобрении"),
        })
}

pub(crate) async fn submit_decision(
    client: &ApiClient,
    id: u64,
    action: ModerationAction,
    body: &ModerationRequest,
) -> Result<AdActionResponse, ApiError> {
    client
        .post_json(
            &format!("/api/v1/ads/{id}/{}", action.endpoint_suffix()),
            body,
        )
        .await
        .map_err(|err| match err.status {
            Some(status) => err.with_message(format!("Ошибка отправки ({status})")),
            None => err.or_fallback("Неизвестная ошибка при обновлении объявления"),
        })
}
