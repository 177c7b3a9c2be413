//! List fetches for the listing queue.

use crate::core::error::ApiError;
use crate::features::ads::query::build_list_query;
use crate::features::ads::state::FiltersState;
use crate::services::api::ApiClient;
use moderad_api_models::AdsResponse;

pub(crate) async fn fetch_ads(
    client: &ApiClient,
    page: u32,
    filters: &FiltersState,
) -> Result<AdsResponse, ApiError> {
    client
        .get_json(&build_list_query(page, filters))
        .await
        .map_err(|err| match err.status {
            Some(_) => err,
            None => err.or_fallback("Неизвестная ошибка загрузки"),
        })
}
