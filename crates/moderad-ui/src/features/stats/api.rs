//! Concurrent fetch of the four statistics endpoints.

use crate::core::error::ApiError;
use crate::features::stats::state::StatsData;
use crate::services::api::ApiClient;
use futures_util::try_join;
use moderad_api_models::{ActivityPoint, CategoriesChart, DecisionsDistribution, StatsSummary};

pub(crate) async fn fetch_stats(client: &ApiClient) -> Result<StatsData, ApiError> {
    let fetched = try_join!(
        client.get_json::<StatsSummary>("/api/v1/stats/summary?period=week"),
        client.get_json::<Vec<ActivityPoint>>("/api/v1/stats/chart/activity?period=week"),
        client.get_json::<DecisionsDistribution>("/api/v1/stats/chart/decisions?period=week"),
        client.get_json::<CategoriesChart>("/api/v1/stats/chart/categories?period=week"),
    );
    match fetched {
        Ok((summary, activity, decisions, categories)) => Ok(StatsData {
            summary,
            activity,
            decisions,
            categories,
        }),
        Err(err) => Err(match err.status {
            Some(_) => err.with_message("Ошибка загрузки статистики"),
            None => err.or_fallback("Неизвестная ошибка загрузки"),
        }),
    }
}
