//! Read-only statistics page.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::core::format::{format_percent, format_seconds_to_time, format_short_date};
use crate::features::stats::api::fetch_stats;
use crate::features::stats::state::StatsData;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(StatsPage)]
pub(crate) fn stats_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let data = use_state(|| None::<StatsData>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let guard = alive.clone();
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    loading.set(true);
                    error.set(None);
                    yew::platform::spawn_local(async move {
                        let result = fetch_stats(&client).await;
                        if !alive.get() {
                            return;
                        }
                        match result {
                            Ok(fetched) => data.set(Some(fetched)),
                            Err(err) => error.set(Some(err.to_string())),
                        }
                        loading.set(false);
                    });
                }
                move || guard.set(false)
            },
            (),
        );
    }

    if api_ctx.is_none() {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    }

    html! {
        <div class="stats-page">
            <div class="panel stats-head">
                <h2>{t("stats.title")}</h2>
                <Link<Route> to={Route::List} classes="btn">
                    {t("stats.back")}
                </Link<Route>>
            </div>

            {if *loading {
                html! { <div class="panel"><p class="muted">{t("stats.loading")}</p></div> }
            } else if let Some(message) = error.as_ref() {
                html! { <div class="alert alert-error">{message.clone()}</div> }
            } else if let Some(stats) = data.as_ref() {
                render_stats(&bundle, stats)
            } else {
                html! {}
            }}
        </div>
    }
}

fn render_stats(bundle: &TranslationBundle, stats: &StatsData) -> Html {
    let t = |key: &str| bundle.text(key, "");
    let summary = stats.summary;

    html! {
        <>
            <div class="stats-tiles">
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.total")}</span>
                    <strong class="stat-value">{summary.total_reviewed}</strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.today")}</span>
                    <strong class="stat-value">{summary.total_reviewed_today}</strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.week")}</span>
                    <strong class="stat-value">{summary.total_reviewed_this_week}</strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.month")}</span>
                    <strong class="stat-value">{summary.total_reviewed_this_month}</strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.approved")}</span>
                    <strong class="stat-value">
                        {format_percent(Some(summary.approved_percentage))}
                    </strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.rejected")}</span>
                    <strong class="stat-value">
                        {format_percent(Some(summary.rejected_percentage))}
                    </strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.request_changes")}</span>
                    <strong class="stat-value">
                        {format_percent(Some(summary.request_changes_percentage))}
                    </strong>
                </div>
                <div class="stat-tile">
                    <span class="stat-label">{t("stats.avg_time")}</span>
                    <strong class="stat-value">
                        {format_seconds_to_time(Some(summary.average_review_time))}
                    </strong>
                </div>
            </div>

            <div class="panel">
                <h3>{t("stats.activity")}</h3>
                <table class="stats-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{t("stats.approved")}</th>
                            <th>{t("stats.rejected")}</th>
                            <th>{t("stats.request_changes")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for stats.activity.iter().map(|point| html! {
                            <tr key={point.date.clone()}>
                                <td>{format_short_date(&point.date)}</td>
                                <td>{point.approved}</td>
                                <td>{point.rejected}</td>
                                <td>{point.request_changes}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>

            <div class="panel">
                <h3>{t("stats.decisions")}</h3>
                <ul class="stats-list">
                    <li>
                        <span>{t("stats.approved")}</span>
                        <strong>{stats.decisions.approved}</strong>
                    </li>
                    <li>
                        <span>{t("stats.rejected")}</span>
                        <strong>{stats.decisions.rejected}</strong>
                    </li>
                    <li>
                        <span>{t("stats.request_changes")}</span>
                        <strong>{stats.decisions.request_changes}</strong>
                    </li>
                </ul>
            </div>

            <div class="panel">
                <h3>{t("stats.categories")}</h3>
                <ul class="stats-list">
                    {for stats.categories.iter().map(|(name, count)| html! {
                        <li key={name.clone()}>
                            <span>{name.clone()}</span>
                            <strong>{*count}</strong>
                        </li>
                    })}
                </ul>
            </div>
        </>
    }
}
