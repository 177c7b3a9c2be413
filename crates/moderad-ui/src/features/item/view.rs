//! Listing detail page with the single-item decision workflow.
//!
//! # Design
//! - Keep API calls in the feature page controller.
//! - The server response after a decision replaces the whole record; nothing
//!   is patched locally.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::decision_form::DecisionForm;
use crate::components::history_table::HistoryTable;
use crate::core::format::{format_price, format_short_date};
use crate::core::labels::{priority_label, status_label};
use crate::features::item::api::{approve, fetch_ad, submit_decision};
use crate::features::item::state::{
    ItemState, action_failed, apply_decision, begin_action, begin_load, current_image,
    load_failed, load_succeeded, next_id, prev_id, set_main_image, toggle_panel,
};
use crate::features::moderation::actions::{ModerationAction, action_label};
use crate::features::moderation::logic::{normalize_comment, resolve_reason};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moderad_api_models::{AdPriority, AdStatus, ModerationRequest};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ItemPageProps {
    /// Listing identifier from the route path.
    pub id: String,
}

#[function_component(ItemPage)]
pub(crate) fn item_page(props: &ItemPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let state = use_state(ItemState::default);

    let ad_id = props.id.parse::<u64>().ok();

    {
        let state = state.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |id: &Option<u64>| {
                let alive = Rc::new(Cell::new(true));
                let guard = alive.clone();
                if let (Some(api_ctx), Some(id)) = (api_ctx, *id) {
                    update_item(&state, begin_load);
                    let client = api_ctx.client.clone();
                    yew::platform::spawn_local(async move {
                        let result = fetch_ad(&client, id).await;
                        if !alive.get() {
                            return;
                        }
                        match result {
                            Ok(ad) => update_item(&state, |s| load_succeeded(s, ad)),
                            Err(err) => update_item(&state, |s| load_failed(s, err.to_string())),
                        }
                    });
                }
                move || guard.set(false)
            },
            ad_id,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_approve = {
        let state = state.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = ad_id else {
                return;
            };
            update_item(&state, begin_action);
            let client = api_ctx.client.clone();
            let state = state.clone();
            yew::platform::spawn_local(async move {
                match approve(&client, id).await {
                    Ok(response) => update_item(&state, |s| apply_decision(s, response.ad)),
                    Err(err) => update_item(&state, |s| action_failed(s, err.to_string())),
                }
            });
        })
    };

    let on_toggle_panel = |action: ModerationAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            update_item(&state, |s| toggle_panel(s, action));
        })
    };

    let on_select_reason = {
        let state = state.clone();
        Callback::from(move |token: String| {
            update_item(&state, |s| s.selected_reason = Some(token.clone()));
        })
    };
    let on_custom_reason = {
        let state = state.clone();
        Callback::from(move |text: String| {
            update_item(&state, |s| s.custom_reason = text.clone());
        })
    };
    let on_comment = {
        let state = state.clone();
        Callback::from(move |text: String| {
            update_item(&state, |s| s.comment = text.clone());
        })
    };

    let on_submit_with_reason = {
        let state = state.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = ad_id else {
                return;
            };
            let current = (*state).clone();
            let Some(action) = current.panel else {
                return;
            };
            match resolve_reason(
                action,
                current.selected_reason.as_deref(),
                &current.custom_reason,
            ) {
                Err(err) => update_item(&state, |s| action_failed(s, err.to_string())),
                Ok(Some(reason)) => {
                    update_item(&state, begin_action);
                    let body = ModerationRequest {
                        reason,
                        comment: normalize_comment(&current.comment),
                    };
                    let client = api_ctx.client.clone();
                    let state = state.clone();
                    yew::platform::spawn_local(async move {
                        match submit_decision(&client, id, action, &body).await {
                            Ok(response) => {
                                update_item(&state, |s| apply_decision(s, response.ad));
                            }
                            Err(err) => {
                                update_item(&state, |s| action_failed(s, err.to_string()));
                            }
                        }
                    });
                }
                Ok(None) => {}
            }
        })
    };

    let go_to = |target: Option<u64>| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let (Some(navigator), Some(target)) = (navigator.clone(), target) {
                navigator.push(&Route::Item {
                    id: target.to_string(),
                });
            }
        })
    };

    if state.loading {
        return html! {
            <div class="item-page">
                <div class="panel">
                    <p class="muted">{t("item.loading")}</p>
                </div>
            </div>
        };
    }

    let Some(ad) = state.ad.clone() else {
        let message = state
            .error
            .clone()
            .unwrap_or_else(|| "Объявление не найдено".to_string());
        return html! {
            <div class="item-page">
                <div class="alert alert-error">{message}</div>
                <Link<Route> to={Route::List} classes="btn">
                    {t("item.back")}
                </Link<Route>>
            </div>
        };
    };

    let status_class = match ad.status {
        AdStatus::Pending => "badge badge-status-pending",
        AdStatus::Approved => "badge badge-status-approved",
        AdStatus::Rejected => "badge badge-status-rejected",
    };
    let priority_class = match ad.priority {
        AdPriority::Normal => "badge badge-priority-normal",
        AdPriority::Urgent => "badge badge-priority-urgent",
    };

    html! {
        <div class="item-page">
            <div class="item-nav">
                <Link<Route> to={Route::List} classes="btn">
                    {t("item.back")}
                </Link<Route>>
                <div class="item-nav-steps">
                    <button
                        class="btn"
                        disabled={ad_id.and_then(prev_id).is_none()}
                        onclick={go_to(ad_id.and_then(prev_id))}
                    >
                        {format!("‹ {}", t("item.prev"))}
                    </button>
                    <button class="btn" onclick={go_to(ad_id.map(next_id))}>
                        {format!("{} ›", t("item.next"))}
                    </button>
                </div>
            </div>

            <div class="panel item-main">
                <section class="item-gallery">
                    {if let Some(image) = current_image(&*state) {
                        html! {
                            <img class="item-gallery-main" src={image.to_string()} alt={ad.title.clone()} />
                        }
                    } else {
                        html! { <div class="item-gallery-placeholder">{t("item.no_image")}</div> }
                    }}
                    {if ad.images.len() > 1 {
                        html! {
                            <div class="item-gallery-thumbs">
                                {for ad.images.iter().enumerate().map(|(index, image)| {
                                    let on_pick = {
                                        let state = state.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            update_item(&state, |s| set_main_image(s, index));
                                        })
                                    };
                                    let class = if index == state.main_image_index {
                                        "item-thumb active"
                                    } else {
                                        "item-thumb"
                                    };
                                    html! {
                                        <button type="button" class={class} onclick={on_pick} key={index}>
                                            <img
                                                src={image.clone()}
                                                alt={format!("{} {}", t("item.image_alt"), index + 1)}
                                            />
                                        </button>
                                    }
                                })}
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </section>

                <section class="item-info">
                    <header class="item-info-head">
                        <h1>{ad.title.clone()}</h1>
                        <div class="item-price">{format_price(ad.price)}</div>
                        <div class="item-meta">
                            <span>{ad.category.clone()}</span>
                            <span class="item-meta-dot">{"|"}</span>
                            <span>{format!("{} {}", t("item.created"), format_short_date(&ad.created_at))}</span>
                        </div>
                        <div class="item-badges">
                            <span class={status_class}>{status_label(&bundle, ad.status)}</span>
                            <span class={priority_class}>{priority_label(&bundle, ad.priority)}</span>
                        </div>
                    </header>

                    <section class="item-block">
                        <h2>{t("item.description")}</h2>
                        <p class="item-description">{ad.description.clone()}</p>
                    </section>

                    {if ad.characteristics.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <section class="item-block">
                                <h2>{t("item.characteristics")}</h2>
                                <table class="characteristics-table">
                                    <thead>
                                        <tr>
                                            <th>{t("item.char_name")}</th>
                                            <th>{t("item.char_value")}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {for ad.characteristics.iter().map(|(name, value)| html! {
                                            <tr key={name.clone()}>
                                                <td>{name.clone()}</td>
                                                <td>{value.clone()}</td>
                                            </tr>
                                        })}
                                    </tbody>
                                </table>
                            </section>
                        }
                    }}

                    <section class="item-block">
                        <h2>{t("item.seller")}</h2>
                        <div class="seller-card">
                            <div class="seller-name">{ad.seller.name.clone()}</div>
                            <div class="seller-row">
                                <span>{format!("{} {} ★", t("item.seller_rating"), ad.seller.rating)}</span>
                                <span>{format!("{} {}", t("item.seller_ads"), ad.seller.total_ads)}</span>
                            </div>
                            <div class="seller-row">
                                <span>
                                    {format!(
                                        "{} {}",
                                        t("item.seller_since"),
                                        format_short_date(&ad.seller.registered_at)
                                    )}
                                </span>
                            </div>
                        </div>
                    </section>
                </section>
            </div>

            <div class="panel">
                <h3>{t("item.history")}</h3>
                {if ad.moderation_history.is_empty() {
                    html! { <p class="muted">{t("item.history_empty")}</p> }
                } else {
                    html! { <HistoryTable entries={ad.moderation_history.clone()} /> }
                }}
            </div>

            <div class="panel item-actions">
                <h3>{t("item.actions")}</h3>
                {if let Some(message) = state.action_error.as_ref() {
                    html! { <div class="alert alert-error">{message.clone()}</div> }
                } else {
                    html! {}
                }}
                <div class="item-action-buttons">
                    <button
                        class="btn btn-primary"
                        disabled={state.action_loading}
                        onclick={on_approve}
                    >
                        {action_label(&bundle, ModerationAction::Approve)}
                    </button>
                    <button
                        class="btn btn-danger"
                        onclick={on_toggle_panel(ModerationAction::Reject)}
                    >
                        {action_label(&bundle, ModerationAction::Reject)}
                    </button>
                    <button
                        class="btn btn-warning"
                        onclick={on_toggle_panel(ModerationAction::RequestChanges)}
                    >
                        {action_label(&bundle, ModerationAction::RequestChanges)}
                    </button>
                </div>
                {if let Some(panel) = state.panel {
                    html! {
                        <div class="item-decision">
                            <DecisionForm
                                selected_reason={state.selected_reason.clone()}
                                custom_reason={state.custom_reason.clone()}
                                comment={state.comment.clone()}
                                comment_placeholder={t("item.comment_placeholder")}
                                group="item-reason"
                                on_select_reason={on_select_reason}
                                on_custom_reason={on_custom_reason}
                                on_comment={on_comment}
                            />
                            <button
                                class="btn btn-primary"
                                disabled={state.action_loading}
                                onclick={on_submit_with_reason}
                            >
                                {if panel == ModerationAction::Reject {
                                    t("item.reject")
                                } else {
                                    t("item.submit_request")
                                }}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

fn update_item(state: &UseStateHandle<ItemState>, update: impl FnOnce(&mut ItemState)) {
    let mut next = (**state).clone();
    update(&mut next);
    state.set(next);
}
