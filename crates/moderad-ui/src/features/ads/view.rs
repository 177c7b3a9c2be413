//! Listing queue page: filters, cards, selection, and bulk decisions.
//!
//! # Design
//! - Keep API calls in the feature page controller.
//! - Drive rendering from the shared [`AppStore`] listing slice.
//! - Mirror filters and page to the browser URL; absent parameters keep the
//!   current values when the page mounts.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::bulk_action_bar::BulkActionBar;
use crate::components::filter_panel::FilterPanel;
use crate::components::pagination::Pagination;
use crate::components::product_card::ProductCard;
use crate::core::store::AppStore;
use crate::features::ads::api::fetch_ads;
use crate::features::ads::query::{decode_url_query, encode_url_query};
use crate::features::ads::state::{
    FiltersState, apply_page, begin_load, change_filters, derived_page_size, fail_load,
    reset_filters, set_page, visible_ids,
};
use crate::features::moderation::actions::ModerationAction;
use crate::features::moderation::api::submit_requests;
use crate::features::moderation::logic::{plan_requests, resolve_reason};
use crate::features::moderation::state::{
    BulkPanel, begin_submit, close_panel, open_bulk_action, reason_rejected, select_all_visible,
    set_comment, set_custom_reason, set_reason, submit_failed, submit_succeeded, toggle_selection,
};
use crate::features::moderation::view::BulkActionModal;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ListPage)]
pub(crate) fn list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let ads = use_selector(|store: &AppStore| store.ads.clone());
    let bulk_panel = use_state(BulkPanel::default);
    let refresh = use_state(|| 0u32);
    let ready = use_state(|| false);

    let page = ads.page;
    let filters = ads.filters.clone();

    {
        let dispatch = dispatch.clone();
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                let search = gloo::utils::window()
                    .location()
                    .search()
                    .unwrap_or_default();
                dispatch.reduce_mut(|store| {
                    let (filters, page) =
                        decode_url_query(&search, &store.ads.filters, store.ads.page);
                    store.ads.filters = filters;
                    store.ads.page = page;
                });
                ready.set(true);
                || ()
            },
            (),
        );
    }

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |(page, filters, _refresh, ready): &(u32, FiltersState, u32, bool)| {
                let alive = Rc::new(Cell::new(true));
                let guard = alive.clone();
                if let Some(api_ctx) = api_ctx {
                    if *ready {
                        let page = *page;
                        let filters = filters.clone();
                        let client = api_ctx.client.clone();
                        dispatch.reduce_mut(|store| begin_load(&mut store.ads));
                        let dispatch = dispatch.clone();
                        yew::platform::spawn_local(async move {
                            let result = fetch_ads(&client, page, &filters).await;
                            if !alive.get() {
                                return;
                            }
                            match result {
                                Ok(response) => dispatch.reduce_mut(|store| {
                                    apply_page(&mut store.ads, response);
                                }),
                                Err(err) => dispatch.reduce_mut(|store| {
                                    fail_load(&mut store.ads, err.to_string());
                                }),
                            }
                        });
                    }
                }
                move || guard.set(false)
            },
            (page, filters.clone(), *refresh, *ready),
        );
    }

    {
        use_effect_with_deps(
            move |(page, filters, ready): &(u32, FiltersState, bool)| {
                if *ready {
                    let window = gloo::utils::window();
                    let path = window
                        .location()
                        .pathname()
                        .unwrap_or_else(|_| "/list".to_string());
                    let query = encode_url_query(filters, *page);
                    let url = if query.is_empty() {
                        path
                    } else {
                        format!("{path}?{query}")
                    };
                    if let Ok(history) = window.history() {
                        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
                    }
                }
                || ()
            },
            (page, filters.clone(), *ready),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_filters_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |next: FiltersState| {
            dispatch.reduce_mut(|store| change_filters(&mut store.ads, next));
        })
    };
    let on_filters_reset = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| reset_filters(&mut store.ads));
        })
    };
    let on_page_change = {
        let dispatch = dispatch.clone();
        Callback::from(move |next: u32| {
            dispatch.reduce_mut(|store| set_page(&mut store.ads, next));
        })
    };
    let on_toggle_selected = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| {
                store.ads.selected = toggle_selection(&store.ads.selected, id);
            });
        })
    };
    let on_select_all = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| {
                store.ads.selected = select_all_visible(&visible_ids(&store.ads));
            });
        })
    };
    let on_clear_selection = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store.ads.selected.clear());
        })
    };

    let open_bulk = |action: ModerationAction| {
        let dispatch = dispatch.clone();
        let bulk_panel = bulk_panel.clone();
        Callback::from(move |_: MouseEvent| {
            let selection_len = dispatch.get().ads.selected.len();
            update_panel(&bulk_panel, |panel| {
                open_bulk_action(panel, action, selection_len);
            });
        })
    };

    let on_bulk_cancel = {
        let bulk_panel = bulk_panel.clone();
        Callback::from(move |()| update_panel(&bulk_panel, close_panel))
    };
    let on_bulk_reason = {
        let bulk_panel = bulk_panel.clone();
        Callback::from(move |token: String| {
            update_panel(&bulk_panel, |panel| set_reason(panel, token.clone()));
        })
    };
    let on_bulk_custom_reason = {
        let bulk_panel = bulk_panel.clone();
        Callback::from(move |text: String| {
            update_panel(&bulk_panel, |panel| set_custom_reason(panel, text.clone()));
        })
    };
    let on_bulk_comment = {
        let bulk_panel = bulk_panel.clone();
        Callback::from(move |text: String| {
            update_panel(&bulk_panel, |panel| set_comment(panel, text.clone()));
        })
    };

    let on_bulk_submit = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let bulk_panel = bulk_panel.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            let panel = (*bulk_panel).clone();
            let Some(action) = panel.mode else {
                return;
            };
            let ids: Vec<u64> = dispatch.get().ads.selected.iter().copied().collect();
            if ids.is_empty() {
                return;
            }
            match resolve_reason(action, panel.selected_reason.as_deref(), &panel.custom_reason) {
                Err(err) => update_panel(&bulk_panel, |panel| {
                    reason_rejected(panel, err.to_string());
                }),
                Ok(reason) => {
                    update_panel(&bulk_panel, begin_submit);
                    let plan = plan_requests(action, &ids, reason.as_deref(), &panel.comment);
                    let client = api_ctx.client.clone();
                    let dispatch = dispatch.clone();
                    let bulk_panel = bulk_panel.clone();
                    let refresh = refresh.clone();
                    yew::platform::spawn_local(async move {
                        match submit_requests(&client, &plan).await {
                            Ok(()) => {
                                dispatch.reduce_mut(|store| store.ads.selected.clear());
                                update_panel(&bulk_panel, submit_succeeded);
                                refresh.set(*refresh + 1);
                            }
                            Err(err) => update_panel(&bulk_panel, |panel| {
                                submit_failed(panel, err.to_string());
                            }),
                        }
                    });
                }
            }
        })
    };

    let selected_count = ads.selected.len();
    let show_results = ads.error.is_none() && !ads.ads.is_empty();
    let show_empty = ads.error.is_none() && !ads.loading && ads.ads.is_empty();

    html! {
        <div class="list-page">
            <div class="panel list-head">
                <div>
                    <h2>{t("list.title")}</h2>
                    <p class="muted">
                        {format!("{} {}", t("list.total"), ads.total_items)}
                    </p>
                </div>
                <Link<Route> to={Route::Stats} classes="btn">
                    {t("nav.stats")}
                </Link<Route>>
            </div>

            <FilterPanel
                filters={filters.clone()}
                categories={ads.categories.clone()}
                on_change={on_filters_change}
                on_reset={on_filters_reset}
            />

            <div class={classes!("panel", "list-body", ads.loading.then_some("is-loading"))}>
                {if let Some(message) = ads.error.as_ref() {
                    html! {
                        <div class="alert alert-error">
                            <strong>{t("list.load_error")}</strong>
                            <p>{message.clone()}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}

                {if show_empty {
                    html! { <p class="empty-state">{t("list.empty")}</p> }
                } else {
                    html! {}
                }}

                {if show_results {
                    html! {
                        <>
                            <BulkActionBar
                                select_label={t("bulk.select_all")}
                                clear_label={t("bulk.clear")}
                                selected_label={t("bulk.selected")}
                                selected_count={selected_count}
                                on_select_all={on_select_all}
                                on_clear={on_clear_selection}
                            >
                                <button
                                    class="btn btn-primary btn-sm"
                                    disabled={selected_count == 0}
                                    onclick={open_bulk(ModerationAction::Approve)}
                                >
                                    {t("bulk.approve")}
                                </button>
                                <button
                                    class="btn btn-danger btn-sm"
                                    disabled={selected_count == 0}
                                    onclick={open_bulk(ModerationAction::Reject)}
                                >
                                    {t("bulk.reject")}
                                </button>
                            </BulkActionBar>

                            <div class="card-grid">
                                {for ads.ads.iter().map(|ad| {
                                    let id = ad.id;
                                    let checked = ads.selected.contains(&id);
                                    let on_toggle = {
                                        let on_toggle_selected = on_toggle_selected.clone();
                                        Callback::from(move |_: Event| on_toggle_selected.emit(id))
                                    };
                                    html! {
                                        <div class="card-cell" key={id}>
                                            <input
                                                type="checkbox"
                                                class="card-select"
                                                checked={checked}
                                                onchange={on_toggle}
                                            />
                                            <Link<Route> to={Route::Item { id: id.to_string() }}>
                                                <ProductCard
                                                    image={ad.images.first().cloned().unwrap_or_default()}
                                                    title={ad.title.clone()}
                                                    price={ad.price}
                                                    category={ad.category.clone()}
                                                    created_at={ad.created_at.clone()}
                                                    status={ad.status}
                                                    priority={ad.priority}
                                                />
                                            </Link<Route>>
                                        </div>
                                    }
                                })}
                            </div>

                            <div class="list-footer">
                                <Pagination
                                    current={page}
                                    total_items={ads.total_items}
                                    page_size={derived_page_size(&ads)}
                                    disabled={ads.loading}
                                    on_change={on_page_change}
                                />
                                <span class="muted">
                                    {format!(
                                        "{} {page} {} {}",
                                        t("list.page"),
                                        t("list.page_of"),
                                        ads.total_pages
                                    )}
                                </span>
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }}
            </div>

            <BulkActionModal
                panel={(*bulk_panel).clone()}
                selected_count={selected_count}
                on_select_reason={on_bulk_reason}
                on_custom_reason={on_bulk_custom_reason}
                on_comment={on_bulk_comment}
                on_submit={on_bulk_submit}
                on_cancel={on_bulk_cancel}
            />
        </div>
    }
}

fn update_panel(panel: &UseStateHandle<BulkPanel>, update: impl FnOnce(&mut BulkPanel)) {
    let mut next = (**panel).clone();
    update(&mut next);
    panel.set(next);
}
