//! Filter and sorting panel for the listing queue.
//!
//! # Design
//! - Fully prop-driven: the panel never owns filter state, it emits the next
//!   `FiltersState` and the page controller decides what to do with it.

use crate::features::ads::state::{CategoryOption, FiltersState, SortBy, SortOrder};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moderad_api_models::AdStatus;
use yew::prelude::*;

const STATUS_ORDER: [AdStatus; 3] = [AdStatus::Pending, AdStatus::Approved, AdStatus::Rejected];

#[derive(Properties, PartialEq)]
pub(crate) struct FilterPanelProps {
    pub filters: FiltersState,
    pub categories: Vec<CategoryOption>,
    pub on_change: Callback<FiltersState>,
    pub on_reset: Callback<()>,
}

#[function_component(FilterPanel)]
pub(crate) fn filter_panel(props: &FilterPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    let emit = {
        let on_change = props.on_change.clone();
        move |next: FiltersState| on_change.emit(next)
    };

    let on_status_toggle = |status: AdStatus| {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let mut active: Vec<AdStatus> = filters.statuses.clone();
            if input.checked() {
                if !active.contains(&status) {
                    active.push(status);
                }
            } else {
                active.retain(|s| *s != status);
            }
            let statuses = STATUS_ORDER
                .into_iter()
                .filter(|s| active.contains(s))
                .collect();
            emit(FiltersState {
                statuses,
                ..filters.clone()
            });
        })
    };

    let on_category = {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            let value = select.value();
            emit(FiltersState {
                category_id: value.parse::<u64>().ok(),
                ..filters.clone()
            });
        })
    };

    let on_min_price = {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            emit(FiltersState {
                min_price: input.value(),
                ..filters.clone()
            });
        })
    };

    let on_max_price = {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            emit(FiltersState {
                max_price: input.value(),
                ..filters.clone()
            });
        })
    };

    let on_search = {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            emit(FiltersState {
                search: input.value(),
                ..filters.clone()
            });
        })
    };

    let on_sort_by = {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            if let Some(sort_by) = SortBy::from_param(&select.value()) {
                emit(FiltersState {
                    sort_by,
                    ..filters.clone()
                });
            }
        })
    };

    let on_sort_order = {
        let filters = props.filters.clone();
        let emit = emit.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() else {
                return;
            };
            if let Some(sort_order) = SortOrder::from_param(&select.value()) {
                emit(FiltersState {
                    sort_order,
                    ..filters.clone()
                });
            }
        })
    };

    let status_key = |status: AdStatus| match status {
        AdStatus::Pending => "status.pending",
        AdStatus::Approved => "status.approved",
        AdStatus::Rejected => "status.rejected",
    };

    html! {
        <section class="panel filter-panel">
            <div class="panel-head">
                <strong>{t("filters.title")}</strong>
                <button class="btn btn-ghost btn-sm" onclick={{
                    let on_reset = props.on_reset.clone();
                    Callback::from(move |_| on_reset.emit(()))
                }}>
                    {t("filters.reset")}
                </button>
            </div>
            <div class="filter-grid">
                <div class="filter-main">
                    <div class="filter-block">
                        <h5>{t("filters.status")}</h5>
                        <div class="filter-statuses">
                            {for STATUS_ORDER.into_iter().map(|status| html! {
                                <label class="checkbox-row" key={status.as_str()}>
                                    <input
                                        type="checkbox"
                                        checked={props.filters.statuses.contains(&status)}
                                        onchange={on_status_toggle(status)}
                                    />
                                    <span>{t(status_key(status))}</span>
                                </label>
                            })}
                        </div>
                    </div>
                    <div class="filter-block">
                        <h5>{t("filters.category")}</h5>
                        <select onchange={on_category}>
                            <option value="" selected={props.filters.category_id.is_none()}>
                                {t("filters.category_all")}
                            </option>
                            {for props.categories.iter().map(|category| html! {
                                <option
                                    key={category.id}
                                    value={category.id.to_string()}
                                    selected={props.filters.category_id == Some(category.id)}
                                >
                                    {category.name.clone()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="filter-block">
                        <h5>{t("filters.search")}</h5>
                        <input
                            type="text"
                            placeholder={t("filters.search_placeholder")}
                            value={props.filters.search.clone()}
                            oninput={on_search}
                        />
                    </div>
                    <div class="filter-block">
                        <h5>{t("filters.price")}</h5>
                        <div class="filter-price-range">
                            <input
                                type="number"
                                min="0"
                                placeholder={t("filters.price_from")}
                                value={props.filters.min_price.clone()}
                                oninput={on_min_price}
                            />
                            <span>{"-"}</span>
                            <input
                                type="number"
                                min="0"
                                placeholder={t("filters.price_to")}
                                value={props.filters.max_price.clone()}
                                oninput={on_max_price}
                            />
                        </div>
                    </div>
                </div>
                <div class="filter-sort">
                    <h5>{t("filters.sort")}</h5>
                    <label class="stack">
                        <span>{t("filters.sort_by")}</span>
                        <select onchange={on_sort_by}>
                            <option value="createdAt" selected={props.filters.sort_by == SortBy::CreatedAt}>
                                {t("filters.sort_created")}
                            </option>
                            <option value="price" selected={props.filters.sort_by == SortBy::Price}>
                                {t("filters.sort_price")}
                            </option>
                            <option value="priority" selected={props.filters.sort_by == SortBy::Priority}>
                                {t("filters.sort_priority")}
                            </option>
                        </select>
                    </label>
                    <label class="stack">
                        <span>{t("filters.order")}</span>
                        <select onchange={on_sort_order}>
                            <option value="desc" selected={props.filters.sort_order == SortOrder::Desc}>
                                {t("filters.order_desc")}
                            </option>
                            <option value="asc" selected={props.filters.sort_order == SortOrder::Asc}>
                                {t("filters.order_asc")}
                            </option>
                        </select>
                    </label>
                </div>
            </div>
        </section>
    }
}
