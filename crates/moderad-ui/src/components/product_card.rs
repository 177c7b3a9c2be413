//! Listing card for the queue grid.

use crate::core::format::{format_date, format_price};
use crate::core::labels::{priority_label, status_label};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moderad_api_models::{AdPriority, AdStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProductCardProps {
    pub image: AttrValue,
    pub title: AttrValue,
    pub price: f64,
    pub category: AttrValue,
    pub created_at: AttrValue,
    pub status: AdStatus,
    pub priority: AdPriority,
}

#[function_component(ProductCard)]
pub(crate) fn product_card(props: &ProductCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    let status_class = match props.status {
        AdStatus::Pending => "badge badge-status-pending",
        AdStatus::Approved => "badge badge-status-approved",
        AdStatus::Rejected => "badge badge-status-rejected",
    };
    let priority_class = match props.priority {
        AdPriority::Normal => "badge badge-priority-normal",
        AdPriority::Urgent => "badge badge-priority-urgent",
    };

    html! {
        <div class="product-card">
            <div class="product-card-cover">
                <img
                    src={props.image.clone()}
                    alt={props.title.clone()}
                    loading="lazy"
                    class="product-card-image"
                />
                {if props.priority == AdPriority::Urgent {
                    html! {
                        <span class="product-card-urgent">
                            {bundle.text("priority.urgent_tag", "Срочное")}
                        </span>
                    }
                } else {
                    html! {}
                }}
            </div>
            <p class="product-card-title">{props.title.clone()}</p>
            <strong class="product-card-price">{format_price(props.price)}</strong>
            <div class="product-card-meta">
                <span class="product-card-category">{props.category.clone()}</span>
                <span class="product-card-separator">{"|"}</span>
                <span class="product-card-date">
                    {format!("{} {}", bundle.text("card.from", "от"), format_date(&props.created_at))}
                </span>
            </div>
            <div class="product-card-footer">
                <span class={status_class}>{status_label(&bundle, props.status)}</span>
                <span class={priority_class}>{priority_label(&bundle, props.priority)}</span>
            </div>
        </div>
    }
}
