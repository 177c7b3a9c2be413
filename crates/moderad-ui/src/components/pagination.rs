//! Pagination control driven by totals and the reconstructed page size.

use crate::features::ads::state::pagination_window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    /// 1-based current page.
    pub current: u32,
    /// Total matching items reported by the backend.
    pub total_items: u64,
    /// Page size reconstructed from the totals.
    pub page_size: u64,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let pages = if props.page_size > 0 {
        u32::try_from(props.total_items.div_ceil(props.page_size)).unwrap_or(u32::MAX)
    } else {
        1
    };
    let page_count = pages.max(1);
    let current = props.current;

    let go_to = |page: u32| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if page != current {
                on_change.emit(page);
            }
        })
    };

    let window = pagination_window(current, page_count);
    let mut cells: Vec<Html> = Vec::with_capacity(window.len() + 2);
    let mut previous = 0u32;
    for page in window {
        if page != previous + 1 {
            cells.push(html! { <span class="pagination-gap">{"…"}</span> });
        }
        let class = if page == current {
            "btn btn-sm pagination-page active"
        } else {
            "btn btn-sm pagination-page"
        };
        cells.push(html! {
            <button
                key={page}
                class={class}
                disabled={props.disabled}
                onclick={go_to(page)}
            >
                {page}
            </button>
        });
        previous = page;
    }

    html! {
        <nav class="pagination">
            <button
                class="btn btn-sm pagination-step"
                disabled={props.disabled || current <= 1}
                onclick={go_to(current.saturating_sub(1))}
            >
                {"‹"}
            </button>
            { for cells.into_iter() }
            <button
                class="btn btn-sm pagination-step"
                disabled={props.disabled || current >= page_count}
                onclick={go_to(current.saturating_add(1))}
            >
                {"›"}
            </button>
        </nav>
    }
}
