//! Selection toolbar above the listing grid.
//!
//! # Design
//! - Labels, counts, and the decision buttons are fully prop-driven; the bar
//!   renders whatever actions the page passes as children.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub select_label: AttrValue,
    pub clear_label: AttrValue,
    pub selected_label: AttrValue,
    pub selected_count: usize,
    #[prop_or_default]
    pub on_select_all: Callback<MouseEvent>,
    #[prop_or_default]
    pub on_clear: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    html! {
        <div class="bulk-bar">
            <div class="bulk-bar-selection">
                <button class="btn btn-ghost btn-sm" onclick={props.on_select_all.clone()}>
                    {props.select_label.clone()}
                </button>
                {if props.selected_count > 0 {
                    html! {
                        <button class="btn btn-ghost btn-sm" onclick={props.on_clear.clone()}>
                            {props.clear_label.clone()}
                        </button>
                    }
                } else {
                    html! {}
                }}
                <span class="muted">
                    {format!("{} {}", props.selected_count, props.selected_label)}
                </span>
            </div>
            <div class="bulk-bar-actions">
                { for props.children.iter() }
            </div>
        </div>
    }
}
