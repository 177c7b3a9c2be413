//! Reason + comment controls shared by the bulk modal and the detail panel.

use crate::features::moderation::actions::{OTHER_REASON, REJECTION_REASONS};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DecisionFormProps {
    /// Chosen reason token, if any.
    pub selected_reason: Option<String>,
    /// Free-text reason shown while the sentinel token is chosen.
    pub custom_reason: AttrValue,
    /// Comment text.
    pub comment: AttrValue,
    /// Placeholder for the comment field (bulk and detail differ).
    pub comment_placeholder: AttrValue,
    /// Inline validation error under the reason control.
    #[prop_or_default]
    pub reason_error: Option<String>,
    /// Radio-group name, so two forms never share browser state.
    pub group: AttrValue,
    pub on_select_reason: Callback<String>,
    pub on_custom_reason: Callback<String>,
    pub on_comment: Callback<String>,
}

#[function_component(DecisionForm)]
pub(crate) fn decision_form(props: &DecisionFormProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    let on_custom = {
        let on_custom_reason = props.on_custom_reason.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_custom_reason.emit(input.value());
            }
        })
    };
    let on_comment = {
        let on_comment = props.on_comment.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                on_comment.emit(area.value());
            }
        })
    };

    html! {
        <div class="decision-form">
            <div class="decision-reason">
                <strong>{bundle.text("modal.reason", "Причина *")}</strong>
                <div class="reason-tokens">
                    {for REJECTION_REASONS.iter().map(|token| {
                        let on_select = {
                            let on_select_reason = props.on_select_reason.clone();
                            let token = (*token).to_string();
                            Callback::from(move |_: Event| on_select_reason.emit(token.clone()))
                        };
                        html! {
                            <label class="reason-token" key={*token}>
                                <input
                                    type="radio"
                                    name={props.group.clone()}
                                    value={*token}
                                    checked={props.selected_reason.as_deref() == Some(*token)}
                                    onchange={on_select}
                                />
                                <span>{*token}</span>
                            </label>
                        }
                    })}
                </div>
                {if props.selected_reason.as_deref() == Some(OTHER_REASON) {
                    html! {
                        <input
                            type="text"
                            class="reason-custom"
                            placeholder={bundle.text("modal.reason_other_placeholder", "Укажите свою причину")}
                            value={props.custom_reason.clone()}
                            oninput={on_custom}
                        />
                    }
                } else {
                    html! {}
                }}
                {if let Some(message) = props.reason_error.as_ref() {
                    html! { <p class="text-sm text-error">{message.clone()}</p> }
                } else {
                    html! {}
                }}
            </div>
            <label class="decision-comment stack">
                <strong>{bundle.text("modal.comment", "Комментарий")}</strong>
                <textarea
                    rows="3"
                    placeholder={props.comment_placeholder.clone()}
                    value={props.comment.clone()}
                    oninput={on_comment}
                />
            </label>
        </div>
    }
}
