//! Bulk-decision confirmation modal.
//!
//! # Design
//! - Fully controlled: the page owns the [`BulkPanel`] state and the submit
//!   orchestration; the modal only renders and emits.

use crate::components::decision_form::DecisionForm;
use crate::features::moderation::actions::ModerationAction;
use crate::features::moderation::state::BulkPanel;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionModalProps {
    pub panel: BulkPanel,
    pub selected_count: usize,
    pub on_select_reason: Callback<String>,
    pub on_custom_reason: Callback<String>,
    pub on_comment: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BulkActionModal)]
pub(crate) fn bulk_action_modal(props: &BulkActionModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let Some(mode) = props.panel.mode else {
        return html! {};
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let title = if mode == ModerationAction::Approve {
        bundle.text("bulk.approve_title", "Подтвердить одобрение")
    } else {
        bundle.text("bulk.reject_title", "Укажите причину отклонения")
    };
    let ok_label = if mode == ModerationAction::Approve {
        bundle.text("bulk.approve", "Одобрить")
    } else {
        bundle.text("bulk.reject", "Отклонить")
    };

    let error_banner = if let Some(message) = props.panel.error.as_ref() {
        html! { <div class="alert alert-error">{message.clone()}</div> }
    } else {
        html! {}
    };

    let body = if mode == ModerationAction::Approve {
        html! {
            <p>
                {format!(
                    "{} ({} {})?",
                    bundle.text("bulk.approve_question", "Одобрить объявления"),
                    props.selected_count,
                    bundle.text("bulk.count_unit", "шт.")
                )}
            </p>
        }
    } else {
        html! {
            <>
                <DecisionForm
                    selected_reason={props.panel.selected_reason.clone()}
                    custom_reason={props.panel.custom_reason.clone()}
                    comment={props.panel.comment.clone()}
                    comment_placeholder={bundle.text("modal.comment_placeholder", "Добавьте комментарий (необязательно)")}
                    reason_error={props.panel.reason_error.clone()}
                    group="bulk-reason"
                    on_select_reason={props.on_select_reason.clone()}
                    on_custom_reason={props.on_custom_reason.clone()}
                    on_comment={props.on_comment.clone()}
                />
            </>
        }
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="modal-title">{title}</h3>
                {error_banner}
                {body}
                <div class="modal-actions">
                    <button class="btn btn-ghost btn-sm" onclick={on_cancel.clone()}>
                        {bundle.text("modal.cancel", "Отмена")}
                    </button>
                    <button
                        class="btn btn-primary btn-sm"
                        disabled={props.panel.submitting}
                        onclick={on_submit}
                    >
                        {ok_label}
                    </button>
                </div>
            </div>
            <button class="modal-backdrop" onclick={on_cancel}></button>
        </div>
    }
}
