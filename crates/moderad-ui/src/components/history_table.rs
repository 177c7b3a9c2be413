//! Moderation-history table for the detail page.

use crate::core::format::format_date_time;
use crate::core::labels::history_action_label;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use moderad_api_models::ModerationHistoryEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HistoryTableProps {
    pub entries: Vec<ModerationHistoryEntry>,
}

#[function_component(HistoryTable)]
pub(crate) fn history_table(props: &HistoryTableProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>{bundle.text("history.time", "Дата и время")}</th>
                    <th>{bundle.text("history.moderator", "Модератор")}</th>
                    <th>{bundle.text("history.action", "Действие")}</th>
                    <th>{bundle.text("history.reason", "Причина")}</th>
                    <th>{bundle.text("history.comment", "Комментарий")}</th>
                </tr>
            </thead>
            <tbody>
                {for props.entries.iter().map(|entry| html! {
                    <tr key={entry.id}>
                        <td>{format_date_time(&entry.timestamp)}</td>
                        <td>{entry.moderator_name.clone()}</td>
                        <td>{history_action_label(&bundle, entry.action)}</td>
                        <td>{entry.reason.clone().unwrap_or_else(|| "—".to_string())}</td>
                        <td>{entry.comment.clone()}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
