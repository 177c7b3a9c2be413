//! Localized labels for wire enums.

use crate::i18n::TranslationBundle;
use moderad_api_models::{AdPriority, AdStatus, HistoryAction};

/// Display label for a listing's moderation status.
#[must_use]
pub fn status_label(bundle: &TranslationBundle, status: AdStatus) -> String {
    match status {
        AdStatus::Pending => bundle.text("status.pending", "На модерации"),
        AdStatus::Approved => bundle.text("status.approved", "Одобрено"),
        AdStatus::Rejected => bundle.text("status.rejected", "Отклонено"),
    }
}

/// Display label for a listing's review priority.
#[must_use]
pub fn priority_label(bundle: &TranslationBundle, priority: AdPriority) -> String {
    match priority {
        AdPriority::Normal => bundle.text("priority.normal", "Обычный"),
        AdPriority::Urgent => bundle.text("priority.urgent", "Срочный"),
    }
}

/// Display label for a moderation-history action.
#[must_use]
pub fn history_action_label(bundle: &TranslationBundle, action: HistoryAction) -> String {
    match action {
        HistoryAction::Pending => bundle.text("history.action_pending", "Создано"),
        HistoryAction::Approved => bundle.text("history.action_approved", "Одобрено"),
        HistoryAction::Rejected => bundle.text("history.action_rejected", "Отклонено"),
        HistoryAction::RequestChanges => {
            bundle.text("history.action_request_changes", "Запрос на доработку")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn russian_labels_match_the_dashboard_wording() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(status_label(&bundle, AdStatus::Pending), "На модерации");
        assert_eq!(priority_label(&bundle, AdPriority::Urgent), "Срочный");
        assert_eq!(
            history_action_label(&bundle, HistoryAction::RequestChanges),
            "Запрос на доработку"
        );
    }

    #[test]
    fn history_pending_reads_as_created() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(
            history_action_label(&bundle, HistoryAction::Pending),
            "Создано"
        );
    }
}
