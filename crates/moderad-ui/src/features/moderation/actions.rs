//! Moderator decisions and the fixed rejection-reason vocabulary.

use crate::i18n::TranslationBundle;

/// Decision a moderator can apply to a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModerationAction {
    /// Publish the listing.
    Approve,
    /// Take the listing down; requires a reason.
    Reject,
    /// Return the listing to the seller; requires a reason. Only offered from
    /// the detail view.
    RequestChanges,
}

impl ModerationAction {
    /// Endpoint suffix under `/api/v1/ads/{id}/`.
    #[must_use]
    pub const fn endpoint_suffix(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::RequestChanges => "request-changes",
        }
    }

    /// Whether the decision must carry a resolved reason.
    #[must_use]
    pub const fn needs_reason(self) -> bool {
        !matches!(self, Self::Approve)
    }
}

/// Reason tokens offered in decision forms. The backend receives the token
/// verbatim, so the vocabulary is not routed through the i18n bundles.
pub const REJECTION_REASONS: [&str; 6] = [
    "Запрещенный товар",
    "Неверная категория",
    "Некорректное описание",
    "Проблемы с фото",
    "Подозрение на мошенничество",
    OTHER_REASON,
];

/// Sentinel token that switches the form to free-text input.
pub const OTHER_REASON: &str = "Другое";

/// Button label for a decision.
#[must_use]
pub fn action_label(bundle: &TranslationBundle, action: ModerationAction) -> String {
    match action {
        ModerationAction::Approve => bundle.text("item.approve", "Одобрить"),
        ModerationAction::Reject => bundle.text("item.reject", "Отклонить"),
        ModerationAction::RequestChanges => {
            bundle.text("item.request_changes", "Вернуть на доработку")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_suffixes_match_the_rest_surface() {
        assert_eq!(ModerationAction::Approve.endpoint_suffix(), "approve");
        assert_eq!(ModerationAction::Reject.endpoint_suffix(), "reject");
        assert_eq!(
            ModerationAction::RequestChanges.endpoint_suffix(),
            "request-changes"
        );
    }

    #[test]
    fn only_approve_skips_the_reason() {
        assert!(!ModerationAction::Approve.needs_reason());
        assert!(ModerationAction::Reject.needs_reason());
        assert!(ModerationAction::RequestChanges.needs_reason());
    }

    #[test]
    fn vocabulary_ends_with_the_sentinel() {
        assert_eq!(REJECTION_REASONS.last(), Some(&OTHER_REASON));
        assert_eq!(REJECTION_REASONS.len(), 6);
    }
}
