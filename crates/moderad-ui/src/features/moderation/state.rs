//! Selection set and the bulk-decision panel state machine.
//!
//! Pure transformations so the whole workflow is testable outside wasm; the
//! views only dispatch these.

use crate::features::moderation::actions::ModerationAction;
use std::collections::BTreeSet;

/// Multi-select set of listing IDs, scoped to the loaded page.
pub type SelectionSet = BTreeSet<u64>;

/// Toggle the presence of an id in the selection set.
#[must_use]
pub fn toggle_selection(selected: &SelectionSet, id: u64) -> SelectionSet {
    let mut next = selected.clone();
    if !next.remove(&id) {
        next.insert(id);
    }
    next
}

/// Selection of exactly the visible IDs (replaces any previous selection).
#[must_use]
pub fn select_all_visible(visible: &[u64]) -> SelectionSet {
    visible.iter().copied().collect()
}

/// Drop selected IDs that are no longer on the loaded page.
pub fn prune_selection(selected: &mut SelectionSet, visible: &[u64]) {
    selected.retain(|id| visible.contains(id));
}

/// Transient state of the bulk-decision panel.
///
/// `mode == None` is the closed state; everything else only has meaning while
/// a mode is set. Closing always clears the whole struct so reopening starts
/// fresh.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BulkPanel {
    /// Decision being confirmed; `None` when the panel is closed.
    pub mode: Option<ModerationAction>,
    /// Chosen reason token.
    pub selected_reason: Option<String>,
    /// Free-text reason used with the sentinel token.
    pub custom_reason: String,
    /// Optional comment for the seller.
    pub comment: String,
    /// Inline validation error under the reason control.
    pub reason_error: Option<String>,
    /// Submit failure shown in the panel's alert banner.
    pub error: Option<String>,
    /// True while the per-ID requests are in flight.
    pub submitting: bool,
}

impl BulkPanel {
    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.mode.is_some()
    }
}

/// Open the panel for a decision; no-op when nothing is selected.
pub fn open_bulk_action(panel: &mut BulkPanel, action: ModerationAction, selection_len: usize) {
    if selection_len == 0 {
        return;
    }
    *panel = BulkPanel {
        mode: Some(action),
        ..BulkPanel::default()
    };
}

/// Close the panel, discarding all transient form state.
pub fn close_panel(panel: &mut BulkPanel) {
    *panel = BulkPanel::default();
}

/// Record the chosen reason token.
pub fn set_reason(panel: &mut BulkPanel, token: String) {
    panel.selected_reason = Some(token);
}

/// Record the free-text reason.
pub fn set_custom_reason(panel: &mut BulkPanel, text: String) {
    panel.custom_reason = text;
}

/// Record the comment.
pub fn set_comment(panel: &mut BulkPanel, text: String) {
    panel.comment = text;
}

/// Validation failed; stay in input state and show the message inline.
pub fn reason_rejected(panel: &mut BulkPanel, message: String) {
    panel.reason_error = Some(message);
}

/// Validation passed; enter the submitting state.
pub fn begin_submit(panel: &mut BulkPanel) {
    panel.reason_error = None;
    panel.error = None;
    panel.submitting = true;
}

/// A request failed; back to input with the message, form intact.
pub fn submit_failed(panel: &mut BulkPanel, message: String) {
    panel.submitting = false;
    panel.error = Some(message);
}

/// Every request succeeded; the panel closes and resets.
pub fn submit_succeeded(panel: &mut BulkPanel) {
    *panel = BulkPanel::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_self_inverse() {
        let empty = SelectionSet::new();
        let one = toggle_selection(&empty, 7);
        assert!(one.contains(&7));
        let back = toggle_selection(&one, 7);
        assert!(back.is_empty());
    }

    #[test]
    fn select_all_covers_exactly_the_visible_page() {
        let next = select_all_visible(&[1, 2, 3]);
        assert_eq!(next, [1, 2, 3].into_iter().collect());
        assert!(select_all_visible(&[]).is_empty());
    }

    #[test]
    fn pruning_keeps_only_visible_ids() {
        let mut selected: SelectionSet = [1, 2, 3].into_iter().collect();
        prune_selection(&mut selected, &[2, 4]);
        assert_eq!(selected, [2].into_iter().collect());
    }

    #[test]
    fn opening_requires_a_selection() {
        let mut panel = BulkPanel::default();
        open_bulk_action(&mut panel, ModerationAction::Approve, 0);
        assert!(!panel.is_open());
        open_bulk_action(&mut panel, ModerationAction::Reject, 2);
        assert_eq!(panel.mode, Some(ModerationAction::Reject));
    }

    #[test]
    fn reopening_starts_from_a_clean_form() {
        let mut panel = BulkPanel::default();
        open_bulk_action(&mut panel, ModerationAction::Reject, 1);
        set_reason(&mut panel, "Другое".to_string());
        set_custom_reason(&mut panel, "Спам".to_string());
        set_comment(&mut panel, "пояснение".to_string());
        close_panel(&mut panel);
        assert_eq!(panel, BulkPanel::default());

        open_bulk_action(&mut panel, ModerationAction::Approve, 1);
        assert_eq!(panel.selected_reason, None);
        assert!(panel.custom_reason.is_empty());
        assert!(panel.comment.is_empty());
    }

    #[test]
    fn failed_submit_keeps_the_form_and_surfaces_the_message() {
        let mut panel = BulkPanel::default();
        open_bulk_action(&mut panel, ModerationAction::Reject, 2);
        set_reason(&mut panel, "Спам".to_string());
        set_comment(&mut panel, "note".to_string());
        begin_submit(&mut panel);
        assert!(panel.submitting);

        submit_failed(&mut panel, "Сервер недоступен".to_string());
        assert!(!panel.submitting);
        assert_eq!(panel.error.as_deref(), Some("Сервер недоступен"));
        assert!(panel.is_open());
        assert_eq!(panel.selected_reason.as_deref(), Some("Спам"));
        assert_eq!(panel.comment, "note");
    }

    #[test]
    fn successful_submit_closes_and_resets() {
        let mut panel = BulkPanel::default();
        open_bulk_action(&mut panel, ModerationAction::Approve, 2);
        begin_submit(&mut panel);
        submit_succeeded(&mut panel);
        assert_eq!(panel, BulkPanel::default());
        assert!(!panel.is_open());
    }

    #[test]
    fn validation_failure_never_enters_submitting() {
        let mut panel = BulkPanel::default();
        open_bulk_action(&mut panel, ModerationAction::Reject, 1);
        reason_rejected(&mut panel, "Необходимо указать причину".to_string());
        assert!(!panel.submitting);
        assert_eq!(
            panel.reason_error.as_deref(),
            Some("Необходимо указать причину")
        );
    }

    #[test]
    fn begin_submit_clears_previous_errors() {
        let mut panel = BulkPanel::default();
        open_bulk_action(&mut panel, ModerationAction::Reject, 1);
        reason_rejected(&mut panel, "Необходимо указать причину".to_string());
        submit_failed(&mut panel, "old".to_string());
        begin_submit(&mut panel);
        assert_eq!(panel.reason_error, None);
        assert_eq!(panel.error, None);
        assert!(panel.submitting);
    }
}
