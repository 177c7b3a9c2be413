//! Detail-page state and its pure transitions.

use crate::features::moderation::actions::ModerationAction;
use moderad_api_models::AdDetails;

/// State of the listing detail page, including the single-item decision form.
///
/// The decision form mirrors the bulk panel but targets exactly one listing
/// and adds the request-changes action; `panel` only ever holds the two
/// reason-carrying actions since approve submits directly.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ItemState {
    /// Loaded listing; `None` before the first successful fetch.
    pub ad: Option<AdDetails>,
    /// True while the detail fetch is in flight.
    pub loading: bool,
    /// Detail fetch failure.
    pub error: Option<String>,
    /// True while a decision request is in flight.
    pub action_loading: bool,
    /// Decision failure or validation error, shown near the action buttons.
    pub action_error: Option<String>,
    /// Index of the enlarged gallery image.
    pub main_image_index: usize,
    /// Open reason panel, if any.
    pub panel: Option<ModerationAction>,
    /// Chosen reason token.
    pub selected_reason: Option<String>,
    /// Free-text reason used with the sentinel token.
    pub custom_reason: String,
    /// Optional comment for the seller.
    pub comment: String,
}

/// Mark the detail fetch as started.
pub fn begin_load(state: &mut ItemState) {
    state.loading = true;
    state.error = None;
}

/// Apply a fetched listing and reset all transient view state.
pub fn load_succeeded(state: &mut ItemState, ad: AdDetails) {
    state.ad = Some(ad);
    state.loading = false;
    state.main_image_index = 0;
    reset_decision_form(state);
}

/// Record a detail fetch failure.
pub fn load_failed(state: &mut ItemState, message: String) {
    state.loading = false;
    state.error = Some(message);
}

/// Toggle the reason panel for an action (clicking the active one closes it).
pub fn toggle_panel(state: &mut ItemState, action: ModerationAction) {
    state.panel = if state.panel == Some(action) {
        None
    } else {
        Some(action)
    };
}

/// Show another gallery image.
pub const fn set_main_image(state: &mut ItemState, index: usize) {
    state.main_image_index = index;
}

/// Mark a decision request as started.
pub fn begin_action(state: &mut ItemState) {
    state.action_loading = true;
    state.action_error = None;
}

/// Record a decision failure (validation or network); the form stays intact.
pub fn action_failed(state: &mut ItemState, message: String) {
    state.action_loading = false;
    state.action_error = Some(message);
}

/// Replace the listing with the server's updated record and reset the form.
///
/// The backend is the source of truth for the new status and the appended
/// history entry; nothing is patched locally.
pub fn apply_decision(state: &mut ItemState, ad: AdDetails) {
    state.ad = Some(ad);
    state.action_loading = false;
    reset_decision_form(state);
}

fn reset_decision_form(state: &mut ItemState) {
    state.panel = None;
    state.selected_reason = None;
    state.custom_reason.clear();
    state.comment.clear();
}

/// URL of the enlarged gallery image, clamped to the available range.
#[must_use]
pub fn current_image(state: &ItemState) -> Option<&str> {
    let images = &state.ad.as_ref()?.images;
    if images.is_empty() {
        return None;
    }
    let index = state.main_image_index.min(images.len() - 1);
    images.get(index).map(String::as_str)
}

/// Identifier of the previous listing, if navigation backwards makes sense.
#[must_use]
pub const fn prev_id(id: u64) -> Option<u64> {
    if id > 1 { Some(id - 1) } else { None }
}

/// Identifier of the next listing.
#[must_use]
pub const fn next_id(id: u64) -> u64 {
    id + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use moderad_api_models::{AdPriority, AdStatus, Seller};
    use std::collections::BTreeMap;

    fn details(id: u64, images: Vec<String>) -> AdDetails {
        AdDetails {
            id,
            title: "Диван".to_string(),
            description: "Почти новый".to_string(),
            price: 12_500.0,
            category: "Мебель".to_string(),
            category_id: 3,
            status: AdStatus::Pending,
            priority: AdPriority::Normal,
            created_at: "2024-05-01T10:00:00Z".to_string(),
            updated_at: "2024-05-01T10:00:00Z".to_string(),
            images,
            seller: Seller {
                id: 1,
                name: "Иван".to_string(),
                rating: "4.8".to_string(),
                total_ads: 12,
                registered_at: "2023-01-10T00:00:00Z".to_string(),
            },
            characteristics: BTreeMap::new(),
            moderation_history: vec![],
        }
    }

    #[test]
    fn load_resets_gallery_and_form() {
        let mut state = ItemState {
            main_image_index: 4,
            panel: Some(ModerationAction::Reject),
            selected_reason: Some("Другое".to_string()),
            custom_reason: "Спам".to_string(),
            comment: "note".to_string(),
            ..ItemState::default()
        };
        load_succeeded(&mut state, details(1, vec![]));
        assert_eq!(state.main_image_index, 0);
        assert_eq!(state.panel, None);
        assert_eq!(state.selected_reason, None);
        assert!(state.custom_reason.is_empty());
        assert!(state.comment.is_empty());
    }

    #[test]
    fn panel_toggles_between_actions() {
        let mut state = ItemState::default();
        toggle_panel(&mut state, ModerationAction::Reject);
        assert_eq!(state.panel, Some(ModerationAction::Reject));
        toggle_panel(&mut state, ModerationAction::RequestChanges);
        assert_eq!(state.panel, Some(ModerationAction::RequestChanges));
        toggle_panel(&mut state, ModerationAction::RequestChanges);
        assert_eq!(state.panel, None);
    }

    #[test]
    fn decision_replaces_the_record_and_resets_the_form() {
        let mut state = ItemState {
            panel: Some(ModerationAction::Reject),
            selected_reason: Some("Спам".to_string()),
            ..ItemState::default()
        };
        begin_action(&mut state);
        apply_decision(&mut state, details(1, vec![]));
        assert!(!state.action_loading);
        assert_eq!(state.panel, None);
        assert_eq!(state.selected_reason, None);
        assert!(state.ad.is_some());
    }

    #[test]
    fn failed_action_keeps_the_form() {
        let mut state = ItemState {
            panel: Some(ModerationAction::Reject),
            selected_reason: Some("Спам".to_string()),
            comment: "note".to_string(),
            ..ItemState::default()
        };
        begin_action(&mut state);
        action_failed(&mut state, "Ошибка отправки (500)".to_string());
        assert!(!state.action_loading);
        assert_eq!(state.action_error.as_deref(), Some("Ошибка отправки (500)"));
        assert_eq!(state.panel, Some(ModerationAction::Reject));
        assert_eq!(state.comment, "note");
    }

    #[test]
    fn gallery_index_is_clamped() {
        let mut state = ItemState::default();
        load_succeeded(
            &mut state,
            details(1, vec!["a.jpg".to_string(), "b.jpg".to_string()]),
        );
        set_main_image(&mut state, 9);
        assert_eq!(current_image(&state), Some("b.jpg"));
        set_main_image(&mut state, 0);
        assert_eq!(current_image(&state), Some("a.jpg"));
    }

    #[test]
    fn empty_gallery_has_no_image() {
        let mut state = ItemState::default();
        load_succeeded(&mut state, details(1, vec![]));
        assert_eq!(current_image(&state), None);
    }

    #[test]
    fn neighbour_ids_respect_the_lower_bound() {
        assert_eq!(prev_id(1), None);
        assert_eq!(prev_id(5), Some(4));
        assert_eq!(next_id(5), 6);
    }
}
