//! Reason validation and request planning for moderation decisions.
//!
//! # Design
//! - Validate before any request object exists; an invalid form never
//!   produces network work.
//! - Planning is pure: the wasm layer only executes what is planned here.

use crate::features::moderation::actions::{ModerationAction, OTHER_REASON};
use moderad_api_models::ModerationRequest;
use thiserror::Error;

/// Validation failure for a decision form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Необходимо указать причину")]
pub struct ReasonRequired;

/// Resolve the final reason for a decision.
///
/// Approve never carries a reason. For reject/request-changes the sentinel
/// token switches to the trimmed free-text input; any other chosen token is
/// used verbatim.
///
/// # Errors
/// Returns [`ReasonRequired`] when no token is chosen, or when the sentinel is
/// chosen and the free text is blank after trimming.
pub fn resolve_reason(
    action: ModerationAction,
    selected_reason: Option<&str>,
    custom_reason: &str,
) -> Result<Option<String>, ReasonRequired> {
    if !action.needs_reason() {
        return Ok(None);
    }
    match selected_reason {
        None => Err(ReasonRequired),
        Some(token) if token == OTHER_REASON => {
            let trimmed = custom_reason.trim();
            if trimmed.is_empty() {
                Err(ReasonRequired)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(token) => Ok(Some(token.to_string())),
    }
}

/// Trimmed comment, or `None` when blank (omitted from the request body).
#[must_use]
pub fn normalize_comment(comment: &str) -> Option<String> {
    let trimmed = comment.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One POST the submit step will issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRequest {
    /// Path relative to the API base URL.
    pub path: String,
    /// JSON body; `None` for approvals.
    pub body: Option<ModerationRequest>,
}

/// Plan one request per target ID.
///
/// `reason` is the output of [`resolve_reason`]: `None` plans body-less
/// approvals, `Some` plans reason-carrying decisions with the comment
/// normalized once for every target.
#[must_use]
pub fn plan_requests(
    action: ModerationAction,
    ids: &[u64],
    reason: Option<&str>,
    comment: &str,
) -> Vec<PlannedRequest> {
    let body = reason.map(|reason| ModerationRequest {
        reason: reason.to_string(),
        comment: normalize_comment(comment),
    });
    ids.iter()
        .map(|id| PlannedRequest {
            path: format!("/api/v1/ads/{id}/{}", action.endpoint_suffix()),
            body: body.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_never_needs_a_reason() {
        assert_eq!(resolve_reason(ModerationAction::Approve, None, ""), Ok(None));
        assert_eq!(
            resolve_reason(ModerationAction::Approve, Some(OTHER_REASON), ""),
            Ok(None)
        );
    }

    #[test]
    fn reject_requires_a_chosen_token() {
        assert_eq!(
            resolve_reason(ModerationAction::Reject, None, ""),
            Err(ReasonRequired)
        );
    }

    #[test]
    fn sentinel_requires_non_blank_custom_text() {
        assert_eq!(
            resolve_reason(ModerationAction::Reject, Some(OTHER_REASON), ""),
            Err(ReasonRequired)
        );
        assert_eq!(
            resolve_reason(ModerationAction::Reject, Some(OTHER_REASON), "   "),
            Err(ReasonRequired)
        );
        assert_eq!(
            resolve_reason(ModerationAction::Reject, Some(OTHER_REASON), "  Spam  "),
            Ok(Some("Spam".to_string()))
        );
    }

    #[test]
    fn preset_token_is_used_verbatim() {
        assert_eq!(
            resolve_reason(
                ModerationAction::Reject,
                Some("Запрещенный товар"),
                ""
            ),
            Ok(Some("Запрещенный товар".to_string()))
        );
    }

    #[test]
    fn request_changes_validates_like_reject() {
        assert_eq!(
            resolve_reason(ModerationAction::RequestChanges, None, "text"),
            Err(ReasonRequired)
        );
        assert_eq!(
            resolve_reason(ModerationAction::RequestChanges, Some("Проблемы с фото"), ""),
            Ok(Some("Проблемы с фото".to_string()))
        );
    }

    #[test]
    fn validation_message_matches_the_form() {
        assert_eq!(ReasonRequired.to_string(), "Необходимо указать причину");
    }

    #[test]
    fn comment_is_trimmed_or_dropped() {
        assert_eq!(normalize_comment("  Коммент  "), Some("Коммент".to_string()));
        assert_eq!(normalize_comment("   "), None);
        assert_eq!(normalize_comment(""), None);
    }

    #[test]
    fn approve_plan_has_one_bodyless_post_per_id() {
        let plan = plan_requests(ModerationAction::Approve, &[10, 20], None, "");
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].path, "/api/v1/ads/10/approve");
        assert_eq!(plan[1].path, "/api/v1/ads/20/approve");
        assert!(plan.iter().all(|request| request.body.is_none()));
    }

    #[test]
    fn reject_plan_shares_one_resolved_body() {
        let plan = plan_requests(
            ModerationAction::Reject,
            &[42],
            Some("Спам"),
            "  Коммент ",
        );
        assert_eq!(plan[0].path, "/api/v1/ads/42/reject");
        let body = plan[0].body.as_ref().unwrap();
        assert_eq!(body.reason, "Спам");
        assert_eq!(body.comment.as_deref(), Some("Коммент"));
    }

    #[test]
    fn blank_comment_is_omitted_from_the_body() {
        let plan = plan_requests(ModerationAction::Reject, &[1], Some("Спам"), "   ");
        assert_eq!(plan[0].body.as_ref().unwrap().comment, None);
    }

    #[test]
    fn request_changes_plan_targets_the_dedicated_endpoint() {
        let plan = plan_requests(ModerationAction::RequestChanges, &[5], Some("Фото"), "");
        assert_eq!(plan[0].path, "/api/v1/ads/5/request-changes");
    }
}
