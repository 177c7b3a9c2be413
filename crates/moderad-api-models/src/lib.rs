#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the moderation backend API.
//!
//! The backend speaks camelCase JSON; these types pin the wire contract in one
//! place so the UI client and its tests stay in agreement with the server.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Moderation status of a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    /// Awaiting a moderator decision.
    Pending,
    /// Published after approval.
    Approved,
    /// Taken down after rejection.
    Rejected,
}

impl AdStatus {
    /// Wire value used in query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a query-parameter value, rejecting anything outside the contract.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Review priority assigned by the intake pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdPriority {
    /// Regular review queue.
    Normal,
    /// Flagged for expedited review.
    Urgent,
}

/// Action recorded in a listing's moderation history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HistoryAction {
    /// Listing entered the moderation queue.
    Pending,
    /// Listing was approved.
    Approved,
    /// Listing was rejected.
    Rejected,
    /// Listing was returned to the seller for changes.
    RequestChanges,
}

/// Listing summary returned by the paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdSummary {
    /// Stable listing identifier (positive integer).
    pub id: u64,
    /// Listing headline.
    pub title: String,
    /// Asking price in rubles.
    pub price: f64,
    /// Display name of the listing's category.
    pub category: String,
    /// Identifier of the listing's category.
    pub category_id: u64,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Current moderation status.
    pub status: AdStatus,
    /// Review priority.
    pub priority: AdPriority,
    /// Ordered image URLs; may be empty.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number of this response.
    pub current_page: u32,
    /// Total number of pages for the query.
    pub total_pages: u32,
    /// Total number of matching listings.
    pub total_items: u64,
    /// Page size the backend applied.
    pub items_per_page: u32,
}

/// Response body of `GET /api/v1/ads`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdsResponse {
    /// One page of listings.
    pub ads: Vec<AdSummary>,
    /// Pagination totals; older backend builds omit this block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Seller record embedded in a listing detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    /// Seller identifier.
    pub id: u64,
    /// Seller display name.
    pub name: String,
    /// Rating as formatted by the backend (e.g. "4.8").
    pub rating: String,
    /// Number of listings the seller has posted.
    pub total_ads: u64,
    /// Registration timestamp (ISO 8601).
    pub registered_at: String,
}

/// One immutable entry of a listing's moderation history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModerationHistoryEntry {
    /// Entry identifier.
    pub id: u64,
    /// Acting moderator's identifier.
    pub moderator_id: u64,
    /// Acting moderator's display name.
    pub moderator_name: String,
    /// Decision recorded by this entry.
    pub action: HistoryAction,
    /// Reason supplied with the decision, when one was required.
    pub reason: Option<String>,
    /// Free-text comment; empty when none was given.
    #[serde(default)]
    pub comment: String,
    /// Decision timestamp (ISO 8601).
    pub timestamp: String,
}

/// Full listing record returned by the detail and action endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdDetails {
    /// Stable listing identifier.
    pub id: u64,
    /// Listing headline.
    pub title: String,
    /// Full listing description.
    pub description: String,
    /// Asking price in rubles.
    pub price: f64,
    /// Display name of the listing's category.
    pub category: String,
    /// Identifier of the listing's category.
    pub category_id: u64,
    /// Current moderation status.
    pub status: AdStatus,
    /// Review priority.
    pub priority: AdPriority,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601).
    pub updated_at: String,
    /// Ordered image URLs; may be empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Seller the listing belongs to.
    pub seller: Seller,
    /// Free-form attribute table.
    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
    /// Server-owned, append-only decision log.
    #[serde(default)]
    pub moderation_history: Vec<ModerationHistoryEntry>,
}

/// Envelope returned by the approve/reject/request-changes endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdActionResponse {
    /// The updated listing, including the appended history entry.
    pub ad: AdDetails,
}

/// Request body for reject and request-changes decisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModerationRequest {
    /// Resolved decision reason; always present and non-empty.
    pub reason: String,
    /// Optional comment for the seller; omitted when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Aggregate counters from `GET /api/v1/stats/summary`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Listings reviewed over the whole period.
    pub total_reviewed: u64,
    /// Listings reviewed today.
    pub total_reviewed_today: u64,
    /// Listings reviewed this week.
    pub total_reviewed_this_week: u64,
    /// Listings reviewed this month.
    pub total_reviewed_this_month: u64,
    /// Share of approvals, already scaled to 0–100.
    pub approved_percentage: f64,
    /// Share of rejections, already scaled to 0–100.
    pub rejected_percentage: f64,
    /// Share of change requests, already scaled to 0–100.
    pub request_changes_percentage: f64,
    /// Mean review duration in seconds.
    pub average_review_time: f64,
}

/// One day of decision counts from `GET /api/v1/stats/chart/activity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    /// Calendar day (`YYYY-MM-DD`).
    pub date: String,
    /// Approvals on that day.
    pub approved: u64,
    /// Rejections on that day.
    pub rejected: u64,
    /// Change requests on that day.
    pub request_changes: u64,
}

/// Decision-type totals from `GET /api/v1/stats/chart/decisions`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionsDistribution {
    /// Total approvals.
    pub approved: u64,
    /// Total rejections.
    pub rejected: u64,
    /// Total change requests.
    pub request_changes: u64,
}

/// Per-category approved counts from `GET /api/v1/stats/chart/categories`,
/// keyed by category display name.
pub type CategoriesChart = BTreeMap<String, u64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ads_response_tolerates_missing_pagination() {
        let body = r#"{"ads":[{"id":1,"title":"Диван","price":100.0,
            "category":"Мебель","categoryId":3,"createdAt":"2024-05-01T10:00:00Z",
            "status":"pending","priority":"normal","images":[]}]}"#;
        let parsed: AdsResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.pagination.is_none());
        assert_eq!(parsed.ads[0].id, 1);
        assert_eq!(parsed.ads[0].status, AdStatus::Pending);
    }

    #[test]
    fn history_action_uses_camel_case_wire_names() {
        let entry: ModerationHistoryEntry = serde_json::from_str(
            r#"{"id":7,"moderatorId":2,"moderatorName":"m","action":"requestChanges",
                "reason":null,"comment":"","timestamp":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.action, HistoryAction::RequestChanges);
        assert!(entry.reason.is_none());
    }

    #[test]
    fn moderation_request_omits_blank_comment() {
        let body = ModerationRequest {
            reason: "Спам".to_string(),
            comment: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"reason":"Спам"}"#
        );
    }

    #[test]
    fn status_param_round_trip() {
        for status in [AdStatus::Pending, AdStatus::Approved, AdStatus::Rejected] {
            assert_eq!(AdStatus::from_param(status.as_str()), Some(status));
        }
        assert!(AdStatus::from_param("archived").is_none());
    }
}
