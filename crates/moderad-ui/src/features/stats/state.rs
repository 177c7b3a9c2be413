//! Statistics payload assembled from the four chart endpoints.

use moderad_api_models::{ActivityPoint, CategoriesChart, DecisionsDistribution, StatsSummary};

/// Everything the statistics page renders, fetched in one concurrent burst.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsData {
    /// Aggregate counters and percentages.
    pub summary: StatsSummary,
    /// Per-day decision counts.
    pub activity: Vec<ActivityPoint>,
    /// Decision-type totals.
    pub decisions: DecisionsDistribution,
    /// Per-category approved counts.
    pub categories: CategoriesChart,
}
