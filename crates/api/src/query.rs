//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-based pagination parameters (`?page=&limit=`), plus the task
/// status filter.
///
/// `page` is 1-based; out-of-range values are clamped by [`Self::clamp`].
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

/// Default page size for listings.
const DEFAULT_LIMIT: i64 = 10;
/// Upper bound on requested page size.
const MAX_LIMIT: i64 = 100;

impl TaskListParams {
    /// Resolve `(page, limit, offset)` with defaults and bounds applied.
    ///
    /// The offset is computed with saturating arithmetic so an absurd
    /// `page` cannot overflow into a negative OFFSET.
    pub fn clamp(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = (page - 1).saturating_mul(limit);
        (page, limit, offset)
    }
}
