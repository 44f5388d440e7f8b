//! Pagination parameters and the envelope's pagination block.

use serde::{Deserialize, Serialize};

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: Option<u64>,

    /// Items per page
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Items per page when the query string omits `limit`
    pub const DEFAULT_LIMIT: u64 = 20;

    /// Maximum allowed items per page
    pub const MAX_LIMIT: u64 = 100;

    /// Returns the page (1-indexed, minimum 1)
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Returns the clamped limit value
    pub fn limit(&self) -> u64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }

    /// Calculate SQL OFFSET
    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.limit()
    }

    /// Build the pagination block for an envelope
    pub fn meta(&self, total: u64) -> PaginationMeta {
        PaginationMeta::new(self.page(), self.limit(), total)
    }
}

/// The `pagination` block of a paginated envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Precondition: `limit > 0`.
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        }
    }
}
