//! Shared pager helper for list endpoints
//!
//! Missing or out-of-range pager parameters are defaulted and clamped, never
//! rejected; a page past the end of the result set is an empty page with the
//! totals intact.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw pager query parameters as sent by the client
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PagerParams {
    /// Zero-based page number
    pub page: Option<usize>,
    /// Items per page, clamped to the configured maximum
    pub per_page: Option<usize>,
}

/// Effective pager bounds, taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct PagerSettings {
    pub default_per_page: usize,
    pub max_per_page: usize,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 100,
        }
    }
}

/// Pager metadata returned alongside the page contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PagerMeta {
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice one page out of a full result set
pub fn paginate<T>(items: Vec<T>, params: &PagerParams, settings: PagerSettings) -> (PagerMeta, Vec<T>) {
    let per_page = params
        .per_page
        .unwrap_or(settings.default_per_page)
        .clamp(1, settings.max_per_page);
    let page = params.page.unwrap_or(0);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let content: Vec<T> = items
        .into_iter()
        .skip(page.saturating_mul(per_page))
        .take(per_page)
        .collect();

    (
        PagerMeta {
            page,
            per_page,
            total_items,
            total_pages,
        },
        content,
    )
}
