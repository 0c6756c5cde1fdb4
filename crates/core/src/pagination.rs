//! Pagination metadata carried in the envelope `meta` object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Typed view over the pagination keys list endpoints put in `meta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
    pub has_more: Option<bool>,
}

impl Pagination {
    /// Read pagination keys from a `meta` map. Missing or mistyped keys are `None`.
    pub fn from_meta(meta: &Map<String, Value>) -> Self {
        let number = |key: &str| meta.get(key).and_then(Value::as_u64);

        let page = number("page");
        let total_pages = number("totalPages");
        let has_more = meta
            .get("hasMore")
            .and_then(Value::as_bool)
            .or_else(|| Some(page? < total_pages?));

        Self {
            page,
            limit: number("limit"),
            total: number("total"),
            total_pages,
            has_more,
        }
    }

    /// Page number to request next, when there is one.
    pub fn next_page(&self) -> Option<u64> {
        match (self.has_more, self.page) {
            (Some(true), Some(page)) => page.checked_add(1),
            _ => None,
        }
    }
}
