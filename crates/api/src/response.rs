//! Shared response envelope types for API handlers.
//!
//! Every response carries a `success` flag; payloads ride under `data`
//! (token issuance uses a top-level `token`). Use these instead of ad-hoc
//! `serde_json::json!` blocks for compile-time type safety.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Token issuance envelope returned by register and login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

impl TokenResponse {
    pub fn new(token: String) -> Self {
        Self {
            success: true,
            token,
        }
    }
}

/// Offset-paginated listing payload.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl<T: Serialize> Paginated<T> {
    /// Assemble a page; `total_pages` is `ceil(total / limit)`.
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Paginated<i32> = Paginated::new(vec![], 25, 1, 10);
        assert_eq!(page.total_pages, 3);

        let page: Paginated<i32> = Paginated::new(vec![], 30, 1, 10);
        assert_eq!(page.total_pages, 3);

        let page: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);
    }
}
