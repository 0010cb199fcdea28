//! # Shared Request Models
//!
//! Common request shapes used across resource modules. Field names are
//! converted to camelCase on the wire for the Java backend.
//!
//! Most API methods accept any `Serialize` payload (the backend contracts
//! are loose, per-page query objects); these structs cover the shapes
//! every page shares.

use serde::{Deserialize, Serialize};

/// A paged list query.
///
/// ## Example JSON
///
/// ```json
/// {
///     "pageNum": 1,
///     "pageSize": 20,
///     "keyword": "HPV"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-based page number.
    pub page_num: u32,

    /// Rows per page.
    pub page_size: u32,

    /// Optional free-text filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: 20,
            keyword: None,
        }
    }
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,

    /// Temporary token obtained before login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A uniqueness-check query (`/check/isExist/...`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniquenessQuery {
    /// Candidate value to test, e.g. a contract number.
    pub value: String,

    /// Record id to exclude when editing an existing record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_camel_case() {
        let query = PageQuery::default();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["pageNum"], 1);
        assert_eq!(json["pageSize"], 20);
        assert!(json.get("keyword").is_none());
    }
}
