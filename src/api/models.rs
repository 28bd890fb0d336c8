// API request/response models (DTOs)

use serde::{Deserialize, Serialize};

use crate::content::projection::{NewsDto, ProductDto};

/// Standard API response envelope: `{success, message, data?}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Pagination metadata attached to list payloads.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: i64,
    pub current_page: i64,
    pub last_page: i64,
}

#[derive(Debug, Serialize)]
pub struct ProductListData {
    pub products: Vec<ProductDto>,
    pub meta: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct NewsListData {
    pub news: Vec<NewsDto>,
    pub meta: PageMeta,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

/// Query parameters shared by plain list/detail endpoints.
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// `/products` query string. `category_id` wins over the `category` slug
/// when both are present; `q` and `search` are aliases.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub category_id: Option<i64>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub q: Option<String>,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub lang: Option<String>,
}

impl ProductListQuery {
    pub fn search_term(&self) -> Option<String> {
        self.q.clone().or_else(|| self.search.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct NewsListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub lang: Option<String>,
}

/// `/contact_messages` body. `full_name` is accepted as an alias for `name`.
#[derive(Debug, Deserialize)]
pub struct ContactMessageRequest {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsletterSubscribeRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_data() {
        let value = serde_json::to_value(ApiResponse::success(
            CreatedId { id: 7 },
            "Contact message created successfully",
        ))
        .unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Contact message created successfully");
        assert_eq!(value["data"]["id"], 7);
    }

    #[test]
    fn error_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::<()>::error("Brand with id 9 not found"))
            .unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn product_query_defaults_and_aliases() {
        let query: ProductListQuery = serde_json::from_str(r#"{"search": "milk"}"#).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.search_term().as_deref(), Some("milk"));

        let query: ProductListQuery =
            serde_json::from_str(r#"{"q": "milk", "search": "other"}"#).unwrap();
        assert_eq!(query.search_term().as_deref(), Some("milk"));
    }
}
