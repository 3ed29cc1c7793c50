//! Categories API endpoint.

use api_types::expense::{CATEGORIES, CategoryListResponse};
use axum::Json;

/// Values for the category selector. Needs no owner identifier.
pub async fn list() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: CATEGORIES.to_vec(),
    })
}
