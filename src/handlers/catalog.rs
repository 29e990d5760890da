use axum::Json;

use crate::models::Catalog;
use crate::services::catalog::catalog;

// GET /api/catalog
pub async fn get_catalog() -> Json<Catalog> {
    Json(catalog())
}
