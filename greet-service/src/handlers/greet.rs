use axum::extract::Query;
use axum::Json;
use service_core::error::AppError;

use crate::models::{GreetQuery, Greeting};

/// `GET /api/greet?name=<string>`
///
/// Decoded as raw pairs so a repeated `name` resolves to its last value
/// instead of failing the whole query.
pub async fn greet(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Greeting>, AppError> {
    let name = GreetQuery::from_pairs(pairs)
        .name
        .ok_or_else(|| AppError::MissingParameter("name".to_string()))?;

    tracing::debug!(name_len = name.len(), "Greeting requested");

    Ok(Json(Greeting::for_name(&name)))
}
