use crate::models::ReviewRecord;
use crate::state::DemoAppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reelsense_core::ReviewSubmission;
use serde::Deserialize;

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Review endpoints
// ============================================================================

pub async fn submit_review(
    State(state): State<DemoAppState>,
    Json(submission): Json<ReviewSubmission>,
) -> Response {
    // Validation happens before any encoding or scoring.
    let errors = submission.validation_errors();
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "errors": errors })),
        )
            .into_response();
    }

    match state.pipeline.analyze(&submission.review).await {
        Ok(prediction) => {
            tracing::info!(
                movie = %submission.movie,
                sentiment = %prediction.label,
                score = prediction.score,
                "scored review"
            );
            let record = ReviewRecord::new(submission, prediction);
            state.record_review(record.clone());
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to score review");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    pub limit: Option<usize>,
}

pub async fn list_reviews(
    State(state): State<DemoAppState>,
    Query(query): Query<ReviewsQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(100);
    Json(state.recent_reviews(limit))
}

pub async fn get_review(
    State(state): State<DemoAppState>,
    Path(id): Path<String>,
) -> Response {
    match state.get_review(&id) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Review not found" })),
        )
            .into_response(),
    }
}
