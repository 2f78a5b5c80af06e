use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::finder::TraceFinder;
use crate::models::ErrorCategory;

/// Detail string returned when a solved-trace lookup fails.
const SOLVED_DETAIL: &str = "failed to get solved traces";

/// Fixed-string failure payload. Upstream error text never crosses the
/// boundary; it only reaches the log.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: &'static str,
}

fn failure(detail: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDetail { detail })).into_response()
}

pub async fn error_traces(State(finder): State<TraceFinder>) -> Response {
    category_traces(finder, ErrorCategory::Generic).await
}

pub async fn floating_ip_error_traces(State(finder): State<TraceFinder>) -> Response {
    category_traces(finder, ErrorCategory::FloatingIp).await
}

pub async fn quota_error_traces(State(finder): State<TraceFinder>) -> Response {
    category_traces(finder, ErrorCategory::QuotaExceeded).await
}

async fn category_traces(finder: TraceFinder, category: ErrorCategory) -> Response {
    match finder.errors(category).await {
        Ok(trace_ids) => Json(trace_ids).into_response(),
        Err(e) => {
            tracing::error!("Failed to get {} error traces: {}", category.as_str(), e);
            failure(category.detail_message())
        }
    }
}

/// Full raw trace documents for a category's current error traces.
pub async fn error_trace_details(
    State(finder): State<TraceFinder>,
    Path(category): Path<String>,
) -> Response {
    let Some(category) = ErrorCategory::from_str(&category) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let documents = match finder.errors(category).await {
        Ok(trace_ids) => finder.details(&trace_ids).await,
        Err(e) => Err(e),
    };

    match documents {
        Ok(documents) => Json(documents).into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to get {} error trace details: {}",
                category.as_str(),
                e
            );
            failure(category.detail_message())
        }
    }
}

pub async fn solved_floating_ip_traces(State(finder): State<TraceFinder>) -> Response {
    match finder.solved_floating_ip().await {
        Ok(trace_ids) => Json(trace_ids).into_response(),
        Err(e) => {
            tracing::error!("Failed to get solved floating ip traces: {}", e);
            failure(SOLVED_DETAIL)
        }
    }
}

#[derive(Deserialize)]
pub struct SolvedQuotaQuery {
    /// Instance name the server-create span must mention.
    pub instance: String,
}

pub async fn solved_quota_traces(
    State(finder): State<TraceFinder>,
    Query(query): Query<SolvedQuotaQuery>,
) -> Response {
    match finder.solved_quota(&query.instance).await {
        Ok(trace_ids) => Json(trace_ids).into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to get solved quota traces for '{}': {}",
                query.instance,
                e
            );
            failure(SOLVED_DETAIL)
        }
    }
}
