use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::schemas::analysis::{AnalyzeRequest, AnalyzeResponse};
use crate::services::analyzer;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/analysis", post(analyze))
}

/// Analyze one response sheet URL and return the scored result.
///
/// The body is read as a raw string and parsed manually so that malformed
/// JSON surfaces in the same `{"success": false, "error"}` shape as every
/// other failure, instead of the extractor's default rejection.
async fn analyze(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let request: AnalyzeRequest = serde_json::from_str(&body)
        .map_err(|err| ApiError::BadRequest(format!("Invalid request body: {err}")))?;
    request.validate().map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let defaults = state.settings().analysis();
    let exam_type =
        request.exam_type.filter(|value| !value.is_empty()).unwrap_or_else(|| {
            defaults.default_exam_type.clone()
        });
    let language = request
        .language
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| defaults.default_language.clone());

    // Unknown exam types resolve to the default config instead of failing;
    // the requested type is still echoed verbatim in the result.
    let config = state.registry().resolve(&exam_type).clone();

    tracing::info!(
        exam_type = %config.id,
        language = %language,
        "Starting response sheet analysis"
    );
    metrics::counter!("analysis_requests_total", "exam_type" => config.id.clone()).increment(1);

    let data =
        analyzer::analyze(state.fetcher(), &config, &exam_type, &request.url, &language).await;

    tracing::info!(
        exam_type = %config.id,
        total_questions = data.total_questions,
        total_score = data.total_score,
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse { success: true, data }))
}
