use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use loyalty_core::domain::request::{FinancialModelRequest, FinancialModelResponse};
use loyalty_core::service::FinancialModelGenerator;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub generator: FinancialModelGenerator,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/generate", post(generate_model))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn generate_model(
    State(state): State<AppState>,
    payload: Result<Json<FinancialModelRequest>, JsonRejection>,
) -> Result<Json<FinancialModelResponse>, ApiError> {
    let Json(request) = payload?;

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "generate",
        %request_id,
        company_name = %request.company_name,
    );

    async move {
        let response = state.generator.generate(&request).await?;
        tracing::info!(
            analysis_len = response.generated_output.len(),
            structured_keys = response.structured_data.len(),
            "financial model generated"
        );
        Ok::<_, ApiError>(Json(response))
    }
    .instrument(span)
    .await
}
