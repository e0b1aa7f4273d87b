use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use loyalty_core::service::GenerateError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { status: StatusCode, message: String },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { status, .. } => *status,
            ApiError::Generate(GenerateError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Generate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The provider failure as returned by the completion client, chain intact.
    pub fn provider_error(&self) -> Option<&anyhow::Error> {
        match self {
            ApiError::Generate(GenerateError::Provider(e)) => Some(e),
            _ => None,
        }
    }

    fn report(&self) {
        match self.provider_error() {
            Some(e) => {
                sentry_anyhow::capture_anyhow(e);
            }
            None => {
                sentry::capture_error(self);
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            self.report();
            tracing::error!(error = %self, "generate request failed");
        } else {
            tracing::info!(%status, error = %self, "rejected generate request");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_unprocessable_entity() {
        let err = ApiError::from(GenerateError::Validation("company_name must be non-empty".into()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn provider_maps_to_internal_error() {
        let err = ApiError::from(GenerateError::Provider(anyhow::anyhow!("boom")));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn provider_error_keeps_source_chain() {
        let source = anyhow::anyhow!("connection reset").context("OpenAI request failed");
        let err = ApiError::from(GenerateError::Provider(source));

        let provider = err.provider_error().unwrap();
        let chain: Vec<String> = provider.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain, ["OpenAI request failed", "connection reset"]);

        // Without a Sentry client this is a no-op, but it must not panic.
        err.report();
    }

    #[test]
    fn only_provider_failures_expose_provider_error() {
        let err = ApiError::from(GenerateError::Validation("company_name must be non-empty".into()));
        assert!(err.provider_error().is_none());
        err.report();
    }
}
