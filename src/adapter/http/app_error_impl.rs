use crate::application::app_error::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, None),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Some("Invalid Credentials".to_string()),
            ),
            AppError::ValidationError(errors) => (StatusCode::BAD_REQUEST, Some(errors.to_string())),
            AppError::JsonRejection(rejection) => (rejection.status(), Some(rejection.body_text())),
            _ => {
                tracing::error!("Request failed: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let message = match message {
            Some(msg) => msg,
            None => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use rstest::rstest;
    use serde_json::Value;

    use crate::application::app_error::AppError;

    async fn error_body(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_credentials_is_unauthorized() {
        let (status, body) = error_body(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid Credentials");
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let (status, body) = error_body(AppError::InvalidId("abc".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }

    #[rstest]
    #[tokio::test]
    async fn test_database_error_hides_cause() {
        let (status, body) = error_body(AppError::DatabaseError(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }
}
