use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::application::app_error::AppError;

/// JSON body that has passed its `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::Router;
    use rstest::rstest;
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use crate::adapter::http::validation::ValidJson;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        name: String,
    }

    async fn echo(ValidJson(payload): ValidJson<Payload>) -> impl IntoResponse {
        payload.name
    }

    async fn status_for(body: &'static str, content_type: &'static str) -> StatusCode {
        let app = Router::new().route("/", post(echo));
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        app.oneshot(req).await.unwrap().status()
    }

    #[rstest]
    #[case(r#"{"name": "ok"}"#, "application/json", StatusCode::OK)]
    #[case(r#"{"name": ""}"#, "application/json", StatusCode::BAD_REQUEST)]
    #[case(r#"{"name": "ok""#, "application/json", StatusCode::BAD_REQUEST)]
    #[case(r#"{"name": 1}"#, "application/json", StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(r#"{"other": "x"}"#, "application/json", StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(r#"{"name": "ok"}"#, "text/plain", StatusCode::UNSUPPORTED_MEDIA_TYPE)]
    #[tokio::test]
    async fn test_valid_json_rejections(
        #[case] body: &'static str,
        #[case] content_type: &'static str,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(status_for(body, content_type).await, expected);
    }
}
