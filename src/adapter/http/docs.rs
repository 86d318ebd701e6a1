use axum::{response::Html, Json};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        OpenApi as OpenApiDoc,
    }, Modify,
    OpenApi,
};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::{health, post},
    schema::post::{CreatePostRequest, PostResponse},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token issued for the user"))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Posts API", version = "1.0", description = "A REST API for managing posts and users"),
    modifiers(&SecurityAddon),
    paths(
        health::health_check,
        post::get_posts,
        post::create_post,
        post::get_user_posts
    ),
    components(
        schemas(
            ErrorResponse,
            CreatePostRequest,
            PostResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

/// Stoplight Elements page for the posts API, reading the document served at `/openapi.json`.
pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Posts API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="/openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}

pub async fn scalar_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Posts API reference</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
              </head>
              <body>
                <script id="api-reference" data-url="/openapi.json"></script>
                <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
              </body>
            </html>
        "#,
    )
}

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use crate::adapter::http::docs::{ApiDoc, docs_ui, scalar_ui};

    #[test]
    fn test_openapi_declares_bearer_auth_on_create_post() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert_eq!(doc["components"]["securitySchemes"]["bearerAuth"]["scheme"], "bearer");
        assert_eq!(doc["paths"]["/posts"]["post"]["security"][0]["bearerAuth"], serde_json::json!([]));
        assert!(doc["paths"]["/posts"]["get"]["security"].is_null());
        assert!(doc["paths"]["/user/{id}/posts"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_doc_pages_load_the_served_document() {
        let docs = docs_ui().await.0;
        let scalar = scalar_ui().await.0;

        assert!(docs.contains(r#"apiDescriptionUrl="/openapi.json""#));
        assert!(docs.contains("<title>Posts API docs</title>"));
        assert!(scalar.contains(r#"data-url="/openapi.json""#));
    }
}
