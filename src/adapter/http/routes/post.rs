use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::post::{CreatePostRequest, PostResponse};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::post::{CreatePostDTO, GetUserPostListDTO};
use crate::application::interactors::post::{
    CreatePostInteractor, GetPostListInteractor, GetUserPostListInteractor,
};

#[utoipa::path(
    get,
    path = "/posts",
    tag = "Posts",
    responses(
        (
            status = 200,
            description = "All posts, newest first",
            body = [PostResponse]
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn get_posts(interactor: GetPostListInteractor) -> AppResult<impl IntoResponse> {
    let posts = interactor.execute().await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/user/{id}/posts",
    tag = "Posts",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (
            status = 200,
            description = "Posts of the user, newest first",
            body = [PostResponse]
        ),
        (
            status = 400,
            description = "User id is not an integer",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Bad Request"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn get_user_posts(
    interactor: GetUserPostListInteractor,
    Path(user_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = GetUserPostListDTO { user_id };
    let posts = interactor.execute(dto).await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "Posts",
    request_body(
        content = CreatePostRequest,
        example = json!(
            {
                "title": "Hello",
                "content": "My first post"
            }
        )
    ),
    responses(
        (
            status = 201,
            description = "Post created",
            body = PostResponse,
            example = json!(
                {
                    "id": 1,
                    "user_id": 42,
                    "title": "Hello",
                    "content": "My first post",
                    "created_at": "2025-01-01 12:00:00"
                }
            )
        ),
        (
            status = 400,
            description = "Invalid request body",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "title: Title must be between 1 and 255 characters"
                }
            )
        ),
        (
            status = 401,
            description = "Missing, malformed or unknown bearer token",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Invalid Credentials"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    ),
    security(("bearerAuth" = []))
)]
pub async fn create_post(
    AuthUser(auth): AuthUser,
    interactor: CreatePostInteractor,
    ValidJson(payload): ValidJson<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreatePostDTO {
        user_id: auth.user.id.value,
        title: payload.title,
        content: payload.content,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}
