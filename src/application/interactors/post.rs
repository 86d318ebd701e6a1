use std::sync::Arc;

use tracing::info;

use crate::application::app_error::AppResult;
use crate::application::dto::post::{CreatePostDTO, GetUserPostListDTO, PostDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{NewPost, Post};
use crate::domain::entities::user::User;

fn to_dto(post: Post) -> PostDTO {
    PostDTO {
        id: post.id.value,
        user_id: post.user_id.value,
        title: post.title,
        content: post.content,
        created_at: post.created_at,
    }
}

#[derive(Clone)]
pub struct CreatePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_writer: Arc<dyn PostWriter>,
}

impl CreatePostInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, post_writer: Arc<dyn PostWriter>) -> Self {
        Self {
            db_session,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: CreatePostDTO) -> AppResult<PostDTO> {
        let user_id: Id<User> = Id::new(dto.user_id);
        let post = NewPost::new(user_id, dto.title, dto.content);
        let post = self.post_writer.insert(post).await?;
        self.db_session.commit().await?;
        info!("User {} created post {}", post.user_id, post.id);
        Ok(to_dto(post))
    }
}

#[derive(Clone)]
pub struct GetPostListInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetPostListInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<PostDTO>> {
        let posts = self.post_reader.get_all().await?;
        Ok(posts.into_iter().map(to_dto).collect())
    }
}

#[derive(Clone)]
pub struct GetUserPostListInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetUserPostListInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self, dto: GetUserPostListDTO) -> AppResult<Vec<PostDTO>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let posts = self.post_reader.get_by_user(&user_id).await?;
        Ok(posts.into_iter().map(to_dto).collect())
    }
}
