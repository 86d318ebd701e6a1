use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{NewPost, Post};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct PostGateway {
    session: SqlxSession,
}

impl PostGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_post(row: &SqliteRow) -> AppResult<Post> {
        Ok(Post {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl PostWriter for PostGateway {
    async fn insert(&self, post: NewPost) -> AppResult<Post> {
        self.session
            .with_tx(|tx| {
                let post = post.clone();
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO posts
                                (user_id, title, content, created_at)
                            VALUES
                                (?, ?, ?, datetime('now'))
                            RETURNING
                                id, user_id, title, content, created_at
                        "#,
                    )
                    .bind(post.user_id.value)
                    .bind(post.title)
                    .bind(post.content)
                    .fetch_one(tx.as_mut())
                    .await?;

                    Self::map_post(&row)
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl PostReader for PostGateway {
    async fn get_all(&self) -> AppResult<Vec<Post>> {
        self.session
            .with_conn(|conn| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, title, content, created_at
                            FROM
                                posts
                            ORDER BY
                                created_at DESC, id DESC
                        "#,
                    )
                    .fetch_all(conn)
                    .await?;

                    rows.iter().map(Self::map_post).collect()
                }
                .boxed()
            })
            .await
    }

    async fn get_by_user(&self, user_id: &Id<User>) -> AppResult<Vec<Post>> {
        self.session
            .with_conn(|conn| {
                let user_id = user_id.value;
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, title, content, created_at
                            FROM
                                posts
                            WHERE
                                user_id = ?
                            ORDER BY
                                created_at DESC, id DESC
                        "#,
                    )
                    .bind(user_id)
                    .fetch_all(conn)
                    .await?;

                    rows.iter().map(Self::map_post).collect()
                }
                .boxed()
            })
            .await
    }
}
