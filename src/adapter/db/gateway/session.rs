use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::session::SessionReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;

#[derive(Clone)]
pub struct SessionGateway {
    session: SqlxSession,
}

impl SessionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SessionReader for SessionGateway {
    async fn find_by_token(&self, session_token: &str) -> AppResult<Option<Session>> {
        self.session
            .with_conn(|conn| {
                let session_token = session_token.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                        SELECT
                            id, user_id, session_token, expires_at
                        FROM
                            sessions
                        WHERE
                            session_token = ?
                    "#,
                    )
                    .bind(session_token)
                    .fetch_optional(conn)
                    .await?;
                    match result {
                        Some(row) => Ok(Some(Session {
                            id: Id::new(row.try_get("id")?),
                            user_id: Id::new(row.try_get("user_id")?),
                            session_token: row.try_get("session_token")?,
                            expires_at: row.try_get("expires_at")?,
                        })),
                        None => Ok(None),
                    }
                }
                .boxed()
            })
            .await
    }
}
