use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn find_user(result: Option<SqliteRow>) -> AppResult<Option<User>> {
        match result {
            Some(row) => Ok(Some(User {
                id: Id::new(row.try_get("id")?),
                username: row.try_get("username")?,
                email: row.try_get("email")?,
                created_at: row.try_get("created_at")?,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>> {
        self.session
            .with_conn(|conn| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, username, email, created_at
                            FROM
                                users
                            WHERE id = ?
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(conn)
                    .await?;
                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::adapter::db::gateway::user::UserGateway;
    use crate::adapter::db::session::SqlxSession;
    use crate::application::interface::gateway::user::UserReader;
    use crate::domain::entities::id::Id;
    use crate::infra::state::AppState;
    use crate::tests::fixtures::init_test_app_state;
    use crate::tests::helpers::insert_user;

    #[rstest]
    #[tokio::test]
    async fn test_find_by_id(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let user_id = insert_user(&state.pool, "alice").await;

        let gateway = UserGateway::new(SqlxSession::new_lazy(state.pool.clone()));

        let user = gateway.find_by_id(&Id::new(user_id)).await.unwrap().expect("user");
        assert_eq!(user.id.value, user_id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@test.example");
        assert!(!user.created_at.is_empty());

        assert!(gateway.find_by_id(&Id::new(user_id + 100)).await.unwrap().is_none());
    }
}
