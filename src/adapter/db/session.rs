use crate::application::{
    app_error::{AppError, AppResult},
    interface::db::DBSession
};
use async_trait::async_trait;
use futures::future::BoxFuture;
use sqlx::sqlite::SqliteConnection;
use sqlx::{Pool, Sqlite, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct SessionInner {
    pool: Pool<Sqlite>,
    transaction: Option<Transaction<'static, Sqlite>>,
    committed: bool,
}

/// Unit of work shared by the gateways of one interactor.
///
/// Writes go through `with_tx`, which opens a transaction on first use; it is committed by
/// `DBSession::commit` and rolled back when dropped uncommitted. Reads go through `with_conn`
/// and reuse the open transaction if there is one, otherwise a pooled connection is borrowed
/// for the duration of the call only.
#[derive(Clone)]
pub struct SqlxSession {
    inner: Arc<Mutex<SessionInner>>,
}

impl SqlxSession {
    pub fn new_lazy(pool: Pool<Sqlite>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                pool,
                transaction: None,
                committed: false,
            })),
        }
    }

    pub async fn with_tx<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a mut Transaction<'static, Sqlite>) -> BoxFuture<'a, AppResult<T>>,
    {
        let mut inner = self.inner.lock().await;
        if inner.committed {
            return Err(AppError::SessionAlreadyCommitted);
        }
        if inner.transaction.is_none() {
            let tx = inner.pool.begin().await?;
            inner.transaction = Some(tx);
        }
        let tx = inner
            .transaction
            .as_mut()
            .ok_or_else(|| AppError::DatabaseError(sqlx::Error::PoolClosed))?;
        f(tx).await
    }

    pub async fn with_conn<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a mut SqliteConnection) -> BoxFuture<'a, AppResult<T>>,
    {
        let mut inner = self.inner.lock().await;
        if let Some(tx) = inner.transaction.as_mut() {
            return f(&mut **tx).await;
        }
        let pool = inner.pool.clone();
        drop(inner);

        let mut conn = pool.acquire().await?;
        f(&mut *conn).await
    }
}

#[async_trait]
impl DBSession for SqlxSession {
    async fn commit(&self) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(tx) = inner.transaction.take() {
            tx.commit().await?;
        }
        inner.committed = true;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;
    use rstest::rstest;

    use crate::adapter::db::session::SqlxSession;
    use crate::application::app_error::AppError;
    use crate::application::interface::db::DBSession;
    use crate::infra::state::AppState;
    use crate::tests::fixtures::init_test_app_state;
    use crate::tests::helpers::insert_user;

    async fn insert_post_in(session: &SqlxSession, user_id: i64) -> Result<(), AppError> {
        session
            .with_tx(|tx| {
                async move {
                    sqlx::query("INSERT INTO posts (user_id, title, content) VALUES (?, 't', 'c')")
                        .bind(user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn count_posts_in(session: &SqlxSession) -> i64 {
        session
            .with_conn(|conn| {
                async move {
                    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
                        .fetch_one(conn)
                        .await?;
                    Ok(count)
                }
                .boxed()
            })
            .await
            .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_commit_persists_writes(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let user_id = insert_user(&state.pool, "alice").await;

        let session = SqlxSession::new_lazy(state.pool.clone());
        insert_post_in(&session, user_id).await.unwrap();
        assert_eq!(count_posts_in(&session).await, 1);
        session.commit().await.unwrap();
        drop(session);

        let reader = SqlxSession::new_lazy(state.pool.clone());
        assert_eq!(count_posts_in(&reader).await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_drop_without_commit_rolls_back(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let user_id = insert_user(&state.pool, "alice").await;

        let session = SqlxSession::new_lazy(state.pool.clone());
        insert_post_in(&session, user_id).await.unwrap();
        drop(session);

        let reader = SqlxSession::new_lazy(state.pool.clone());
        assert_eq!(count_posts_in(&reader).await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_write_after_commit_fails(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let user_id = insert_user(&state.pool, "alice").await;

        let session = SqlxSession::new_lazy(state.pool.clone());
        session.commit().await.unwrap();

        let result = insert_post_in(&session, user_id).await;
        assert!(matches!(result, Err(AppError::SessionAlreadyCommitted)));
    }
}
