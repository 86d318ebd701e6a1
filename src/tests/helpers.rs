#![cfg(test)]

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn session_expiry() -> String {
    (Utc::now() + Duration::days(30))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

pub async fn insert_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users (username, email) VALUES (?, ?) RETURNING id")
        .bind(username)
        .bind(format!("{}@test.example", username))
        .fetch_one(pool)
        .await
        .expect("insert user")
}

pub async fn insert_session(pool: &SqlitePool, user_id: i64, token: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO sessions (user_id, session_token, expires_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(token)
    .bind(session_expiry())
    .fetch_one(pool)
    .await
    .expect("insert session")
}

/// Session whose owner does not exist. Foreign keys are switched off for the insert only.
pub async fn insert_orphan_session(pool: &SqlitePool, user_id: i64, token: &str) -> i64 {
    let mut conn = pool.acquire().await.expect("acquire connection");
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&mut *conn)
        .await
        .expect("disable foreign keys");
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO sessions (user_id, session_token, expires_at) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(token)
    .bind(session_expiry())
    .fetch_one(&mut *conn)
    .await
    .expect("insert orphan session");
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await
        .expect("enable foreign keys");
    id
}

pub async fn insert_post(pool: &SqlitePool, user_id: i64, title: &str, created_at: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO posts (user_id, title, content, created_at) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .bind(format!("{} content", title))
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("insert post")
}

pub async fn count_posts(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await
        .expect("count posts")
}
