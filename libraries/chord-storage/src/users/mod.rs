use crate::datetime_from_secs;
use chord_core::{error::Result, types::*};
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub async fn create(pool: &SqlitePool, username: &str) -> Result<User> {
    let user = User {
        id: UserId::generate(),
        username: username.to_string(),
        created_at: Utc::now(),
    };

    sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
        .bind(&user.id)
        .bind(&user.username)
        .bind(user.created_at.timestamp())
        .execute(pool)
        .await?;

    Ok(user)
}

pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| {
        Ok(User {
            id: row.get("id"),
            username: row.get("username"),
            created_at: datetime_from_secs(row.get("created_at"))?,
        })
    })
    .transpose()
}
