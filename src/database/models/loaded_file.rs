use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question document uploaded to a chat, kept on disk and registered here.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LoadedFile {
    pub chat_id: i64,
    pub file_name: String,
    pub file_path: String,
    pub loaded_at: String,
}

impl LoadedFile {
    /// Registers a file under `file_name`. The name must already be unique
    /// within the chat (see [`LoadedFile::unique_name`]); a duplicate fails on
    /// the primary key.
    pub async fn create(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        file_name: &str,
        file_path: &str,
    ) -> Result<Self, sqlx::Error> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO loaded_files (chat_id, file_name, file_path, loaded_at) VALUES (?, ?, ?, ?)",
        )
        .bind(chat_id)
        .bind(file_name)
        .bind(file_path)
        .bind(&now)
        .execute(pool)
        .await?;

        Ok(LoadedFile {
            chat_id,
            file_name: file_name.to_string(),
            file_path: file_path.to_string(),
            loaded_at: now,
        })
    }

    /// Resolves a name collision within the chat by appending `_1`, `_2`, ...
    /// before the extension until the name is free.
    pub async fn unique_name(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        desired_name: &str,
    ) -> Result<String, sqlx::Error> {
        if Self::find_by_name(pool, chat_id, desired_name).await?.is_none() {
            return Ok(desired_name.to_string());
        }

        let (base, extension) = match desired_name.rsplit_once('.') {
            Some((base, extension)) => (base, format!(".{extension}")),
            None => (desired_name, String::new()),
        };

        let mut counter = 1;
        loop {
            let candidate = format!("{base}_{counter}{extension}");
            if Self::find_by_name(pool, chat_id, &candidate).await?.is_none() {
                return Ok(candidate);
            }
            counter += 1;
        }
    }

    pub async fn find_by_name(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        file_name: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, LoadedFile>(
            "SELECT chat_id, file_name, file_path, loaded_at FROM loaded_files WHERE chat_id = ? AND file_name = ?",
        )
        .bind(chat_id)
        .bind(file_name)
        .fetch_optional(pool)
        .await
    }

    /// Finds the first registered file whose name ends with `suffix`, in load
    /// order. Lets `/gen trivia.txt` match a file stored as `42_trivia.txt`.
    pub async fn find_by_suffix(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        suffix: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let files = Self::list(pool, chat_id).await?;
        Ok(files
            .into_iter()
            .find(|file| file.file_name.ends_with(suffix)))
    }

    pub async fn list(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, LoadedFile>(
            "SELECT chat_id, file_name, file_path, loaded_at FROM loaded_files WHERE chat_id = ? ORDER BY loaded_at, file_name",
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await
    }

    /// Removes one registry row; returns the number of rows removed.
    pub async fn delete(
        pool: &sqlx::SqlitePool,
        chat_id: i64,
        file_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM loaded_files WHERE chat_id = ? AND file_name = ?")
            .bind(chat_id)
            .bind(file_name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_all(pool: &sqlx::SqlitePool, chat_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM loaded_files WHERE chat_id = ?")
            .bind(chat_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
