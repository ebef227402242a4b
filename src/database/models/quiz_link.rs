use anyhow::Result;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::quiz::question::QuizQuestion;

/// Length of a shareable quiz identifier.
pub const QUIZ_ID_LEN: usize = 8;

const QUIZ_ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a quiz identifier: 8 characters drawn uniformly from lowercase
/// base-36. Not guaranteed collision-free; a collision surfaces as a primary
/// key violation on insert.
pub fn generate_quiz_id() -> String {
    let mut rng = rand::thread_rng();
    (0..QUIZ_ID_LEN)
        .map(|_| {
            let index = rng.gen_range(0..QUIZ_ID_ALPHABET.len());
            QUIZ_ID_ALPHABET[index] as char
        })
        .collect()
}

/// A persisted, shareable quiz: a fixed question sequence resolvable by id.
/// Created once, never mutated, no expiry.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizLink {
    pub quiz_id: String,
    pub questions: String,
    pub created_by: i64,
    pub created_at: String,
}

impl QuizLink {
    pub async fn create(
        pool: &sqlx::SqlitePool,
        questions: &[QuizQuestion],
        created_by: i64,
    ) -> Result<Self> {
        let quiz_id = generate_quiz_id();
        let serialized = serde_json::to_string(questions)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO quiz_links (quiz_id, questions, created_by, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&quiz_id)
        .bind(&serialized)
        .bind(created_by)
        .bind(&now)
        .execute(pool)
        .await?;

        Ok(QuizLink {
            quiz_id,
            questions: serialized,
            created_by,
            created_at: now,
        })
    }

    pub async fn find_by_id(
        pool: &sqlx::SqlitePool,
        quiz_id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, QuizLink>(
            "SELECT quiz_id, questions, created_by, created_at FROM quiz_links WHERE quiz_id = ?",
        )
        .bind(quiz_id)
        .fetch_optional(pool)
        .await
    }

    /// Deserializes the stored question sequence.
    pub fn questions(&self) -> Result<Vec<QuizQuestion>> {
        Ok(serde_json::from_str(&self.questions)?)
    }
}
