use crate::database::JokeRepository;
use crate::domain::{Joke, NewJoke};
use crate::features::jokes::model::DbJoke;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JokeRepository for SqliteRepository {
    async fn get_joke_by_id(&self, id: &str) -> Result<Option<Joke>> {
        let db_joke_opt =
            sqlx::query_as::<_, DbJoke>("SELECT id, name, content FROM jokes WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context(format!("Failed to look up joke {}", id))?;

        Ok(db_joke_opt.map(Joke::from))
    }

    async fn get_all_jokes(&self) -> Result<Vec<Joke>> {
        // rowid keeps insertion order
        let db_jokes =
            sqlx::query_as::<_, DbJoke>("SELECT id, name, content FROM jokes ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list jokes")?;

        Ok(db_jokes.into_iter().map(Joke::from).collect())
    }

    async fn count_jokes(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jokes")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count jokes")?;

        Ok(count)
    }

    async fn create_joke(&self, joke: &NewJoke) -> Result<Joke> {
        let db_joke = DbJoke {
            id: Uuid::new_v4().to_string(),
            name: joke.name.clone(),
            content: joke.content.clone(),
        };

        sqlx::query("INSERT INTO jokes (id, name, content) VALUES (?, ?, ?)")
            .bind(&db_joke.id)
            .bind(&db_joke.name)
            .bind(&db_joke.content)
            .execute(&self.pool)
            .await
            .context(format!("Failed to save joke {}", db_joke.name))?;

        tracing::debug!(joke_id = %db_joke, "Inserted joke");

        Ok(db_joke.into())
    }

    async fn disconnect(&self) {
        self.pool.close().await;
    }
}
