use crate::domain::{Joke, NewJoke};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// the data-mapper contract every handler and the seed utility talk to.
// handlers get it as Arc<dyn JokeRepository> through AppState, the sqlite impl lives in "sqlite.rs"
#[async_trait]
pub trait JokeRepository: Send + Sync {
    async fn get_joke_by_id(&self, id: &str) -> Result<Option<Joke>>;
    async fn get_all_jokes(&self) -> Result<Vec<Joke>>;
    async fn count_jokes(&self) -> Result<i64>;

    // write operations
    // the store assigns the id
    async fn create_joke(&self, joke: &NewJoke) -> Result<Joke>;

    async fn disconnect(&self);
}
