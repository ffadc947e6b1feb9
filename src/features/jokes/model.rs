use crate::domain::{Joke, NewJoke};
use crate::errors::AppError;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone, Display)]
#[display("{}", id)]
pub struct DbJoke {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl From<DbJoke> for Joke {
    fn from(db_joke: DbJoke) -> Self {
        Joke {
            id: db_joke.id,
            name: db_joke.name,
            content: db_joke.content,
        }
    }
}

// fields are optional so a missing one is our error, not a rejection from the extractor
#[derive(Deserialize, Debug, Default)]
pub struct JokeForm {
    pub name: Option<String>,
    pub content: Option<String>,
}

impl JokeForm {
    /// Both fields must be present. Empty strings are accepted as-is.
    pub fn validate(self) -> Result<NewJoke, AppError> {
        match (self.name, self.content) {
            (Some(name), Some(content)) => Ok(NewJoke { name, content }),
            (None, _) => Err(AppError::Validation(
                "Form not submitted correctly: missing field 'name'".to_string(),
            )),
            (_, None) => Err(AppError::Validation(
                "Form not submitted correctly: missing field 'content'".to_string(),
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonJoke {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl From<&Joke> for JsonJoke {
    fn from(joke: &Joke) -> Self {
        JsonJoke {
            id: joke.id.to_owned(),
            name: joke.name.to_owned(),
            content: joke.content.to_owned(),
        }
    }
}

// { "joke": { ... } }, the data the joke page renders from
#[derive(Serialize, Deserialize, Debug)]
pub struct JokeEnvelope {
    pub joke: JsonJoke,
}
