#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: String,
    pub name: String,
    pub content: String,
}

// a joke that hasn't been given an id by the store yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    pub name: String,
    pub content: String,
}

impl NewJoke {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
