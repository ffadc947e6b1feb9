pub mod joke;

pub use self::joke::{Joke, NewJoke};
