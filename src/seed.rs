use crate::database::JokeRepository;
use crate::domain::NewJoke;
use anyhow::{Context, Result};
use futures::future::try_join_all;

// shout-out to https://icanhazdadjoke.com/
pub fn sample_jokes() -> Vec<NewJoke> {
    vec![
        NewJoke::new(
            "Road worker",
            "I never wanted to believe that my Dad was stealing from his job as a road worker. But when I got home, all the signs were there.",
        ),
        NewJoke::new(
            "Frisbee",
            "I was wondering why the frisbee was getting bigger, then it hit me.",
        ),
        NewJoke::new(
            "Trees",
            "Why do trees seem suspicious on sunny days? Dunno, they're just a bit shady.",
        ),
        NewJoke::new(
            "Skeletons",
            "Why don't skeletons ride roller coasters? They don't have the stomach for it.",
        ),
        NewJoke::new(
            "Hippos",
            "Why don't you find hippopotamuses hiding in trees? They're really good at it.",
        ),
        NewJoke::new(
            "Dinner",
            "What did one plate say to the other plate? Dinner is on me!",
        ),
        NewJoke::new(
            "Elevator",
            "My first time using an elevator was an uplifting experience. The second time let me down.",
        ),
    ]
}

/// Inserts every sample joke concurrently and returns how many jokes the store
/// holds afterwards. The first failed insert aborts the rest of the batch.
/// Existing rows are left alone, so seeding twice doubles the samples.
pub async fn seed_jokes(repo: &dyn JokeRepository) -> Result<i64> {
    let jokes = sample_jokes();

    try_join_all(jokes.iter().map(|joke| repo.create_joke(joke)))
        .await
        .context("Failed to insert sample jokes")?;
    tracing::debug!("Inserted {} sample jokes", jokes.len());

    repo.count_jokes().await
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Seeds `repo`, reports the outcome and disconnects whether or not it worked.
/// Returns the process exit code: 0 on success, 1 on any failure.
pub async fn run(repo: &dyn JokeRepository) -> u8 {
    let outcome = seed_jokes(repo).await;
    repo.disconnect().await;

    match outcome {
        Ok(count) => {
            tracing::info!("There are {} jokes in the database.", count);
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}
