use crate::database::JokeRepository;
use crate::domain::{Joke, NewJoke};
use crate::seed::{EXIT_FAILURE, EXIT_SUCCESS, run, sample_jokes, seed_jokes};
use crate::tests::unit_sqlite_jokes_database::setup_test_db;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// --- Manual Mock: JokeRepository ---
// keeps jokes in a Vec and can be told to fail reads or writes,
// so we can watch what happens when the store goes away
#[derive(Clone, Default)]
pub struct MockRepository {
    pub jokes: Arc<Mutex<Vec<Joke>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    // how many times disconnect() was called
    pub disconnects: Arc<Mutex<usize>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl JokeRepository for MockRepository {
    async fn get_joke_by_id(&self, id: &str) -> Result<Option<Joke>> {
        if self.fail_reads {
            anyhow::bail!("mock store is unreachable");
        }
        let jokes = self.jokes.lock().unwrap();
        Ok(jokes.iter().find(|j| j.id == id).cloned())
    }

    async fn get_all_jokes(&self) -> Result<Vec<Joke>> {
        if self.fail_reads {
            anyhow::bail!("mock store is unreachable");
        }
        Ok(self.jokes.lock().unwrap().clone())
    }

    async fn count_jokes(&self) -> Result<i64> {
        if self.fail_reads {
            anyhow::bail!("mock store is unreachable");
        }
        Ok(self.jokes.lock().unwrap().len() as i64)
    }

    async fn create_joke(&self, joke: &NewJoke) -> Result<Joke> {
        if self.fail_writes {
            anyhow::bail!("mock store rejected the insert");
        }
        let mut jokes = self.jokes.lock().unwrap();
        let created = Joke {
            id: format!("mock-{}", jokes.len() + 1),
            name: joke.name.clone(),
            content: joke.content.clone(),
        };
        jokes.push(created.clone());
        Ok(created)
    }

    async fn disconnect(&self) {
        let mut count = self.disconnects.lock().unwrap();
        *count += 1;
    }
}

#[test]
fn test_sample_jokes_are_the_fixed_seven() {
    let jokes = sample_jokes();

    assert_eq!(jokes.len(), 7);
    let names: Vec<&str> = jokes.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Road worker", "Frisbee", "Trees", "Skeletons", "Hippos", "Dinner", "Elevator"]
    );
    assert!(jokes[2].content.starts_with("Why do trees seem suspicious"));
}

// seeding an empty store leaves exactly the seven samples behind
#[tokio::test]
async fn test_seed_empty_store() {
    let repo = setup_test_db().await;

    let count = seed_jokes(&repo).await.expect("Seeding should succeed");

    assert_eq!(count, 7);
    assert_eq!(repo.count_jokes().await.unwrap(), 7);
}

// there's no deduplication, a second run appends another seven
#[tokio::test]
async fn test_seed_twice_appends_duplicates() {
    let repo = setup_test_db().await;

    seed_jokes(&repo).await.unwrap();
    let count = seed_jokes(&repo).await.unwrap();

    assert_eq!(count, 14);

    let trees = repo
        .get_all_jokes()
        .await
        .unwrap()
        .into_iter()
        .filter(|j| j.name == "Trees")
        .count();
    assert_eq!(trees, 2);
}

// any failed insert aborts the batch and the error comes back to the caller
#[tokio::test]
async fn test_seed_aborts_on_insert_failure() {
    let repo = MockRepository::failing_writes();

    let result = seed_jokes(&repo).await;

    let err = result.expect_err("Seeding should fail");
    assert!(format!("{:#}", err).contains("mock store rejected the insert"));
    assert!(repo.jokes.lock().unwrap().is_empty());
}

// inserts succeed but the final count can't be read: still a failure
#[tokio::test]
async fn test_seed_fails_when_count_fails() {
    let repo = MockRepository::failing_reads();

    let result = seed_jokes(&repo).await;

    assert!(result.is_err());
    assert_eq!(repo.jokes.lock().unwrap().len(), 7);
}

// a clean run exits 0, leaves the seven samples and lets go of the store
#[tokio::test]
async fn test_run_success_exits_zero_and_disconnects() {
    let repo = MockRepository::new();

    let code = run(&repo).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(repo.jokes.lock().unwrap().len(), 7);
    assert_eq!(*repo.disconnects.lock().unwrap(), 1);
}

// a failed insert exits 1 and still disconnects
#[tokio::test]
async fn test_run_insert_failure_exits_one_and_disconnects() {
    let repo = MockRepository::failing_writes();

    let code = run(&repo).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(repo.jokes.lock().unwrap().is_empty());
    assert_eq!(*repo.disconnects.lock().unwrap(), 1);
}

// against the real store: exit 0, then the pool is closed
#[tokio::test]
async fn test_run_against_sqlite() {
    let repo = setup_test_db().await;

    let code = run(&repo).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert!(repo.count_jokes().await.is_err());
}
