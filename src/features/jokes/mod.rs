pub mod model;
pub mod view;

use crate::errors::AppError;
use crate::AppState;
use axum::{
    Form, Json, Router,
    extract::{Path, State, rejection::FormRejection},
    response::{Html, Redirect},
    routing::get,
};
use http::StatusCode;
use model::{JokeEnvelope, JokeForm};

pub fn jokes_router() -> Router<AppState> {
    Router::new()
        .route("/jokes", get(list_jokes_handler))
        .route("/jokes/new", get(new_joke_form_handler).post(create_joke_handler))
        .route("/jokes/{joke_id}", get(get_joke_handler))
}

// the loader data as JSON, nested under /api
pub fn jokes_api_router() -> Router<AppState> {
    Router::new().route("/jokes/{joke_id}", get(get_joke_json_handler))
}

async fn list_jokes_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let jokes = state.repo.get_all_jokes().await?;
    tracing::debug!("Listing {} jokes", jokes.len());

    Ok(Html(view::joke_list(&jokes).into_string()))
}

async fn get_joke_handler(
    State(state): State<AppState>,
    Path(joke_id): Path<String>,
) -> Result<Html<String>, AppError> {
    tracing::debug!(%joke_id, "Fetching joke");

    let joke_option = state.repo.get_joke_by_id(&joke_id).await?;

    match joke_option {
        Some(joke) => Ok(Html(view::joke_detail(&joke).into_string())),
        None => Err(AppError::JokeNotFound(joke_id).with_policy(state.config.error_policy)),
    }
}

async fn new_joke_form_handler() -> Html<String> {
    Html(view::new_joke_form().into_string())
}

async fn create_joke_handler(
    State(state): State<AppState>,
    form: Result<Form<JokeForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let new_joke = form
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
        .and_then(|Form(fields)| fields.validate())
        .map_err(|e| e.with_policy(state.config.error_policy))?;

    let joke = state.repo.create_joke(&new_joke).await?;
    tracing::info!(joke_id = %joke.id, "Joke created");

    Ok(Redirect::to(&format!("/jokes/{}", joke.id)))
}

async fn get_joke_json_handler(
    State(state): State<AppState>,
    Path(joke_id): Path<String>,
) -> Result<Json<JokeEnvelope>, StatusCode> {
    let joke_option = state.repo.get_joke_by_id(&joke_id).await;

    match joke_option {
        Err(e) => {
            tracing::error!(error = ?e, %joke_id, "Failed to load joke");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }

        Ok(None) => Err(StatusCode::NOT_FOUND),

        Ok(Some(joke)) => Ok(Json(JokeEnvelope {
            joke: (&joke).into(),
        })),
    }
}
