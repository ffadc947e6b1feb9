use crate::config::ErrorPolicy;
use crate::features::layout;
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // submitted form was missing a field or couldn't be decoded
    #[error("{0}")]
    Validation(String),

    #[error("Joke not found: {0}")]
    JokeNotFound(String),

    #[error("Could not access joke storage")]
    Repository(#[source] anyhow::Error),

    // what every failure looked like before not-found and validation got their own statuses
    #[error("{0}")]
    Unhandled(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Repository(err)
    }
}

impl AppError {
    /// Applies the configured policy. Under [`ErrorPolicy::Legacy`] validation and
    /// not-found failures collapse into the same generic error.
    pub fn with_policy(self, policy: ErrorPolicy) -> Self {
        match (policy, self) {
            (ErrorPolicy::Legacy, AppError::Validation(_)) => {
                AppError::Unhandled("Form not submitted correctly.".to_string())
            }
            (ErrorPolicy::Legacy, AppError::JokeNotFound(_)) => {
                AppError::Unhandled("Joke not found".to_string())
            }
            (_, err) => err,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::JokeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Repository(_) | AppError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Repository(e) => {
                tracing::error!(error.source = ?e, "Repository error occurred");
                "Something went wrong while talking to the joke store.".to_string()
            }
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error.message = %message, "Responding with error");
        } else {
            tracing::warn!(status = %status, error.message = %message, "Responding with error");
        }

        let body = layout::error_page(status, &message);
        (status, Html(body.into_string())).into_response()
    }
}
