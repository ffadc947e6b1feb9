use crate::features::layout;
use crate::AppState;
use axum::{Router, response::Html, routing::get};
use maud::html;

pub fn home_router() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}

async fn index_handler() -> Html<String> {
    let body = html! {
        div class="container" {
            div class="content" {
                h1 {
                    "Remix " span { "Jokes!" }
                }
                nav {
                    ul {
                        li { a href="/jokes" { "Read Jokes" } }
                    }
                }
            }
        }
    };

    Html(layout::document("Remix Jokes", &["/styles/index.css"], body).into_string())
}
