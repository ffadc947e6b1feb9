use crate::domain::Joke;
use crate::features::layout;
use maud::{Markup, html};

pub fn joke_list(jokes: &[Joke]) -> Markup {
    layout::document(
        "Jokes",
        &[],
        html! {
            div class="jokes-layout" {
                h1 { "Jokes" }
                @if jokes.is_empty() {
                    p { "No jokes yet." }
                } @else {
                    ul {
                        @for joke in jokes {
                            li { a href={ "/jokes/" (joke.id) } { (joke.name) } }
                        }
                    }
                }
                a href="/jokes/new" class="button" { "Add your own" }
            }
        },
    )
}

pub fn joke_detail(joke: &Joke) -> Markup {
    layout::document(
        &joke.name,
        &[],
        html! {
            div {
                p { "Here's your hilarious joke:" }
                p { (joke.content) }
            }
        },
    )
}

pub fn new_joke_form() -> Markup {
    layout::document(
        "Add a joke",
        &[],
        html! {
            div {
                p { "Add your own hilarious joke" }
                form method="post" action="/jokes/new" {
                    div {
                        label {
                            "Name: " input type="text" name="name";
                        }
                    }
                    div {
                        label {
                            "Content: " textarea name="content" {}
                        }
                    }
                    div {
                        button type="submit" class="button" { "Add" }
                    }
                }
            }
        },
    )
}
