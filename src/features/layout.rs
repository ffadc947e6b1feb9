use http::StatusCode;
use maud::{DOCTYPE, Markup, html};

// every page shares the same document shell and the three responsive stylesheets
pub fn document(title: &str, extra_stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="/styles/global.css";
                link rel="stylesheet" href="/styles/global-medium.css" media="print, (min-width: 640px)";
                link rel="stylesheet" href="/styles/global-large.css" media="screen and (min-width: 1024px)";
                @for href in extra_stylesheets {
                    link rel="stylesheet" href=(href);
                }
            }
            body {
                (body)
            }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let heading = if status.is_server_error() {
        "Application Error"
    } else {
        status.canonical_reason().unwrap_or("Error")
    };

    document(
        heading,
        &[],
        html! {
            div class="error-container" {
                h1 { (heading) }
                p { (message) }
                p { a href="/" { "Back home" } }
            }
        },
    )
}
