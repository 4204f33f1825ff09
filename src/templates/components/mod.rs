use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn flash_list(messages: &[String]) -> Markup {
    html! {
        @if !messages.is_empty() {
            div class="flashes" role="status" {
                @for msg in messages {
                    p class="flash" { (msg) }
                }
            }
        }
    }
}
