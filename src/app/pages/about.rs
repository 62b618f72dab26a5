//! About page.

use dioxus::prelude::*;

use crate::app::components::Layout;

const SKILLS: &[&str] = &[
    "Rust (axum, tokio, Dioxus)",
    "PostgreSQL and friends",
    "TypeScript when the occasion calls",
    "Observability plumbing (tracing, OpenTelemetry)",
];

#[component]
pub fn About() -> Element {
    rsx! {
        Layout { title: "About".to_string(), nav_active: "about".to_string(),
            h1 { "About" }
            p {
                "I'm a software engineer based in Portland, working on distributed "
                "backends by day and odd side projects by night. Before that I spent "
                "a few years doing embedded work, which left me with strong opinions "
                "about binary sizes."
            }
            p {
                "This site is intentionally boring: server-rendered pages, no "
                "analytics, and exactly one piece of JavaScript-adjacent cleverness "
                "(the theme widget in the footer)."
            }
            h2 { "Things I use" }
            ul {
                for skill in SKILLS {
                    li { "{skill}" }
                }
            }
        }
    }
}
