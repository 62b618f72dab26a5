//! Landing page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::pages::projects::featured;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout { title: "Home".to_string(), nav_active: "home".to_string(),
            section {
                h1 { "Hi, I'm Alex." }
                p {
                    "I build backend services and the occasional frontend, mostly in Rust. "
                    "Currently interested in low-latency systems and developer tooling."
                }
                p {
                    a { href: "/projects", "See what I've been working on →" }
                }
            }
            section {
                h2 { "Featured" }
                div { class: "project-grid",
                    for project in featured() {
                        article { class: "card",
                            h3 {
                                a { href: project.link, "{project.name}" }
                            }
                            p { "{project.summary}" }
                            small { "{project.stack}" }
                        }
                    }
                }
            }
        }
    }
}
