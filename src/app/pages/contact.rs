//! Contact page.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[component]
pub fn Contact() -> Element {
    rsx! {
        Layout { title: "Contact".to_string(), nav_active: "contact".to_string(),
            h1 { "Contact" }
            p { "The reliable ways to reach me, in order of preference:" }
            ul {
                li {
                    a { href: "mailto:alex@acalder.dev", "alex@acalder.dev" }
                }
                li {
                    a { href: "https://github.com/acalder", "GitHub" }
                }
                li {
                    a { href: "https://hachyderm.io/@acalder", "Mastodon" }
                }
            }
            p {
                small { "No contact form. Email works." }
            }
        }
    }
}
