//! Navigation bar with a mobile menu toggle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "projects")
    pub active: String,
}

#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut menu_open = use_signal(|| false);

    let link_class = |page: &str| if props.active == page { "active" } else { "" };

    let links_class = if menu_open() { "links open" } else { "links" };

    rsx! {
        nav { class: "site-nav",
            a { class: "brand", href: "/", "Alex Calder" }
            div { class: "{links_class}",
                a { class: link_class("home"), href: "/", onclick: move |_| menu_open.set(false), "Home" }
                a { class: link_class("projects"), href: "/projects", onclick: move |_| menu_open.set(false), "Projects" }
                a { class: link_class("about"), href: "/about", onclick: move |_| menu_open.set(false), "About" }
                a { class: link_class("contact"), href: "/contact", onclick: move |_| menu_open.set(false), "Contact" }
            }
            button {
                class: "nav-toggle",
                r#type: "button",
                aria_expanded: menu_open().to_string(),
                onclick: move |_| menu_open.toggle(),
                span { class: "sr-only", "Toggle menu" }
                if menu_open() { "✕" } else { "☰" }
            }
        }
    }
}
