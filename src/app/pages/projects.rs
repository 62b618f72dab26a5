//! Projects page with the static project list.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub stack: &'static str,
    pub link: &'static str,
    pub featured: bool,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "ledgerline",
        summary: "Streaming double-entry ledger with an append-only event log and point-in-time balance queries.",
        stack: "Rust, axum, Postgres",
        link: "https://github.com/acalder/ledgerline",
        featured: true,
    },
    Project {
        name: "quietwire",
        summary: "Terminal dashboard for home-network traffic, built on packet capture summaries.",
        stack: "Rust, ratatui",
        link: "https://github.com/acalder/quietwire",
        featured: true,
    },
    Project {
        name: "folio",
        summary: "This site: a Dioxus fullstack app with a flash-free day/night theme widget.",
        stack: "Rust, Dioxus",
        link: "https://github.com/acalder/folio",
        featured: false,
    },
    Project {
        name: "hexgrid",
        summary: "Small crate for axial-coordinate hex grids, pathfinding included.",
        stack: "Rust",
        link: "https://github.com/acalder/hexgrid",
        featured: false,
    },
];

/// Projects shown on the landing page.
pub fn featured() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        Layout { title: "Projects".to_string(), nav_active: "projects".to_string(),
            h1 { "Projects" }
            div { class: "project-grid",
                for project in PROJECTS {
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
