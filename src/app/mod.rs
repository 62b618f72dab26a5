//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use pages::{About, Contact, Home, Projects};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/projects")]
    Projects {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}
