//! Personal portfolio website.
//!
//! A Dioxus fullstack app (SSR on the server, WASM hydration on the client).
//! The only stateful piece is the theme widget: a day/night + light/dark
//! preference resolved before first paint by an inline script and owned at
//! runtime by the footer controls, mirrored to a cookie and localStorage.

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Theme preference model and persistence (shared)
pub mod theme;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
