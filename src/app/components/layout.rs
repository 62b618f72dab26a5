//! Layout component wrapping all pages with the site chrome.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::{ThemeControls, THEME_SCRIPT};

/// Site stylesheet. The `theme-*` root classes are the CSS side of the theme
/// contract: each one only rebinds custom properties, everything else styles
/// against the variables.
const SITE_STYLES: &str = r#"
:root, .theme-default {
    --bg: #faf9f6; --surface: #ffffff; --fg: #20242b; --muted: #6a7077;
    --accent: #39608a; --border: #dcd9d2;
}
.theme-day-light {
    --bg: #fdfbf5; --surface: #ffffff; --fg: #2b2620; --muted: #7a6f5f;
    --accent: #b5722a; --border: #e3dbcc;
}
.theme-day-dark {
    --bg: #2a2620; --surface: #342f27; --fg: #efe7d8; --muted: #a89a84;
    --accent: #d99a4e; --border: #463f33;
}
.theme-night-light {
    --bg: #f3f5fa; --surface: #ffffff; --fg: #1f2533; --muted: #5f6a80;
    --accent: #4a6fa5; --border: #d5dbe8;
}
.theme-night-dark {
    --bg: #13161f; --surface: #1b202d; --fg: #e4e7f0; --muted: #8b93a8;
    --accent: #7f9cc9; --border: #293042;
}
* { box-sizing: border-box; }
body {
    margin: 0; background: var(--bg); color: var(--fg);
    font: 16px/1.6 system-ui, sans-serif;
    transition: background 0.2s, color 0.2s;
}
a { color: var(--accent); }
.container { max-width: 52rem; margin: 0 auto; padding: 0 1rem; }
main.container { min-height: 70vh; padding-top: 2rem; padding-bottom: 3rem; }
.site-nav { display: flex; align-items: center; justify-content: space-between; padding: 1rem; border-bottom: 1px solid var(--border); }
.site-nav .brand { font-weight: 700; color: var(--fg); text-decoration: none; }
.site-nav .links { display: flex; gap: 1rem; }
.site-nav a { text-decoration: none; color: var(--muted); }
.site-nav a.active { color: var(--accent); }
.nav-toggle { display: none; }
.card { background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 1rem 1.25rem; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }
footer.container { display: flex; justify-content: space-between; align-items: center; padding: 1rem; border-top: 1px solid var(--border); }
small { color: var(--muted); }
.sr-only { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0 0 0 0); }
.theme-controls { display: flex; gap: 0.25rem; }
.theme-controls button {
    min-width: 44px; min-height: 32px; padding: 0.25rem 0.6rem;
    background: var(--surface); color: var(--fg);
    border: 1px solid var(--border); border-radius: 6px; cursor: pointer;
}
.theme-controls button[aria-pressed="true"] { background: var(--accent); color: var(--bg); }
.theme-controls button:disabled { opacity: 0.45; cursor: default; }
@media (max-width: 600px) {
    .site-nav .links { display: none; }
    .site-nav .links.open { display: flex; flex-direction: column; position: absolute; top: 3.5rem; right: 1rem; background: var(--surface); border: 1px solid var(--border); border-radius: 8px; padding: 0.75rem 1rem; }
    .nav-toggle { display: inline-flex; min-width: 44px; min-height: 44px; align-items: center; justify-content: center; background: none; border: 1px solid var(--border); border-radius: 6px; color: var(--fg); }
    /* Bottom-anchored controls with touch-sized targets on phones */
    .theme-controls { position: fixed; bottom: 0.75rem; right: 0.75rem; }
    .theme-controls button { min-height: 44px; }
    footer.container { padding-bottom: 4rem; }
}
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - Alex Calder", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Style { {SITE_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {THEME_SCRIPT} }

        // Body content
        header {
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "© 2026 Alex Calder" }
            ThemeControls {}
        }
    }
}
