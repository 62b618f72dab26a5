//! Theme preference: model, resolution order, controller state, persistence.
//!
//! The resolution order is cookie, then localStorage, then a guess derived
//! from the OS color scheme and the local hour. Two consumers run it: the
//! inline pre-hydration script (in JavaScript, before first paint) and the
//! mounted `ThemeControls` component (through [`store::resolve_preference`]).

pub mod preference;
pub mod resolve;
pub mod state;
pub mod store;

pub use preference::{Mode, ThemePreference, Variant};
pub use state::ThemeState;
