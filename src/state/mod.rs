//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! Time enters exclusively as explicit `Instant` arguments supplied by
//! the shell.

pub mod app_state;
pub mod contact_form;
pub mod cycle;
pub mod key_handler;
pub mod mouse_handler;

// Re-export for convenience
pub use app_state::{AppState, DeskSurface, FocusPane};
pub use contact_form::{ContactField, ContactFormState, FormPhase};
pub use cycle::{CycleController, PauseSource};
pub use key_handler::{handle_contact_key, handle_key_action};
pub use mouse_handler::{handle_mouse, HitAreas};
