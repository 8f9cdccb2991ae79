//! Domain types: portfolio content records, theme, keyboard actions,
//! and the application error taxonomy.

pub mod error;
pub mod key_action;
pub mod profile;
pub mod project;
pub mod theme;

pub use error::AppError;
pub use key_action::KeyAction;
pub use profile::{Profile, Skill};
pub use project::Project;
pub use theme::Theme;
