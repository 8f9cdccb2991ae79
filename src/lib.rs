//! deskfolio
//!
//! A developer portfolio rendered as a terminal desk scene: a laptop
//! cycling web projects, a phone cycling mobile apps, an about note, a
//! skills grid, and a contact form, with a light/dark theme toggle.
//!
//! The crate follows a Pure Core / Impure Shell split: everything under
//! [`state`] is side-effect-free and clock-free (time arrives as
//! explicit `Instant` arguments), while [`view`] owns the terminal and
//! the event loop whose poll timeout drives all timed behavior.

pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
