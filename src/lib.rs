//! A fixed contact list shown as a 3-column grid. Tapping a card asks the host to
//! dial the contact. Tapping the number copies it to the clipboard.

pub mod actions;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod grid;
pub mod logging;
pub mod platform;
pub mod prelude;
pub mod tui;
