//! Controller and rendering services.
//!
//! # Responsibility
//! - Turn tagged user actions into list and store updates.
//! - Project controller state into a toolkit-independent view.

pub mod list_controller;
pub mod render;
