//! Persistence boundary for the item list.
//!
//! # Responsibility
//! - Define the `ItemStore` contract used by the controller.
//! - Keep SQLite and JSON encoding details out of the service layer.
//!
//! # Invariants
//! - A missing storage key is an empty list, never an error.
//! - `save` always rewrites the full list.

pub mod item_store;
