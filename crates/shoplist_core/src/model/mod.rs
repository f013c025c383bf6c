//! Domain model for the item list.
//!
//! # Responsibility
//! - Define the validated `Item` value and the ordered `ItemList` model.
//! - Keep the model independent from rendering and persistence.
//!
//! # Invariants
//! - An item is identified only by its literal text.
//! - List order is insertion order; there is no re-ordering.

pub mod item;
pub mod item_list;
pub mod ui_state;
