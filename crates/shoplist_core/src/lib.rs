//! Core logic for the shoplist item manager.
//! This crate owns the list state machine and its local persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Item, ItemValidationError};
pub use model::item_list::ItemList;
pub use model::ui_state::{EditMode, UiState};
pub use repo::item_store::{
    ItemStore, SqliteItemStore, StoreError, StoreResult, ITEMS_STORAGE_KEY,
};
pub use service::list_controller::{
    ActionOutcome, Confirmer, ControllerError, ControllerResult, ListController, UiAction,
    REMOVE_CONFIRM_PROMPT,
};
pub use service::render::{render, RowView, SubmitAffordance, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
