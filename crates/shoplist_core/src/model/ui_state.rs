//! Application state owned by the list controller.
//!
//! # Invariants
//! - `edit_target`, when set, names an item that is present in `list`.
//! - `filter_query` only affects rendering; it is never persisted.

use crate::model::item::Item;
use crate::model::item_list::ItemList;
use serde::Serialize;

/// Submit mode of the item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Submitting appends a new item.
    Normal,
    /// Submitting replaces the edit target.
    Editing,
}

/// Everything the renderer needs to project the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub list: ItemList,
    /// Item currently targeted for replacement.
    pub edit_target: Option<Item>,
    /// Current contents of the item input field.
    pub input: String,
    /// Current contents of the filter input field.
    pub filter_query: String,
}

impl UiState {
    pub fn with_list(list: ItemList) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> EditMode {
        if self.edit_target.is_some() {
            EditMode::Editing
        } else {
            EditMode::Normal
        }
    }

    /// Resets transient form state after a completed submit.
    pub fn reset_form(&mut self) {
        self.edit_target = None;
        self.input.clear();
    }
}
