//! Pure projection from controller state to view state.
//!
//! # Responsibility
//! - Decide which rows are visible under the current filter query.
//! - Decide visibility of the clear and filter controls.
//! - Describe the submit affordance for the current edit mode.
//!
//! # Invariants
//! - Clear and filter controls are visible iff the list is non-empty.
//! - Rendering performs no I/O and never mutates state.

use crate::model::ui_state::{EditMode, UiState};
use serde::Serialize;

pub const ADD_LABEL: &str = "Add Item";
pub const ADD_COLOR: &str = "#333";
pub const UPDATE_LABEL: &str = "Update Item";
pub const UPDATE_COLOR: &str = "#228B22";

/// Label and color of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitAffordance {
    pub mode: EditMode,
    pub label: &'static str,
    pub color: &'static str,
}

impl SubmitAffordance {
    pub fn for_mode(mode: EditMode) -> Self {
        match mode {
            EditMode::Normal => Self {
                mode,
                label: ADD_LABEL,
                color: ADD_COLOR,
            },
            EditMode::Editing => Self {
                mode,
                label: UPDATE_LABEL,
                color: UPDATE_COLOR,
            },
        }
    }
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub text: String,
    /// False when hidden by the filter query.
    pub visible: bool,
    /// True for the current edit target.
    pub editing: bool,
}

/// Complete projected view of the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub rows: Vec<RowView>,
    pub clear_visible: bool,
    pub filter_visible: bool,
    pub submit: SubmitAffordance,
    pub input: String,
    pub filter_query: String,
}

impl ViewState {
    /// Texts of rows that pass the filter, in list order.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.text.as_str())
            .collect()
    }
}

/// Projects controller state into a view.
pub fn render(state: &UiState) -> ViewState {
    let controls_visible = controls_visible(state.list.len());
    let mut editing_marked = false;

    let rows = state
        .list
        .iter()
        .map(|item| {
            // Only the first row equal to the target is marked.
            let editing = !editing_marked && state.edit_target.as_ref() == Some(item);
            editing_marked |= editing;
            RowView {
                text: item.as_str().to_string(),
                visible: item.matches_query(&state.filter_query),
                editing,
            }
        })
        .collect();

    ViewState {
        rows,
        clear_visible: controls_visible,
        filter_visible: controls_visible,
        submit: SubmitAffordance::for_mode(state.mode()),
        input: state.input.clone(),
        filter_query: state.filter_query.clone(),
    }
}

/// Visibility policy for the clear and filter controls.
pub fn controls_visible(list_len: usize) -> bool {
    list_len > 0
}
