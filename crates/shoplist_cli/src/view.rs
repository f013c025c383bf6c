//! Plain-text rendering of the projected list view.

use shoplist_core::{ActionOutcome, ViewState};
use std::fmt::Write;

/// Renders the list screen: submit affordance, rows and visible controls.
pub fn render_text(view: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] ({}) input: {:?}",
        view.submit.label, view.submit.color, view.input
    );

    if view.filter_visible {
        let _ = writeln!(out, "filter: {:?}", view.filter_query);
    }

    if view.rows.is_empty() {
        out.push_str("  (no items)\n");
    }
    for (index, row) in view.rows.iter().enumerate().filter(|(_, row)| row.visible) {
        let marker = if row.editing { "  <- editing" } else { "" };
        let _ = writeln!(out, "  {}. {}{}", index + 1, row.text, marker);
    }

    let hidden = view.rows.iter().filter(|row| !row.visible).count();
    if hidden > 0 {
        let _ = writeln!(out, "  ({hidden} hidden by filter)");
    }

    if view.clear_visible {
        out.push_str("[Clear All]\n");
    }
    out
}

/// One-line summary of a successful action.
pub fn describe_outcome(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Added(item) => format!("added `{item}`"),
        ActionOutcome::Updated { previous, current } => {
            format!("updated `{previous}` -> `{current}`")
        }
        ActionOutcome::EditStarted(item) => {
            format!("editing `{item}`; submit with `add <text>`")
        }
        ActionOutcome::Removed(item) => format!("removed `{item}`"),
        ActionOutcome::RemoveCancelled(item) => format!("kept `{item}`"),
        ActionOutcome::Cleared { removed } => format!("cleared {removed} item(s)"),
        ActionOutcome::Filtered { visible } => format!("{visible} item(s) match"),
    }
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use shoplist_core::{render, ItemList, UiState};

    #[test]
    fn empty_list_hides_clear_and_filter() {
        let text = render_text(&render(&UiState::default()));
        assert!(text.contains("(no items)"));
        assert!(!text.contains("Clear All"));
        assert!(!text.contains("filter:"));
    }

    #[test]
    fn filtered_rows_keep_their_positions() {
        let (list, _) = ItemList::from_persisted(["Milk", "Bread", "milkshake"]);
        let mut state = UiState::with_list(list);
        state.filter_query = "milk".to_string();

        let text = render_text(&render(&state));
        assert!(text.contains("  1. Milk\n"));
        assert!(text.contains("  3. milkshake\n"));
        assert!(!text.contains("Bread"));
        assert!(text.contains("(1 hidden by filter)"));
        assert!(text.contains("[Clear All]"));
    }
}
