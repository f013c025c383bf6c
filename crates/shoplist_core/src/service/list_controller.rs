//! List controller: the only entry point for user actions.
//!
//! # Responsibility
//! - Own the application state (`UiState`) and the item store.
//! - Validate user actions and drive the edit-mode state machine.
//! - Keep the persisted list and the in-memory list in sync.
//!
//! # Invariants
//! - After every successful action, the store holds exactly `list` in order.
//! - Store writes happen before in-memory commits, so a failed write leaves
//!   state untouched.
//! - Rejected submits keep the input text; successful submits clear it.
//! - Edit-mode submits bypass the duplicate check. Normal submits enforce it.
//! - Edit mode has no cancel action. It ends on submit, on clear-all, or when
//!   the edit target is removed.

use crate::model::item::Item;
use crate::model::item_list::ItemList;
use crate::model::ui_state::{EditMode, UiState};
use crate::repo::item_store::{ItemStore, StoreError, StoreResult};
use crate::service::render::{render, ViewState};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prompt shown before a single item is removed.
pub const REMOVE_CONFIRM_PROMPT: &str = "Are you sure?";

pub type ControllerResult<T> = Result<T, ControllerError>;

/// User-signaled and persistence errors raised by controller actions.
#[derive(Debug)]
pub enum ControllerError {
    /// Submitted text is empty after trimming.
    EmptyInput,
    /// Normal-mode submit of text that already exists.
    DuplicateItem(String),
    /// Edit or remove target is not in the list.
    ItemNotFound(String),
    Store(StoreError),
}

impl ControllerError {
    /// Whether this error is a recoverable user-input rejection.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please add an item"),
            Self::DuplicateItem(text) => write!(f, "That item already exists: `{text}`"),
            Self::ItemNotFound(text) => write!(f, "item not found: `{text}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ControllerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Tagged user action routed through [`ListController::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SubmitItem(String),
    SelectForEdit(String),
    RemoveItem(String),
    ClearAll,
    Filter(String),
}

impl UiAction {
    fn name(&self) -> &'static str {
        match self {
            Self::SubmitItem(_) => "submit_item",
            Self::SelectForEdit(_) => "select_for_edit",
            Self::RemoveItem(_) => "remove_item",
            Self::ClearAll => "clear_all",
            Self::Filter(_) => "filter",
        }
    }
}

/// Result of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Added(Item),
    Updated { previous: Item, current: Item },
    EditStarted(Item),
    Removed(Item),
    /// User declined the removal prompt; nothing changed.
    RemoveCancelled(Item),
    Cleared { removed: usize },
    Filtered { visible: usize },
}

/// Blocking user confirmation for destructive actions.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirmer for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Controller owning list state and its store.
pub struct ListController<S: ItemStore> {
    store: S,
    state: UiState,
    load_warning: Option<String>,
}

impl<S: ItemStore> ListController<S> {
    /// Loads the persisted list and starts in normal mode.
    ///
    /// Corrupt persisted data starts an empty list and is reported through
    /// [`Self::load_warning`]. Entries that need trimming or are blank are
    /// normalized and written back.
    ///
    /// # Errors
    /// - Returns store errors other than corrupt state.
    pub fn open(store: S) -> StoreResult<Self> {
        let (persisted, recovered) = store.load_recovering()?;
        let load_warning = recovered.map(|err| err.to_string());

        let (list, normalized) = ItemList::from_persisted(persisted);
        if normalized {
            store.save(&list.to_strings())?;
            warn!(
                "event=controller_open module=service status=normalized count={}",
                list.len()
            );
        }
        info!(
            "event=controller_open module=service status=ok count={}",
            list.len()
        );

        Ok(Self {
            store,
            state: UiState::with_list(list),
            load_warning,
        })
    }

    /// Routes one user action to its handler.
    ///
    /// `confirmer` is consulted only by [`UiAction::RemoveItem`].
    pub fn dispatch(
        &mut self,
        action: UiAction,
        confirmer: &mut dyn Confirmer,
    ) -> ControllerResult<ActionOutcome> {
        let action_name = action.name();
        let result = match action {
            UiAction::SubmitItem(text) => self.submit(&text),
            UiAction::SelectForEdit(text) => self.select_for_edit(&text),
            UiAction::RemoveItem(text) => self.remove_item(&text, confirmer),
            UiAction::ClearAll => self.clear_all(),
            UiAction::Filter(query) => Ok(self.filter(&query)),
        };

        match &result {
            Ok(_) => info!(
                "event=ui_action module=service status=ok action={action_name} mode={:?} count={}",
                self.state.mode(),
                self.state.list.len()
            ),
            Err(err) if err.is_user_error() => warn!(
                "event=ui_action module=service status=rejected action={action_name} reason={}",
                rejection_code(err)
            ),
            Err(err) => error!(
                "event=ui_action module=service status=error action={action_name} error={err}"
            ),
        }
        result
    }

    /// Handles a form submit in either mode.
    ///
    /// Validation order: empty input, then edit replacement, then the
    /// duplicate check for normal-mode adds.
    pub fn submit(&mut self, raw: &str) -> ControllerResult<ActionOutcome> {
        self.state.input = raw.to_string();
        let item = Item::parse(raw).map_err(|_| ControllerError::EmptyInput)?;

        if let Some(target) = self.state.edit_target.clone() {
            let mut next = self.state.list.clone();
            next.remove_first(target.as_str());
            next.push(item.clone());
            self.commit(next)?;
            self.state.reset_form();
            return Ok(ActionOutcome::Updated {
                previous: target,
                current: item,
            });
        }

        if self.state.list.contains(item.as_str()) {
            return Err(ControllerError::DuplicateItem(item.into_string()));
        }

        let mut next = self.state.list.clone();
        next.push(item.clone());
        self.commit(next)?;
        self.state.reset_form();
        Ok(ActionOutcome::Added(item))
    }

    /// Enters edit mode on `text`, or moves the edit target to it.
    pub fn select_for_edit(&mut self, text: &str) -> ControllerResult<ActionOutcome> {
        let item = self.find(text)?;
        self.state.input = item.as_str().to_string();
        self.state.edit_target = Some(item.clone());
        Ok(ActionOutcome::EditStarted(item))
    }

    /// Removes `text` after explicit confirmation.
    ///
    /// Declining leaves list, store and edit state untouched.
    pub fn remove_item(
        &mut self,
        text: &str,
        confirmer: &mut dyn Confirmer,
    ) -> ControllerResult<ActionOutcome> {
        let item = self.find(text)?;
        if !confirmer.confirm(REMOVE_CONFIRM_PROMPT) {
            return Ok(ActionOutcome::RemoveCancelled(item));
        }

        let mut next = self.state.list.clone();
        next.remove_first(item.as_str());
        self.commit(next)?;

        let target_removed = self.state.edit_target.as_ref() == Some(&item)
            && !self.state.list.contains(item.as_str());
        if target_removed {
            self.state.reset_form();
        }
        Ok(ActionOutcome::Removed(item))
    }

    /// Removes every item without confirmation and resets the form.
    pub fn clear_all(&mut self) -> ControllerResult<ActionOutcome> {
        self.store.clear()?;
        let removed = self.state.list.len();
        self.state.list.clear();
        self.state.reset_form();
        self.state.filter_query.clear();
        Ok(ActionOutcome::Cleared { removed })
    }

    /// Sets the display filter. Never touches the list or the store.
    pub fn filter(&mut self, query: &str) -> ActionOutcome {
        self.state.filter_query = query.to_string();
        let visible = self
            .state
            .list
            .iter()
            .filter(|item| item.matches_query(query))
            .count();
        ActionOutcome::Filtered { visible }
    }

    /// Projects the current state for display.
    pub fn view(&self) -> ViewState {
        render(&self.state)
    }

    pub fn items(&self) -> &ItemList {
        &self.state.list
    }

    pub fn mode(&self) -> EditMode {
        self.state.mode()
    }

    pub fn edit_target(&self) -> Option<&Item> {
        self.state.edit_target.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    /// Warning recorded when persisted data was corrupt at open.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    fn find(&self, text: &str) -> ControllerResult<Item> {
        self.state
            .list
            .iter()
            .find(|item| *item == text)
            .cloned()
            .ok_or_else(|| ControllerError::ItemNotFound(text.to_string()))
    }

    fn commit(&mut self, next: ItemList) -> ControllerResult<()> {
        self.store.save(&next.to_strings())?;
        self.state.list = next;
        Ok(())
    }
}

fn rejection_code(err: &ControllerError) -> &'static str {
    match err {
        ControllerError::EmptyInput => "empty_input",
        ControllerError::DuplicateItem(_) => "duplicate_item",
        ControllerError::ItemNotFound(_) => "item_not_found",
        ControllerError::Store(_) => "store_error",
    }
}
