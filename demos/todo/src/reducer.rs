//! Reducer logic for the todo list.
//!
//! One pure function computes the next list from the current list and a
//! command. CREATE appends, TOGGLE flips one item by structural
//! replacement, REMOVE filters one item out; a toggle or remove whose id
//! is absent is a no-op that still yields a structurally equal list.

use crate::types::{TodoAction, TodoError, TodoList};
use reducible_core::environment::{IdSource, SerialIds};
use reducible_core::reducer::Reducer;
use std::sync::Arc;

/// Environment dependencies for the todo reducer
///
/// Carries the identifier sequence new items draw from. The reducer
/// itself never touches the sequence - CREATE commands arrive with a
/// pre-assigned id - but the sequence lives here so it shares the
/// store's lifetime and is reachable through the scope's next-id
/// accessor.
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Identifier sequence for new items
    pub ids: Arc<SerialIds>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment` around an existing sequence
    #[must_use]
    pub fn new(ids: Arc<SerialIds>) -> Self {
        Self { ids }
    }

    /// Environment whose sequence starts just above the given list's ids
    #[must_use]
    pub fn seeded(list: &TodoList) -> Self {
        Self::new(Arc::new(SerialIds::starting_at(list.id_floor())))
    }
}

impl IdSource for TodoEnvironment {
    fn ids(&self) -> &SerialIds {
        &self.ids
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoList;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> Result<Self::State, Self::Error> {
        match action {
            TodoAction::Create { todo } => Ok(state
                .iter()
                .cloned()
                .chain(std::iter::once(todo))
                .collect()),

            TodoAction::Toggle { id } => Ok(state
                .iter()
                .map(|item| {
                    if item.id == id {
                        item.toggled()
                    } else {
                        item.clone()
                    }
                })
                .collect()),

            TodoAction::Remove { id } => {
                Ok(state.iter().filter(|item| item.id != id).cloned().collect())
            }

            TodoAction::Unknown { kind } => Err(TodoError::UnhandledAction { kind }),
        }
    }
}
