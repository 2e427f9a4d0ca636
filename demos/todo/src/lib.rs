//! In-memory todo list built on the Reducible state container.
//!
//! The whole logical surface is two pieces: a pure reducer over an
//! ordered list of items, and the scoped access layer the (external) UI
//! talks to. This crate supplies the domain half - types, actions, the
//! reducer, and the environment carrying the id sequence - and a small
//! CLI binary standing in for the UI.
//!
//! # Quick Start
//!
//! ```no_run
//! use todo::{TodoAction, TodoEnvironment, TodoItem, TodoList, TodoReducer};
//! use todo::types::TodoId;
//! use reducible_runtime::{Scope, Store};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // A store seeded with the fixed initial dataset; the id sequence
//! // picks up right after the seed's highest id.
//! let seed = TodoList::seed();
//! let env = TodoEnvironment::seeded(&seed);
//! let store = Arc::new(Store::new(seed, TodoReducer::new(), env));
//!
//! // The UI layer only ever goes through a scope.
//! let scope = Scope::new();
//! let _guard = scope.enter(Arc::clone(&store));
//!
//! // Create an item: obtain a fresh id, then dispatch.
//! let id = TodoId::new(scope.next_id()?);
//! let dispatch = scope.dispatcher()?;
//! dispatch
//!     .send(TodoAction::Create {
//!         todo: TodoItem::new(id, "write tests"),
//!     })
//!     .await?;
//!
//! // Toggle and read back.
//! dispatch.send(TodoAction::Toggle { id }).await?;
//! let list = scope.state().await?;
//! assert!(list.get(id).is_some_and(|item| item.done));
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{TodoAction, TodoError, TodoItem, TodoList};
