//! # Reducible Runtime
//!
//! Runtime implementation for the Reducible state container.
//!
//! This crate provides the Store runtime that owns state and applies
//! actions through a reducer, plus the Scope access layer that hands out
//! narrow, validated capability handles to an active store.
//!
//! ## Core Components
//!
//! - **Store**: owns the current state snapshot, the reducer, and the
//!   environment; `send` applies one action and swaps in the next snapshot
//! - **Scope**: two-state (inactive/active) access layer; its accessors
//!   fail with [`ScopeError::ProviderMissing`] outside an active scope
//! - **Dispatcher**: cloneable write-only handle obtained from a scope
//!
//! ## Example
//!
//! ```ignore
//! use reducible_runtime::{Scope, Store};
//! use std::sync::Arc;
//!
//! let store = Arc::new(Store::new(initial_state, my_reducer, environment));
//! let scope = Scope::new();
//! let _guard = scope.enter(Arc::clone(&store));
//!
//! let dispatch = scope.dispatcher()?;
//! dispatch.send(Action::DoSomething).await?;
//!
//! let state = scope.state().await?;
//! ```

use reducible_core::environment::IdSource;
use reducible_core::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::RwLock;

pub use error::ScopeError;
pub use scope::{Dispatcher, Scope, ScopeGuard};
pub use store::Store;

/// Error types for the runtime
pub mod error {
    use thiserror::Error;

    /// Errors raised by the [`Scope`](crate::Scope) access layer
    ///
    /// Scope errors indicate a structural wiring defect in the consuming
    /// application rather than a user-recoverable condition: an accessor
    /// was invoked while no store scope was active.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ScopeError {
        /// An accessor was invoked outside an active store scope
        ///
        /// Raised before the first `enter` and again after the scope
        /// guard has been dropped.
        #[error("no active store scope: accessor invoked outside `Scope::enter`")]
        ProviderMissing,
    }
}

/// Store module - The runtime for reducers
///
/// The store owns the state snapshot and serializes all writes through a
/// single lock, preserving the single-logical-writer model even when the
/// host runtime is multi-threaded.
pub mod store {
    use super::{Arc, Reducer, RwLock};

    /// The Store - runtime owner of state, reducer, and environment
    ///
    /// State is held as an `Arc` snapshot behind a `tokio` `RwLock`. Every
    /// successful [`Store::send`] swaps in a freshly allocated snapshot, so
    /// two snapshots taken around a state change compare unequal with
    /// [`Arc::ptr_eq`] - the reference-based change detection the display
    /// layer uses to decide whether to re-render.
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation; its associated types fix the state,
    ///   action, environment, and error types of this store
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoList::seed(), TodoReducer::new(), env);
    ///
    /// store.send(TodoAction::Toggle { id: TodoId::new(3) }).await?;
    /// let list = store.state().await;
    /// ```
    pub struct Store<R: Reducer> {
        state: RwLock<Arc<R::State>>,
        reducer: R,
        environment: R::Environment,
    }

    impl<R: Reducer> Store<R> {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The state and the environment (including any identifier
        /// sequence it carries) are created together here and dropped
        /// together when the store goes away.
        #[must_use]
        pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
            Self {
                state: RwLock::new(Arc::new(initial_state)),
                reducer,
                environment,
            }
        }

        /// Current state snapshot
        ///
        /// Cheap to call: clones the `Arc`, not the state. Snapshots taken
        /// before and after a successful `send` are distinct allocations.
        pub async fn state(&self) -> Arc<R::State> {
            Arc::clone(&*self.state.read().await)
        }

        /// The environment injected into the reducer
        #[must_use]
        pub const fn environment(&self) -> &R::Environment {
            &self.environment
        }

        /// Apply one action through the reducer
        ///
        /// Reduces under the write lock and swaps in the new snapshot.
        /// Concurrent senders serialize at the lock, so every action sees
        /// the state left by the previous one.
        ///
        /// # Returns
        ///
        /// The snapshot produced by this action.
        ///
        /// # Errors
        ///
        /// Propagates the reducer's error. The action is then not applied
        /// at all: the previous snapshot remains authoritative and is what
        /// subsequent [`Store::state`] calls return.
        #[tracing::instrument(skip_all, name = "store_send")]
        pub async fn send(&self, action: R::Action) -> Result<Arc<R::State>, R::Error>
        where
            R::Error: std::fmt::Display,
        {
            let mut guard = self.state.write().await;
            match self.reducer.reduce(&guard, action, &self.environment) {
                Ok(next) => {
                    let next = Arc::new(next);
                    *guard = Arc::clone(&next);
                    tracing::debug!("action applied, snapshot swapped");
                    Ok(next)
                }
                Err(err) => {
                    tracing::warn!(%err, "action rejected, state unchanged");
                    Err(err)
                }
            }
        }
    }
}

/// Scope module - scoped, validated access to an active store
///
/// The scope is the seam between the state container and its (external)
/// UI layer. The UI never touches the store directly; it asks the scope
/// for one of three narrow handles - state snapshot, dispatcher, next
/// identifier - and each request is validated against the scope's
/// lifecycle.
pub mod scope {
    use super::{Arc, IdSource, Reducer, ScopeError, Store};
    use std::sync::{Mutex, PoisonError};

    /// A two-state access layer in front of a [`Store`]
    ///
    /// A scope is **inactive** when constructed: every accessor fails with
    /// [`ScopeError::ProviderMissing`]. [`Scope::enter`] makes it
    /// **active** for the lifetime of the returned guard; dropping the
    /// guard makes it inactive again. Entering cannot fail, and a scope
    /// can be re-entered any number of times.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let scope = Scope::new();
    /// assert!(scope.dispatcher().is_err());
    ///
    /// {
    ///     let _guard = scope.enter(Arc::clone(&store));
    ///     let dispatch = scope.dispatcher()?;
    ///     dispatch.send(action).await?;
    /// }
    ///
    /// assert!(scope.dispatcher().is_err());
    /// ```
    pub struct Scope<R: Reducer> {
        active: Mutex<Option<Arc<Store<R>>>>,
    }

    impl<R: Reducer> Scope<R> {
        /// Create a new, inactive scope
        #[must_use]
        pub const fn new() -> Self {
            Self {
                active: Mutex::new(None),
            }
        }

        /// Enter the scope with the given store
        ///
        /// Always succeeds. The scope stays active until the returned
        /// guard is dropped. Entering while already active shadows the
        /// active store for the inner guard's lifetime; dropping the
        /// inner guard restores the outer store, so the scope stays
        /// active until the outermost guard is gone.
        pub fn enter(&self, store: Arc<Store<R>>) -> ScopeGuard<'_, R> {
            let displaced = self.lock().replace(store);
            ScopeGuard {
                scope: self,
                displaced,
            }
        }

        /// Current state snapshot of the active store
        ///
        /// # Errors
        ///
        /// [`ScopeError::ProviderMissing`] when the scope is inactive.
        pub async fn state(&self) -> Result<Arc<R::State>, ScopeError> {
            let store = self.current()?;
            Ok(store.state().await)
        }

        /// A write-only dispatch handle to the active store
        ///
        /// The handle holds its own reference to the store, so a
        /// dispatcher obtained inside a scope keeps working after the
        /// scope ends; obtaining one outside a scope is the error.
        ///
        /// # Errors
        ///
        /// [`ScopeError::ProviderMissing`] when the scope is inactive.
        pub fn dispatcher(&self) -> Result<Dispatcher<R>, ScopeError> {
            Ok(Dispatcher {
                store: self.current()?,
            })
        }

        fn current(&self) -> Result<Arc<Store<R>>, ScopeError> {
            self.lock()
                .as_ref()
                .map(Arc::clone)
                .ok_or(ScopeError::ProviderMissing)
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<Store<R>>>> {
            // A poisoned lock only means a panicking thread held it; the
            // Option inside is still valid either way.
            self.active.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl<R: Reducer> Scope<R>
    where
        R::Environment: IdSource,
    {
        /// Issue the next identifier from the active store's sequence
        ///
        /// Reading and advancing happen as one step; the returned value
        /// must be used for exactly one created item.
        ///
        /// # Errors
        ///
        /// [`ScopeError::ProviderMissing`] when the scope is inactive.
        pub fn next_id(&self) -> Result<u64, ScopeError> {
            Ok(self.current()?.environment().ids().issue())
        }
    }

    impl<R: Reducer> Default for Scope<R> {
        fn default() -> Self {
            Self::new()
        }
    }

    /// RAII guard marking a scope as active
    ///
    /// Dropping the guard restores whatever the scope held when `enter`
    /// was called: the outer store for a nested entry, or the inactive
    /// state for the outermost one.
    #[must_use = "the scope deactivates as soon as the guard is dropped"]
    pub struct ScopeGuard<'a, R: Reducer> {
        scope: &'a Scope<R>,
        displaced: Option<Arc<Store<R>>>,
    }

    impl<R: Reducer> Drop for ScopeGuard<'_, R> {
        fn drop(&mut self) {
            *self.scope.lock() = self.displaced.take();
        }
    }

    /// Cloneable write-only handle to a store
    ///
    /// Obtained from [`Scope::dispatcher`]. Dispatching is the only way
    /// state changes; there is no mutation path around the reducer.
    pub struct Dispatcher<R: Reducer> {
        store: Arc<Store<R>>,
    }

    impl<R: Reducer> Dispatcher<R> {
        /// Dispatch one action to the store
        ///
        /// The resulting state update is observable by every subsequent
        /// `state()` call, on this scope or any other handle to the same
        /// store.
        ///
        /// # Errors
        ///
        /// Propagates the reducer's error; the state is then unchanged.
        pub async fn send(&self, action: R::Action) -> Result<Arc<R::State>, R::Error>
        where
            R::Error: std::fmt::Display,
        {
            self.store.send(action).await
        }
    }

    impl<R: Reducer> Clone for Dispatcher<R> {
        fn clone(&self) -> Self {
            Self {
                store: Arc::clone(&self.store),
            }
        }
    }

    // Manual Debug implementation since Store fields are not Debug
    impl<R: Reducer> std::fmt::Debug for Dispatcher<R> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "Dispatcher(<store>)")
        }
    }
}
