//! # Reducible Core
//!
//! Core traits and types for the Reducible state container.
//!
//! This crate provides the fundamental abstractions for building small,
//! unidirectional state containers using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned by a store
//! - **Action**: All possible inputs to a reducer (commands submitted by a UI layer)
//! - **Reducer**: Pure function `(State, Action, Environment) → Result<State, Error>`
//! - **Environment**: Injected dependencies (e.g. an identifier sequence)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Structural replacement: reducers return a fresh state rather than
//!   mutating in place, so consumers can detect change by reference
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use reducible_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter(i64);
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Add(i64),
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &Counter,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> Result<Counter, Self::Error> {
//!         match action {
//!             CounterAction::Add(n) => Ok(Counter(state.0 + n)),
//!         }
//!     }
//! }
//!
//! let next = CounterReducer.reduce(&Counter(1), CounterAction::Add(2), &()).unwrap();
//! assert_eq!(next, Counter(3));
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Result<State, Error>`
///
/// They contain all business logic and are deterministic and testable.
/// A reducer never touches its input state; it produces a fresh state value
/// (or an error, in which case the old state remains authoritative).
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: The error type for rejected actions
    ///
    /// # Purity
    ///
    /// `reduce` must be a pure function of `(state, action)`: no hidden
    /// state, no side effects, and the same inputs always yield a
    /// structurally equal output. The input state is borrowed immutably;
    /// the new state is returned by value so that the runtime can swap
    /// snapshots and consumers can compare them by reference.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoList;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///     type Error = TodoError;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &TodoList,
    ///         action: TodoAction,
    ///         env: &TodoEnvironment,
    ///     ) -> Result<TodoList, TodoError> {
    ///         // Business logic here
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The error type for actions the reducer rejects
        type Error;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: Immutable reference to the current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The next state on success. On error the caller must keep the
        /// old state; an action either fully applies or not at all.
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is rejected. The reducer
        /// must not have produced any observable state change in that case.
        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Self::State, Self::Error>;
    }
}

/// Environment module - Dependency injection types
///
/// All external dependencies of a reducer are carried by its Environment
/// parameter. This crate ships the one dependency every item-creating
/// feature needs: a monotonic identifier sequence.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Access to a [`SerialIds`] sequence from an environment.
    ///
    /// Implemented by environments whose store issues identifiers, so that
    /// generic runtime code (the scope's next-id accessor) can reach the
    /// sequence without knowing the concrete environment type.
    pub trait IdSource {
        /// The identifier sequence owned by this environment
        fn ids(&self) -> &SerialIds;
    }

    /// A monotonic identifier sequence.
    ///
    /// Issues `u64` identifiers that are strictly increasing in issuance
    /// order and never reused, even after the items they were assigned to
    /// are removed. The counter lives as long as the owning store.
    ///
    /// Reading and advancing is a single atomic step ([`SerialIds::issue`]),
    /// so uniqueness holds even under a multi-threaded host.
    ///
    /// # Example
    ///
    /// ```
    /// use reducible_core::environment::SerialIds;
    ///
    /// let ids = SerialIds::starting_at(5);
    /// assert_eq!(ids.peek(), 5);
    /// assert_eq!(ids.issue(), 5);
    /// assert_eq!(ids.issue(), 6);
    /// assert_eq!(ids.peek(), 7);
    /// ```
    #[derive(Debug)]
    pub struct SerialIds {
        next: AtomicU64,
    }

    impl SerialIds {
        /// Create a sequence whose first issued identifier is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// The identifier the next [`SerialIds::issue`] call will return
        ///
        /// Intended for display and tests; callers assigning identifiers
        /// must use [`SerialIds::issue`], which reads and advances in one
        /// step.
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Acquire)
        }

        /// Issue the next identifier and advance the sequence by one
        #[must_use]
        pub fn issue(&self) -> u64 {
            self.next.fetch_add(1, Ordering::AcqRel)
        }
    }
}
