//! # Reducible Testing
//!
//! Testing utilities and helpers for the Reducible state container.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then builder for reducer tests
//! - Mock reducers for asserting on dispatch plumbing
//!
//! ## Example
//!
//! ```ignore
//! use reducible_testing::ReducerTest;
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoList::seed())
//!     .when_action(TodoAction::Remove { id: TodoId::new(1) })
//!     .then_state(|list| assert_eq!(list.len(), 3))
//!     .run();
//! ```

pub mod reducer_test;

pub use reducer_test::ReducerTest;

/// Mock implementations for testing
///
/// The mocks here sit on the runtime side of the seam: they let tests
/// observe what flows *into* a reducer without changing its behavior.
pub mod mocks {
    use reducible_core::reducer::Reducer;
    use std::sync::{Arc, Mutex, PoisonError};

    /// Shared log of the actions a [`RecordingReducer`] has seen
    ///
    /// Cloneable handle; keep one before moving the reducer into a store.
    pub struct ActionLog<A> {
        seen: Arc<Mutex<Vec<A>>>,
    }

    impl<A: Clone> ActionLog<A> {
        /// All recorded actions, in the order they were reduced
        #[must_use]
        pub fn actions(&self) -> Vec<A> {
            self.lock().clone()
        }

        /// Number of recorded actions
        #[must_use]
        pub fn len(&self) -> usize {
            self.lock().len()
        }

        /// Whether no action has been recorded yet
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.lock().is_empty()
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, Vec<A>> {
            self.seen.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl<A> Clone for ActionLog<A> {
        fn clone(&self) -> Self {
            Self {
                seen: Arc::clone(&self.seen),
            }
        }
    }

    /// Reducer wrapper that records every action before delegating
    ///
    /// Useful for asserting that a dispatcher forwards commands verbatim.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let reducer = RecordingReducer::new(TodoReducer::new());
    /// let log = reducer.log();
    /// let store = Store::new(TodoList::seed(), reducer, env);
    /// // ... dispatch ...
    /// assert_eq!(log.len(), 2);
    /// ```
    pub struct RecordingReducer<R: Reducer> {
        inner: R,
        log: ActionLog<R::Action>,
    }

    impl<R> RecordingReducer<R>
    where
        R: Reducer,
        R::Action: Clone,
    {
        /// Wrap a reducer, recording the actions it reduces
        #[must_use]
        pub fn new(inner: R) -> Self {
            Self {
                inner,
                log: ActionLog {
                    seen: Arc::new(Mutex::new(Vec::new())),
                },
            }
        }

        /// A handle to the recorded actions
        #[must_use]
        pub fn log(&self) -> ActionLog<R::Action> {
            self.log.clone()
        }
    }

    impl<R> Reducer for RecordingReducer<R>
    where
        R: Reducer,
        R::Action: Clone,
    {
        type State = R::State;
        type Action = R::Action;
        type Environment = R::Environment;
        type Error = R::Error;

        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Self::State, Self::Error> {
            self.log
                .seen
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(action.clone());
            self.inner.reduce(state, action, env)
        }
    }
}

pub use mocks::{ActionLog, RecordingReducer};
