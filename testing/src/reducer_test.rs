//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use reducible_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for error assertion functions
type ErrorAssertion<E> = Box<dyn FnOnce(&E)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// A reducer either produces a new state or rejects the action with an
/// error, so the builder has two terminal assertion kinds: `then_state`
/// (the action must succeed) and `then_error` (the action must be
/// rejected). Mixing them in one test is a usage bug and panics at `run`.
///
/// # Example
///
/// ```ignore
/// use reducible_testing::ReducerTest;
///
/// ReducerTest::new(TodoReducer::new())
///     .with_env(test_environment())
///     .given_state(TodoList::seed())
///     .when_action(TodoAction::Toggle { id: TodoId::new(3) })
///     .then_state(|list| {
///         assert!(list.get(TodoId::new(3)).unwrap().done);
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    error_assertions: Vec<ErrorAssertion<R::Error>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    R::Error: std::fmt::Debug,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            error_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Assert that the action succeeds and check the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Assert that the action is rejected and check the error (Then)
    #[must_use]
    pub fn then_error<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::Error) + 'static,
    {
        self.error_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set, if the
    /// reducer's outcome (success/rejection) does not match the assertion
    /// kind used, or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        // Execute reducer
        match self.reducer.reduce(&state, action, &env) {
            Ok(next) => {
                assert!(
                    self.error_assertions.is_empty(),
                    "Expected the action to be rejected, but it succeeded"
                );
                for assertion in self.state_assertions {
                    assertion(&next);
                }
            }
            Err(err) => {
                assert!(
                    self.state_assertions.is_empty(),
                    "Expected the action to succeed, but it was rejected: {err:?}"
                );
                assert!(
                    !self.error_assertions.is_empty(),
                    "Reducer rejected the action with no error assertion: {err:?}"
                );
                for assertion in self.error_assertions {
                    assertion(&err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reducible_core::reducer::Reducer;

    #[derive(Clone, Debug)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Explode,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;
        type Error = Boom;

        fn reduce(
            &self,
            state: &Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Result<Self::State, Boom> {
            match action {
                TestAction::Increment => Ok(TestState {
                    count: state.count + 1,
                }),
                TestAction::Decrement => Ok(TestState {
                    count: state.count - 1,
                }),
                TestAction::Explode => Err(Boom),
            }
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_decrement() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_error() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Explode)
            .then_error(|err| {
                assert_eq!(err.to_string(), "boom");
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected the action to be rejected")]
    fn test_reducer_test_unexpected_success() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState { count: 0 })
            .when_action(TestAction::Increment)
            .then_error(|_| {})
            .run();
    }
}
