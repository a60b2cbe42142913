//! State container - a computation that threads a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Nothing runs until
//! [`State::run`] supplies the initial state, and the same `State` can be run
//! any number of times against different initial states.
//!
//! # Threading
//!
//! [`State::flat_map`] runs the original transition, hands the produced value
//! to the continuation, and runs the resulting `State` against the state the
//! original transition *returned*, never against the initial one.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::State;
//!
//! fn push(value: i32) -> State<Vec<i32>, ()> {
//!     State::modify(move |mut stack: Vec<i32>| {
//!         stack.push(value);
//!         stack
//!     })
//! }
//!
//! fn pop() -> State<Vec<i32>, Option<i32>> {
//!     State::new(|mut stack: Vec<i32>| {
//!         let top = stack.pop();
//!         (top, stack)
//!     })
//! }
//!
//! let program = push(1).then(push(2)).then(pop());
//! let (top, stack) = program.run(Vec::new());
//! assert_eq!(top, Some(2));
//! assert_eq!(stack, vec![1]);
//! ```

use std::rc::Rc;

/// A state transition producing a value of type `A`.
///
/// # Monad Laws
///
/// - Left Identity: `State::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(State::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// Two states are equal when running them against the same initial state
/// yields the same `(value, state)` pair.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a `State` from a transition `S -> (value, next state)`.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Creates a `State` that yields `value` and leaves the state untouched.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Runs the transition and returns `(value, final state)`.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the transition and returns only the value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the transition and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Transforms the produced value, leaving the state transition as it is.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            (function(value), next_state)
        })
    }

    /// Chains a `State` built from the produced value.
    ///
    /// The chained `State` runs against the state produced by `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let runner = State::new(|s: i32| (s + 1, s * 2));
    /// let chained = runner.flat_map(|x| State::new(move |s: i32| (x, s)));
    /// assert_eq!(chained.run(3), (4, 6));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            function(value).run(next_state)
        })
    }

    /// Runs `next` after this `State`, discarding this value.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Yields the current state as the value.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Applies `function` to the state.
    pub fn modify<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), function(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);
