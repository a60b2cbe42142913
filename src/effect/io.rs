//! IO container - a re-runnable side-effecting action.
//!
//! An `IO<T, E>` describes an action returning an [`Outcome`]. Building and
//! composing an `IO` runs nothing; [`IO::perform`] runs the whole chain, and
//! every call runs it again. Nothing is memoised, which is the difference
//! from [`Future`](super::Future).
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kleisli::control::Outcome;
//! use kleisli::effect::IO;
//!
//! let reads = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&reads);
//! let read = IO::<i32, String>::new(move || {
//!     counter.set(counter.get() + 1);
//!     Outcome::succeed(counter.get())
//! });
//!
//! assert_eq!(read.perform(), Outcome::Success(1));
//! assert_eq!(read.perform(), Outcome::Success(2));
//! assert_eq!(reads.get(), 2);
//! ```

use std::rc::Rc;

use crate::control::Outcome;

/// A deferred action that may fail with `E`.
///
/// # Monad Laws
///
/// With `IO::pure` as `pure`, comparing the outcomes returned by `perform`:
///
/// - Left Identity: `IO::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(IO::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<T, E>
where
    T: 'static,
    E: 'static,
{
    action: Rc<dyn Fn() -> Outcome<T, E>>,
}

impl<T, E> IO<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Wraps an action. The action runs on every [`IO::perform`].
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> Outcome<T, E> + 'static,
    {
        Self {
            action: Rc::new(action),
        }
    }

    /// An action that always succeeds with `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || Outcome::succeed(value.clone()))
    }

    /// An action that always fails with `error`.
    pub fn fail(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move || Outcome::fail(error.clone()))
    }

    /// Runs the action chain.
    pub fn perform(&self) -> Outcome<T, E> {
        (self.action)()
    }

    /// Transforms the value of a successful run.
    ///
    /// A failed run skips `function` and keeps its error.
    pub fn map<U, F>(self, function: F) -> IO<U, E>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        let action = self.action;
        IO::new(move || action().map(&function))
    }

    /// Chains an action built from the value of a successful run.
    ///
    /// A failed run skips `function` and keeps its error.
    pub fn flat_map<U, F>(self, function: F) -> IO<U, E>
    where
        F: Fn(T) -> IO<U, E> + 'static,
        U: 'static,
    {
        let action = self.action;
        IO::new(move || action().flat_map(|value| function(value).perform()))
    }
}

impl<T, E> Clone for IO<T, E>
where
    T: 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            action: Rc::clone(&self.action),
        }
    }
}
