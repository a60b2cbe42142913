//! Outcome container - the result of an operation that can fail.
//!
//! `Outcome<T, E>` is either `Success(value)` or `Failure(error)`. Exactly one
//! of the two is meaningful per variant: [`Outcome::value`] on a failure
//! yields the default of `T`, and [`Outcome::error`] on a success yields
//! `None`.
//!
//! Failures propagate by skipping every transformation: [`Outcome::map`] and
//! [`Outcome::flat_map`] never call their function on a `Failure`, and the
//! original error is carried forward unchanged. [`Outcome::or_else`] is the
//! recovery path.
//!
//! `Outcome` converts losslessly to and from [`std::result::Result`], so it
//! drops into `?`-based code at any point.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Outcome;
//!
//! let doubled = Outcome::<i32, String>::succeed(1).flat_map(|x| Outcome::succeed(x * 2));
//! assert_eq!(doubled.value(), 2);
//!
//! let failed = Outcome::<i32, String>::fail("boom".to_string())
//!     .flat_map(|x| Outcome::succeed(x * 2));
//! assert_eq!(failed.error(), Some("boom".to_string()));
//! ```

use crate::typeclass::{ErrorHandler, Failable, Transform};

/// The outcome of a fallible operation.
///
/// # Monad Laws
///
/// With `Outcome::succeed` as `pure`:
///
/// - Left Identity: `Outcome::succeed(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Outcome::succeed) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub const fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Failure(error)
    }

    /// Builds an outcome from a `(value, error)` pair.
    ///
    /// The pair is a success when `error` is structurally empty, that is equal
    /// to `E::default()`. This works for plain value error types (codes,
    /// strings, unit-like structs) as well as `Option`-wrapped ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// assert_eq!(Outcome::from_tuple(5, 0u8), Outcome::Success(5));
    /// assert_eq!(Outcome::from_tuple(5, 2u8), Outcome::Failure(2));
    /// assert_eq!(Outcome::from_tuple(5, String::new()), Outcome::Success(5));
    /// assert_eq!(
    ///     Outcome::from_tuple(5, Some("bad")),
    ///     Outcome::Failure(Some("bad"))
    /// );
    /// ```
    pub fn from_tuple(value: T, error: E) -> Self
    where
        E: Default + PartialEq,
    {
        if error == E::default() {
            Self::Success(value)
        } else {
            Self::Failure(error)
        }
    }

    /// Converts a standard `Result` into an outcome.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts the outcome into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the carried error for a `Failure`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns `true` for a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the value, or the default of `T` for a `Failure`.
    #[inline]
    pub fn value(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns the error, or `None` for a `Success`.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the value of a `Success`.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: Transform<T, U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error of a `Failure`.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: Transform<E, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Chains a computation on the value of a `Success`.
    ///
    /// A `Failure` is returned as-is and `function` is never called.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: Transform<T, Outcome<U, E>>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a `Result`-returning function on the value of a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let parsed = Outcome::<&str, String>::succeed("12")
    ///     .map(str::to_string)
    ///     .bind(|text| text.parse::<i32>().map(|n| (n * 2).to_string()).map_err(|e| e.to_string()));
    /// assert_eq!(parsed.value(), "24");
    /// ```
    #[inline]
    #[must_use]
    pub fn bind<F>(self, function: F) -> Self
    where
        F: Failable<T, E>,
    {
        match self {
            Self::Success(value) => Self::from_result(function(value)),
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Recovers from a `Failure` by handing its error to `handler`.
    ///
    /// A `Success` is returned unchanged and `handler` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Outcome;
    ///
    /// let recovered = Outcome::<usize, String>::fail("oops".to_string())
    ///     .or_else(|error| Outcome::succeed(error.len()));
    /// assert_eq!(recovered, Outcome::Success(4));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, handler: F) -> Self
    where
        F: ErrorHandler<T, E>,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => handler(error),
        }
    }

    /// Observes the error of a `Failure` without changing the outcome.
    #[inline]
    #[must_use]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
