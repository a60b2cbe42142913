//! Maybe container - a value that may be absent.
//!
//! `Maybe<T>` is either `Just(value)` or `Nothing`. Absence is its only
//! failure mode: there is no error payload, and every transformation applied
//! to `Nothing` is skipped.
//!
//! Observing an empty container never fails. [`Maybe::value`] yields the
//! default of `T` for `Nothing`, and [`Maybe::value_or`] lets the caller pick
//! the fallback.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Maybe;
//!
//! let even = Maybe::just(6).filter(|value| value % 2 == 0);
//! assert_eq!(even, Maybe::Just(6));
//!
//! let odd = Maybe::just(5).filter(|value| value % 2 == 0);
//! assert_eq!(odd, Maybe::Nothing);
//! assert_eq!(odd.value_or(10), 10);
//! ```

use crate::typeclass::{Nilable, Predicate, Transform};

/// An optional value.
///
/// # Monad Laws
///
/// - Left Identity: `Maybe::just(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Maybe::just) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an empty container.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Creates a `Maybe` from a nullable value: `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::of_nullable(Some(3)), Maybe::Just(3));
    /// assert_eq!(Maybe::<i32>::of_nullable(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the value, or the default of `T` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).value(), 4);
    /// assert_eq!(Maybe::<i32>::nothing().value(), 0);
    /// assert_eq!(Maybe::<String>::nothing().value(), "");
    /// ```
    #[inline]
    pub fn value(self) -> T
    where
        T: Default,
    {
        self.value_or(T::default())
    }

    /// Returns the value, or `default` when empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if the predicate holds for it.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    /// Transforms the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).map(|n| n.to_string()), Maybe::Just("21".to_string()));
    /// assert_eq!(Maybe::<i32>::nothing().map(|n| n * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: Transform<T, U>,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce nothing.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: Transform<T, Maybe<U>>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a nullable-returning function, turning `None` into `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let halved = Maybe::just(10).bind(|n| (n % 2 == 0).then_some(n / 2));
    /// assert_eq!(halved, Maybe::Just(5));
    ///
    /// let rejected = Maybe::just(5).bind(|n| (n % 2 == 0).then_some(n / 2));
    /// assert_eq!(rejected, Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn bind<F>(self, function: F) -> Self
    where
        F: Nilable<T>,
    {
        match self {
            Self::Just(value) => Self::of_nullable(function(value)),
            Self::Nothing => Self::Nothing,
        }
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn is_even(value: &i32) -> bool {
        value % 2 == 0
    }

    #[rstest]
    #[case(Maybe::just(6), Maybe::Just(6))]
    #[case(Maybe::just(5), Maybe::Nothing)]
    #[case(Maybe::nothing(), Maybe::Nothing)]
    fn filter_keeps_only_matching_values(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(is_even), expected);
    }

    #[rstest]
    fn nothing_value_or_returns_fallback() {
        assert_eq!(Maybe::<i32>::nothing().value_or(10), 10);
        assert_eq!(Maybe::just(3).value_or(10), 3);
    }

    #[rstest]
    fn nothing_short_circuits_map() {
        let mut called = false;
        let result = Maybe::<i32>::nothing().map(|n| {
            called = true;
            n + 1
        });
        assert_eq!(result, Maybe::Nothing);
        assert!(!called);
    }

    #[rstest]
    fn flat_map_can_empty_the_container() {
        let result = Maybe::just(3).flat_map(|n| if n > 5 { Maybe::just(n) } else { Maybe::nothing() });
        assert!(result.is_nothing());
    }

    #[rstest]
    fn option_conversions_preserve_shape() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Just(1));
        assert_eq!(Option::<i32>::from(Maybe::Nothing), None);
        assert_eq!(Maybe::just("a").into_option(), Some("a"));
    }

    #[rstest]
    fn as_ref_borrows_inner_value() {
        let owned = Maybe::just(String::from("kept"));
        assert_eq!(owned.as_ref().map(|text| text.len()), Maybe::Just(4));
        assert!(owned.is_just());
    }
}
