//! Either container - one of two branches, biased towards `Right`.
//!
//! `Either<L, R>` holds either a `Left(L)` or a `Right(R)`. By convention
//! `Right` is the success path and `Left` the alternative (often a failure).
//! The second type parameter defaults to the first, so `Either<T>` is the
//! single-type form in which both branches carry a `T` and only the tag
//! tells them apart.
//!
//! # Branch policy
//!
//! [`Either::map`] and [`Either::flat_map`] transform only `Right`; a `Left`
//! passes through untouched. [`Either::or_else`] is the mirror image: it runs
//! its fallback only for `Left`. Use [`Either::map_left`] or
//! [`Either::bimap`] when the `Left` branch must be transformed too.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let right: Either<i32> = Either::Right(20);
//! assert_eq!(right.map(|n| n + 1).value(), 21);
//!
//! let left: Either<i32> = Either::Left(-1);
//! let recovered = left.or_else(|n| Either::Right(n.abs()));
//! assert!(recovered.is_right());
//! assert_eq!(recovered.value(), 1);
//! ```

/// A value on one of two branches.
///
/// # Monad Laws
///
/// With `Either::Right` as `pure`:
///
/// - Left Identity: `Either::Right(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Either::Right) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R = L> {
    /// The alternative branch.
    Left(L),
    /// The conventional success branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Some(l)` for `Left(l)`, `None` otherwise.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for `Right(r)`, `None` otherwise.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the `Right` value; a `Left` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// assert_eq!(right.map(|n| n * 2), Either::Right(10));
    ///
    /// let left: Either<String, i32> = Either::Left("stop".to_string());
    /// assert_eq!(left.map(|n| n * 2), Either::Left("stop".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Chains a computation on the `Right` value; a `Left` short-circuits.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Runs a fallback for a `Left` value; a `Right` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<&str, i32> = Either::Left("missing");
    /// assert_eq!(left.or_else(|_| Either::Right(0)), Either::Right(0));
    ///
    /// let right: Either<&str, i32> = Either::Right(3);
    /// assert_eq!(right.or_else(|_| Either::Right(0)), Either::Right(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match self {
            Self::Left(value) => function(value),
            right @ Self::Right(_) => right,
        }
    }

    /// Transforms the `Left` value; a `Right` is returned unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever branch is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the branches.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the carried value regardless of branch.
    #[inline]
    pub fn value(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }

    /// Borrows the carried value regardless of branch.
    #[inline]
    pub const fn as_value(&self) -> &T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.value(), 42);
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32> = Either::Right(7);
        assert!(value.is_right());
        assert!(!value.is_left());
        assert_eq!(*value.as_value(), 7);
    }

    #[rstest]
    fn test_map_skips_left() {
        let mut called = false;
        let left: Either<i32> = Either::Left(1);
        let mapped = left.map(|n| {
            called = true;
            n + 1
        });
        assert_eq!(mapped, Either::Left(1));
        assert!(!called);
    }

    #[rstest]
    fn test_flat_map_can_switch_branch() {
        let right: Either<i32> = Either::Right(3);
        let switched = right.flat_map(|n| if n < 5 { Either::Left(n) } else { Either::Right(n) });
        assert_eq!(switched, Either::Left(3));
    }

    #[rstest]
    fn test_or_else_only_runs_on_left() {
        let right: Either<i32> = Either::Right(3);
        assert_eq!(right.or_else(|_| Either::Right(100)), Either::Right(3));

        let left: Either<i32> = Either::Left(3);
        assert_eq!(left.or_else(|n| Either::Right(n * 100)), Either::Right(300));
    }

    #[rstest]
    fn test_bimap_and_swap() {
        let left: Either<i32, String> = Either::Left(2);
        assert_eq!(left.bimap(|n| n * 2, |s: String| s.len()), Either::Left(4));
        assert_eq!(Either::<i32, &str>::Right("x").swap(), Either::Left("x"));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either.left(), Some("error".to_string()));
    }
}
