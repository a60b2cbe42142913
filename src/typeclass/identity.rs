//! Identity container - a value with no additional effect.
//!
//! `Identity` is the simplest container that satisfies the monad laws. It is
//! handy as a reference model when checking the behaviour of the richer
//! containers, and as a `Functor` step for [`Free`](crate::control::Free)
//! programs that need no instruction beyond "here is a value".

use super::Functor;

/// A container that wraps a value and adds nothing else.
///
/// # Monad Laws
///
/// - Left Identity: `Identity::new(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Identity::new) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Identity;
///
/// let wrapped = Identity::new(20)
///     .map(|n| n + 1)
///     .flat_map(|n| Identity::new(n * 2));
/// assert_eq!(wrapped.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.value(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn value(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies a function to the wrapped value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies a function that produces another `Identity`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

impl<A> Functor for Identity<A> {
    type Payload = A;

    fn fmap<F>(self, function: F) -> Self
    where
        F: FnOnce(A) -> A,
    {
        Self(function(self.0))
    }

    fn extract(self) -> A {
        self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
