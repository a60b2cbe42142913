//! Validation container - a value or the list of reasons it was rejected.
//!
//! `Validation<E, T>` is either valid, holding a value, or invalid, holding
//! the errors that rejected it. The error list of an invalid validation is
//! never empty and a valid one carries no errors at all; the representation
//! is private so no other state can be built, deserialised included.
//!
//! `map` and `flat_map` only touch valid values and never merge error lists:
//! an invalid validation passes through them with its errors untouched.
//! Accumulating the errors of several independent checks is opt-in, through
//! [`Validation::and`] or [`Validation::from_validations`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Validation;
//!
//! fn non_empty(name: &str) -> Validation<String, String> {
//!     if name.is_empty() {
//!         Validation::fail("name is empty".to_string())
//!     } else {
//!         Validation::valid(name.to_string())
//!     }
//! }
//!
//! fn adult(age: u32) -> Validation<String, u32> {
//!     if age >= 18 {
//!         Validation::valid(age)
//!     } else {
//!         Validation::fail(format!("{age} is under 18"))
//!     }
//! }
//!
//! let checked = non_empty("").and(adult(12));
//! assert_eq!(
//!     checked.errors(),
//!     &["name is empty".to_string(), "12 is under 18".to_string()]
//! );
//! ```

use std::fmt;

/// A value that passed its checks, or the errors explaining why it did not.
///
/// # Monad Laws
///
/// With `Validation::valid` as `pure`:
///
/// - Left Identity: `Validation::valid(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Validation::valid) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Validation<E, T> {
    checked: Checked<E, T>,
}

/// `Invalid` is only ever built with at least one error.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Checked<E, T> {
    Valid(T),
    Invalid(Vec<E>),
}

impl<E, T> Validation<E, T> {
    /// Creates a valid validation.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self {
            checked: Checked::Valid(value),
        }
    }

    /// Creates an invalid validation with a single error.
    #[inline]
    pub fn fail(error: E) -> Self {
        Self::rejected(vec![error])
    }

    /// Callers guarantee `errors` is not empty.
    const fn rejected(errors: Vec<E>) -> Self {
        Self {
            checked: Checked::Invalid(errors),
        }
    }

    /// Creates a validation from a list of errors.
    ///
    /// An empty list means nothing went wrong, so the result is valid and
    /// carries the default of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Validation;
    ///
    /// let invalid = Validation::<&str, i32>::invalid(vec!["e1", "e2"]);
    /// assert!(!invalid.is_valid());
    ///
    /// let empty = Validation::<&str, i32>::invalid(Vec::new());
    /// assert!(empty.is_valid());
    /// assert_eq!(empty.value(), 0);
    /// ```
    pub fn invalid(errors: Vec<E>) -> Self
    where
        T: Default,
    {
        if errors.is_empty() {
            Self::valid(T::default())
        } else {
            Self::rejected(errors)
        }
    }

    /// Returns `true` when the validation holds a value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self.checked, Checked::Valid(_))
    }

    /// Returns the value, or the default of `T` when invalid.
    #[inline]
    pub fn value(self) -> T
    where
        T: Default,
    {
        match self.checked {
            Checked::Valid(value) => value,
            Checked::Invalid(_) => T::default(),
        }
    }

    /// Returns the errors; empty when valid.
    #[inline]
    pub fn errors(&self) -> &[E] {
        match &self.checked {
            Checked::Valid(_) => &[],
            Checked::Invalid(errors) => errors,
        }
    }

    /// Consumes the validation and returns its errors; empty when valid.
    #[inline]
    pub fn into_errors(self) -> Vec<E> {
        match self.checked {
            Checked::Valid(_) => Vec::new(),
            Checked::Invalid(errors) => errors,
        }
    }

    /// Transforms a valid value; errors pass through unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self.checked {
            Checked::Valid(value) => Validation::valid(function(value)),
            Checked::Invalid(errors) => Validation::rejected(errors),
        }
    }

    /// Chains another check on a valid value; errors pass through unchanged.
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        match self.checked {
            Checked::Valid(value) => function(value),
            Checked::Invalid(errors) => Validation::rejected(errors),
        }
    }

    /// Combines two independent validations, accumulating the errors of both.
    ///
    /// Errors from `self` come first.
    pub fn and<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        match (self.checked, other.checked) {
            (Checked::Valid(left), Checked::Valid(right)) => Validation::valid((left, right)),
            (Checked::Valid(_), Checked::Invalid(errors))
            | (Checked::Invalid(errors), Checked::Valid(_)) => Validation::rejected(errors),
            (Checked::Invalid(mut left), Checked::Invalid(right)) => {
                left.extend(right);
                Validation::rejected(left)
            }
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns every accumulated error when invalid.
    pub fn into_result(self) -> Result<T, Vec<E>> {
        match self.checked {
            Checked::Valid(value) => Ok(value),
            Checked::Invalid(errors) => Err(errors),
        }
    }
}

impl<E, T> Validation<E, Vec<T>> {
    /// Collects many validations, accumulating every error in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Validation;
    ///
    /// let all = Validation::from_validations(vec![
    ///     Validation::<&str, i32>::valid(1),
    ///     Validation::fail("two"),
    ///     Validation::fail("three"),
    /// ]);
    /// assert_eq!(all.errors(), &["two", "three"]);
    /// ```
    pub fn from_validations<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Validation<E, T>>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for validation in validations {
            match validation.checked {
                Checked::Valid(value) => values.push(value),
                Checked::Invalid(found) => errors.extend(found),
            }
        }
        if errors.is_empty() {
            Self::valid(values)
        } else {
            Self::rejected(errors)
        }
    }
}

impl<E: fmt::Debug, T: fmt::Debug> fmt::Debug for Validation<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.checked {
            Checked::Valid(value) => formatter.debug_tuple("Valid").field(value).finish(),
            Checked::Invalid(errors) => formatter.debug_tuple("Invalid").field(errors).finish(),
        }
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize, T: serde::Serialize> serde::Serialize for Validation<E, T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.checked, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E, T> serde::Deserialize<'de> for Validation<E, T>
where
    E: serde::Deserialize<'de>,
    T: serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match <Checked<E, T> as serde::Deserialize>::deserialize(deserializer)? {
            Checked::Invalid(errors) if errors.is_empty() => Err(serde::de::Error::custom(
                "an invalid validation needs at least one error",
            )),
            checked => Ok(Self { checked }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_map_keeps_error_list() {
        let invalid = Validation::<&str, i32>::invalid(vec!["e1", "e2"]);
        let mapped = invalid.map(|x| x * 2);
        assert!(!mapped.is_valid());
        assert_eq!(mapped.errors(), &["e1", "e2"]);
    }

    #[rstest]
    fn invalid_flat_map_does_not_merge() {
        let invalid = Validation::<&str, i32>::fail("first");
        let chained = invalid.flat_map(|_| Validation::<&str, i32>::fail("second"));
        assert_eq!(chained.into_errors(), vec!["first"]);
    }

    #[rstest]
    fn valid_has_no_errors() {
        let valid = Validation::<String, i32>::valid(5);
        assert!(valid.errors().is_empty());
        assert_eq!(valid.map(|x| x * 2).value(), 10);
    }

    #[rstest]
    #[case(Validation::valid(1), Validation::valid(2), Vec::new())]
    #[case(Validation::fail("a"), Validation::valid(2), vec!["a"])]
    #[case(Validation::valid(1), Validation::fail("b"), vec!["b"])]
    #[case(Validation::fail("a"), Validation::fail("b"), vec!["a", "b"])]
    fn and_accumulates_in_order(
        #[case] left: Validation<&'static str, i32>,
        #[case] right: Validation<&'static str, i32>,
        #[case] expected: Vec<&'static str>,
    ) {
        assert_eq!(left.and(right).into_errors(), expected);
    }

    #[rstest]
    fn empty_error_list_is_valid_everywhere() {
        let empty = Validation::<&str, i32>::invalid(Vec::new());
        assert!(empty.is_valid());
        assert!(empty.errors().is_empty());
        assert_eq!(empty.clone(), Validation::valid(0));
        assert_eq!(empty.map(|x| x + 1).into_result(), Ok(1));
        assert_eq!(format!("{:?}", Validation::<&str, i32>::invalid(Vec::new())), "Valid(0)");
    }

    #[rstest]
    #[case(Validation::valid(3), true)]
    #[case(Validation::fail("bad"), false)]
    #[case(Validation::invalid(vec!["bad", "worse"]), false)]
    #[case(Validation::invalid(Vec::new()), true)]
    fn errors_are_empty_iff_valid(#[case] validation: Validation<&'static str, i32>, #[case] valid: bool) {
        assert_eq!(validation.is_valid(), valid);
        assert_eq!(validation.errors().is_empty(), valid);
    }

    #[rstest]
    fn from_validations_collects_values_when_all_valid() {
        let collected = Validation::from_validations((1..=3).map(Validation::<String, i32>::valid));
        assert_eq!(collected.into_result(), Ok(vec![1, 2, 3]));
    }
}
