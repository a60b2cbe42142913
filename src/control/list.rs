//! List container - zero or more values, composed non-deterministically.
//!
//! `flat_map` on a list applies its function to every element and
//! concatenates the resulting lists in order.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::List;
//!
//! let pairs = List::new(vec![1, 2])
//!     .flat_map(|x| List::new(vec![x, x * 10]));
//! assert_eq!(pairs.values(), &[1, 10, 2, 20]);
//! ```

/// An ordered sequence of values.
///
/// # Monad Laws
///
/// With `List::single` as `pure`:
///
/// - Left Identity: `List::single(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(List::single) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T> {
    values: Vec<T>,
}

impl<T> List<T> {
    /// Creates a list from the given values.
    #[inline]
    pub const fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Creates a list holding exactly one value.
    #[inline]
    pub fn single(value: T) -> Self {
        Self::new(vec![value])
    }

    /// Returns the values as a slice.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the list and returns the underlying vector.
    #[inline]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the list holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Transforms every value.
    pub fn map<U, F>(self, function: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        List::new(self.values.into_iter().map(function).collect())
    }

    /// Maps every value to a list and flattens the results in order.
    pub fn flat_map<U, F>(self, mut function: F) -> List<U>
    where
        F: FnMut(T) -> List<U>,
    {
        List::new(
            self.values
                .into_iter()
                .flat_map(|value| function(value).values)
                .collect(),
        )
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::new(iterator.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
