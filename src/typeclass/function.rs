//! Named shapes for the callbacks accepted by the containers.
//!
//! Each shape is a trait with a blanket implementation, so any closure or
//! function with a matching signature satisfies it and the shapes can be used
//! directly as bounds:
//!
//! ```rust
//! use kleisli::typeclass::Predicate;
//!
//! fn count_matching<T, P: Predicate<T>>(values: &[T], predicate: P) -> usize {
//!     values.iter().filter(|value| predicate(*value)).count()
//! }
//!
//! assert_eq!(count_matching(&[1, 2, 3, 4], |value: &i32| value % 2 == 0), 2);
//! ```

#[cfg(feature = "control")]
use crate::control::Outcome;

/// A test performed on a borrowed value.
pub trait Predicate<T>: Fn(&T) -> bool {}

impl<T, F> Predicate<T> for F where F: Fn(&T) -> bool {}

/// A one-shot transformation from `T` to `U`.
pub trait Transform<T, U>: FnOnce(T) -> U {}

impl<T, U, F> Transform<T, U> for F where F: FnOnce(T) -> U {}

/// A transformation that keeps the type but may fail with `E`.
pub trait Failable<T, E>: FnOnce(T) -> Result<T, E> {}

impl<T, E, F> Failable<T, E> for F where F: FnOnce(T) -> Result<T, E> {}

/// A transformation that keeps the type but may produce nothing.
pub trait Nilable<T>: FnOnce(T) -> Option<T> {}

impl<T, F> Nilable<T> for F where F: FnOnce(T) -> Option<T> {}

/// A recovery step that turns an error back into an [`Outcome`].
#[cfg(feature = "control")]
pub trait ErrorHandler<T, E>: FnOnce(E) -> Outcome<T, E> {}

#[cfg(feature = "control")]
impl<T, E, F> ErrorHandler<T, E> for F where F: FnOnce(E) -> Outcome<T, E> {}
