//! Pure containers.
//!
//! Every type in this module is a plain value: composing one never runs
//! code with side effects, never touches shared state, and never blocks.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: one of two branches, biased towards `Right`
//! - [`Outcome`]: the success or failure of a fallible operation
//! - [`Validation`]: a value or the errors explaining why it was rejected
//! - [`List`]: zero or more values, composed non-deterministically
//! - [`Free`]: a deferred program interpreted later
//!
//! # Examples
//!
//! ## Short-circuiting
//!
//! ```rust
//! use kleisli::control::Maybe;
//!
//! let halved = Maybe::just(10).flat_map(|n| if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() });
//! assert_eq!(halved.value_or(0), 5);
//!
//! let missing: Maybe<i32> = Maybe::nothing();
//! assert_eq!(missing.map(|n| n * 2).value_or(-1), -1);
//! ```
//!
//! ## Non-determinism
//!
//! ```rust
//! use kleisli::control::List;
//!
//! let squares = List::new(vec![1, 2, 3]).flat_map(|n| List::single(n * n));
//! assert_eq!(squares.into_values(), vec![1, 4, 9]);
//! ```

mod either;
mod free;
mod list;
mod maybe;
mod outcome;
mod validation;

pub use either::Either;
pub use free::Free;
pub use list::List;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use validation::Validation;
