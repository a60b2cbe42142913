//! Type class traits and the shared callback vocabulary.
//!
//! - [`Predicate`], [`Transform`], [`Failable`], [`Nilable`], [`ErrorHandler`]:
//!   named shapes for the closures the containers accept
//! - [`Functor`]: the step capability interpreted by
//!   [`Free`](crate::control::Free)
//! - [`Identity`]: the container with no effect at all
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Functor, Identity};
//!
//! let step = Identity::new(20).fmap(|n| n + 1);
//! assert_eq!(step.extract(), 21);
//! ```

mod function;
mod functor;
mod identity;

#[cfg(feature = "control")]
pub use function::ErrorHandler;
pub use function::{Failable, Nilable, Predicate, Transform};
pub use functor::Functor;
pub use identity::Identity;
