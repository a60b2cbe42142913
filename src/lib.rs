//! # kleisli
//!
//! Composable computation wrappers for Rust.
//!
//! ## Overview
//!
//! Every container in this crate exposes the same `map` / `flat_map`
//! vocabulary and satisfies the three monad laws (left identity, right
//! identity, associativity). Composition always produces a new container;
//! nothing is mutated in place.
//!
//! - **Type Classes**: the function-type vocabulary, the `Functor` capability
//!   used by [`Free`](control::Free), and [`Identity`](typeclass::Identity)
//! - **Control Structures**: [`Maybe`](control::Maybe),
//!   [`Either`](control::Either), [`Outcome`](control::Outcome),
//!   [`Validation`](control::Validation), [`List`](control::List),
//!   [`Free`](control::Free)
//! - **Effects**: [`State`](effect::State), [`Reader`](effect::Reader),
//!   [`Writer`](effect::Writer), [`IO`](effect::IO), and the
//!   concurrency-bearing [`Future`](effect::Future) and
//!   [`Continuation`](effect::Continuation) driven by a cancellable
//!   [`Context`](effect::Context)
//!
//! ## Feature Flags
//!
//! - `typeclass`: function vocabulary, `Functor`, `Identity`
//! - `control`: the pure containers
//! - `effect`: State/Reader/Writer, IO, Future, Continuation, Context
//! - `async`: tokio bridge for awaiting `Future` and `Continuation`
//! - `serde`: `Serialize`/`Deserialize` for the data containers
//! - `tracing`: structured events from the concurrency-bearing wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let total = Outcome::<i32, String>::succeed(1)
//!     .flat_map(|value| Outcome::succeed(value * 2))
//!     .map(|value| value + 40);
//! assert_eq!(total.value(), 42);
//!
//! let parsed: Maybe<i32> = Maybe::just(6).filter(|value| value % 2 == 0);
//! assert!(parsed.is_just());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
