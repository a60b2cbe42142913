//! Effectful computations.
//!
//! The types in this module defer work until it is explicitly run.
//!
//! # Threading containers
//!
//! - [`State`]: threads a state value through a chain of transitions
//! - [`Reader`]: hands one shared environment to every step
//! - [`Writer`]: carries an output alongside a value
//!
//! These are single-threaded (`Rc`-based) and can be run any number of times.
//!
//! # Side effects and concurrency
//!
//! - [`IO`]: a side-effecting action, re-run on every [`IO::perform`]
//! - [`Future`]: an action run at most once on a worker thread, its outcome
//!   shared by every waiter
//! - [`Continuation`]: an action run on a worker thread per call, abandoned
//!   as soon as its [`Context`] is cancelled or past its deadline
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Outcome;
//! use kleisli::effect::{Context, Continuation, Future, State};
//!
//! let counter = State::new(|count: u32| (count, count + 1));
//! assert_eq!(counter.then(State::get()).run(0), (1, 1));
//!
//! let answer = Future::<i32, String>::new(|| Outcome::succeed(21)).map(|value| value * 2);
//! assert_eq!(answer.wait(), Outcome::Success(42));
//!
//! let greeting = Continuation::<String>::pure("hello".to_string());
//! assert_eq!(greeting.run(&Context::background()).value(), "hello");
//! ```

mod context;
mod continuation;
mod future;
mod io;
mod reader;
mod state;
mod writer;

pub use context::{CancelHandle, Context, ContextError};
pub use continuation::Continuation;
pub use future::{Future, FuturePoisonedError, FutureState};
pub use io::IO;
pub use reader::Reader;
pub use state::State;
pub use writer::Writer;
