//! Context-aware deferred computation.
//!
//! A [`Continuation`] wraps an action that receives a [`Context`]. Each call
//! to [`Continuation::run`] starts the action on a worker thread and blocks
//! until the worker finishes or the context is done, whichever happens
//! first. When the context wins, `run` returns the context's error right away
//! and the worker's eventual result is discarded.
//!
//! The worker is never interrupted. An action that wants to stop early polls
//! the context it was handed.
//!
//! # Examples
//!
//! ```rust
//! use std::thread;
//! use std::time::{Duration, Instant};
//!
//! use kleisli::control::Outcome;
//! use kleisli::effect::{Context, ContextError, Continuation};
//!
//! let slow = Continuation::<u32>::new(|_context| {
//!     thread::sleep(Duration::from_secs(2));
//!     Outcome::succeed(1)
//! });
//!
//! let (context, _cancel) = Context::background().with_timeout(Duration::from_millis(20));
//! let started = Instant::now();
//! assert_eq!(slow.run(&context), Outcome::Failure(ContextError::DeadlineExceeded));
//! assert!(started.elapsed() < Duration::from_secs(1));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use parking_lot::{Condvar, Mutex};

use super::{Context, ContextError};
use crate::control::Outcome;

const WORKER_NAME: &str = "kleisli-continuation";

type Action<T, E> = Arc<dyn Fn(&Context) -> Outcome<T, E> + Send + Sync>;

type WorkerResult<T, E> = Result<Outcome<T, E>, Box<dyn Any + Send>>;

/// Hand-off point between a worker and the caller waiting on it.
///
/// The caller never consults its [`Context`] while holding `state`: a
/// context that turns out to be past its deadline runs its wakers on the
/// spot, and one of those wakers locks `state`.
struct Slot<T, E> {
    state: Mutex<SlotState<T, E>>,
    ready: Condvar,
}

struct SlotState<T, E> {
    result: Option<WorkerResult<T, E>>,
    signalled: bool,
}

impl<T, E> Slot<T, E> {
    fn new() -> Self {
        Self {
            state: Mutex::new(SlotState {
                result: None,
                signalled: false,
            }),
            ready: Condvar::new(),
        }
    }

    fn complete(&self, result: WorkerResult<T, E>) {
        self.state.lock().result = Some(result);
        self.ready.notify_all();
    }

    fn wake(&self) {
        self.state.lock().signalled = true;
        self.ready.notify_all();
    }
}

/// A deferred computation run under a cancellable [`Context`].
///
/// `E` must be able to represent the context's own error; with the default
/// `E = ContextError` the failure returned on cancellation is exactly
/// [`Context::err`].
///
/// # Monad Laws
///
/// With `Continuation::pure` as `pure`, comparing the outcomes returned by
/// `run` under a live context:
///
/// - Left Identity: `Continuation::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Continuation::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Continuation<T, E = ContextError> {
    action: Action<T, E>,
}

impl<T, E> Continuation<T, E>
where
    T: Send + 'static,
    E: From<ContextError> + Send + 'static,
{
    /// Wraps an action. It starts afresh on every [`Continuation::run`].
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&Context) -> Outcome<T, E> + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
        }
    }

    /// A continuation that succeeds with `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move |_| Outcome::succeed(value.clone()))
    }

    /// A continuation that fails with `error`.
    pub fn fail(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |_| Outcome::fail(error.clone()))
    }

    /// Runs the action on a worker and waits for it or for `context`.
    ///
    /// Returns a failure built from the context's error, without starting a
    /// worker, if `context` is already done. If the worker finishes at the
    /// same moment the context becomes done, either result may be returned.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the action panics before the context is done.
    pub fn run(&self, context: &Context) -> Outcome<T, E> {
        if let Some(error) = context.err() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%error, "continuation skipped, context already done");
            return Outcome::fail(E::from(error));
        }

        let slot = Arc::new(Slot::new());

        let waker_slot = Arc::clone(&slot);
        let Some(_registration) = context.register(move || waker_slot.wake()) else {
            return Self::abandoned(context);
        };

        let action = Arc::clone(&self.action);
        let worker_context = context.clone();
        let worker_slot = Arc::clone(&slot);
        let spawned = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || {
                let result = catch_unwind(AssertUnwindSafe(|| action(&worker_context)));
                worker_slot.complete(result);
            });
        if let Err(error) = spawned {
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, "could not spawn continuation worker, running inline");
            #[cfg(not(feature = "tracing"))]
            let _ = error;
            return (self.action)(context);
        }

        let deadline = context.deadline();
        let mut state = slot.state.lock();
        loop {
            match state.result.take() {
                Some(Ok(outcome)) => return outcome,
                Some(Err(payload)) => {
                    drop(state);
                    panic::resume_unwind(payload);
                }
                None => {}
            }
            let expired = deadline.is_some_and(|deadline| Instant::now() >= deadline);
            if state.signalled || expired {
                drop(state);
                if context.err().is_some() {
                    return Self::abandoned(context);
                }
                state = slot.state.lock();
                state.signalled = false;
                continue;
            }
            match deadline {
                Some(deadline) => {
                    slot.ready.wait_until(&mut state, deadline);
                }
                None => slot.ready.wait(&mut state),
            }
        }
    }

    fn abandoned(context: &Context) -> Outcome<T, E> {
        let error = context.err().unwrap_or(ContextError::Cancelled);
        #[cfg(feature = "tracing")]
        tracing::debug!(%error, "continuation abandoned its worker");
        Outcome::fail(E::from(error))
    }

    /// Transforms the value of a successful run.
    ///
    /// The source runs under the same context, so cancellation is checked
    /// again before and during it.
    pub fn map<U, F>(&self, function: F) -> Continuation<U, E>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        let source = self.clone();
        Continuation::new(move |context| source.run(context).map(&function))
    }

    /// Chains a continuation built from the value of a successful run.
    ///
    /// Both stages run under the same context, each one cancellable.
    pub fn flat_map<U, F>(&self, function: F) -> Continuation<U, E>
    where
        F: Fn(T) -> Continuation<U, E> + Send + Sync + 'static,
        U: Send + 'static,
    {
        let source = self.clone();
        Continuation::new(move |context| {
            source
                .run(context)
                .flat_map(|value| function(value).run(context))
        })
    }
}

#[cfg(feature = "async")]
impl<T, E> Continuation<T, E>
where
    T: Send + 'static,
    E: From<ContextError> + Send + 'static,
{
    /// Runs on tokio's blocking pool so async callers do not stall their executor.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the action panics before the context is done.
    pub async fn run_async(&self, context: &Context) -> Outcome<T, E> {
        let continuation = self.clone();
        let context = context.clone();
        match tokio::task::spawn_blocking(move || continuation.run(&context)).await {
            Ok(outcome) => outcome,
            Err(error) if error.is_panic() => panic::resume_unwind(error.into_panic()),
            Err(_) => Outcome::fail(E::from(ContextError::Cancelled)),
        }
    }
}

impl<T, E> Clone for Continuation<T, E> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
        }
    }
}

impl<T, E> fmt::Debug for Continuation<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Continuation").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Continuation<i32>: Send, Sync, Clone);
