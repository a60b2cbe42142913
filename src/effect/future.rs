//! One-time asynchronous computation.
//!
//! A [`Future`] wraps an action returning an [`Outcome`]. The action runs at
//! most once, on a worker thread, no matter how many threads wait on the
//! future or its clones; every waiter observes the same outcome.
//!
//! # Lifecycle
//!
//! ```text
//! Pending --(first wait)--> Running --> Completed
//!                                   \--> Poisoned   (the action panicked)
//! ```
//!
//! [`Future::new`] is lazy: nothing runs until the first [`Future::wait`].
//! [`Future::spawn`] starts the action immediately in the background.
//! [`Future::map`] and [`Future::flat_map`] build new lazy futures and never
//! start the source themselves.
//!
//! A future has no cancellation. Once started, its action runs to completion
//! and the outcome is kept for as long as any clone is alive.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//!
//! use kleisli::control::Outcome;
//! use kleisli::effect::Future;
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//! let future = Future::<usize, String>::new(move || {
//!     Outcome::succeed(counter.fetch_add(1, Ordering::SeqCst) + 1)
//! });
//!
//! let waiters: Vec<_> = (0..4)
//!     .map(|_| {
//!         let future = future.clone();
//!         thread::spawn(move || future.wait())
//!     })
//!     .collect();
//!
//! for waiter in waiters {
//!     assert_eq!(waiter.join().unwrap(), Outcome::Success(1));
//! }
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;

use parking_lot::Mutex;

use crate::control::Outcome;

const STATE_PENDING: u8 = 0;
const STATE_RUNNING: u8 = 1;
const STATE_COMPLETED: u8 = 2;
const STATE_POISONED: u8 = 3;

const WORKER_NAME: &str = "kleisli-future";

/// Error returned by [`Future::try_wait`] when the action panicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuturePoisonedError;

impl fmt::Display for FuturePoisonedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Future: action panicked before producing an outcome")
    }
}

impl std::error::Error for FuturePoisonedError {}

/// Progress of a [`Future`]'s action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FutureState {
    /// Nobody has waited yet and the action has not started.
    Pending,
    /// The action is running.
    Running,
    /// The action finished and its outcome is available.
    Completed,
    /// The action panicked.
    Poisoned,
}

impl FutureState {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            STATE_PENDING => Self::Pending,
            STATE_RUNNING => Self::Running,
            STATE_COMPLETED => Self::Completed,
            _ => Self::Poisoned,
        }
    }
}

type Action<T, E> = Box<dyn FnOnce() -> Outcome<T, E> + Send>;

struct Shared<T, E> {
    action: Mutex<Option<Action<T, E>>>,
    outcome: OnceLock<Result<Outcome<T, E>, FuturePoisonedError>>,
    state: AtomicU8,
}

impl<T, E> Shared<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Returns the outcome, running the action first if nobody has.
    ///
    /// Concurrent callers block inside `get_or_init` until the single
    /// initialiser finishes.
    fn resolve(&self, on_worker: bool) -> &Result<Outcome<T, E>, FuturePoisonedError> {
        self.outcome.get_or_init(|| self.execute(on_worker))
    }

    fn execute(&self, on_worker: bool) -> Result<Outcome<T, E>, FuturePoisonedError> {
        if self
            .state
            .compare_exchange(STATE_PENDING, STATE_RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FuturePoisonedError);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(on_worker, "future action started");

        let action = self.action.lock().take();
        let result = match action {
            Some(action) if on_worker => run_guarded(action),
            Some(action) => run_on_worker(action),
            None => Err(FuturePoisonedError),
        };

        let next = if result.is_ok() {
            STATE_COMPLETED
        } else {
            STATE_POISONED
        };
        self.state.store(next, Ordering::Release);

        #[cfg(feature = "tracing")]
        {
            if result.is_ok() {
                tracing::debug!("future action completed");
            } else {
                tracing::warn!("future action panicked");
            }
        }

        result
    }
}

fn run_guarded<T, E>(action: Action<T, E>) -> Result<Outcome<T, E>, FuturePoisonedError> {
    catch_unwind(AssertUnwindSafe(action)).map_err(|_| FuturePoisonedError)
}

fn run_on_worker<T, E>(action: Action<T, E>) -> Result<Outcome<T, E>, FuturePoisonedError>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let slot = Arc::new(Mutex::new(Some(action)));
    let worker_slot = Arc::clone(&slot);
    let spawned = thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || worker_slot.lock().take().map(run_guarded));
    match spawned {
        Ok(worker) => worker.join().ok().flatten().unwrap_or(Err(FuturePoisonedError)),
        // The closure was dropped unrun, so the action is still in its slot.
        Err(_) => slot.lock().take().map_or(Err(FuturePoisonedError), run_guarded),
    }
}

/// A computation whose action runs at most once and whose outcome is shared.
///
/// Clones share the action and the outcome.
///
/// # Monad Laws
///
/// With `Future::pure` as `pure`, comparing the outcomes returned by `wait`:
///
/// - Left Identity: `Future::pure(a).flat_map(f) == f(a)`
/// - Right Identity: `m.flat_map(Future::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct Future<T, E> {
    shared: Arc<Shared<T, E>>,
}

impl<T, E> Future<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a lazy future. `action` starts on the first [`Future::wait`].
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> Outcome<T, E> + Send + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                action: Mutex::new(Some(Box::new(action))),
                outcome: OnceLock::new(),
                state: AtomicU8::new(STATE_PENDING),
            }),
        }
    }

    /// Creates a future and starts its action on a background thread.
    ///
    /// If no thread can be spawned the action starts on the first wait
    /// instead.
    pub fn spawn<F>(action: F) -> Self
    where
        F: FnOnce() -> Outcome<T, E> + Send + 'static,
        T: Sync,
        E: Sync,
    {
        let future = Self::new(action);
        let shared = Arc::clone(&future.shared);
        let started = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || {
                shared.resolve(true);
            });
        if let Err(error) = started {
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, "could not spawn future worker, deferring to first wait");
            #[cfg(not(feature = "tracing"))]
            let _ = error;
        }
        future
    }

    /// Creates a future that is already completed with a success.
    pub fn pure(value: T) -> Self {
        Self::completed(Outcome::succeed(value))
    }

    /// Creates a future that is already completed with a failure.
    pub fn fail(error: E) -> Self {
        Self::completed(Outcome::fail(error))
    }

    fn completed(outcome: Outcome<T, E>) -> Self {
        Self {
            shared: Arc::new(Shared {
                action: Mutex::new(None),
                outcome: OnceLock::from(Ok(outcome)),
                state: AtomicU8::new(STATE_COMPLETED),
            }),
        }
    }

    /// Blocks until the outcome is available, starting the action if needed.
    ///
    /// # Errors
    ///
    /// Returns [`FuturePoisonedError`] if the action panicked.
    pub fn try_wait(&self) -> Result<Outcome<T, E>, FuturePoisonedError>
    where
        T: Clone,
        E: Clone,
    {
        self.shared.resolve(false).clone()
    }

    /// Blocks until the outcome is available, starting the action if needed.
    ///
    /// # Panics
    ///
    /// Panics if the action panicked. Use [`Future::try_wait`] to observe
    /// that case as an error.
    pub fn wait(&self) -> Outcome<T, E>
    where
        T: Clone,
        E: Clone,
    {
        match self.try_wait() {
            Ok(outcome) => outcome,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the outcome if the action has already completed, without blocking
    /// and without starting the action.
    pub fn peek(&self) -> Option<Outcome<T, E>>
    where
        T: Clone,
        E: Clone,
    {
        self.shared.outcome.get()?.as_ref().ok().cloned()
    }

    /// Returns the current progress of the action.
    pub fn state(&self) -> FutureState {
        FutureState::from_raw(self.shared.state.load(Ordering::Acquire))
    }

    /// Returns `true` once the outcome is available.
    pub fn is_completed(&self) -> bool {
        self.state() == FutureState::Completed
    }

    /// Creates a lazy future that waits on this one and transforms a success.
    ///
    /// A failure is carried forward without calling `function`; a panic in
    /// this future's action poisons the new one too.
    pub fn map<U, F>(&self, function: F) -> Future<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        T: Clone + Sync,
        E: Clone + Sync,
        U: Send + 'static,
    {
        let source = self.clone();
        Future::new(move || source.wait().map(function))
    }

    /// Creates a lazy future that waits on this one and then on the future
    /// built from its success.
    pub fn flat_map<U, F>(&self, function: F) -> Future<U, E>
    where
        F: FnOnce(T) -> Future<U, E> + Send + 'static,
        T: Clone + Sync,
        E: Clone + Sync,
        U: Clone + Send + Sync + 'static,
    {
        let source = self.clone();
        Future::new(move || source.wait().flat_map(|value| function(value).wait()))
    }
}

#[cfg(feature = "async")]
impl<T, E> Future<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Waits on tokio's blocking pool so async callers do not stall their executor.
    ///
    /// # Errors
    ///
    /// Returns [`FuturePoisonedError`] if the action panicked.
    pub async fn wait_async(&self) -> Result<Outcome<T, E>, FuturePoisonedError> {
        let future = self.clone();
        tokio::task::spawn_blocking(move || future.try_wait())
            .await
            .unwrap_or(Err(FuturePoisonedError))
    }
}

impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Future<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shared.outcome.get() {
            Some(Ok(outcome)) => formatter.debug_tuple("Future").field(outcome).finish(),
            Some(Err(_)) => formatter.write_str("Future(<poisoned>)"),
            None => formatter.write_str("Future(<pending>)"),
        }
    }
}

static_assertions::assert_impl_all!(Future<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(FuturePoisonedError: std::error::Error, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn counting(counter: &Arc<AtomicUsize>) -> Future<usize, String> {
        let counter = Arc::clone(counter);
        Future::new(move || Outcome::succeed(counter.fetch_add(1, Ordering::SeqCst) + 1))
    }

    #[rstest]
    fn new_is_lazy() {
        let runs = Arc::new(AtomicUsize::new(0));
        let future = counting(&runs);
        thread::sleep(Duration::from_millis(10));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(future.state(), FutureState::Pending);
        assert_eq!(future.peek(), None);
    }

    #[rstest]
    fn wait_memoises() {
        let runs = Arc::new(AtomicUsize::new(0));
        let future = counting(&runs);
        assert_eq!(future.wait(), Outcome::Success(1));
        assert_eq!(future.wait(), Outcome::Success(1));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(future.is_completed());
        assert_eq!(future.peek(), Some(Outcome::Success(1)));
    }

    #[rstest]
    fn action_runs_on_named_worker() {
        let future = Future::<String, ()>::new(|| {
            Outcome::succeed(thread::current().name().unwrap_or_default().to_string())
        });
        assert_eq!(future.wait(), Outcome::Success(WORKER_NAME.to_string()));
    }

    #[rstest]
    fn spawn_starts_eagerly() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let future = Future::<usize, String>::spawn(move || {
            Outcome::succeed(counter.fetch_add(1, Ordering::SeqCst) + 1)
        });
        for _ in 0..200 {
            if future.is_completed() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(future.wait(), Outcome::Success(1));
    }

    #[rstest]
    fn map_does_not_start_source() {
        let runs = Arc::new(AtomicUsize::new(0));
        let source = counting(&runs);
        let mapped = source.map(|value| value * 10);
        assert_eq!(source.state(), FutureState::Pending);
        assert_eq!(mapped.wait(), Outcome::Success(10));
        assert_eq!(source.wait(), Outcome::Success(1));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn failure_skips_flat_map() {
        let called = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&called);
        let chained = Future::<i32, String>::fail("offline".to_string()).flat_map(move |value| {
            seen.fetch_add(1, Ordering::SeqCst);
            Future::pure(value)
        });
        assert_eq!(chained.wait(), Outcome::Failure("offline".to_string()));
        assert_eq!(called.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn panicking_action_poisons() {
        let future = Future::<i32, String>::new(|| panic!("boom"));
        assert_eq!(future.try_wait(), Err(FuturePoisonedError));
        assert_eq!(future.state(), FutureState::Poisoned);
        assert_eq!(future.try_wait(), Err(FuturePoisonedError));
        assert_eq!(future.map(|value| value + 1).try_wait(), Err(FuturePoisonedError));
    }

    #[rstest]
    #[should_panic(expected = "action panicked")]
    fn wait_panics_when_poisoned() {
        let future = Future::<i32, String>::new(|| panic!("boom"));
        let _ = future.wait();
    }

    #[rstest]
    fn debug_reflects_progress() {
        let future = Future::<i32, String>::pure(3);
        assert_eq!(format!("{future:?}"), "Future(Success(3))");
        let pending = Future::<i32, String>::new(|| Outcome::succeed(1));
        assert_eq!(format!("{pending:?}"), "Future(<pending>)");
    }
}
