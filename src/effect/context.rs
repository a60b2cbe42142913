//! Cancellation contexts for [`Continuation`](super::Continuation).
//!
//! A [`Context`] carries a cancellation signal and an optional deadline.
//! Contexts form a tree: a context derived with [`Context::with_cancel`],
//! [`Context::with_timeout`] or [`Context::with_deadline`] is done as soon as
//! its parent is done, but cancelling a child never affects its parent.
//!
//! Cancellation is cooperative. Nothing is interrupted when a context becomes
//! done; blocked waiters wake up and long-running work may poll
//! [`Context::err`] to stop early.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//!
//! use kleisli::effect::{Context, ContextError};
//!
//! let root = Context::background();
//! let (child, cancel) = root.with_cancel();
//! assert_eq!(child.err(), None);
//!
//! cancel.cancel();
//! assert_eq!(child.err(), Some(ContextError::Cancelled));
//! assert_eq!(root.err(), None);
//!
//! let (short, _cancel) = root.with_timeout(Duration::from_millis(5));
//! short.wait();
//! assert_eq!(short.err(), Some(ContextError::DeadlineExceeded));
//! ```

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// The reason a [`Context`] is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextError {
    /// The context, or one of its ancestors, was cancelled explicitly.
    Cancelled,
    /// The context's deadline passed.
    DeadlineExceeded,
}

impl fmt::Display for ContextError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => formatter.write_str("context cancelled"),
            Self::DeadlineExceeded => formatter.write_str("context deadline exceeded"),
        }
    }
}

impl std::error::Error for ContextError {}

type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Signal {
    error: Option<ContextError>,
    wakers: Vec<(u64, Waker)>,
    next_waker: u64,
    children: Vec<Weak<Node>>,
}

struct Node {
    signal: Mutex<Signal>,
    done: Condvar,
    deadline: Option<Instant>,
    parent: Weak<Node>,
}

impl Node {
    fn new(deadline: Option<Instant>, parent: Weak<Self>) -> Self {
        Self {
            signal: Mutex::new(Signal::default()),
            done: Condvar::new(),
            deadline,
            parent,
        }
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Marks this node and its live descendants done with `error`.
    ///
    /// The first error wins; later calls are no-ops.
    fn finish(&self, error: ContextError) {
        let (wakers, children) = {
            let mut signal = self.signal.lock();
            if signal.error.is_some() {
                return;
            }
            signal.error = Some(error);
            self.done.notify_all();
            (
                std::mem::take(&mut signal.wakers),
                std::mem::take(&mut signal.children),
            )
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(%error, wakers = wakers.len(), children = children.len(), "context done");

        for (_, waker) in wakers {
            waker();
        }
        for child in children.iter().filter_map(Weak::upgrade) {
            child.finish(error);
        }
    }

    fn error(&self) -> Option<ContextError> {
        let recorded = self.signal.lock().error;
        if recorded.is_some() {
            return recorded;
        }
        if self.expired() {
            self.finish(ContextError::DeadlineExceeded);
            return self.signal.lock().error;
        }
        None
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if let Some(parent) = self.parent.upgrade() {
            parent
                .signal
                .lock()
                .children
                .retain(|child| child.strong_count() > 0);
        }
    }
}

/// A cancellation signal with an optional deadline.
///
/// Cloning a `Context` is cheap and every clone observes the same signal.
#[derive(Clone)]
pub struct Context {
    node: Arc<Node>,
}

impl Context {
    /// The root context: never cancelled and without a deadline.
    #[must_use]
    pub fn background() -> Self {
        Self {
            node: Arc::new(Node::new(None, Weak::new())),
        }
    }

    /// Derives a child that is done when `handle.cancel()` is called or when
    /// this context is done, whichever comes first.
    #[must_use]
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        self.derive(self.node.deadline)
    }

    /// Derives a child whose deadline is `timeout` from now.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> (Self, CancelHandle) {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a child whose deadline is `deadline`.
    ///
    /// A parent deadline that comes earlier still applies to the child.
    #[must_use]
    pub fn with_deadline(&self, deadline: Instant) -> (Self, CancelHandle) {
        let effective = self
            .node
            .deadline
            .map_or(deadline, |inherited| inherited.min(deadline));
        self.derive(Some(effective))
    }

    fn derive(&self, deadline: Option<Instant>) -> (Self, CancelHandle) {
        let child = Arc::new(Node::new(deadline, Arc::downgrade(&self.node)));
        let inherited = {
            let mut signal = self.node.signal.lock();
            if signal.error.is_none() {
                signal.children.push(Arc::downgrade(&child));
            }
            signal.error
        };
        if let Some(error) = inherited {
            child.finish(error);
        }
        let handle = CancelHandle {
            node: Arc::downgrade(&child),
        };
        (Self { node: child }, handle)
    }

    /// Returns why the context is done, or `None` while it is still live.
    ///
    /// A passed deadline is observed here even if nobody is waiting on it.
    #[must_use]
    pub fn err(&self) -> Option<ContextError> {
        self.node.error()
    }

    /// Returns `true` once the context is cancelled or past its deadline.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.node.deadline
    }

    /// Blocks until the context is done.
    ///
    /// Blocks forever on a context that can be neither cancelled nor expired,
    /// such as [`Context::background`].
    pub fn wait(&self) {
        self.block_until(None);
    }

    /// Blocks until the context is done or `timeout` elapses.
    ///
    /// Returns `true` if the context is done.
    #[must_use]
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.block_until(Some(Instant::now() + timeout))
    }

    fn block_until(&self, limit: Option<Instant>) -> bool {
        let until = match (self.node.deadline, limit) {
            (Some(deadline), Some(limit)) => Some(deadline.min(limit)),
            (deadline, limit) => deadline.or(limit),
        };
        let mut signal = self.node.signal.lock();
        loop {
            if signal.error.is_some() {
                return true;
            }
            if self.node.expired() {
                drop(signal);
                self.node.finish(ContextError::DeadlineExceeded);
                return true;
            }
            if limit.is_some_and(|limit| Instant::now() >= limit) {
                return false;
            }
            match until {
                Some(instant) => {
                    self.node.done.wait_until(&mut signal, instant);
                }
                None => self.node.done.wait(&mut signal),
            }
        }
    }

    /// Registers `waker` to be called once when the context is cancelled.
    ///
    /// Returns `None` without registering when the context is already done.
    /// A passed deadline runs the wakers only once somebody observes it
    /// through [`Context::err`], so waiters bound their own waits by
    /// [`Context::deadline`]. Wakers run on the thread that finishes the
    /// context and must not block on anything that thread may hold.
    pub(crate) fn register<W>(&self, waker: W) -> Option<Registration>
    where
        W: Fn() + Send + Sync + 'static,
    {
        let mut signal = self.node.signal.lock();
        if signal.error.is_some() {
            return None;
        }
        let id = signal.next_waker;
        signal.next_waker += 1;
        signal.wakers.push((id, Arc::new(waker)));
        Some(Registration {
            node: Arc::downgrade(&self.node),
            id,
        })
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Context")
            .field("err", &self.node.signal.lock().error)
            .field("deadline", &self.node.deadline)
            .finish()
    }
}

/// Cancels the context it was created with, and every context derived from it.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    node: Weak<Node>,
}

impl CancelHandle {
    /// Cancels the context. Idempotent; a context that is already done keeps
    /// its original error.
    pub fn cancel(&self) {
        if let Some(node) = self.node.upgrade() {
            node.finish(ContextError::Cancelled);
        }
    }
}

/// Removes a waker from its context when dropped.
pub(crate) struct Registration {
    node: Weak<Node>,
    id: u64,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(node) = self.node.upgrade() {
            node.signal.lock().wakers.retain(|(id, _)| *id != self.id);
        }
    }
}

static_assertions::assert_impl_all!(Context: Send, Sync, Clone);
static_assertions::assert_impl_all!(CancelHandle: Send, Sync);
static_assertions::assert_impl_all!(ContextError: std::error::Error, Send, Sync, Copy);
