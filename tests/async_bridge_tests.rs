#![cfg(feature = "async")]

//! Tests for awaiting Future and Continuation from tokio tasks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use kleisli::control::Outcome;
use kleisli::effect::{Context, ContextError, Continuation, Future, FuturePoisonedError};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn wait_async_shares_one_execution() {
    let counter = Arc::new(AtomicUsize::new(0));
    let shared = Arc::clone(&counter);
    let future = Future::<usize, String>::new(move || {
        thread::sleep(Duration::from_millis(20));
        Outcome::succeed(shared.fetch_add(1, Ordering::SeqCst) + 1)
    });

    let tasks: Vec<_> = (0..5)
        .map(|_| {
            let future = future.clone();
            tokio::spawn(async move { future.wait_async().await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), Ok(Outcome::Success(1)));
    }
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn wait_async_reports_poisoning() {
    let future = Future::<i32, String>::new(|| panic!("broken"));
    assert_eq!(future.wait_async().await, Err(FuturePoisonedError));
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn run_async_is_cancelled_by_context() {
    let slow = Continuation::<u8>::new(|_| {
        thread::sleep(Duration::from_secs(5));
        Outcome::succeed(1)
    });
    let (context, cancel) = Context::background().with_cancel();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });

    let started = Instant::now();
    let outcome = slow.run_async(&context).await;
    assert_eq!(outcome, Outcome::Failure(ContextError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[rstest]
#[tokio::test]
async fn run_async_returns_worker_result() {
    let quick = Continuation::<String>::pure("ready".to_string()).map(|text| text.to_uppercase());
    assert_eq!(quick.run_async(&Context::background()).await, Outcome::Success("READY".to_string()));
}
