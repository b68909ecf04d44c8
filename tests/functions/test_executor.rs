//! Tests for blocking-executor wrappers.

use ripix::{run_in_executor, wrapper_run_in_executor};

#[tokio::test]
async fn test_run_in_executor() {
    let task = run_in_executor(|| (1..=10).sum::<u32>());
    assert_eq!(task.await.unwrap(), 55);
}

#[tokio::test]
async fn test_run_in_executor_join() {
    let value = run_in_executor(|| "done".to_string()).join().await.unwrap();
    assert_eq!(value, "done");
}

#[tokio::test]
async fn test_run_in_executor_panic_is_cancelled() {
    let task = run_in_executor(|| -> u8 { panic!("worker failed") });
    let err = task.join().await.unwrap_err();
    assert!(matches!(err, ripix::RipixError::TaskCancelled(_)));
}

#[tokio::test]
async fn test_wrapper_run_in_executor() {
    let parse = wrapper_run_in_executor(|s: String| s.parse::<i64>());

    assert_eq!(parse("42".to_string()).await.unwrap(), Ok(42));
    assert!(parse("nope".to_string()).await.unwrap().is_err());
}

#[tokio::test]
async fn test_wrapper_run_in_executor_concurrent_calls() {
    let double = wrapper_run_in_executor(|n: u32| n * 2);
    let tasks: Vec<_> = (0..8).map(&double).collect();
    let results = futures::future::join_all(tasks).await;

    let values: Vec<u32> = results.into_iter().map(Result::unwrap).collect();
    assert_eq!(values, vec![0, 2, 4, 6, 8, 10, 12, 14]);
}
