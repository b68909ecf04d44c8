//! Tests for the synchronous-to-async sequence adapter.

use futures::{StreamExt, TryStreamExt};
use ripix::aiter;
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_aiter_preserves_order() {
    let items = vec!["a", "b", "c", "d"];
    let collected: Vec<&str> = aiter(items.clone()).collect().await;
    assert_eq!(collected, items);
}

#[tokio::test]
async fn test_aiter_signals_exhaustion() {
    let mut stream = aiter([1, 2]);

    assert_eq!(stream.next().await, Some(1));
    assert_eq!(stream.next().await, Some(2));
    assert_eq!(stream.next().await, None);
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn test_aiter_empty_iterable() {
    let mut stream = aiter(Vec::<u32>::new());
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn test_aiter_infinite_source() {
    let first: Vec<u64> = aiter(0u64..).take(1_000).collect().await;
    assert_eq!(first.len(), 1_000);
    assert_eq!(first[999], 999);

    let mut cycling = aiter(["x", "y"].into_iter().cycle());
    for _ in 0..500 {
        assert!(cycling.next().await.is_some());
    }
}

#[tokio::test]
async fn test_aiter_forwards_faults_unchanged() {
    let source: Vec<Result<i32, String>> = vec![Ok(1), Err("boom".to_string()), Ok(3)];
    let mut stream = aiter(source);

    assert_eq!(stream.next().await, Some(Ok(1)));
    assert_eq!(stream.next().await, Some(Err("boom".to_string())));
    // The adapter does not stop on a fault; the consumer decides.
    assert_eq!(stream.next().await, Some(Ok(3)));
    assert_eq!(stream.next().await, None);
}

#[tokio::test]
async fn test_aiter_try_collect_stops_at_fault() {
    let source: Vec<Result<i32, &str>> = vec![Ok(1), Err("bad read"), Ok(3)];
    let result: Result<Vec<i32>, &str> = aiter(source).try_collect().await;
    assert_eq!(result, Err("bad read"));
}

#[tokio::test]
async fn test_aiter_is_lazy() {
    let pulled = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&pulled);
    let source = (0..3).inspect(move |_| *counter.lock().unwrap() += 1);

    let mut stream = aiter(source);
    assert_eq!(*pulled.lock().unwrap(), 0);

    assert_eq!(stream.next().await, Some(0));
    assert_eq!(*pulled.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_aiter_instances_are_independent() {
    let data = vec![1, 2, 3];
    let mut first = aiter(data.iter());
    let mut second = aiter(data.iter());

    assert_eq!(first.next().await, Some(&1));
    assert_eq!(first.next().await, Some(&2));
    assert_eq!(second.next().await, Some(&1));
}

#[tokio::test(flavor = "current_thread")]
async fn test_aiter_interleaves_with_other_tasks() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let consume = |tag: char| {
        let log = Arc::clone(&log);
        async move {
            let mut stream = aiter(0..3);
            while let Some(v) = stream.next().await {
                log.lock().unwrap().push((tag, v));
            }
        }
    };
    futures::join!(consume('a'), consume('b'));

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 6);
    let first_b = log.iter().position(|(tag, _)| *tag == 'b').unwrap();
    let last_a = log.iter().rposition(|(tag, _)| *tag == 'a').unwrap();
    assert!(first_b < last_a, "consumers ran back to back: {log:?}");
}
