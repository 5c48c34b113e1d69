use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::ReceiverStream;

/// Refetch interval while any record is still processing.
pub const PROCESSING_POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Refetch interval of the health check.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Shorter intervals, including zero, are raised to this.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Receiving end of a running poller.
///
/// Call `stop()` to cancel. Dropping the handle (or the stream from
/// `into_stream()`) also ends the poller before its next fetch.
pub struct PollHandle<T, E> {
    results: mpsc::Receiver<Result<T, E>>,
    task: JoinHandle<()>,
}

impl<T, E> PollHandle<T, E> {
    /// The next fetch result. `None` once polling has finished.
    pub async fn next(&mut self) -> Option<Result<T, E>> {
        self.results.recv().await
    }

    pub fn stop(self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn into_stream(self) -> ReceiverStream<Result<T, E>> {
        ReceiverStream::new(self.results)
    }
}

/// Fetch now, then every `interval`, until a successful result satisfies
/// `stop_when`.
///
/// Every result is delivered, including the one that stops polling. Errors
/// do not stop polling. `interval` is at least [`MIN_POLL_INTERVAL`].
///
/// ```ignore
/// let client = ApiClient::new(base);
/// let mut handle = poll(PROCESSING_POLL_INTERVAL, move || {
///     let client = client.clone();
///     async move { client.roles(&params).await }
/// }, |page| !any_processing(&page.items, |r| r.status == "processing"));
/// while let Some(result) = handle.next().await { /* re-render */ }
/// ```
pub fn poll<T, E, F, Fut, P>(interval: Duration, mut fetch: F, stop_when: P) -> PollHandle<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    P: Fn(&T) -> bool + Send + 'static,
{
    let (sender, results) = mpsc::channel(1);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(MIN_POLL_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = sender.closed() => break,
                _ = ticker.tick() => {}
            }

            let result = fetch().await;
            let done = matches!(&result, Ok(data) if stop_when(data));

            if sender.send(result).await.is_err() {
                break;
            }
            if done {
                tracing::debug!("poll condition met, stopping");
                break;
            }
        }
    });

    PollHandle { results, task }
}

/// The usual `stop_when` companion: keep polling while any item is processing.
pub fn any_processing<T>(items: &[T], is_processing: impl Fn(&T) -> bool) -> bool {
    items.iter().any(is_processing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn stops_when_condition_met() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut handle = poll(
            Duration::from_millis(5),
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Ok::<_, String>(n) }
            },
            |n: &usize| *n >= 3,
        );

        let mut seen = Vec::new();
        while let Some(result) = handle.next().await {
            seen.push(result.unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn errors_are_delivered_and_polling_continues() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let handle = poll(
            Duration::from_millis(5),
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Err("offline".to_string())
                    } else {
                        Ok(n)
                    }
                }
            },
            |_| true,
        );

        let results: Vec<_> = handle.into_stream().collect().await;
        assert_eq!(results, vec![Err("offline".to_string()), Ok(1)]);
    }

    #[tokio::test]
    async fn stop_cancels_polling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut handle = poll(
            Duration::from_millis(5),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, String>(()) }
            },
            |_| false,
        );

        assert!(handle.next().await.is_some());
        handle.stop();
        let after_stop = calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(calls.load(Ordering::SeqCst) <= after_stop + 1);
    }

    #[tokio::test]
    async fn zero_interval_still_polls() {
        let mut handle = poll(
            Duration::ZERO,
            || async { Ok::<_, String>(7u32) },
            |n: &u32| *n == 7,
        );

        assert_eq!(handle.next().await, Some(Ok(7)));
        assert_eq!(handle.next().await, None);
    }

    #[test]
    fn any_processing_predicate() {
        let statuses = ["done", "processing", "done"];
        assert!(any_processing(&statuses, |s| *s == "processing"));
        assert!(!any_processing(&statuses[..1], |s| *s == "processing"));
    }
}
