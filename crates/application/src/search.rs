//! Debounced execution for interactive search boxes.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiet period before a search fires.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Delays running a task until input has been quiet for a while.
///
/// Each [`Debouncer::call`] aborts the previously scheduled task, so only
/// the latest input within the delay window is acted upon.
#[derive(Debug, Default)]
pub struct Debouncer {
    delay: Option<Duration>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Creates a debouncer with the default delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: None,
            pending: None,
        }
    }

    /// Creates a debouncer with a custom delay.
    #[must_use]
    pub const fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            pending: None,
        }
    }

    /// Schedules `task` to run after the quiet period, cancelling any
    /// previously scheduled task.
    pub fn call<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay.unwrap_or(DEFAULT_SEARCH_DELAY);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancels the scheduled task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_only_latest_call_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::with_delay(Duration::from_millis(20));

        for _ in 0..5 {
            let fired = Arc::clone(&fired);
            debouncer.call(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_prevents_firing() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::with_delay(Duration::from_millis(20));

        {
            let fired = Arc::clone(&fired);
            debouncer.call(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
