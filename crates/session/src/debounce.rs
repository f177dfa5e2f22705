//! Debounced commits of raw input.
//!
//! Every `push` cancels the pending timer and arms a new one. When a timer
//! survives its full quiet period, the value it carries is sent on the
//! commit channel. Each pending value is tagged with a generation number
//! and only the timer holding the current generation may commit it, so a
//! stale timer can never deliver an older value.
//!
//! Timers are tokio tasks; `push` must be called from within a runtime.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Value waiting for its quiet period to elapse
struct Pending<T> {
    generation: u64,
    value: T,
}

type Slot<T> = Arc<Mutex<Option<Pending<T>>>>;

/// Take the pending value if it still belongs to `generation`
fn take_if_current<T>(slot: &Slot<T>, generation: u64) -> Option<T> {
    let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
    let current = guard.as_ref().is_some_and(|p| p.generation == generation);
    if current {
        guard.take().map(|p| p.value)
    } else {
        None
    }
}

pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    generation: u64,
    slot: Slot<T>,
    timer: Option<JoinHandle<()>>,
    commits: mpsc::UnboundedSender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its commits arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (commits, receiver) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            generation: 0,
            slot: Arc::new(Mutex::new(None)),
            timer: None,
            commits,
        };
        (debouncer, receiver)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new raw value and restart the quiet period.
    pub fn push(&mut self, value: T) {
        self.abort_timer();
        self.generation += 1;
        let generation = self.generation;

        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(Pending { generation, value });

        let slot = Arc::clone(&self.slot);
        let commits = self.commits.clone();
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(value) = take_if_current(&slot, generation) {
                tracing::debug!("Debounce window elapsed, committing generation {}", generation);
                let _ = commits.send(value);
            }
        }));
    }

    /// Commit the pending value now instead of waiting.
    ///
    /// Returns `false` if nothing was pending.
    pub fn flush(&mut self) -> bool {
        self.abort_timer();
        match take_if_current(&self.slot, self.generation) {
            Some(value) => {
                let _ = self.commits.send(value);
                true
            }
            None => false,
        }
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&mut self) {
        self.abort_timer();
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// True while a value is waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::sleep;

    const DELAY: Duration = Duration::from_millis(250);

    #[tokio::test(start_paused = true)]
    async fn test_burst_commits_once_with_last_value() {
        let (mut debouncer, mut commits) = Debouncer::new(DELAY);

        debouncer.push("r".to_string());
        sleep(Duration::from_millis(50)).await;
        debouncer.push("re".to_string());
        sleep(Duration::from_millis(50)).await;
        debouncer.push("rem".to_string());

        sleep(Duration::from_millis(300)).await;
        assert_eq!(commits.try_recv().unwrap(), "rem");
        assert_eq!(commits.try_recv(), Err(TryRecvError::Empty));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_commits_before_quiet_period() {
        let (mut debouncer, mut commits) = Debouncer::new(DELAY);

        debouncer.push(1);
        sleep(Duration::from_millis(200)).await;
        assert_eq!(commits.try_recv(), Err(TryRecvError::Empty));
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(100)).await;
        assert_eq!(commits.try_recv(), Ok(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_quiet_period_commits_separately() {
        let (mut debouncer, mut commits) = Debouncer::new(DELAY);

        debouncer.push("go");
        sleep(Duration::from_millis(400)).await;
        debouncer.push("golang");
        sleep(Duration::from_millis(400)).await;

        assert_eq!(commits.try_recv(), Ok("go"));
        assert_eq!(commits.try_recv(), Ok("golang"));
        assert_eq!(commits.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_commits_immediately() {
        let (mut debouncer, mut commits) = Debouncer::new(DELAY);

        debouncer.push("react");
        assert!(debouncer.flush());
        assert_eq!(commits.try_recv(), Ok("react"));

        // The aborted timer must not commit a second time
        sleep(Duration::from_millis(500)).await;
        assert_eq!(commits.try_recv(), Err(TryRecvError::Empty));
        assert!(!debouncer.flush());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_value() {
        let (mut debouncer, mut commits) = Debouncer::new(DELAY);

        debouncer.push("draft");
        debouncer.cancel();
        sleep(Duration::from_millis(500)).await;

        assert_eq!(commits.try_recv(), Err(TryRecvError::Empty));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_leaves_no_timer() {
        let (mut debouncer, mut commits) = Debouncer::new(DELAY);

        debouncer.push("typed");
        drop(debouncer);

        // All senders are gone once the timer task is torn down
        assert_eq!(commits.recv().await, None);
    }
}
