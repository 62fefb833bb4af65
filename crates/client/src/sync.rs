//! Fire-and-forget history persistence.
//!
//! [`HistorySync::spawn`] starts a background task that drains a bounded
//! queue of [`NewCalculation`]s into a [`CalculationSink`]. Callers hold a
//! [`HistorySender`] whose [`submit`](HistorySender::submit) never awaits:
//! a full queue, a stopped task or a failed request is logged and dropped.
//! The task exits once every sender has been dropped.

use async_trait::async_trait;
use sleepwise_core::sleep_cycle::NewCalculation;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api_client::{ClientError, HistoryClient};

/// Destination for history records.
#[async_trait]
pub trait CalculationSink: Send + Sync + 'static {
    async fn record(&self, input: &NewCalculation) -> Result<(), ClientError>;
}

#[async_trait]
impl CalculationSink for HistoryClient {
    async fn record(&self, input: &NewCalculation) -> Result<(), ClientError> {
        let entry = self.create(input).await?;
        tracing::debug!(
            calculation_id = entry.id,
            mode = %entry.mode,
            target_time = %entry.target_time,
            "History record stored"
        );
        Ok(())
    }
}

/// Cheap, cloneable handle for queueing history records.
#[derive(Clone)]
pub struct HistorySender {
    sender: mpsc::Sender<NewCalculation>,
}

impl HistorySender {
    /// Queue a record without waiting.
    ///
    /// Returns `true` if the record was queued. A `false` return has already
    /// been logged; callers are free to ignore it.
    pub fn submit(&self, input: NewCalculation) -> bool {
        match self.sender.try_send(input) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(dropped)) => {
                tracing::warn!(
                    mode = %dropped.direction,
                    target_time = %dropped.target_time_text(),
                    "History queue full, dropping record"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(dropped)) => {
                tracing::warn!(
                    mode = %dropped.direction,
                    target_time = %dropped.target_time_text(),
                    "History sync stopped, dropping record"
                );
                false
            }
        }
    }
}

/// Background service that forwards queued records to a sink.
pub struct HistorySync;

impl HistorySync {
    /// Start the sync task with a queue of `buffer` records.
    ///
    /// # Panics
    ///
    /// Panics if `buffer` is zero or if called outside a Tokio runtime.
    pub fn spawn<S: CalculationSink>(sink: S, buffer: usize) -> (HistorySender, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(buffer);
        let handle = tokio::spawn(Self::run(sink, receiver));
        (HistorySender { sender }, handle)
    }

    async fn run<S: CalculationSink>(sink: S, mut receiver: mpsc::Receiver<NewCalculation>) {
        while let Some(input) = receiver.recv().await {
            if let Err(e) = sink.record(&input).await {
                tracing::error!(
                    error = %e,
                    mode = %input.direction,
                    target_time = %input.target_time_text(),
                    "Failed to persist calculation history"
                );
            }
        }
        tracing::info!("History senders dropped, sync shutting down");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveTime;
    use sleepwise_core::sleep_cycle::Direction;
    use tokio::sync::Notify;

    use super::*;

    fn input(hour: u32) -> NewCalculation {
        NewCalculation {
            direction: Direction::Bedtime,
            target_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        }
    }

    /// Records everything it receives; optionally fails every call.
    #[derive(Clone, Default)]
    struct MemorySink {
        recorded: Arc<Mutex<Vec<NewCalculation>>>,
        fail: bool,
    }

    #[async_trait]
    impl CalculationSink for MemorySink {
        async fn record(&self, input: &NewCalculation) -> Result<(), ClientError> {
            self.recorded.lock().unwrap().push(*input);
            if self.fail {
                return Err(ClientError::ApiError {
                    status: 500,
                    body: "storage unavailable".into(),
                });
            }
            Ok(())
        }
    }

    /// Blocks every call until released.
    struct StalledSink {
        release: Arc<Notify>,
    }

    #[async_trait]
    impl CalculationSink for StalledSink {
        async fn record(&self, _input: &NewCalculation) -> Result<(), ClientError> {
            self.release.notified().await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn queued_records_reach_the_sink_in_order() {
        let sink = MemorySink::default();
        let recorded = Arc::clone(&sink.recorded);
        let (sender, handle) = HistorySync::spawn(sink, 8);

        assert!(sender.submit(input(21)));
        assert!(sender.submit(input(22)));
        drop(sender);
        handle.await.unwrap();

        assert_eq!(*recorded.lock().unwrap(), vec![input(21), input(22)]);
    }

    #[tokio::test]
    async fn sink_failures_do_not_stop_the_task() {
        let sink = MemorySink {
            fail: true,
            ..MemorySink::default()
        };
        let recorded = Arc::clone(&sink.recorded);
        let (sender, handle) = HistorySync::spawn(sink, 8);

        assert!(sender.submit(input(1)));
        assert!(sender.submit(input(2)));
        drop(sender);
        handle.await.unwrap();

        assert_eq!(recorded.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn full_queue_drops_without_blocking() {
        let release = Arc::new(Notify::new());
        let sink = StalledSink {
            release: Arc::clone(&release),
        };
        let (sender, handle) = HistorySync::spawn(sink, 1);

        // The first record is taken by the stalled sink, the second fills
        // the queue, so the third has nowhere to go.
        assert!(sender.submit(input(1)));
        tokio::task::yield_now().await;
        let outcomes: Vec<bool> = (2..=6).map(|h| sender.submit(input(h))).collect();
        assert!(outcomes.contains(&false), "a bounded queue must reject overflow");

        drop(sender);
        release.notify_waiters();
        handle.abort();
    }

    #[tokio::test]
    async fn submit_after_task_stops_returns_false() {
        let (sender, handle) = HistorySync::spawn(MemorySink::default(), 4);
        handle.abort();
        let _ = handle.await;

        assert!(!sender.submit(input(7)));
    }
}
