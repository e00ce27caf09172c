use std::{future::Future, time::Duration};

use time::OffsetDateTime;
use tokio::sync::oneshot;
use uuid::Uuid;

use super::{Receipt, Submission};

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Where contact submissions go. A real backend would POST the four fields
/// and map the response onto a [`Receipt`].
pub trait ContactTransport {
    fn deliver(
        &self,
        submission: Submission,
    ) -> impl Future<Output = anyhow::Result<Receipt>> + Send + 'static;
}

/// Waits for a fixed delay, then reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl ContactTransport for SimulatedTransport {
    fn deliver(
        &self,
        submission: Submission,
    ) -> impl Future<Output = anyhow::Result<Receipt>> + Send + 'static {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(ticket = %submission.ticket, "simulated delivery finished");
            Ok(Receipt {
                ticket: submission.ticket,
                delivered_at: OffsetDateTime::now_utc(),
            })
        }
    }
}

/// How a delivery ended, as seen by the form that started it.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Delivered(Receipt),
    Failed(String),
    /// The owning [`SubmitTask`] was dropped before the transport finished.
    Cancelled,
}

/// Owner side of an in-flight delivery.
///
/// [`SubmitTask::new`] hands back the delivery future alongside the task; the
/// future resolves to [`Delivery::Cancelled`] as soon as the task is dropped,
/// without waiting for the transport. Nothing is spawned here, so the future
/// can be driven by any executor.
#[derive(Debug)]
#[must_use = "dropping a SubmitTask cancels the delivery"]
pub struct SubmitTask {
    ticket: Uuid,
    cancel: oneshot::Sender<()>,
}

impl SubmitTask {
    pub fn new<T>(
        transport: &T,
        submission: Submission,
    ) -> (Self, impl Future<Output = Delivery> + Send + 'static)
    where
        T: ContactTransport,
    {
        let ticket = submission.ticket;
        let (cancel, cancelled) = oneshot::channel::<()>();
        let delivery = transport.deliver(submission);
        let future = async move {
            tokio::select! {
                biased;
                _ = cancelled => Delivery::Cancelled,
                result = delivery => match result {
                    Ok(receipt) => Delivery::Delivered(receipt),
                    Err(error) => Delivery::Failed(format!("{error:#}")),
                },
            }
        };
        (Self { ticket, cancel }, future)
    }

    pub fn ticket(&self) -> Uuid {
        self.ticket
    }

    /// Whether the delivery future has completed or been dropped.
    pub fn is_finished(&self) -> bool {
        self.cancel.is_closed()
    }
}

impl Drop for SubmitTask {
    fn drop(&mut self) {
        if !self.cancel.is_closed() {
            tracing::debug!(ticket = %self.ticket, "cancelling pending contact delivery");
        }
    }
}
