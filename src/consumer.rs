use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::errors::ConsumerError;
use crate::queue::{MessageQueue, QueueMessage};

/// The poll/process/acknowledge loop over an at-least-once queue.
///
/// Each iteration receives a batch, hands every message body to the
/// handler in receipt order, and deletes each message with its own receipt
/// handle once the handler succeeds. A failure in the receive call, the
/// handler, or the delete is logged and the loop moves on; the affected
/// message stays unacknowledged and reappears after the queue's visibility
/// timeout.
///
/// Because delivery is at-least-once, the handler may see the same body
/// more than once (for example when a delete fails after processing
/// succeeded). Handlers must be safe to repeat.
pub struct Consumer<Q, H> {
    queue: Q,
    handler: H,
    shutdown: CancellationToken,
}

impl<Q, H, Fut> Consumer<Q, H>
where
    Q: MessageQueue,
    H: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), ConsumerError>> + Send,
{
    /// Creates a consumer over `queue`, dispatching message bodies to
    /// `handler` until `shutdown` is cancelled.
    pub fn new(queue: Q, handler: H, shutdown: CancellationToken) -> Self {
        Consumer {
            queue,
            handler,
            shutdown,
        }
    }

    /// Runs the loop until the shutdown token is cancelled.
    ///
    /// Cancellation is checked at the top of each iteration only: an
    /// in-flight receive/process/acknowledge sequence always completes, so
    /// shutdown latency is bounded by one long-poll wait plus the current
    /// batch. Messages still in flight at shutdown are left unacknowledged
    /// for redelivery rather than force-acknowledged.
    pub async fn run(self) {
        info!("consumer started");

        while !self.shutdown.is_cancelled() {
            self.poll_once().await;
        }

        info!("consumer stopped");
    }

    async fn poll_once(&self) {
        let batch = match self.queue.receive().await {
            Ok(batch) => batch,
            Err(err) => {
                error!(error = %err, "failed to receive messages");
                return;
            }
        };

        if batch.is_empty() {
            debug!("no messages received");
            return;
        }

        for message in batch {
            self.process(message).await;
        }
    }

    /// Processes one delivery and, only on handler success, deletes it
    /// using that delivery's own receipt handle.
    async fn process(&self, message: QueueMessage) {
        let QueueMessage {
            body,
            receipt_handle,
        } = message;

        if let Err(err) = (self.handler)(body).await {
            warn!(error = %err, "message handling failed, leaving delivery for retry");
            return;
        }

        if let Err(err) = self.queue.acknowledge(&receipt_handle).await {
            warn!(error = %err, "failed to acknowledge message, delivery will reappear");
        }
    }
}
