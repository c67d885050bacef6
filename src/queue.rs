use async_trait::async_trait;
use aws_sdk_sqs::types::Message;
use tracing::warn;

use crate::errors::ConsumerError;

/// A single delivery received from the queue.
#[derive(Debug, Clone)]
pub struct QueueMessage {
    /// The message payload, treated as opaque text.
    pub body: String,

    /// One-time token for this specific delivery. Required to acknowledge
    /// the message; invalidated once consumed or once the visibility
    /// timeout expires and the message is redelivered under a new handle.
    pub receipt_handle: String,
}

impl QueueMessage {
    /// Converts an SDK message, dropping deliveries that cannot be
    /// processed (no body) or acknowledged (no receipt handle).
    pub fn from_sdk(message: Message) -> Option<Self> {
        let Some(body) = message.body else {
            warn!(message_id = ?message.message_id, "dropping delivery with no body");
            return None;
        };
        let Some(receipt_handle) = message.receipt_handle else {
            warn!(message_id = ?message.message_id, "dropping delivery with no receipt handle");
            return None;
        };

        Some(QueueMessage {
            body,
            receipt_handle,
        })
    }
}

/// Interface to an at-least-once delivery queue.
///
/// The consumer loop is written against this trait so it can be exercised
/// with an in-memory double instead of a live queue.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Long-polls the queue for the next batch of messages.
    ///
    /// An empty batch is a normal outcome, not an error.
    async fn receive(&self) -> Result<Vec<QueueMessage>, ConsumerError>;

    /// Deletes one delivery, identified by its own receipt handle.
    async fn acknowledge(&self, receipt_handle: &str) -> Result<(), ConsumerError>;
}

/// Receive-call parameters for long polling.
///
/// The wait time doubles as the backpressure mechanism: an empty queue
/// blocks the receive call server-side instead of spinning the loop, and
/// bounds worst-case shutdown latency to one wait interval.
#[derive(Debug, Clone)]
pub struct ReceiveOptions {
    /// The maximum number of messages to receive in a single request.
    pub max_number_of_messages: i32,

    /// The wait time for long polling, in seconds.
    pub wait_time_seconds: i32,
}

impl Default for ReceiveOptions {
    fn default() -> Self {
        ReceiveOptions {
            max_number_of_messages: 10,
            wait_time_seconds: 10,
        }
    }
}

/// The SQS-backed queue.
///
/// Owns the client and the queue URL for the process lifetime; accessed
/// only from the single consumer task, so no locking is needed.
pub struct SqsQueue {
    client: aws_sdk_sqs::Client,
    queue_url: String,
    options: ReceiveOptions,
}

impl SqsQueue {
    pub fn new(client: aws_sdk_sqs::Client, queue_url: &str, options: ReceiveOptions) -> Self {
        SqsQueue {
            client,
            queue_url: queue_url.to_string(),
            options,
        }
    }
}

#[async_trait]
impl MessageQueue for SqsQueue {
    async fn receive(&self) -> Result<Vec<QueueMessage>, ConsumerError> {
        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(self.options.max_number_of_messages)
            .wait_time_seconds(self.options.wait_time_seconds)
            .send()
            .await
            .map_err(|err| ConsumerError::QueueUnavailable(err.to_string()))?;

        let messages = output.messages.unwrap_or_default();

        Ok(messages
            .into_iter()
            .filter_map(QueueMessage::from_sdk)
            .collect())
    }

    async fn acknowledge(&self, receipt_handle: &str) -> Result<(), ConsumerError> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                if err.is_receipt_handle_is_invalid() {
                    ConsumerError::InvalidReceiptHandle(err.to_string())
                } else {
                    ConsumerError::QueueUnavailable(err.to_string())
                }
            })?;

        Ok(())
    }
}
