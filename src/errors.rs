use thiserror::Error;

/// Error types for queue consumer operations.
///
/// Only [`ConsumerError::Config`] ever reaches the process boundary; every
/// other kind is logged and absorbed by the consumer loop, relying on queue
/// redelivery to retry the affected message.
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// The process configuration could not be read at startup.
    ///
    /// This is the only fatal error kind: the process exits non-zero
    /// before a single receive call is made.
    #[error("invalid consumer configuration: {0}")]
    Config(#[from] envconfig::Error),

    /// The queue service could not be reached or refused a receive or
    /// delete call. Always transient from the consumer's point of view.
    #[error("queue unavailable: {0}")]
    QueueUnavailable(String),

    /// A delete was rejected because the receipt handle is stale or was
    /// already consumed. The delivery will reappear after the visibility
    /// timeout; the handle is never retried.
    #[error("invalid receipt handle: {0}")]
    InvalidReceiptHandle(String),

    /// Downstream message processing failed. The message is left
    /// unacknowledged so the queue redelivers it.
    #[error("message handling failed: {0}")]
    Handler(String),
}
