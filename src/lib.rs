//! # SQS Consumer
//!
//! A resilient AWS SQS queue consumer that long-polls for messages,
//! dispatches each body to a user-provided handler, and acknowledges every
//! successfully processed message individually.
//!
//! ## Features
//!
//! - Asynchronous SQS polling with tokio
//! - Long polling with configurable parameters
//! - Per-message acknowledgment using each delivery's own receipt handle
//! - Continue-on-error semantics: transient queue failures and handler
//!   failures are logged, never fatal
//! - Graceful shutdown through a cancellation token, leaving in-flight
//!   messages for redelivery
//! - Queue access behind a trait, so the loop can be tested against an
//!   in-memory fake
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqs_consumer::client::create_sqs_client_from_env;
//! use sqs_consumer::consumer::Consumer;
//! use sqs_consumer::queue::{ReceiveOptions, SqsQueue};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = create_sqs_client_from_env().await;
//!     let queue_url = "https://sqs.region.amazonaws.com/account/queue-name";
//!     let queue = SqsQueue::new(client, queue_url, ReceiveOptions::default());
//!     let shutdown = CancellationToken::new();
//!
//!     let consumer = Consumer::new(
//!         queue,
//!         |body: String| async move {
//!             println!("processing message: {body}");
//!             Ok(())
//!         },
//!         shutdown,
//!     );
//!
//!     consumer.run().await;
//! }
//! ```

pub mod client;
pub mod config;
pub mod consumer;
pub mod errors;
pub mod queue;
