//! Consume messages from an SQS queue, logging each delivery.
use envconfig::Envconfig;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use sqs_consumer::client::create_sqs_client_from_env;
use sqs_consumer::config::Config;
use sqs_consumer::consumer::Consumer;
use sqs_consumer::errors::ConsumerError;
use sqs_consumer::queue::{ReceiveOptions, SqsQueue};

/// Downstream processing for this deployment: log the payload.
///
/// Deliveries are at-least-once, so the same body may be logged more than
/// once when a redelivery occurs.
async fn log_message(body: String) -> Result<(), ConsumerError> {
    info!(message = %body, "received message");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ConsumerError> {
    tracing_subscriber::fmt::init();

    let config = Config::init_from_env()?;
    info!(queue_url = %config.queue_uri, "starting queue consumer");

    let client = create_sqs_client_from_env().await;
    let queue = SqsQueue::new(
        client,
        &config.queue_uri,
        ReceiveOptions {
            max_number_of_messages: config.max_number_of_messages,
            wait_time_seconds: config.wait_time_seconds,
        },
    );

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for interrupt signal");
            return;
        }
        info!("interrupt received, finishing current iteration before exit");
        signal_token.cancel();
    });

    Consumer::new(queue, log_message, shutdown).run().await;

    Ok(())
}
