use envconfig::Envconfig;

/// Process configuration, read once from the environment at startup.
///
/// `QUEUE_URI` has no default: a missing queue address is a fatal
/// misconfiguration and the process refuses to start.
#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    /// URL of the queue to consume from.
    #[envconfig(from = "QUEUE_URI")]
    pub queue_uri: String,

    /// Server-side long-poll wait per receive call, in seconds.
    #[envconfig(from = "SQS_WAIT_TIME_SECONDS", default = "10")]
    pub wait_time_seconds: i32,

    /// Upper bound on messages returned by a single receive call.
    #[envconfig(from = "SQS_MAX_NUMBER_OF_MESSAGES", default = "10")]
    pub max_number_of_messages: i32,
}
