/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber has already been initialized in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Invalid env-filter directives supplied to the builder.
    #[error("invalid filter directives: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Invalid configuration supplied to the logger builder.
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(String),

    /// Filesystem failures while preparing the log directory.
    #[error("log directory error: {0}")]
    Io(#[from] std::io::Error),
}
