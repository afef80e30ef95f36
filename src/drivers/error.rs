use thiserror::Error;
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },
    #[error("serial read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("expected {expected} fields, got {actual} in line {line:?}")]
    Arity {
        expected: usize,
        actual: usize,
        line: String,
    },
    #[error("field {index} ({field:?}) is not a number")]
    Field { index: usize, field: String },
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("failed to parse config file: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}
