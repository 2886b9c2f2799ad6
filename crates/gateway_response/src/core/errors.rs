//! Errors surfaced by the decoding layer and by its command-line caller.

use gateway_models::ApiException;

/// Effectively `Result<T, error_stack::Report<E>>`.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

///
/// Failure of a single decode call.
///
/// Every failure path of every decoder ends in exactly one of these; the report carries the
/// details (serde path of the missing field, offending pair, family) as printable attachments.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The gateway signalled `result=ERROR`.
    #[error("Gateway reported an error: {0}")]
    GatewayReportedError(ApiException),
    /// The payload does not have the shape expected for the requested family.
    #[error("Response does not match the expected shape")]
    MalformedResponse,
    /// The body is not JSON / NVP text at all.
    #[error("Response body could not be parsed")]
    SyntaxError,
}

impl DecodeError {
    pub fn api_exception(&self) -> Option<&ApiException> {
        match self {
            Self::GatewayReportedError(exception) => Some(exception),
            Self::MalformedResponse | Self::SyntaxError => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error("Application configuration error: {0}")]
    ConfigurationError(#[from] config::ConfigError),

    #[error("Invalid configuration value provided: {0}")]
    InvalidConfigurationValueError(String),

    #[error("I/O: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to render output: {0}")]
    OutputError(#[from] serde_json::Error),
}
