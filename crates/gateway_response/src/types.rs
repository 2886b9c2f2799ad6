pub use gateway_models as models;

/// A completed response handed over by the transport.
#[derive(Debug, Clone)]
pub struct Response {
    pub response: bytes::Bytes,
    /// Informational only: errors are detected from the payload's own `result`.
    pub status_code: u16,
}
