use serde::Serialize;

/// Result of a 3-D Secure enrollment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureIdEnrollmentResponse {
    /// Summary status, e.g. `CARD_ENROLLED` or `CARD_NOT_ENROLLED`.
    pub status: String,
    /// Issuer access control server; only sent for enrolled cards.
    pub acs_url: Option<String>,
    pub pa_req: Option<String>,
    pub secure_id: Option<String>,
}
