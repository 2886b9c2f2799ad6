use serde::Serialize;

///
/// A gateway session as returned by the session operations.
///
/// `success_indicator` is only present when the session was created through the checkout
/// session flow; session updates and retrievals leave it out.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedSession {
    pub id: String,
    pub version: String,
    pub update_status: String,
    pub aes256_key: Option<String>,
    pub authentication_limit: Option<u32>,
    pub success_indicator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
