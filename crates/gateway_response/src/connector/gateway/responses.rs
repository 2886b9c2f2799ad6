use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResult {
    pub gateway_code: String,
}

#[derive(Debug, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: String,
    pub currency: String,
    pub description: Option<String>,
}

/// AUTHORIZE, PAY, CAPTURE, ... : everything at the top level.
#[derive(Debug, Deserialize)]
pub struct GatewayTransactionResponse {
    pub result: String,
    pub response: GatewayResult,
    pub order: GatewayOrder,
}

/// RETRIEVE_ORDER: the per-transaction results live in the `transaction` array. Entries are kept
/// untyped so that only the first one has to match.
#[derive(Debug, Deserialize)]
pub struct GatewayOrderResponse {
    pub result: String,
    pub transaction: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct GatewayOrderTransaction {
    pub response: GatewayResult,
    pub order: GatewayOrder,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPaymentResponse {
    pub result: String,
    pub response: GatewayResult,
    pub order: GatewayOrder,
    pub browser_payment: BrowserPaymentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPaymentDetails {
    pub interaction: BrowserPaymentInteraction,
    pub redirect_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BrowserPaymentInteraction {
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPaymentRedirectResponse {
    pub browser_payment: BrowserPaymentRedirect,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPaymentRedirect {
    pub redirect_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SecureIdEnrollmentResponse {
    #[serde(rename = "3DSecure")]
    pub three_d_secure: ThreeDSecure,
    #[serde(rename = "3DSecureId")]
    pub secure_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDSecure {
    pub summary_status: String,
    pub authentication_redirect: Option<AuthenticationRedirect>,
}

#[derive(Debug, Deserialize)]
pub struct AuthenticationRedirect {
    pub customized: Option<CustomizedRedirect>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizedRedirect {
    pub acs_url: Option<String>,
    pub pa_req: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session: SessionDetails,
    pub success_indicator: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetails {
    pub id: String,
    pub version: String,
    pub update_status: String,
    #[serde(rename = "aes256Key")]
    pub aes256_key: Option<String>,
    pub authentication_limit: Option<u32>,
}

/// Provider objects are kept untyped; only the one the caller asked for is parsed.
#[derive(Debug, Deserialize)]
pub struct WalletResponse {
    pub order: WalletOrder,
    pub wallet: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOrder {
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: String,
    pub currency: String,
    pub wallet_provider: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProviderDetails {
    pub allowed_card_types: Option<String>,
    pub merchant_checkout_id: Option<String>,
    pub origin_url: Option<String>,
    pub request_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct WebhookNotification {
    pub result: Option<String>,
    pub order: WebhookOrder,
    pub transaction: Option<WebhookTransaction>,
}

#[derive(Debug, Deserialize)]
pub struct WebhookOrder {
    pub id: String,
    pub status: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct WebhookTransaction {
    pub id: String,
}

///
/// Amounts arrive either as strings (`"100.00"`) or as bare JSON numbers (`50.00`). Both are
/// kept as the literal text; numbers rely on serde_json's `arbitrary_precision`. That feature
/// rewrites exponent notation (`1e2` becomes `1e+2`), so exponent-form numbers are rejected.
///
fn deserialize_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(amount) => Ok(amount),
        Value::Number(amount) => {
            let amount = amount.to_string();
            if amount.contains(['e', 'E']) {
                Err(de::Error::custom(format!(
                    "expected a plain decimal amount, found `{amount}`"
                )))
            } else {
                Ok(amount)
            }
        }
        other => Err(de::Error::custom(format!(
            "expected a decimal amount, found {other}"
        ))),
    }
}
