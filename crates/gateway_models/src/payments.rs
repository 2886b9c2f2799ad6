use serde::Serialize;

///
/// Outcome of a transaction operation.
///
/// `api_result` and `gateway_code` are carried as the gateway sent them (`SUCCESS`, `APPROVED`,
/// ...) without checking them against a known set. Amounts keep the gateway's textual precision.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub api_result: String,
    pub gateway_code: String,
    pub order_id: String,
    pub order_amount: String,
    /// ISO 4217 currency code.
    pub order_currency: String,
    pub order_description: Option<String>,
}

/// Outcome of a browser-redirect payment (INITIATE / CONFIRM_BROWSER_PAYMENT).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserPaymentResponse {
    #[serde(flatten)]
    pub transaction: TransactionResponse,
    /// `INITIATED`, `COMPLETED`, ...
    pub interaction_status: String,
    pub redirect_url: Option<String>,
}

/// Wallet details returned when a session is updated from a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    pub order_amount: String,
    pub order_currency: String,
    pub wallet_provider: Option<String>,
    /// Key of the provider object the details were read from, e.g. `masterpass`.
    pub provider: String,
    pub allowed_card_types: Option<String>,
    pub merchant_checkout_id: Option<String>,
    pub origin_url: Option<String>,
    pub request_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotification {
    pub order_id: String,
    pub transaction_id: Option<String>,
    pub order_status: String,
    pub amount: String,
    pub result: Option<String>,
}
