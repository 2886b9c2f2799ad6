use serde::Serialize;

/// Encoding of a gateway response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    #[strum(serialize = "JSON")]
    Json,
    /// Flat `key=value&key=value` encoding used by the legacy operations.
    #[strum(serialize = "NVP")]
    Nvp,
}

///
/// The shape a response is expected to have, declared by the caller from the operation it
/// invoked. The gateway nests the same fields differently per operation, so the family is never
/// inferred from the payload.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseFamily {
    /// AUTHORIZE, PAY, CAPTURE, REFUND, VOID, VERIFY and wallet payments.
    Transaction,
    /// RETRIEVE_ORDER after a hosted checkout, results nested under `transaction[0]`.
    HostedCheckout,
    BrowserPayment,
    /// Only `browserPayment.redirectUrl` of a browser payment response.
    BrowserPaymentRedirect,
    SecureIdEnrollment,
    HostedSession,
    /// Wallet details nested under `wallet.<provider>`.
    Wallet { provider: String },
    Token,
    WebhookNotification,
    NameValuePairs,
    NameValueTransaction,
}

impl ResponseFamily {
    pub fn format(&self) -> ResponseFormat {
        match self {
            Self::NameValuePairs | Self::NameValueTransaction => ResponseFormat::Nvp,
            Self::Transaction
            | Self::HostedCheckout
            | Self::BrowserPayment
            | Self::BrowserPaymentRedirect
            | Self::SecureIdEnrollment
            | Self::HostedSession
            | Self::Wallet { .. }
            | Self::Token
            | Self::WebhookNotification => ResponseFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_are_snake_case() {
        assert_eq!(ResponseFamily::HostedCheckout.to_string(), "hosted_checkout");
        assert_eq!(
            ResponseFamily::Wallet {
                provider: "masterpass".to_string()
            }
            .to_string(),
            "wallet"
        );
    }

    #[test]
    fn only_name_value_families_use_nvp() {
        assert_eq!(ResponseFamily::NameValuePairs.format(), ResponseFormat::Nvp);
        assert_eq!(ResponseFamily::NameValueTransaction.format(), ResponseFormat::Nvp);
        assert_eq!(ResponseFamily::Token.format(), ResponseFormat::Json);
        assert_eq!(ResponseFormat::Nvp.to_string(), "NVP");
    }
}
