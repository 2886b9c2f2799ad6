pub mod nvp;
mod responses;
pub mod transformers;

use gateway_models::{
    BrowserPaymentResponse, HostedSession, NameValuePairs, ResponseFamily,
    SecureIdEnrollmentResponse, TokenResponse, TransactionResponse, WalletResponse,
    WebhookNotification,
};
use serde::Serialize;
use transformers as gateway;

use crate::{
    core::errors::{self, CustomResult},
    logger, types,
    utils::ByteSliceExt,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Gateway;

/// One typed result per family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "family", content = "response", rename_all = "snake_case")]
pub enum GatewayResponse {
    Transaction(TransactionResponse),
    HostedCheckout(TransactionResponse),
    BrowserPayment(BrowserPaymentResponse),
    BrowserPaymentRedirect(String),
    SecureIdEnrollment(SecureIdEnrollmentResponse),
    HostedSession(HostedSession),
    Wallet(WalletResponse),
    Token(TokenResponse),
    WebhookNotification(WebhookNotification),
    NameValuePairs(NameValuePairs),
    NameValueTransaction(TransactionResponse),
}

impl Gateway {
    pub fn id(&self) -> &'static str {
        "gateway"
    }

    pub fn handle_response(
        &self,
        res: &types::Response,
        family: &ResponseFamily,
    ) -> CustomResult<GatewayResponse, errors::DecodeError> {
        logger::debug!(connector = self.id(), status_code = res.status_code, family = %family);
        let body = res.response.as_ref().parse_utf8()?;
        decode(body, family)
    }
}

///
/// Decode `body` as the family the caller expects.
///
/// A gateway-reported error always wins over the family decode; the returned report then holds
/// only [`errors::DecodeError::GatewayReportedError`].
///
#[tracing::instrument(skip(body), fields(format = %family.format()))]
pub fn decode(
    body: &str,
    family: &ResponseFamily,
) -> CustomResult<GatewayResponse, errors::DecodeError> {
    let decoded = match family {
        ResponseFamily::Transaction => {
            gateway::parse_transaction_response(body).map(GatewayResponse::Transaction)
        }
        ResponseFamily::HostedCheckout => {
            gateway::parse_hosted_checkout_response(body).map(GatewayResponse::HostedCheckout)
        }
        ResponseFamily::BrowserPayment => {
            gateway::parse_browser_payment_response(body).map(GatewayResponse::BrowserPayment)
        }
        ResponseFamily::BrowserPaymentRedirect => {
            gateway::get_browser_payment_redirect_url(body)
                .map(GatewayResponse::BrowserPaymentRedirect)
        }
        ResponseFamily::SecureIdEnrollment => {
            gateway::parse_3ds_response(body).map(GatewayResponse::SecureIdEnrollment)
        }
        ResponseFamily::HostedSession => {
            gateway::parse_session_response(body).map(GatewayResponse::HostedSession)
        }
        ResponseFamily::Wallet { provider } => {
            gateway::parse_wallet_response(body, provider).map(GatewayResponse::Wallet)
        }
        ResponseFamily::Token => gateway::parse_token_response(body).map(GatewayResponse::Token),
        ResponseFamily::WebhookNotification => {
            gateway::parse_webhook_notification(body).map(GatewayResponse::WebhookNotification)
        }
        ResponseFamily::NameValuePairs => {
            gateway::parse_nvp_response(body).map(GatewayResponse::NameValuePairs)
        }
        ResponseFamily::NameValueTransaction => {
            gateway::parse_nvp_transaction_response(body)
                .map(GatewayResponse::NameValueTransaction)
        }
    };

    match &decoded {
        Ok(_) => logger::debug!("gateway response decoded"),
        Err(report) => match report.current_context().api_exception() {
            Some(exception) => logger::warn!(gateway_error = %exception, "gateway reported an error"),
            None => logger::debug!(error = ?report, "gateway response could not be decoded"),
        },
    }

    decoded
}
