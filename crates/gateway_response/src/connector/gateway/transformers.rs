use error_stack::{IntoReport, ResultExt};
use gateway_models::{self as models, ApiException, NameValuePairs};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{nvp, responses};
use crate::{
    consts,
    core::errors::{self, CustomResult},
    utils::{StrExt, ValueExt},
};

///
/// Raise the gateway's own error when the top-level `result` is `ERROR`.
///
/// Details come from the nested `error` object; a member that is missing (or is not a string) is
/// left absent. Any other `result`, or none at all, lets decoding proceed.
///
pub fn check_json_error(value: &Value) -> CustomResult<(), errors::DecodeError> {
    if value.get(consts::RESULT_KEY).and_then(Value::as_str) != Some(consts::RESULT_ERROR) {
        return Ok(());
    }

    let error = value.get(consts::ERROR_KEY);
    let error_member = |name: &str| {
        error
            .and_then(|error| error.get(name))
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    Err(errors::DecodeError::GatewayReportedError(ApiException {
        error_code: error_member(consts::ERROR_CAUSE),
        explanation: error_member(consts::ERROR_EXPLANATION),
        field: error_member(consts::ERROR_FIELD),
        validation_type: error_member(consts::ERROR_VALIDATION_TYPE),
    }))
    .into_report()
    .attach_printable("Gateway responded with result=ERROR")
}

/// NVP counterpart of [`check_json_error`], reading the flattened `error.*` keys.
pub fn check_nvp_error(pairs: &NameValuePairs) -> CustomResult<(), errors::DecodeError> {
    if pairs.get(consts::RESULT_KEY) != Some(consts::RESULT_ERROR) {
        return Ok(());
    }

    let error_member = |name: &str| {
        pairs
            .get(&format!("{}.{name}", consts::ERROR_KEY))
            .map(str::to_owned)
    };

    Err(errors::DecodeError::GatewayReportedError(ApiException {
        error_code: error_member(consts::ERROR_CAUSE),
        explanation: error_member(consts::ERROR_EXPLANATION),
        field: error_member(consts::ERROR_FIELD),
        validation_type: error_member(consts::ERROR_VALIDATION_TYPE),
    }))
    .into_report()
    .attach_printable("Gateway responded with result=ERROR")
}

fn parse_json_response<T>(body: &str, type_name: &str) -> CustomResult<T, errors::DecodeError>
where
    T: DeserializeOwned,
{
    let value = body.parse_json_value()?;
    check_json_error(&value)?;
    value.parse_value(type_name)
}

fn transaction_from_parts(
    result: String,
    response: responses::GatewayResult,
    order: responses::GatewayOrder,
) -> models::TransactionResponse {
    models::TransactionResponse {
        api_result: result,
        gateway_code: response.gateway_code,
        order_id: order.id,
        order_amount: order.amount,
        order_currency: order.currency,
        order_description: order.description,
    }
}

impl From<responses::GatewayTransactionResponse> for models::TransactionResponse {
    fn from(item: responses::GatewayTransactionResponse) -> Self {
        transaction_from_parts(item.result, item.response, item.order)
    }
}

impl From<responses::BrowserPaymentResponse> for models::BrowserPaymentResponse {
    fn from(item: responses::BrowserPaymentResponse) -> Self {
        Self {
            transaction: transaction_from_parts(item.result, item.response, item.order),
            interaction_status: item.browser_payment.interaction.status,
            redirect_url: item.browser_payment.redirect_url,
        }
    }
}

impl From<responses::SecureIdEnrollmentResponse> for models::SecureIdEnrollmentResponse {
    fn from(item: responses::SecureIdEnrollmentResponse) -> Self {
        let customized = item
            .three_d_secure
            .authentication_redirect
            .and_then(|redirect| redirect.customized);
        let (acs_url, pa_req) = customized
            .map(|customized| (customized.acs_url, customized.pa_req))
            .unwrap_or_default();

        Self {
            status: item.three_d_secure.summary_status,
            acs_url,
            pa_req,
            secure_id: item.secure_id,
        }
    }
}

impl From<responses::SessionResponse> for models::HostedSession {
    fn from(item: responses::SessionResponse) -> Self {
        Self {
            id: item.session.id,
            version: item.session.version,
            update_status: item.session.update_status,
            aes256_key: item.session.aes256_key,
            authentication_limit: item.session.authentication_limit,
            success_indicator: item.success_indicator,
        }
    }
}

impl From<responses::TokenResponse> for models::TokenResponse {
    fn from(item: responses::TokenResponse) -> Self {
        Self { token: item.token }
    }
}

impl From<responses::WebhookNotification> for models::WebhookNotification {
    fn from(item: responses::WebhookNotification) -> Self {
        Self {
            order_id: item.order.id,
            transaction_id: item.transaction.map(|transaction| transaction.id),
            order_status: item.order.status,
            amount: item.order.amount,
            result: item.result,
        }
    }
}

pub fn parse_transaction_response(
    body: &str,
) -> CustomResult<models::TransactionResponse, errors::DecodeError> {
    parse_json_response::<responses::GatewayTransactionResponse>(body, "GatewayTransactionResponse")
        .map(models::TransactionResponse::from)
}

/// RETRIEVE_ORDER after a hosted checkout: gateway code and order come from `transaction[0]`,
/// the overall result from the top level.
pub fn parse_hosted_checkout_response(
    body: &str,
) -> CustomResult<models::TransactionResponse, errors::DecodeError> {
    let order_response =
        parse_json_response::<responses::GatewayOrderResponse>(body, "GatewayOrderResponse")?;

    let transaction = order_response
        .transaction
        .into_iter()
        .next()
        .ok_or(errors::DecodeError::MalformedResponse)
        .into_report()
        .attach_printable("Order response has an empty `transaction` array")?
        .parse_value::<responses::GatewayOrderTransaction>("transaction[0]")?;

    Ok(transaction_from_parts(
        order_response.result,
        transaction.response,
        transaction.order,
    ))
}

pub fn parse_browser_payment_response(
    body: &str,
) -> CustomResult<models::BrowserPaymentResponse, errors::DecodeError> {
    parse_json_response::<responses::BrowserPaymentResponse>(body, "BrowserPaymentResponse")
        .map(models::BrowserPaymentResponse::from)
}

/// Only `browserPayment.redirectUrl`, which is required here even though the full browser
/// payment decode tolerates its absence.
pub fn get_browser_payment_redirect_url(body: &str) -> CustomResult<String, errors::DecodeError> {
    parse_json_response::<responses::BrowserPaymentRedirectResponse>(
        body,
        "BrowserPaymentRedirectResponse",
    )
    .map(|response| response.browser_payment.redirect_url)
}

pub fn parse_3ds_response(
    body: &str,
) -> CustomResult<models::SecureIdEnrollmentResponse, errors::DecodeError> {
    parse_json_response::<responses::SecureIdEnrollmentResponse>(body, "SecureIdEnrollmentResponse")
        .map(models::SecureIdEnrollmentResponse::from)
}

pub fn parse_session_response(
    body: &str,
) -> CustomResult<models::HostedSession, errors::DecodeError> {
    parse_json_response::<responses::SessionResponse>(body, "SessionResponse")
        .map(models::HostedSession::from)
}

///
/// Wallet details sit under `wallet.<provider>`. The provider key comes from the caller; a
/// payload without that key is malformed even if it carries other providers.
///
pub fn parse_wallet_response(
    body: &str,
    provider: &str,
) -> CustomResult<models::WalletResponse, errors::DecodeError> {
    let responses::WalletResponse { order, mut wallet } =
        parse_json_response(body, "WalletResponse")?;

    let details = wallet
        .remove(provider)
        .ok_or(errors::DecodeError::MalformedResponse)
        .into_report()
        .attach_printable_lazy(|| format!("Wallet response has no `wallet.{provider}` object"))?
        .parse_value::<responses::WalletProviderDetails>("WalletProviderDetails")?;

    Ok(models::WalletResponse {
        order_amount: order.amount,
        order_currency: order.currency,
        wallet_provider: order.wallet_provider,
        provider: provider.to_owned(),
        allowed_card_types: details.allowed_card_types,
        merchant_checkout_id: details.merchant_checkout_id,
        origin_url: details.origin_url,
        request_token: details.request_token,
    })
}

pub fn parse_token_response(body: &str) -> CustomResult<models::TokenResponse, errors::DecodeError> {
    parse_json_response::<responses::TokenResponse>(body, "TokenResponse")
        .map(models::TokenResponse::from)
}

pub fn parse_webhook_notification(
    body: &str,
) -> CustomResult<models::WebhookNotification, errors::DecodeError> {
    parse_json_response::<responses::WebhookNotification>(body, "WebhookNotification")
        .map(models::WebhookNotification::from)
}

/// Decode an NVP body; a `result=ERROR` body is raised as the gateway's error instead.
pub fn parse_nvp_response(body: &str) -> CustomResult<NameValuePairs, errors::DecodeError> {
    let pairs = nvp::decode(body)?;
    check_nvp_error(&pairs)?;
    Ok(pairs)
}

pub fn parse_nvp_transaction_response(
    body: &str,
) -> CustomResult<models::TransactionResponse, errors::DecodeError> {
    let pairs = parse_nvp_response(body)?;
    let required = |key: &str| {
        pairs
            .get(key)
            .map(str::to_owned)
            .ok_or(errors::DecodeError::MalformedResponse)
            .into_report()
            .attach_printable_lazy(|| format!("Name-value response has no `{key}`"))
    };

    Ok(models::TransactionResponse {
        api_result: required(consts::RESULT_KEY)?,
        gateway_code: required(consts::NVP_GATEWAY_CODE)?,
        order_id: required(consts::NVP_ORDER_ID)?,
        order_amount: required(consts::NVP_ORDER_AMOUNT)?,
        order_currency: required(consts::NVP_ORDER_CURRENCY)?,
        order_description: pairs.get(consts::NVP_ORDER_DESCRIPTION).map(str::to_owned),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn gateway_error(report: &error_stack::Report<errors::DecodeError>) -> &ApiException {
        report.current_context().api_exception().unwrap()
    }

    #[test]
    fn json_error_is_extracted_from_error_object() {
        let value = r#"{"error":{"cause":"INVALID_REQUEST","explanation":"Invalid request","field":"order.amount","validationType":"INVALID"},"result":"ERROR"}"#
            .parse_json_value()
            .unwrap();

        let report = check_json_error(&value).unwrap_err();
        assert_eq!(
            gateway_error(&report),
            &ApiException {
                error_code: Some("INVALID_REQUEST".to_string()),
                explanation: Some("Invalid request".to_string()),
                field: Some("order.amount".to_string()),
                validation_type: Some("INVALID".to_string()),
            }
        );
    }

    #[test]
    fn json_error_without_details_leaves_members_absent() {
        for body in [r#"{"result":"ERROR"}"#, r#"{"result":"ERROR","error":"SERVER_BUSY"}"#] {
            let value = body.parse_json_value().unwrap();
            let report = check_json_error(&value).unwrap_err();
            assert_eq!(gateway_error(&report), &ApiException::default());
        }
    }

    #[test]
    fn other_results_pass_through() {
        for body in [
            r#"{"result":"SUCCESS"}"#,
            r#"{"result":"PENDING","error":{"cause":"IGNORED"}}"#,
            r#"{"result":"error"}"#,
            r#"{"session":{}}"#,
            "[1,2]",
        ] {
            let value = body.parse_json_value().unwrap();
            assert!(check_json_error(&value).is_ok(), "{body}");
        }
    }

    #[test]
    fn nvp_error_keeps_absent_members_absent() {
        let pairs = nvp::decode("error.cause=SERVER_BUSY&result=ERROR").unwrap();
        let report = check_nvp_error(&pairs).unwrap_err();

        assert_eq!(
            gateway_error(&report),
            &ApiException {
                error_code: Some("SERVER_BUSY".to_string()),
                ..ApiException::default()
            }
        );
    }

    #[test]
    fn numeric_amount_keeps_its_literal_text() {
        let response = parse_transaction_response(
            r#"{"result":"SUCCESS","response":{"gatewayCode":"APPROVED"},"order":{"id":"o-1","amount":50.00,"currency":"USD"}}"#,
        )
        .unwrap();
        assert_eq!(response.order_amount, "50.00");
    }

    #[test]
    fn non_decimal_amount_is_malformed() {
        let report = parse_transaction_response(
            r#"{"result":"SUCCESS","response":{"gatewayCode":"APPROVED"},"order":{"id":"o-1","amount":true,"currency":"USD"}}"#,
        )
        .unwrap_err();
        assert_eq!(
            report.current_context(),
            &errors::DecodeError::MalformedResponse
        );
    }

    #[test]
    fn exponent_form_amount_is_malformed() {
        for amount in ["1e2", "1.5E3", "2e-1"] {
            let body = format!(
                r#"{{"result":"SUCCESS","response":{{"gatewayCode":"APPROVED"}},"order":{{"id":"o-1","amount":{amount},"currency":"USD"}}}}"#
            );
            let report = parse_transaction_response(&body).unwrap_err();
            assert_eq!(
                report.current_context(),
                &errors::DecodeError::MalformedResponse,
                "{amount}"
            );
        }
    }

    #[test]
    fn empty_transaction_array_is_malformed() {
        let report =
            parse_hosted_checkout_response(r#"{"result":"SUCCESS","transaction":[]}"#).unwrap_err();
        assert_eq!(
            report.current_context(),
            &errors::DecodeError::MalformedResponse
        );
    }

    #[test]
    fn nvp_transaction_requires_gateway_code() {
        let report = parse_nvp_transaction_response(
            "order.amount=50.00&order.currency=USD&order.id=IXoAyo48VS&result=SUCCESS",
        )
        .unwrap_err();
        assert_eq!(
            report.current_context(),
            &errors::DecodeError::MalformedResponse
        );
    }
}
