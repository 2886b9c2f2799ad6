//!
//! Name-value-pair (`key=value&key=value`) bodies returned by the legacy operations.
//!

use std::borrow::Cow;

use error_stack::{IntoReport, ResultExt};
use gateway_models::NameValuePairs;

use crate::core::errors::{self, CustomResult};

const PAIR_SEPARATOR: char = '&';
const KEY_VALUE_SEPARATOR: char = '=';

///
/// Decode an NVP body into an ordered mapping.
///
/// `&` and `=` inside keys and values arrive percent-encoded, so the body is split on the raw
/// characters: on every `&`, then on the first `=` of each pair. Keys and values are then
/// percent-decoded with `+` read as a space. When a key repeats, its last value is kept.
///
/// The whole decode fails on the first pair without `=` or with an empty key; no partial mapping
/// is returned. Empty segments (`a=1&&b=2`, a trailing `&`) carry no pair and are skipped.
///
pub fn decode(body: &str) -> CustomResult<NameValuePairs, errors::DecodeError> {
    body.split(PAIR_SEPARATOR)
        .filter(|pair| !pair.is_empty())
        .map(decode_pair)
        .collect()
}

fn decode_pair(pair: &str) -> CustomResult<(String, String), errors::DecodeError> {
    let (key, value) = pair
        .split_once(KEY_VALUE_SEPARATOR)
        .ok_or(errors::DecodeError::MalformedResponse)
        .into_report()
        .attach_printable_lazy(|| format!("Name-value pair `{pair}` has no `=`"))?;

    if key.is_empty() {
        return Err(errors::DecodeError::MalformedResponse)
            .into_report()
            .attach_printable_lazy(|| format!("Name-value pair `{pair}` has an empty name"));
    }

    Ok((decode_component(key)?, decode_component(value)?))
}

fn decode_component(component: &str) -> CustomResult<String, errors::DecodeError> {
    if !has_valid_escapes(component) {
        return Err(errors::DecodeError::SyntaxError)
            .into_report()
            .attach_printable_lazy(|| {
                format!("`{component}` has a `%` not followed by two hex digits")
            });
    }

    let component = component.replace('+', " ");
    urlencoding::decode(&component)
        .map(Cow::into_owned)
        .into_report()
        .change_context(errors::DecodeError::SyntaxError)
        .attach_printable_lazy(|| format!("`{component}` does not percent-decode to UTF-8"))
}

/// `urlencoding::decode` passes malformed escapes through untouched, so they are rejected here.
fn has_valid_escapes(component: &str) -> bool {
    let bytes = component.as_bytes();
    let mut index = 0;
    while let Some(offset) = bytes[index..].iter().position(|&byte| byte == b'%') {
        let escape = index + offset;
        match bytes.get(escape + 1..escape + 3) {
            Some(digits) if digits.iter().all(u8::is_ascii_hexdigit) => index = escape + 3,
            _ => return false,
        }
    }
    true
}

///
/// Encode a mapping back into an NVP body, percent-encoding every key and value.
///
pub fn encode(pairs: &NameValuePairs) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}{KEY_VALUE_SEPARATOR}{}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join(&PAIR_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn decodes_pairs_in_order() {
        let pairs = decode(
            "merchant=TESTCSTESTMID&order.amount=50.00&order.currency=USD&order.id=IXoAyo48VS&order.status=CAPTURED&response.gatewayCode=APPROVED&result=SUCCESS",
        )
        .unwrap();

        assert_eq!(
            pairs.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            vec![
                "merchant",
                "order.amount",
                "order.currency",
                "order.id",
                "order.status",
                "response.gatewayCode",
                "result"
            ]
        );
        assert_eq!(pairs.get("order.amount"), Some("50.00"));
        assert_eq!(pairs.get("response.gatewayCode"), Some("APPROVED"));
    }

    #[test]
    fn percent_decodes_keys_and_values() {
        let pairs = decode("error.explanation=Value+%27PAY%27+is+invalid.&a%3Db=c%26d%3De").unwrap();

        assert_eq!(pairs.get("error.explanation"), Some("Value 'PAY' is invalid."));
        assert_eq!(pairs.get("a=b"), Some("c&d=e"));
    }

    #[test]
    fn splits_on_first_equals_only() {
        let pairs = decode("order.description=a=b").unwrap();
        assert_eq!(pairs.get("order.description"), Some("a=b"));
    }

    #[test]
    fn empty_value_is_kept_as_empty_string() {
        let pairs = decode("order.description=&result=SUCCESS").unwrap();
        assert_eq!(pairs.get("order.description"), Some(""));
    }

    #[test]
    fn last_duplicate_wins() {
        let pairs = decode("result=PENDING&merchant=TEST&result=SUCCESS").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get("result"), Some("SUCCESS"));
    }

    #[test]
    fn pair_without_equals_fails_the_whole_decode() {
        let report = decode("result=SUCCESS&merchant&order.id=1").unwrap_err();
        assert_eq!(
            report.current_context(),
            &errors::DecodeError::MalformedResponse
        );
    }

    #[test]
    fn empty_name_is_malformed() {
        let report = decode("=SUCCESS").unwrap_err();
        assert_eq!(
            report.current_context(),
            &errors::DecodeError::MalformedResponse
        );
    }

    #[test]
    fn invalid_utf8_escape_is_a_syntax_error() {
        let report = decode("merchant=%FF%FE").unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);
    }

    #[test]
    fn non_hex_escape_is_a_syntax_error() {
        let report = decode("a=%ZZ").unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);
        assert!(format!("{report:?}").contains("%ZZ"));
    }

    #[test]
    fn trailing_percent_is_a_syntax_error() {
        let report = decode("result=SUCCESS&a=%").unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);
    }

    #[test]
    fn truncated_escape_is_a_syntax_error() {
        let report = decode("a=%4").unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);

        let report = decode("a%4=1").unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);
    }

    #[test]
    fn valid_escapes_pass_the_check() {
        assert!(has_valid_escapes("100%25+off%2a"));
        assert!(has_valid_escapes("plain"));
        assert!(!has_valid_escapes("%2"));
        assert!(!has_valid_escapes("%g0"));
    }

    #[test]
    fn empty_segments_are_skipped() {
        let pairs = decode("a=1&&b=2&").unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(decode("").unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn decode_encode_decode_is_stable(
            entries in proptest::collection::vec(("[a-zA-Z0-9.&=+% ']{1,12}", "[a-zA-Z0-9.&=+% '\u{e9}]{0,16}"), 0..8)
        ) {
            let body = entries
                .iter()
                .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");

            let first = decode(&body).unwrap();
            let second = decode(&encode(&first)).unwrap();

            prop_assert_eq!(
                first.iter().collect::<Vec<_>>(),
                second.iter().collect::<Vec<_>>()
            );
        }
    }
}
