//!
//! Extension traits used while turning a raw body into typed data.
//!

use error_stack::{IntoReport, ResultExt};
use serde::de::DeserializeOwned;

use crate::core::errors::{self, CustomResult};

///
/// Extending functionalities of `[u8]` for reading a response body.
///
pub trait ByteSliceExt {
    ///
    /// Borrow the bytes as UTF-8 text; anything else is not a gateway response.
    ///
    fn parse_utf8(&self) -> CustomResult<&str, errors::DecodeError>;
}

impl ByteSliceExt for [u8] {
    fn parse_utf8(&self) -> CustomResult<&str, errors::DecodeError> {
        std::str::from_utf8(self)
            .into_report()
            .change_context(errors::DecodeError::SyntaxError)
            .attach_printable("Response body is not valid UTF-8")
    }
}

///
/// Extending functionalities of `str` for parsing JSON bodies.
///
pub trait StrExt {
    ///
    /// Parse the text into an untyped JSON value. Fails only when the text is not JSON.
    ///
    fn parse_json_value(&self) -> CustomResult<serde_json::Value, errors::DecodeError>;
}

impl StrExt for str {
    fn parse_json_value(&self) -> CustomResult<serde_json::Value, errors::DecodeError> {
        serde_json::from_str(self)
            .into_report()
            .change_context(errors::DecodeError::SyntaxError)
            .attach_printable("Unable to parse response body as JSON")
    }
}

///
/// Extending functionalities of `serde_json::Value` for performing parsing
///
pub trait ValueExt {
    ///
    /// Convert `serde_json::Value` into type `<T>` using `serde::Deserialize`. The report names
    /// the path at which the value stopped matching `<T>`.
    ///
    fn parse_value<T>(self, type_name: &str) -> CustomResult<T, errors::DecodeError>
    where
        T: DeserializeOwned;
}

impl ValueExt for serde_json::Value {
    fn parse_value<T>(self, type_name: &str) -> CustomResult<T, errors::DecodeError>
    where
        T: DeserializeOwned,
    {
        serde_path_to_error::deserialize(self)
            .into_report()
            .change_context(errors::DecodeError::MalformedResponse)
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from the response"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        inner: Inner,
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Inner {
        #[allow(dead_code)]
        gateway_code: String,
    }

    #[test]
    fn invalid_json_is_a_syntax_error() {
        let report = "{\"result\":".parse_json_value().unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);
    }

    #[test]
    fn shape_mismatch_is_malformed_and_names_the_path() {
        let value = r#"{"inner":{"acquirerCode":"00"}}"#.parse_json_value().unwrap();
        let report = value.parse_value::<Outer>("Outer").unwrap_err();

        assert_eq!(
            report.current_context(),
            &errors::DecodeError::MalformedResponse
        );
        assert!(format!("{report:?}").contains("inner"));
    }

    #[test]
    fn non_utf8_body_is_a_syntax_error() {
        let report = [0x7b, 0xff, 0x7d].as_slice().parse_utf8().unwrap_err();
        assert_eq!(report.current_context(), &errors::DecodeError::SyntaxError);
    }
}
