use serde::Serialize;

/// Error reported by the gateway itself through `result=ERROR`.
///
/// Every field is optional: the gateway may leave any of them out, and an omitted field is kept
/// apart from one sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error(
    "{}: {}",
    or_placeholder(.error_code, "UNKNOWN"),
    or_placeholder(.explanation, "no explanation provided")
)]
pub struct ApiException {
    /// `error.cause`
    pub error_code: Option<String>,
    pub explanation: Option<String>,
    /// The request field the gateway flagged.
    pub field: Option<String>,
    pub validation_type: Option<String>,
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    value.as_deref().unwrap_or(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_code_and_explanation() {
        let exception = ApiException {
            error_code: Some("INVALID_REQUEST".to_string()),
            explanation: Some("Value 'PAY' is invalid.".to_string()),
            field: Some("apiOperation".to_string()),
            validation_type: None,
        };
        assert_eq!(
            exception.to_string(),
            "INVALID_REQUEST: Value 'PAY' is invalid."
        );
        assert_eq!(
            ApiException::default().to_string(),
            "UNKNOWN: no explanation provided"
        );
    }
}
