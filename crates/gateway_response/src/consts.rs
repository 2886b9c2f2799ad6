/// Top-level member (JSON) or key (NVP) carrying the overall outcome.
pub const RESULT_KEY: &str = "result";
/// Value of [`RESULT_KEY`] when the gateway rejected the request.
pub const RESULT_ERROR: &str = "ERROR";

pub const ERROR_KEY: &str = "error";
pub const ERROR_CAUSE: &str = "cause";
pub const ERROR_EXPLANATION: &str = "explanation";
pub const ERROR_FIELD: &str = "field";
pub const ERROR_VALIDATION_TYPE: &str = "validationType";

pub const NVP_GATEWAY_CODE: &str = "response.gatewayCode";
pub const NVP_ORDER_ID: &str = "order.id";
pub const NVP_ORDER_AMOUNT: &str = "order.amount";
pub const NVP_ORDER_CURRENCY: &str = "order.currency";
pub const NVP_ORDER_DESCRIPTION: &str = "order.description";
