#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Typed results decoded from payment gateway responses.
//!
//! Every value here is produced fresh by a single decode call and handed off to the caller;
//! nothing keeps a reference back to the raw payload.
//!

pub mod authentication;
pub mod enums;
pub mod errors;
pub mod nvp;
pub mod payments;
pub mod session;

pub use self::{
    authentication::SecureIdEnrollmentResponse,
    enums::{ResponseFamily, ResponseFormat},
    errors::ApiException,
    nvp::NameValuePairs,
    payments::{BrowserPaymentResponse, TransactionResponse, WalletResponse, WebhookNotification},
    session::{HostedSession, TokenResponse},
};
