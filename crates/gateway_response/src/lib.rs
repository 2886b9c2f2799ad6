#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

//!
//! Decoding of payment gateway responses into typed results.
//!
//! Every decode is a pure function of the body (plus the caller's declared family) and returns
//! either one typed model or one [`core::errors::DecodeError`] report.
//!

pub mod configs;
pub mod connector;
pub mod consts;
pub mod core;
pub mod logger;
pub mod types;
pub mod utils;

pub use self::connector::gateway::{decode, GatewayResponse};
