//! Typed Rust client for the GatewayAPI SMS REST API.
//!
//! The crate is layered the same way top to bottom: a domain layer of strong
//! types, a transport layer for wire-format details, and a small client layer
//! orchestrating authenticated requests against the fixed base origin
//! `https://gatewayapi.com/`.
//!
//! ```rust,no_run
//! use gatewayapi::{ApiToken, GatewayApiClient, Recipient, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gatewayapi::GatewayApiError> {
//!     let client = GatewayApiClient::new(ApiToken::new("...")?);
//!     let balance = client.get_balance().await?;
//!     println!("{} {}", balance.credit, balance.currency);
//!
//!     let request = SendSms::new("hello", vec![Recipient::new(4510203040u64)]);
//!     let response = client.send_sms(request).await?;
//!     println!("sent: {:?}", response.ids);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    CallOptions, GatewayApiClient, GatewayApiClientBuilder, GatewayApiError,
};
pub use domain::{
    ApiToken, Balance, Msisdn, Recipient, SEND_SMS_MAX_RECIPIENTS, SendSms, SendSmsResponse,
    UnauthorizedPayload, Usage, ValidationError,
};
