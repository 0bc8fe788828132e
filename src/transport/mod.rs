//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod auth;
mod error;
mod me;
mod mtsms;

pub use auth::basic_authorization;
pub use error::decode_unauthorized_json_response;
pub use me::decode_balance_json_response;
pub use mtsms::{decode_send_sms_json_response, encode_send_sms_json_body};
