//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Recipient, SEND_SMS_MAX_RECIPIENTS, SendSms};
pub use response::{Balance, SendSmsResponse, UnauthorizedPayload, Usage};
pub use validation::ValidationError;
pub use value::{ApiToken, Msisdn};
