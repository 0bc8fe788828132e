use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::domain::ApiToken;

/// Build the `Authorization` header value for an API token.
///
/// GatewayAPI uses HTTP Basic with the token as username and an empty
/// password, so the credential on the wire is `base64("<token>:")`.
pub fn basic_authorization(token: &ApiToken) -> String {
    format!("Basic {}", BASE64.encode(format!("{}:", token.as_str())))
}
