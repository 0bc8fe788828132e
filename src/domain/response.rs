use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
/// Account balance returned by `GET /rest/me`.
pub struct Balance {
    /// Account id.
    pub id: u64,
    /// Remaining credit.
    pub credit: f64,
    /// Three-letter currency code, e.g. `EUR`.
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Result of a successful `POST /rest/mtsms`.
pub struct SendSmsResponse {
    /// Message ids, one per generated message.
    pub ids: Vec<u64>,
    pub usage: Usage,
}

#[derive(Debug, Clone, PartialEq)]
/// Cost breakdown attached to a send response.
pub struct Usage {
    pub total_cost: f64,
    pub currency: String,
    /// Messages per destination country code.
    pub countries: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq)]
/// Structured body of a 401 response from GatewayAPI.
pub struct UnauthorizedPayload {
    pub code: String,
    pub incident_uuid: String,
    pub message: String,
    /// Provider-defined free-form data attached to the incident.
    pub variables: serde_json::Value,
}
