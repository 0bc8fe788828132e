use serde::Deserialize;

use crate::domain::UnauthorizedPayload;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct UnauthorizedJsonResponse {
    code: String,
    incident_uuid: String,
    message: String,
    #[serde(default)]
    variables: serde_json::Value,
}

pub fn decode_unauthorized_json_response(
    json: &str,
) -> Result<UnauthorizedPayload, TransportError> {
    let parsed: UnauthorizedJsonResponse = serde_json::from_str(json)?;
    Ok(UnauthorizedPayload {
        code: parsed.code,
        incident_uuid: parsed.incident_uuid,
        message: parsed.message,
        variables: parsed.variables,
    })
}
