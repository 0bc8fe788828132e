use serde::Deserialize;

use crate::domain::Balance;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    id: u64,
    credit: f64,
    currency: String,
}

pub fn decode_balance_json_response(json: &str) -> Result<Balance, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    Ok(Balance {
        id: parsed.id,
        credit: parsed.credit,
        currency: parsed.currency,
    })
}
