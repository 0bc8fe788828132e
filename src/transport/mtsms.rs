use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Msisdn, SendSms, SendSmsResponse, Usage};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct SendSmsJsonRequest<'a> {
    message: &'a str,
    recipients: Vec<RecipientJson<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    userref: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RecipientJson<'a> {
    msisdn: MsisdnJson<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MsisdnJson<'a> {
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a Msisdn> for MsisdnJson<'a> {
    fn from(value: &'a Msisdn) -> Self {
        match value {
            Msisdn::Number(number) => Self::Number(*number),
            Msisdn::Text(text) => Self::Text(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    ids: Vec<u64>,
    usage: UsageJson,
}

#[derive(Debug, Clone, Deserialize)]
struct UsageJson {
    total_cost: f64,
    currency: String,
    #[serde(default)]
    countries: BTreeMap<String, u64>,
}

pub fn encode_send_sms_json_body(request: &SendSms) -> Result<String, TransportError> {
    let body = SendSmsJsonRequest {
        message: request.message(),
        recipients: request
            .recipients()
            .iter()
            .map(|recipient| RecipientJson {
                msisdn: recipient.msisdn().into(),
            })
            .collect(),
        sender: request.sender_id(),
        userref: request.userref_value(),
    };
    Ok(serde_json::to_string(&body)?)
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        ids: parsed.ids,
        usage: Usage {
            total_cost: parsed.usage.total_cost,
            currency: parsed.usage.currency,
            countries: parsed.usage.countries,
        },
    })
}
