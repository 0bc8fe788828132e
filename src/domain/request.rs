use crate::domain::value::Msisdn;

/// Maximum recipients GatewayAPI accepts in a single `mtsms` request.
///
/// The limit is enforced by the provider, not by this client; requests above
/// it come back as a 400 with details in the body.
pub const SEND_SMS_MAX_RECIPIENTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
/// A single SMS recipient.
pub struct Recipient {
    msisdn: Msisdn,
}

impl Recipient {
    pub fn new(msisdn: impl Into<Msisdn>) -> Self {
        Self {
            msisdn: msisdn.into(),
        }
    }

    pub fn msisdn(&self) -> &Msisdn {
        &self.msisdn
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Request payload for `POST /rest/mtsms`.
///
/// `message` and `recipients` are required by the provider; `sender` and
/// `userref` are optional and omitted from the wire body when unset. The
/// payload is serialized verbatim with no local validation — GatewayAPI
/// rejects malformed requests with a 400/422.
pub struct SendSms {
    message: String,
    recipients: Vec<Recipient>,
    sender: Option<String>,
    userref: Option<String>,
}

impl SendSms {
    pub fn new(message: impl Into<String>, recipients: Vec<Recipient>) -> Self {
        Self {
            message: message.into(),
            recipients,
            sender: None,
            userref: None,
        }
    }

    /// Up to 11 alphanumeric characters or 15 digits shown as the SMS sender.
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Opaque reference echoed back in delivery status callbacks.
    pub fn userref(mut self, userref: impl Into<String>) -> Self {
        self.userref = Some(userref.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn sender_id(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn userref_value(&self) -> Option<&str> {
        self.userref.as_deref()
    }
}
