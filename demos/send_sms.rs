use std::io;

use gatewayapi::{ApiToken, GatewayApiClient, Recipient, SendSms};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("GATEWAYAPI_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GATEWAYAPI_TOKEN environment variable is required",
        )
    })?;
    let msisdn = std::env::var("GATEWAYAPI_MSISDN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GATEWAYAPI_MSISDN environment variable is required",
        )
    })?;
    let message = std::env::var("GATEWAYAPI_MESSAGE")
        .unwrap_or_else(|_| "Hello from the gatewayapi example.".to_owned());

    let client = GatewayApiClient::new(ApiToken::new(token)?);
    let request = SendSms::new(message, vec![Recipient::new(msisdn.as_str())]);

    let response = client.send_sms(request).await?;
    println!(
        "ids: {:?}, total_cost: {} {}",
        response.ids, response.usage.total_cost, response.usage.currency
    );

    Ok(())
}
