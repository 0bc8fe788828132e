use std::io;

use gatewayapi::{ApiToken, GatewayApiClient, GatewayApiError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("GATEWAYAPI_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "GATEWAYAPI_TOKEN environment variable is required",
        )
    })?;

    let client = GatewayApiClient::new(ApiToken::new(token)?);

    match client.get_balance().await {
        Ok(balance) => println!(
            "account {}: {} {}",
            balance.id, balance.credit, balance.currency
        ),
        Err(GatewayApiError::Unauthorized { payload }) => {
            eprintln!(
                "credentials rejected ({}, incident {}): {}",
                payload.code, payload.incident_uuid, payload.message
            );
            std::process::exit(1);
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
