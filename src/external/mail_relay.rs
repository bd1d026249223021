use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::{mail_configuration_error, mail_delivery_error, Error};

// One synchronous attempt per booking, bounded by this timeout. No retries:
// a retried send could double-notify the operator.
const RELAY_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Clone, Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

struct RelayConfig {
    api_base: String,
    api_key: String,
    from: String,
    to: String,
}

fn relay_config() -> Result<RelayConfig, Error> {
    let read = |name: &str| env::var(name).map_err(|_| mail_configuration_error());

    Ok(RelayConfig {
        api_base: read("MAIL_RELAY_API_BASE")?,
        api_key: read("MAIL_RELAY_API_KEY")?,
        from: read("MAIL_FROM")?,
        to: read("MAIL_TO")?,
    })
}

fn client() -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder().timeout(RELAY_TIMEOUT).build()?)
}

/// Checks that the relay accepts our credentials before anything is sent.
/// Any failure here is a configuration problem, not a delivery one.
#[tracing::instrument]
pub async fn verify() -> Result<(), Error> {
    let config = relay_config()?;
    let url = format!("https://{}/v1/verify", config.api_base);

    let res = client()?
        .get(url)
        .query(&[("key", &config.api_key)])
        .send()
        .await
        .map_err(|err| {
            tracing::error!(%err, "mail relay verification failed");
            mail_configuration_error()
        })?;

    if res.status().as_u16() != 200 {
        tracing::error!(status = res.status().as_u16(), "mail relay rejected credentials");
        return Err(mail_configuration_error());
    }

    Ok(())
}

/// Delivers one operator notice to the configured address.
#[tracing::instrument(skip(html))]
pub async fn send(subject: String, html: String) -> Result<(), Error> {
    let config = relay_config()?;
    let url = format!("https://{}/v1/messages", config.api_base);

    let message = Message {
        from: config.from,
        to: config.to,
        subject,
        html,
    };

    let res = client()?
        .post(url)
        .query(&[("key", &config.api_key)])
        .json(&message)
        .send()
        .await
        .map_err(|err| {
            tracing::error!(%err, "mail delivery failed");
            mail_delivery_error()
        })?;

    let status_code = res.status().as_u16();

    if !(200..300).contains(&status_code) {
        tracing::error!(status = status_code, "mail relay refused the message");
        return Err(mail_delivery_error());
    }

    let data: SendResponse = res.json().await.unwrap_or(SendResponse { id: None });
    tracing::info!(message_id = ?data.id, "booking notice delivered");

    Ok(())
}
