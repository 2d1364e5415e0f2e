//! Ticket page download.

use reqwest::header::COOKIE;

use crate::error::PassError;
use crate::session::SessionId;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

fn http_client() -> Result<reqwest::Client, PassError> {
    Ok(reqwest::Client::builder()
        .user_agent(format!("fossnorth-pass/{}", CURRENT_VERSION))
        .build()?)
}

/// GET the ticket page as the given session.
///
/// The status code is not checked: an error page simply won't contain a
/// QR code, which is reported further down the line.
pub async fn fetch_ticket_page(url: &str, session: &SessionId) -> Result<String, PassError> {
    let client = http_client()?;

    tracing::debug!(url, "fetching ticket page");
    let response = client
        .get(url)
        .header(COOKIE, format!("sessionid={}", session))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%status, "ticket page returned an error status");
    }

    Ok(response.text().await?)
}
