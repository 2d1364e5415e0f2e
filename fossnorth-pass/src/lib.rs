//! Convert a foss-north 2025 ticket into a Catima wallet card link.
//!
//! The ticket page is fetched with the holder's session cookie, the QR code
//! PNG embedded in it is decoded, and its content is packed into a share
//! link that Catima turns into a card.

pub mod error;
pub mod fetch;
pub mod payload;
pub mod qr;
pub mod session;
pub mod ticket;

use fossnorth_core::config::PassSettings;
use url::Url;

pub use error::PassError;
pub use session::SessionId;

use crate::payload::{TicketPayload, share_link};
use crate::ticket::Ticket;

/// Fetch the ticket page and build the share link.
pub async fn ticket_link(session: &SessionId, settings: &PassSettings) -> Result<Url, PassError> {
    let html = fetch::fetch_ticket_page(&settings.ticket_url, session).await?;
    link_from_page(&html, settings)
}

/// Build the share link from an already fetched ticket page.
pub fn link_from_page(html: &str, settings: &PassSettings) -> Result<Url, PassError> {
    let ticket = Ticket::extract(html)?;

    let png = qr::decode_base64(&ticket.qr_png_base64)?;
    let barcode = qr::decode_qr_png(&png)?;
    tracing::debug!(%barcode, "read QR code");

    let payload = TicketPayload::new(settings, ticket.holder.as_deref(), &barcode)?;
    share_link(&settings.share_url, &payload)
}
