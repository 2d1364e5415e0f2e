//! Pulling the holder name and QR image out of the ticket page.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PassError;

static HOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)<p class="ticket-regname">(.+?)</p>\r?$"#)
        .expect("holder name pattern is a valid regex")
});

static QR_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"data:image/png;base64,([^"]+)""#).expect("qr image pattern is a valid regex")
});

/// What the converter needs from a ticket page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Registered name, if the page shows one.
    pub holder: Option<String>,
    /// Base64 payload of the QR code PNG.
    pub qr_png_base64: String,
}

impl Ticket {
    pub fn extract(html: &str) -> Result<Self, PassError> {
        let qr_png_base64 = QR_IMAGE
            .captures(html)
            .map(|c| c[1].to_string())
            .ok_or(PassError::QrCodeNotFound)?;

        let holder = HOLDER_NAME.captures(html).map(|c| c[1].to_string());
        if holder.is_none() {
            tracing::warn!("no holder name on the ticket page");
        }

        Ok(Ticket {
            holder,
            qr_png_base64,
        })
    }
}
