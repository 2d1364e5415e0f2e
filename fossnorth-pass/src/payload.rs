//! Catima wallet card payload and share link.

use fossnorth_core::conference::validity_window;
use fossnorth_core::config::PassSettings;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use url::Url;

use crate::error::PassError;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const UNKNOWN_HOLDER: &str = "[UNKNOWN]";

/// Card fields in the order Catima expects them. Field names are the wire
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketPayload {
    pub store: String,
    pub note: String,
    pub balance: String,
    pub validfrom: String,
    pub expiry: String,
    pub cardid: String,
    pub barcodeid: String,
    pub barcodetype: String,
    pub headercolor: String,
}

impl TicketPayload {
    pub fn new(
        settings: &PassSettings,
        holder: Option<&str>,
        barcode: &str,
    ) -> Result<Self, PassError> {
        let (from, until) = validity_window()?;

        Ok(TicketPayload {
            store: settings.store.clone(),
            note: String::new(),
            balance: "0".to_string(),
            validfrom: from.timestamp_millis().to_string(),
            expiry: until.timestamp_millis().to_string(),
            cardid: holder.unwrap_or(UNKNOWN_HOLDER).to_string(),
            barcodeid: barcode.to_string(),
            barcodetype: "QR_CODE".to_string(),
            headercolor: settings.header_color.clone(),
        })
    }

    /// `application/x-www-form-urlencoded` form of the payload.
    pub fn to_form(&self) -> Result<String, PassError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Share link: the form-encoded payload, percent-encoded once more, as the
/// URL fragment.
pub fn share_link(share_url: &str, payload: &TicketPayload) -> Result<Url, PassError> {
    let form = payload.to_form()?;
    let fragment = utf8_percent_encode(&form, URI_COMPONENT).to_string();

    let mut url = Url::parse(share_url)?;
    url.set_fragment(Some(&fragment));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(holder: Option<&str>) -> TicketPayload {
        TicketPayload::new(&PassSettings::default(), holder, "ABC123").unwrap()
    }

    #[test]
    fn payload_has_fixed_card_metadata() {
        let payload = payload(Some("Ada Lovelace"));
        assert_eq!(payload.store, "foss-north 2025");
        assert_eq!(payload.note, "");
        assert_eq!(payload.balance, "0");
        assert_eq!(payload.validfrom, "1744581600000");
        assert_eq!(payload.expiry, "1744754400000");
        assert_eq!(payload.cardid, "Ada Lovelace");
        assert_eq!(payload.barcodeid, "ABC123");
        assert_eq!(payload.barcodetype, "QR_CODE");
        assert_eq!(payload.headercolor, "-464712");
    }

    #[test]
    fn unknown_holder_placeholder() {
        assert_eq!(payload(None).cardid, "[UNKNOWN]");
    }

    #[test]
    fn form_keeps_field_order() {
        assert_eq!(
            payload(Some("Ada Lovelace")).to_form().unwrap(),
            "store=foss-north+2025&note=&balance=0&validfrom=1744581600000\
             &expiry=1744754400000&cardid=Ada+Lovelace&barcodeid=ABC123\
             &barcodetype=QR_CODE&headercolor=-464712"
        );
    }

    #[test]
    fn link_fragment_is_percent_encoded_form() {
        let url = share_link("https://catima.app/share", &payload(Some("Ada Lovelace"))).unwrap();
        assert_eq!(
            url.as_str(),
            "https://catima.app/share#store%3Dfoss-north%2B2025%26note%3D%26balance%3D0\
             %26validfrom%3D1744581600000%26expiry%3D1744754400000%26cardid%3DAda%2BLovelace\
             %26barcodeid%3DABC123%26barcodetype%3DQR_CODE%26headercolor%3D-464712"
        );
    }

    #[test]
    fn special_characters_are_double_encoded() {
        let url = share_link("https://catima.app/share", &payload(Some("Åsa & Co"))).unwrap();
        // form encoding gives %C3%85sa+%26+Co, which is encoded again
        assert!(url.as_str().contains("cardid%3D%25C3%2585sa%2B%2526%2BCo%26"));
    }

    #[test]
    fn invalid_share_url() {
        assert!(matches!(
            share_link("not a url", &payload(None)),
            Err(PassError::Url(_))
        ));
    }
}
