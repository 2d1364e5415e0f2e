//! Error types for the ticket converter.

use fossnorth_core::FossNorthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassError {
    #[error("Invalid session id '{0}': expected 32 lowercase letters or digits")]
    InvalidSessionId(String),

    #[error("Could not fetch ticket page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not find the QRCode on your ticket view.")]
    QrCodeNotFound,

    #[error("QR code image is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Could not decode QR code image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not read QR code: {0}")]
    QrDecode(String),

    #[error("Could not encode wallet payload: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    #[error("Invalid share URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Core(#[from] FossNorthError),
}

impl PassError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PassError::QrCodeNotFound => 2,
            _ => 1,
        }
    }
}
