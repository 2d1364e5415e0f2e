//! Ticket session ids.

use std::fmt;
use std::str::FromStr;

use crate::error::PassError;

const SESSION_ID_LEN: usize = 32;

/// The `sessionid` cookie of a logged-in ticket holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SessionId {
    type Err = PassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == SESSION_ID_LEN
            && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());

        if valid {
            Ok(SessionId(s.to_string()))
        } else {
            Err(PassError::InvalidSessionId(s.to_string()))
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_alphanumerics() {
        assert!("a".repeat(32).parse::<SessionId>().is_ok());
        assert!("0123456789abcdefghijklmnopqrstuv".parse::<SessionId>().is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("a".repeat(31).parse::<SessionId>().is_err());
        assert!("a".repeat(33).parse::<SessionId>().is_err());
        assert!("".parse::<SessionId>().is_err());
    }

    #[test]
    fn rejects_other_characters() {
        let mut upper = "a".repeat(31);
        upper.push('A');
        assert!(upper.parse::<SessionId>().is_err());

        let mut dash = "a".repeat(31);
        dash.push('-');
        assert!(dash.parse::<SessionId>().is_err());

        // 32 bytes, but not ascii
        let mut umlaut = "a".repeat(30);
        umlaut.push('ö');
        assert!(umlaut.parse::<SessionId>().is_err());
    }
}
