//! Stop code types.

use std::fmt;

/// Characters that would change the structure of the request URL.
const URL_DELIMITERS: [char; 3] = ['/', '?', '#'];

/// Error returned when parsing an invalid ATCO code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ATCO code: {reason}")]
pub struct InvalidAtco {
    reason: &'static str,
}

/// An ATCO stop code, e.g. `490004733D`.
///
/// The code is opaque to us: TransportAPI is the authority on which codes
/// exist. Locally it only has to be non-blank and safe to use as a single
/// URL path segment.
///
/// # Examples
///
/// ```
/// use bus_info::domain::AtcoCode;
///
/// let stop = AtcoCode::parse("490004733D").unwrap();
/// assert_eq!(stop.as_str(), "490004733D");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(AtcoCode::parse(" 490004733D\n").unwrap(), stop);
///
/// // Blank codes are rejected
/// assert!(AtcoCode::parse("").is_err());
/// assert!(AtcoCode::parse("   ").is_err());
///
/// // So are codes that would escape their path segment
/// assert!(AtcoCode::parse("4900/live").is_err());
/// assert!(AtcoCode::parse("4900?x=1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AtcoCode(String);

impl AtcoCode {
    /// Parse an ATCO code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAtco> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidAtco {
                reason: "must not be empty",
            });
        }

        if trimmed.contains(URL_DELIMITERS) {
            return Err(InvalidAtco {
                reason: "must not contain '/', '?' or '#'",
            });
        }

        Ok(AtcoCode(trimmed.to_string()))
    }

    /// Returns the ATCO code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AtcoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AtcoCode({})", self.0)
    }
}

impl fmt::Display for AtcoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_code_verbatim() {
        // Letters keep their case; TransportAPI codes are case-sensitive
        let stop = AtcoCode::parse("490004733d").unwrap();
        assert_eq!(stop.as_str(), "490004733d");
    }

    #[test]
    fn blank_rejected() {
        let err = AtcoCode::parse("\t").unwrap_err();
        assert_eq!(err.to_string(), "invalid ATCO code: must not be empty");
    }

    #[test]
    fn url_delimiters_rejected() {
        for code in ["4900?app_key=x", "4900#frag", "../4900", "4900/live.json"] {
            let err = AtcoCode::parse(code).unwrap_err();
            assert_eq!(
                err.to_string(),
                "invalid ATCO code: must not contain '/', '?' or '#'"
            );
        }
    }

    #[test]
    fn display_and_debug() {
        let stop = AtcoCode::parse("490004733D").unwrap();
        assert_eq!(stop.to_string(), "490004733D");
        assert_eq!(format!("{stop:?}"), "AtcoCode(490004733D)");
    }
}
