//! Accepted-status conversion
//!
//! Legacy documents store status codes as strings. Entries that are not
//! numbers are handled according to a [`StatusPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, MigrationError};
use crate::legacy::LegacyService;
use crate::model::DEFAULT_OK_STATUS;

/// What to do with a status string that is not a number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StatusPolicy {
    /// Keep the slot as an invalid (`null`) entry
    #[default]
    Preserve,
    /// Skip the entry
    Drop,
    /// Fail the migration
    Reject,
}

impl StatusPolicy {
    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Drop => "drop",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            other => Err(ConfigError::UnknownStatusPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for StatusPolicy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse the leading base-10 integer of a status string
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit, so `"200 OK"` yields 200. Returns `None` when no digit
/// follows.
///
/// Digit runs outside the `i64` range also return `None` and are handled by
/// the status policy like any other invalid entry, rather than being kept as
/// an imprecise floating-point value.
#[must_use]
pub fn parse_status_code(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Accepted status codes for a migrated app
///
/// A present `status` list is authoritative, even when empty; only an
/// absent list falls back to `[200]`.
///
/// # Errors
/// Returns [`MigrationError::InvalidStatus`] for the first unparseable entry
/// when `policy` is [`StatusPolicy::Reject`].
pub fn ok_status(
    service: &LegacyService,
    index: usize,
    policy: StatusPolicy,
) -> Result<Vec<Option<i64>>, MigrationError> {
    let Some(status) = service.status.as_ref() else {
        return Ok(vec![Some(DEFAULT_OK_STATUS)]);
    };

    let mut codes = Vec::with_capacity(status.len());
    for raw in status {
        match parse_status_code(raw) {
            Some(code) => codes.push(Some(code)),
            None => {
                tracing::warn!(
                    service = %service.name,
                    index,
                    value = %raw,
                    policy = %policy,
                    "status code is not a number"
                );
                match policy {
                    StatusPolicy::Preserve => codes.push(None),
                    StatusPolicy::Drop => {}
                    StatusPolicy::Reject => {
                        return Err(MigrationError::InvalidStatus {
                            service: service.name.clone(),
                            index,
                            value: raw.clone(),
                        });
                    }
                }
            }
        }
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_status(status: &[&str]) -> LegacyService {
        LegacyService::new("svc", "http://svc").with_status(status.iter().copied())
    }

    #[test]
    fn parses_leading_integer() {
        assert_eq!(parse_status_code("200"), Some(200));
        assert_eq!(parse_status_code("  404"), Some(404));
        assert_eq!(parse_status_code("301 Moved"), Some(301));
        assert_eq!(parse_status_code("+201"), Some(201));
        assert_eq!(parse_status_code("-1"), Some(-1));
        assert_eq!(parse_status_code("2.5"), Some(2));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_status_code(""), None);
        assert_eq!(parse_status_code("ok"), None);
        assert_eq!(parse_status_code("-"), None);
        assert_eq!(parse_status_code("x200"), None);
        assert_eq!(parse_status_code("99999999999999999999999"), None);
    }

    #[test]
    fn absent_status_defaults_to_200() {
        let service = LegacyService::new("svc", "http://svc");
        assert_eq!(
            ok_status(&service, 0, StatusPolicy::Preserve).unwrap(),
            vec![Some(200)]
        );
    }

    #[test]
    fn empty_status_replaces_default() {
        let service = with_status(&[]);
        assert!(ok_status(&service, 0, StatusPolicy::Preserve)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn policies_handle_invalid_entries() {
        let service = with_status(&["201", "nope", "404"]);

        assert_eq!(
            ok_status(&service, 3, StatusPolicy::Preserve).unwrap(),
            vec![Some(201), None, Some(404)]
        );
        assert_eq!(
            ok_status(&service, 3, StatusPolicy::Drop).unwrap(),
            vec![Some(201), Some(404)]
        );
        assert_eq!(
            ok_status(&service, 3, StatusPolicy::Reject),
            Err(MigrationError::InvalidStatus {
                service: "svc".to_string(),
                index: 3,
                value: "nope".to_string(),
            })
        );
    }

    #[test]
    fn policy_from_str() {
        assert_eq!("Drop".parse::<StatusPolicy>().unwrap(), StatusPolicy::Drop);
        assert_eq!(" reject ".parse::<StatusPolicy>().unwrap(), StatusPolicy::Reject);
        assert!("lenient".parse::<StatusPolicy>().is_err());
        assert_eq!(StatusPolicy::default().to_string(), "preserve");
    }

    #[test]
    fn policy_deserializes_like_from_str() {
        for (raw, expected) in [
            ("\"drop\"", StatusPolicy::Drop),
            ("\"Drop\"", StatusPolicy::Drop),
            ("\" REJECT \"", StatusPolicy::Reject),
        ] {
            assert_eq!(serde_json::from_str::<StatusPolicy>(raw).unwrap(), expected);
        }
        assert!(serde_json::from_str::<StatusPolicy>("\"lenient\"").is_err());
        assert_eq!(serde_json::to_string(&StatusPolicy::Reject).unwrap(), "\"reject\"");
    }
}
