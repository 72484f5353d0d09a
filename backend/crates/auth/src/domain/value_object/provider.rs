//! Identity Provider Value Object
//!
//! Closed set of supported federated identity providers. Unknown
//! provider names are rejected at the boundary, never stored.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported federated identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    /// Stable lowercase name used in URLs and database rows
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Facebook => "facebook",
        }
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            other => Err(AppError::bad_request(format!(
                "Unknown identity provider: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse() {
        assert_eq!("google".parse::<Provider>().unwrap(), Provider::Google);
        assert_eq!("facebook".parse::<Provider>().unwrap(), Provider::Facebook);
    }

    #[test]
    fn test_provider_parse_unknown() {
        assert!("github".parse::<Provider>().is_err());
        assert!("Google".parse::<Provider>().is_err()); // case sensitive
        assert!("".parse::<Provider>().is_err());
    }

    #[test]
    fn test_provider_roundtrip() {
        for provider in [Provider::Google, Provider::Facebook] {
            assert_eq!(provider.as_str().parse::<Provider>().unwrap(), provider);
        }
    }
}
