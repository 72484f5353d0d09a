//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Cookie Max-Age; None makes the cookie session-scoped and the
    /// server-side session live until sign-out
    pub cookie_max_age: Option<Duration>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    /// Defaults to a freshly generated random secret, so a forgotten
    /// override cannot yield forgeable tokens. Deployments that must
    /// survive restarts set `session_secret` explicitly.
    fn default() -> Self {
        Self::with_random_secret()
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_cookie_name: "auth_session".to_string(),
            session_secret: secret,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            cookie_max_age: None,
            password_pepper: None,
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret_is_random_and_nonzero() {
        let a = AuthConfig::default();
        let b = AuthConfig::default();
        assert_ne!(a.session_secret, [0u8; 32]);
        assert_ne!(a.session_secret, b.session_secret);
    }
}
