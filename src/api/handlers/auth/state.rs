//! Auth configuration and shared state.
//!
//! Built once at startup from CLI arguments and passed into handlers by
//! `Extension`; nothing here is read from ambient statics.

use secrecy::SecretString;

use super::token::TokenCodec;

const DEFAULT_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    base_url: String,
    cookie_secret: SecretString,
    session_ttl_seconds: i64,
}

impl AuthConfig {
    #[must_use]
    pub fn new(base_url: String, cookie_secret: SecretString) -> Self {
        Self {
            base_url,
            cookie_secret,
            session_ttl_seconds: DEFAULT_SESSION_TTL_SECONDS,
        }
    }

    #[must_use]
    pub fn with_session_ttl_seconds(mut self, seconds: i64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }

    /// Public base URL of the site frontend; drives CORS and the Secure flag.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    /// Only mark cookies Secure when the site is served over HTTPS.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    pub(super) fn cookie_secret(&self) -> &SecretString {
        &self.cookie_secret
    }
}

pub struct AuthState {
    config: AuthConfig,
    codec: TokenCodec,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        let codec = TokenCodec::new(config.cookie_secret(), config.session_ttl_seconds());
        Self { config, codec }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
