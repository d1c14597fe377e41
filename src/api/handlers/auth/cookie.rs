//! Session cookie transport.
//!
//! One `HttpOnly` cookie carries the signed session token. Reading only
//! extracts the raw value; verification belongs to the token codec.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

use super::state::AuthConfig;

/// Fixed name of the admin session cookie.
pub const AUTH_COOKIE_NAME: &str = "admin_auth_token";

/// Build the `Set-Cookie` value carrying a session token.
///
/// Flags are fixed: `HttpOnly`, `SameSite=Lax`, `Path=/`, `Max-Age` equal to
/// the token lifetime, and `Secure` when the site is served over HTTPS.
///
/// # Errors
/// Returns an error if the token contains bytes invalid in a header value.
pub fn session_cookie(config: &AuthConfig, token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age = config.session_ttl_seconds();
    let mut cookie =
        format!("{AUTH_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Build the `Set-Cookie` value that expires the session cookie immediately.
///
/// # Errors
/// Returns an error if the value cannot be represented as a header value.
pub fn clear_session_cookie(config: &AuthConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{AUTH_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Extract the raw session token from the `Cookie` header, if present.
///
/// Does not verify the token.
#[must_use]
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == AUTH_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn config(base_url: &str) -> AuthConfig {
        AuthConfig::new(base_url.to_string(), SecretString::from("secret".to_string()))
    }

    #[test]
    fn session_cookie_sets_expected_flags() {
        let cookie = session_cookie(&config("http://localhost:3000"), "tok").expect("cookie");
        let value = cookie.to_str().expect("ascii");
        assert!(value.starts_with("admin_auth_token=tok;"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Lax"));
        assert!(value.contains("Max-Age=604800"));
        assert!(!value.contains("Secure"));
    }

    #[test]
    fn session_cookie_secure_over_https() {
        let cookie = session_cookie(&config("https://vetrina.dev"), "tok").expect("cookie");
        assert!(cookie.to_str().expect("ascii").ends_with("; Secure"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(&config("http://localhost:3000")).expect("cookie");
        let value = cookie.to_str().expect("ascii");
        assert!(value.starts_with("admin_auth_token=;"));
        assert!(value.contains("Max-Age=0"));
    }

    #[test]
    fn session_token_extracted_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; admin_auth_token=abc.def.ghi; lang=en"),
        );
        assert_eq!(session_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn session_token_absent() {
        let headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_token(&headers), None);
    }
}
