use secrecy::SecretString;

/// Process-wide configuration that is not part of a specific action.
///
/// The cookie secret signs and verifies admin session tokens. It is required
/// at startup; the CLI refuses to run without it, so no admin route is ever
/// served with an unsigned session.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub cookie_secret: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(cookie_secret: SecretString) -> Self {
        Self { cookie_secret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("sekret".to_string()));
        assert_eq!(args.cookie_secret.expose_secret(), "sekret");
    }
}
