use crate::api;
use crate::api::handlers::auth::AuthConfig;
use crate::cli::{actions::Action, globals::GlobalArgs};
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server {
            port,
            dsn,
            base_url,
        } => {
            let auth_config = AuthConfig::new(base_url, globals.cookie_secret.clone());

            api::new(port, dsn, auth_config).await?;
        }
    }

    Ok(())
}
