use anyhow::Result;
use vetrina::cli::{self, actions, actions::Action};

#[tokio::main]
async fn main() -> Result<()> {
    let (action, globals) = cli::start()?;

    match action {
        Action::Server { .. } => actions::server::handle(action, &globals).await?,
    }

    Ok(())
}
