mod args;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::to_string_pretty;
use todo_core::{ClientConfig, ReqwestTransport, TodoClient, TodoUpdate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{Cli, Command};

fn init_logger(verbose: bool) {
    let default = if verbose { "todo_core=debug,todo=debug,info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli
        .resolve(ClientConfig::from_env().context("invalid environment configuration")?)
        .context("invalid command-line configuration")?;
    tracing::debug!(?config, "resolved configuration");

    let transport = ReqwestTransport::from_config(&config).context("failed to set up transport")?;
    let client = TodoClient::with_user_id(transport, config.user_id);
    tracing::debug!(
        user_id = client.user_id(),
        base_url = client.transport().base_url(),
        "client ready"
    );

    match &cli.command {
        Command::List => {
            let todos = client.list_todos().await.context("listing todos failed")?;
            println!("{}", to_string_pretty(&todos)?);
        }
        Command::Add { title } => {
            let todo = client.create_todo(title).await.context("creating todo failed")?;
            println!("{}", to_string_pretty(&todo)?);
        }
        Command::Update {
            id,
            title,
            completed,
        } => {
            let input = TodoUpdate {
                id: *id,
                title: title.clone(),
                completed: *completed,
            };
            let todo = client
                .update_todo(&input)
                .await
                .with_context(|| format!("updating todo {id} failed"))?;
            println!("{}", to_string_pretty(&todo)?);
        }
        Command::Delete { id } => {
            let deleted = client
                .delete_todo(*id)
                .await
                .with_context(|| format!("deleting todo {id} failed"))?;
            if !deleted.is_empty() {
                println!("{}", to_string_pretty(&deleted)?);
            }
        }
    }
    Ok(())
}
