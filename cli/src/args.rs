use clap::{Parser, Subcommand};
use todo_core::{ClientConfig, ConfigError, TodoId, UserId};

/// Manage one user's todos on a remote todo service.
#[derive(Debug, Parser)]
#[command(name = "todo", version)]
pub struct Cli {
    /// Service base URL (overrides TODO_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Owning user id (overrides TODO_USER_ID)
    #[arg(long, global = true)]
    pub user_id: Option<UserId>,

    /// Log requests at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List all todos of the user
    List,
    /// Create a todo
    Add { title: String },
    /// Set the title and completion flag of a todo
    Update {
        id: TodoId,
        #[arg(long)]
        title: String,
        #[arg(long, required = true, action = clap::ArgAction::Set)]
        completed: bool,
    },
    /// Delete a todo
    Delete { id: TodoId },
}

impl Cli {
    /// Apply command-line overrides on top of an environment-derived config.
    pub fn resolve(&self, base: ClientConfig) -> Result<ClientConfig, ConfigError> {
        let mut config = match &self.base_url {
            Some(url) => base.with_base_url(url)?,
            None => base,
        };
        if let Some(user_id) = self.user_id {
            config.user_id = user_id;
        }
        Ok(config)
    }
}
