use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{ClearCommand, CompletionsCommand, ExpiryCommand, ExportCommand};

const ROOT_LONG_ABOUT: &str = "Fetch AWS credentials and set them as environment variables.

Evaluate the output of the command in order to export AWS credentials as environment variables, e.g. $(cred) or eval $(cred).";

const CLEAR_LONG_ABOUT: &str = "Clear AWS environment variables.

Evaluate the output of the command in order to clear AWS credentials from the environment, e.g. $(cred clear) or eval $(cred clear).";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "cred",
    version,
    about = "Fetch AWS credentials and set them as environment variables",
    long_about = ROOT_LONG_ABOUT
)]
pub struct Cli {
    #[arg(short = 'p', long, help = "AWS profile to use")]
    pub profile: Option<String>,

    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(
        about = "Print the time that explicit environment credentials will expire",
        visible_aliases = ["exp", "expires", "expire"]
    )]
    Expiry(ExpiryCommand),
    #[command(
        about = "Clear AWS environment variables",
        long_about = CLEAR_LONG_ABOUT,
        visible_aliases = ["unset", "rm", "none"]
    )]
    Clear(ClearCommand),
    #[command(about = "Generate shell completion scripts for cred")]
    Completions(CompletionsCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            None => ExportCommand::default().execute(self.profile.as_deref()).await,
            Some(Commands::Expiry(cmd)) => cmd.execute(),
            Some(Commands::Clear(cmd)) => cmd.execute(),
            Some(Commands::Completions(cmd)) => {
                cmd.execute();
                Ok(())
            }
        }
    }
}
