use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "smig")]
#[command(about = "Site migration export CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the configured public URL)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// JWT sent as a bearer token when the server requires authentication
    #[arg(long, global = true)]
    pub(crate) token: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
