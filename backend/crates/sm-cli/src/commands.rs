use crate::export_commands::ExportCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Export file operations
    Export {
        #[command(subcommand)]
        action: ExportCommands,
    },
}
