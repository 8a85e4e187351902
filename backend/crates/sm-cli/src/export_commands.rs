use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ExportCommands {
    /// Generate a new export file on the server
    Create {
        /// full, content_only or configuration_only
        #[arg(long = "type")]
        export_type: Option<String>,
    },

    /// List stored export files, newest first
    List,

    /// Print the parsed contents of an export file
    Get {
        /// Export file name (migration-YYYYMMDD-HHMMSS-xxxxxxxx.json)
        file: String,
    },
}
