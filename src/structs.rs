use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create the database tables and exit.
    #[arg(long)]
    pub create_database: bool,

    /// Replay a JSON lines event file instead of waiting for a shutdown signal.
    #[arg(long)]
    pub replay: Option<String>,
}
