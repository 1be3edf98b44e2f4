use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "geolocation-service")]
#[command(about = "Manage named geographic points and find the nearest one", version)]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Override `server.listen` from the config file
        #[arg(long)]
        listen: Option<String>,
    },
    #[command(flatten)]
    Store(StoreCommand),
}

/// One-shot operations run directly against the configured store.
#[derive(Debug, Clone, Subcommand)]
pub enum StoreCommand {
    /// Add a location
    Add {
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// List all locations
    List,
    /// Find the location nearest to a point
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Delete a location by name
    Remove { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_global_flags() {
        let cli = CliConfig::parse_from([
            "geolocation-service",
            "serve",
            "--listen",
            "127.0.0.1:3000",
            "-c",
            "prod.toml",
            "-v",
        ]);
        assert_eq!(cli.config, "prod.toml");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Serve { listen: Some(ref l) } if l == "127.0.0.1:3000"
        ));
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cli = CliConfig::parse_from([
            "geolocation-service",
            "nearest",
            "--lat",
            "-33.8688",
            "--lng",
            "-151.2093",
        ]);
        match cli.command {
            Command::Store(StoreCommand::Nearest { lat, lng }) => {
                assert_eq!(lat, -33.8688);
                assert_eq!(lng, -151.2093);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, "config.toml");
    }

    #[test]
    fn test_store_commands_parse_at_top_level() {
        let cli = CliConfig::parse_from(["geolocation-service", "remove", "New York"]);
        assert!(matches!(
            cli.command,
            Command::Store(StoreCommand::Remove { ref name }) if name == "New York"
        ));

        let cli = CliConfig::parse_from(["geolocation-service", "list"]);
        assert!(matches!(cli.command, Command::Store(StoreCommand::List)));
    }
}
