use anyhow::Context;
use clap::Parser;
use geolocation_service::config::StoreCommand;
use geolocation_service::utils::error::ErrorCategory;
use geolocation_service::utils::{logger, validation::Validate};
use geolocation_service::{
    app, build_router, serve, AppConfig, CliConfig, Command, CreateLocationRequest, LocationError,
};
use serde::Serialize;
use std::path::Path;

const DEFAULT_CONFIG: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    if config.json_logs() {
        let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    match cli.command {
        Command::Serve { listen } => run_server(config, listen).await,
        Command::Store(command) => {
            if let Err(e) = run_command(&config, command).await {
                tracing::error!("Operation failed: {} (Category: {:?})", e, e.category());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(exit_code(&e));
            }
            Ok(())
        }
    }
}

/// The default config file is optional; an explicitly named one is not.
fn load_config(path: &str) -> Result<AppConfig, LocationError> {
    if path == DEFAULT_CONFIG && !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_file(path)
}

async fn run_server(mut config: AppConfig, listen: Option<String>) -> anyhow::Result<()> {
    if let Some(listen) = listen {
        config.server.listen = listen;
    }
    let addr = config.listen_addr()?;

    tracing::info!(
        "🚀 Starting {} v{} ({})",
        config.app.name,
        config.app.version,
        config.app.env
    );

    let service = app::build_service(&config).await?;
    let router = build_router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Cannot bind to {}", addr))?;

    serve(listener, router).await.context("Server error")?;
    Ok(())
}

async fn run_command(config: &AppConfig, command: StoreCommand) -> Result<(), LocationError> {
    let service = app::build_service(config).await?;

    match command {
        StoreCommand::Add { name, lat, lng } => {
            let created = service
                .create_location(CreateLocationRequest {
                    name,
                    latitude: lat,
                    longitude: lng,
                })
                .await?;
            print_json(&created)
        }
        StoreCommand::List => print_json(&service.get_all_locations().await?),
        StoreCommand::Nearest { lat, lng } => print_json(&service.find_nearest(lat, lng).await?),
        StoreCommand::Remove { name } => {
            service.delete_location_by_name(&name).await?;
            println!("✅ Location '{}' deleted", name);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), LocationError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_code(e: &LocationError) -> i32 {
    match e.category() {
        ErrorCategory::Client | ErrorCategory::Conflict => 1,
        ErrorCategory::NotFound | ErrorCategory::ResourceState => 2,
        ErrorCategory::Server | ErrorCategory::Config => 3,
    }
}
