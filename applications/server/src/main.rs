//! Roster Server - User CRUD service
use clap::{Parser, Subcommand};
use roster_core::UserRepository;
use roster_server::{config::ServerConfig, create_router, state::AppState};
use roster_storage::SqliteUserRepository;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user CRUD service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List all users
    ListUsers {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { config: None }) {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListUsers { config } => {
            list_users(config).await?;
        }
    }

    Ok(())
}

/// Load and validate configuration, then open and migrate the store
async fn open_repository(
    config_path: Option<PathBuf>,
) -> anyhow::Result<(ServerConfig, SqliteUserRepository)> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    let pool = roster_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    roster_storage::run_migrations(&pool).await?;

    Ok((config, SqliteUserRepository::new(pool)))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (config, repository) = open_repository(config_path).await?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Database: {}", config.storage.database_url);

    let app_state = AppState::new(Arc::new(repository));
    let app = create_router(app_state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_users(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (_, repository) = open_repository(config_path).await?;

    let users = repository.list_all().await?;

    println!("Users:");
    for user in users {
        let dob = user.dob.map(|d| d.to_string()).unwrap_or_default();
        println!("  {} - {} ({})", user.id, user.name, dob);
    }

    Ok(())
}
