/// Roster Server - HTTP service over the users table
use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_core::{NewUser, UserStore};
use roster_server::{config::ServerConfig, create_router, state::AppState};
use roster_storage::SqliteUserStore;
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "User records over HTTP", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// List all users, newest first
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    let result = match cli.command {
        Commands::Serve => serve(config).await,
        Commands::AddUser { name, email } => add_user(config, NewUser::new(name, email)).await,
        Commands::ListUsers => list_users(config).await,
    };

    if let Err(ref e) = result {
        tracing::error!("{:#}", e);
    }

    result
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())
        .and_then(|config| config.validate().map(|()| config));

    if let Err(ref e) = config {
        tracing::error!("{}", e);
    }

    Ok(config?)
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteUserStore> {
    SqliteUserStore::connect(&config.storage.database_url)
        .await
        .context("Database connection failed")
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(open_store(&config).await?);
    tracing::info!("Database connected");

    let app = create_router(AppState::new(store.clone()));

    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.server_address()))?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Close the pool whether the server stopped cleanly or not
    store.close().await;
    tracing::info!("Database connection closed");

    served.context("Server error")
}

async fn add_user(config: ServerConfig, new_user: NewUser) -> anyhow::Result<()> {
    new_user.validate()?;

    let store = open_store(&config).await?;
    let created = async {
        let id = store.insert_user(&new_user).await?;
        store.get_user(id).await
    }
    .await;
    store.close().await;

    let user = created.context("Failed to create user")?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let users = store.list_users().await;
    store.close().await;

    println!("Users:");
    for user in users.context("Failed to list users")? {
        println!("  {} - {} <{}> ({})", user.id, user.name, user.email, user.created_at);
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
