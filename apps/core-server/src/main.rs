use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rbac_core::config::core_config::AppConfig;
use rbac_core::model::role::Role;
use rbac_server::router::start_server;
use rbac_server::token_validator::TokenAuthority;
use rbac_server::{ServerConfig, metrics};
use secrecy::SecretString;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints an access token signed with the configured secret
    IssueToken {
        #[arg(long)]
        subject: String,
        #[arg(long = "role")]
        roles: Vec<Role>,
        /// token never expires when omitted
        #[arg(long)]
        lifetime_secs: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<ServerConfig> =
        AppConfig::from_files(&config_files).expect("Failed creating config");

    if let Some(Command::IssueToken {
        subject,
        roles,
        lifetime_secs,
    }) = cli.command
    {
        let authority = TokenAuthority::new(
            &SecretString::from(app_config.app.jwt_secret.to_owned()),
            app_config.app.jwt_leeway,
        )
        .expect("Invalid token configuration");

        let token = authority
            .issue_access_token(&subject, &roles, lifetime_secs.map(Duration::from_secs))
            .expect("Failed to issue token");
        println!("{token}");
        return;
    }

    initialize_tracing(&app_config.app);
    if let Err(error) = metrics::setup() {
        tracing::warn!(%error, "Metrics registration failed");
    }

    let addr = SocketAddr::new(
        app_config
            .app
            .server_ip
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))),
        app_config.app.server_port.unwrap_or(3000),
    );

    let listener = TcpListener::bind(addr).expect("Failed to bind to address");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(async {
            let db_conn = sql_data_provider::db_conn(&app_config.app.database_url, true)
                .await
                .expect("Failed to connect to database");

            if let Err(error) = start_server(listener, app_config, db_conn).await {
                tracing::error!(%error, "Server stopped");
            }
        })
}

fn initialize_tracing(config: &ServerConfig) {
    // RUST_LOG wins over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
        })
        .expect("Failed to create env filter");

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_layer.with(tracing_subscriber::fmt::layer()).init();
    };
}
