use crate::db::db::Db;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_info;
use crate::server;
use anyhow::Result;
use clap::Args;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Host to bind to, overriding the configuration file
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overriding the configuration file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
pub async fn cmd(args: ServeArgs) -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Make sure the schema exists before the first request arrives
    Db::new()?;

    let server_config = Config::read()?.server();
    let host = args.host.unwrap_or(server_config.host);
    let port = args.port.unwrap_or(server_config.port);
    let addr = format!("{}:{}", host, port);

    msg_info!(Message::ServerListening(addr.clone()));
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, server::router()).await?;
    msg_info!(Message::ServerStopped);

    Ok(())
}
