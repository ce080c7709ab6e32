use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

mod chart;
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod provider;
mod render;
mod server;

use chart::ChartSerializer;
use config::Config;
use provider::StaticMetricProvider;
use server::DashboardServer;

#[derive(Parser, Debug)]
#[clap(about = "KPI Dashboard - a single-chart business metrics web demo")]
struct Args {
    #[clap(short, long, default_value = "false")]
    debug: bool,

    /// Overrides `listen_port` from the config file.
    #[clap(short, long)]
    port: Option<u16>,

    /// TOML config file. Defaults to $DASHBOARD_CONFIG when set.
    #[clap(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(if args.debug { LevelFilter::Debug } else { LevelFilter::Info })
        .init();

    let mut config = Config::load(args.config.as_deref());
    if let Some(port) = args.port {
        config.listen_port = port;
    }

    let server = DashboardServer::new(
        Arc::new(StaticMetricProvider::new()),
        ChartSerializer::new(config.title.clone()),
    );
    server.serve(config.socket_addr()).await
}
