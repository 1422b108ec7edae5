// Engine main entry point
use anyhow::Context;
use engine::config::EngineSettings;
use engine::services::{FinanceCalculatorServer, MyFinanceCalculator};
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting financial calculator engine...");

    let settings = EngineSettings::load().context("Failed to load engine settings")?;
    let addr: SocketAddr = settings
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", settings.listen_addr()))?;
    info!(
        durations = ?settings.durations.years(),
        reduced_durations = ?settings.reduced_durations.years(),
        "Engine will listen on {}",
        addr
    );

    let calculator_service = MyFinanceCalculator::new(Arc::new(settings));

    Server::builder()
        .add_service(FinanceCalculatorServer::new(calculator_service))
        .serve(addr)
        .await
        .context("gRPC server terminated")?;

    Ok(())
}
