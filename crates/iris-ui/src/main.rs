use clap::Parser;
use iris_ui::cli::Cli;
use iris_ui::client::PredictionClient;
use iris_ui::server::run_server;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let addr: SocketAddr = format!("{}:{}", cli.address, cli.port).parse()?;

    println!();
    println!("  Iris Flower Classifier");
    println!();
    println!("  Service: {}", cli.service_url);
    println!("  Open http://{} in your browser", addr);
    println!();

    let client = PredictionClient::new(cli.service_url)?;
    run_server(client, addr).await?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "iris_ui=debug,tower_http=debug"
    } else {
        "iris_ui=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
