use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod artifacts;
mod bindings;
mod chain;
mod cli;
mod config;
mod deployer;
mod metadata;
mod registry;
mod router;
mod routes;

use chain::MultiProvider;
use cli::{Args, RouteSet};
use config::RouteConfig;
use deployer::WarpRouteDeployer;
use registry::ChainRegistry;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let route = match args.route {
        RouteSet::Single => RouteConfig::Single(routes::single_collateral()),
        RouteSet::MultiCollateral => RouteConfig::MultiCollateral(routes::multi_collateral()),
    };

    let registry = ChainRegistry::testnets()?;
    let providers = MultiProvider::new(registry, args.key);

    info!(signer = %providers.signer_address(), "checking deployer balances");
    providers.assert_balances(&route.chains()).await?;

    info!("beginning warp route deployment");
    let deployer = WarpRouteDeployer::new(providers, args.artifacts_dir, args.contracts_dir);
    deployer.deploy(route).await?;
    info!("warp route deployment complete");

    Ok(())
}
