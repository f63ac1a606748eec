use currency_exchange::{ConnectivityProbe, service::PairsOps};
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &currency_exchange::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        proxy = %cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        probe_url = %cfg.probe_url,
        probe_timeout_secs = cfg.probe_timeout_secs,
        loglevel = %cfg.loglevel
    );

    let ops = PairsOps::connect(&cfg.database_url).await?;
    let pairs = ops.list(cfg.user_id).await?;
    info!(user_id = cfg.user_id, count = pairs.len(), "quick-access pairs");
    for (rank, pair) in pairs.iter().enumerate() {
        info!(
            rank = rank + 1,
            id = pair.id,
            pair = %format!("{}->{}", pair.from_currency, pair.to_currency),
            usage_count = pair.usage_count
        );
    }

    let probe = ConnectivityProbe::from_config(cfg)?;
    if !probe.has_active_transport() {
        warn!("offline: no active cellular, WiFi or ethernet network");
    } else if probe.has_internet_access().await {
        info!(url = %probe.url(), "online");
    } else {
        warn!(url = %probe.url(), "network up but internet unreachable");
    }

    Ok(())
}
