use super::sysfs::SysfsMonitor;
use super::transport::{NetworkMonitor, has_active_transport};
use crate::config::Config;
use crate::error::ExchangeError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Best-effort answer to "can this device reach the internet right now".
///
/// Every call asks the monitor and, for [`has_internet_access`], the remote
/// host again. Nothing is cached.
///
/// [`has_internet_access`]: ConnectivityProbe::has_internet_access
#[derive(Clone)]
pub struct ConnectivityProbe {
    monitor: Option<Arc<dyn NetworkMonitor>>,
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl ConnectivityProbe {
    pub fn new(
        monitor: Option<Arc<dyn NetworkMonitor>>,
        url: Url,
        timeout: Duration,
        proxy: Option<&Url>,
    ) -> Result<Self, ExchangeError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("currency-exchange/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout);
        // Only the configured proxy applies; system proxy env vars are ignored.
        builder = match proxy {
            Some(proxy_url) => builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?),
            None => builder.no_proxy(),
        };
        let client = builder.build()?;
        Ok(Self {
            monitor,
            client,
            url,
            timeout,
        })
    }

    /// Probe backed by the sysfs monitor and the configured host.
    pub fn from_config(cfg: &Config) -> Result<Self, ExchangeError> {
        let monitor: Arc<dyn NetworkMonitor> = Arc::new(SysfsMonitor::new(&cfg.net_sysfs_root));
        Self::new(
            Some(monitor),
            cfg.probe_url.clone(),
            cfg.probe_timeout(),
            cfg.proxy.as_ref(),
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_active_transport(&self) -> bool {
        has_active_transport(self.monitor.as_deref())
    }

    /// Active transport first, then one request to the probe host within the
    /// configured timeout.
    pub async fn has_internet_access(&self) -> bool {
        self.has_internet_access_within(self.timeout).await
    }

    /// Same as [`has_internet_access`](Self::has_internet_access) with a
    /// per-call timeout.
    pub async fn has_internet_access_within(&self, timeout: Duration) -> bool {
        if !self.has_active_transport() {
            info!("no active network transport; skipping reachability request");
            return false;
        }
        self.is_host_reachable(timeout).await
    }

    /// Single HEAD request to the probe host. Any failure collapses to `false`.
    pub async fn is_host_reachable(&self, timeout: Duration) -> bool {
        let result = self
            .client
            .head(self.url.clone())
            .timeout(timeout)
            .send()
            .await;
        match result {
            Ok(resp) if resp.status().is_success() => {
                info!(url = %self.url, status = %resp.status(), "probe host reachable");
                true
            }
            Ok(resp) => {
                warn!(url = %self.url, status = %resp.status(), "probe host answered with failure status");
                false
            }
            Err(e) => {
                warn!(
                    url = %self.url,
                    timeout = e.is_timeout(),
                    error = %e,
                    "probe request failed"
                );
                false
            }
        }
    }
}
