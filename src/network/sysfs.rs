use super::transport::{ActiveNetwork, NetworkCapabilities, NetworkMonitor, Transport};
use crate::error::ExchangeError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// ARPHRD_LOOPBACK from `<linux/if_arp.h>`.
const ARPHRD_LOOPBACK: &str = "772";

/// Reads interface state from a Linux `/sys/class/net` style tree.
#[derive(Debug, Clone)]
pub struct SysfsMonitor {
    root: PathBuf,
}

impl Default for SysfsMonitor {
    fn default() -> Self {
        Self::new("/sys/class/net")
    }
}

impl SysfsMonitor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Result<NetworkCapabilities, ExchangeError> {
        let mut caps = NetworkCapabilities::default();
        for entry in fs::read_dir(&self.root)? {
            let iface = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!(error = %e, "failed to read network interface entry");
                    continue;
                }
            };
            if !is_up(&iface) {
                continue;
            }
            let transport = classify(&iface);
            debug!(iface = %iface.display(), ?transport, "interface up");
            caps.add_transport(transport);
        }
        Ok(caps)
    }
}

impl NetworkMonitor for SysfsMonitor {
    fn active_network(&self) -> Option<ActiveNetwork> {
        match self.scan() {
            Ok(caps) if caps.is_empty() => None,
            Ok(caps) => Some(ActiveNetwork::Capabilities(caps)),
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "cannot read network interfaces");
                None
            }
        }
    }
}

fn read_attr(iface: &Path, attr: &str) -> Option<String> {
    fs::read_to_string(iface.join(attr))
        .ok()
        .map(|s| s.trim().to_string())
}

// Point-to-point links often report `unknown` while carrying traffic.
fn is_up(iface: &Path) -> bool {
    match read_attr(iface, "operstate").as_deref() {
        Some("up") => true,
        Some("unknown") => read_attr(iface, "carrier").as_deref() == Some("1"),
        _ => false,
    }
}

fn classify(iface: &Path) -> Transport {
    let name = iface
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if name == "lo" || read_attr(iface, "type").as_deref() == Some(ARPHRD_LOOPBACK) {
        return Transport::Loopback;
    }
    if iface.join("bridge").exists() {
        return Transport::Virtual;
    }
    if iface.join("wireless").exists() || iface.join("phy80211").exists() || name.starts_with("wl")
    {
        return Transport::Wifi;
    }
    const CELLULAR: [&str; 4] = ["wwan", "rmnet", "ccmni", "ppp"];
    const VPN: [&str; 3] = ["tun", "tap", "wg"];
    const ETHERNET: [&str; 2] = ["eth", "en"];
    if CELLULAR.iter().any(|p| name.starts_with(p)) {
        Transport::Cellular
    } else if name.starts_with("bnep") {
        Transport::Bluetooth
    } else if VPN.iter().any(|p| name.starts_with(p)) {
        Transport::Vpn
    } else if iface.join("device").exists() || ETHERNET.iter().any(|p| name.starts_with(p)) {
        Transport::Ethernet
    } else {
        // docker0, virbr0, veth*: no `device` link
        Transport::Virtual
    }
}
