use serde::{Deserialize, Serialize};

/// Link-layer transport an active network runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Cellular,
    Wifi,
    Ethernet,
    Bluetooth,
    Vpn,
    Loopback,
    /// Bridges, veth pairs and other links with no physical device behind them.
    Virtual,
}

impl Transport {
    /// Transports that count as a usable connection on their own.
    pub const QUALIFYING: [Transport; 3] = [Transport::Cellular, Transport::Wifi, Transport::Ethernet];

    pub fn qualifies(self) -> bool {
        Self::QUALIFYING.contains(&self)
    }
}

/// Transports reported for the active network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkCapabilities {
    transports: Vec<Transport>,
}

impl NetworkCapabilities {
    pub fn new(transports: impl IntoIterator<Item = Transport>) -> Self {
        let mut caps = Self::default();
        for t in transports {
            caps.add_transport(t);
        }
        caps
    }

    pub fn add_transport(&mut self, transport: Transport) {
        if !self.transports.contains(&transport) {
            self.transports.push(transport);
        }
    }

    pub fn has_transport(&self, transport: Transport) -> bool {
        self.transports.contains(&transport)
    }

    pub fn transports(&self) -> &[Transport] {
        &self.transports
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }
}

/// What the platform knows about its active network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveNetwork {
    Capabilities(NetworkCapabilities),
    /// Platforms without per-transport reporting only expose a connected flag.
    Legacy { connected: bool },
}

/// Source of the current network state.
pub trait NetworkMonitor: Send + Sync {
    /// `None` when there is no active network at all.
    fn active_network(&self) -> Option<ActiveNetwork>;
}

/// `true` if the monitor reports an active cellular, WiFi or ethernet network.
/// A missing monitor means no network.
pub fn has_active_transport(monitor: Option<&dyn NetworkMonitor>) -> bool {
    let Some(monitor) = monitor else {
        return false;
    };
    match monitor.active_network() {
        Some(ActiveNetwork::Capabilities(caps)) => Transport::QUALIFYING
            .iter()
            .any(|t| caps.has_transport(*t)),
        Some(ActiveNetwork::Legacy { connected }) => connected,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<ActiveNetwork>);

    impl NetworkMonitor for Fixed {
        fn active_network(&self) -> Option<ActiveNetwork> {
            self.0.clone()
        }
    }

    fn caps(transports: &[Transport]) -> Fixed {
        Fixed(Some(ActiveNetwork::Capabilities(NetworkCapabilities::new(
            transports.iter().copied(),
        ))))
    }

    #[test]
    fn wifi_cellular_and_ethernet_qualify() {
        for t in Transport::QUALIFYING {
            assert!(has_active_transport(Some(&caps(&[t]))), "{t:?}");
        }
    }

    #[test]
    fn other_transports_do_not_qualify() {
        let monitor = caps(&[
            Transport::Bluetooth,
            Transport::Vpn,
            Transport::Loopback,
            Transport::Virtual,
        ]);
        assert!(!has_active_transport(Some(&monitor)));
        assert!(has_active_transport(Some(&caps(&[Transport::Vpn, Transport::Wifi]))));
    }

    #[test]
    fn no_active_network_is_offline() {
        assert!(!has_active_transport(Some(&Fixed(None))));
        assert!(!has_active_transport(Some(&caps(&[]))));
    }

    #[test]
    fn legacy_follows_connected_flag() {
        let up = Fixed(Some(ActiveNetwork::Legacy { connected: true }));
        let down = Fixed(Some(ActiveNetwork::Legacy { connected: false }));
        assert!(has_active_transport(Some(&up)));
        assert!(!has_active_transport(Some(&down)));
    }

    #[test]
    fn missing_monitor_is_offline() {
        assert!(!has_active_transport(None));
    }

    #[test]
    fn capabilities_deduplicate() {
        let caps = NetworkCapabilities::new([Transport::Wifi, Transport::Wifi, Transport::Ethernet]);
        assert_eq!(caps.transports(), &[Transport::Wifi, Transport::Ethernet]);
        assert!(!caps.is_empty());
    }
}
