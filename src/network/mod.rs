//! Connectivity checks: transport state from the platform plus an optional
//! round trip to a well-known host.

pub mod probe;
pub mod sysfs;
pub mod transport;

pub use probe::ConnectivityProbe;
pub use sysfs::SysfsMonitor;
pub use transport::{
    ActiveNetwork, NetworkCapabilities, NetworkMonitor, Transport, has_active_transport,
};
