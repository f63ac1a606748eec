pub mod config;
pub mod db;
pub mod error;
pub mod network;
pub mod screen;
pub mod service;

pub use db::{QuickAccessPair, QuickAccessPairsStorage};
pub use error::ExchangeError;
pub use network::ConnectivityProbe;
