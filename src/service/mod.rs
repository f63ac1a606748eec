pub mod pairs_ops;

pub use pairs_ops::PairsOps;
