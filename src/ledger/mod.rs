//! Ledger module containing the journal and T-account generation pipeline

pub mod balance;
pub mod core;
pub mod generator;
pub mod journal;
pub mod registry;

pub use balance::*;
pub use self::core::*;
pub use generator::*;
pub use journal::*;
pub use registry::*;
