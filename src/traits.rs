//! Traits for collaborators at the edge of the engine

use async_trait::async_trait;

use crate::parser::{ParseError, ParsedTransaction};

/// Turns a free-text transaction description into a draft row
///
/// This is the one asynchronous seam around the engine: implementations may
/// call out to a remote language service. The engine only ever consumes the
/// result, and treats any error as "no row produced".
#[async_trait]
pub trait TransactionParser: Send + Sync {
    /// Parse a transaction description
    async fn parse(&self, text: &str) -> Result<ParsedTransaction, ParseError>;
}
