//! Store seam between the loader and the database client.

use async_trait::async_trait;

use super::models::BidRow;
use crate::types::BidRecord;

pub type DbResult<T> = std::result::Result<T, sqlx::Error>;

/// Opens the single connection a load runs on.
#[async_trait]
pub trait Connector: Send + Sync {
    type Store: BidStore;

    async fn connect(&self) -> DbResult<Self::Store>;
}

/// An open connection to the bid table.
#[async_trait]
pub trait BidStore: Send {
    /// Create the bid table if it does not exist. Never alters an existing table.
    async fn ensure_schema(&mut self) -> DbResult<()>;

    /// Insert one bid as its own statement; no surrounding transaction.
    async fn insert_bid(&mut self, bid: &BidRecord) -> DbResult<()>;

    /// Total rows in the bid table.
    async fn count_bids(&mut self) -> DbResult<i64>;

    /// All rows for `contract_number`, ordered by rank. Not part of the load
    /// sequence; used to verify what a load persisted.
    async fn bids_for_contract(&mut self, contract_number: &str) -> DbResult<Vec<BidRow>>;

    /// Release the connection.
    async fn close(self) -> DbResult<()>;
}
