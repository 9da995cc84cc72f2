use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::types::BidRecord;

/// A persisted `caltrans_bids` row.
/// `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BidRow {
    pub id: i32,
    pub contract_number: String,
    pub number_of_bidders: i32,
    pub bid_rank: i32,
    pub bid_amount: Decimal,
    pub bidder_id: String,
    pub created_at: NaiveDateTime,
}

impl BidRow {
    /// Drops the store-assigned columns, for comparing persisted rows with the loaded batch.
    pub fn record(&self) -> BidRecord {
        BidRecord::new(
            &self.contract_number,
            self.number_of_bidders,
            self.bid_rank,
            self.bid_amount,
            &self.bidder_id,
        )
    }
}
