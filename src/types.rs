use rust_decimal::Decimal;

use crate::config::{AMOUNT_PRECISION, AMOUNT_SCALE};
use crate::error::{AppError, Result};

// ---------------------------------------------------------------------------
// Bid
// ---------------------------------------------------------------------------

/// One contractor's sealed bid on a public-works contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidRecord {
    pub contract_number: String,
    pub number_of_bidders: i32,
    /// 1-based position among the contract's bids, ascending by amount.
    pub bid_rank: i32,
    pub bid_amount: Decimal,
    pub bidder_id: String,
}

impl BidRecord {
    pub fn new(
        contract_number: &str,
        number_of_bidders: i32,
        bid_rank: i32,
        bid_amount: Decimal,
        bidder_id: &str,
    ) -> Self {
        Self {
            contract_number: contract_number.to_string(),
            number_of_bidders,
            bid_rank,
            bid_amount,
            bidder_id: bidder_id.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Load outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows written by this run.
    pub inserted: usize,
    /// Table row count after the inserts, including rows from earlier runs.
    pub total_rows: i64,
}

// ---------------------------------------------------------------------------
// Batch invariants
// ---------------------------------------------------------------------------

/// Checks that `batch` describes one contract's complete, rank-ordered bid list
/// whose amounts fit the `DECIMAL(15,2)` column.
pub fn validate_batch(batch: &[BidRecord]) -> Result<()> {
    let first = batch
        .first()
        .ok_or_else(|| AppError::InvalidBatch("batch is empty".to_string()))?;

    let max_amount = Decimal::from(10i64.pow(AMOUNT_PRECISION - AMOUNT_SCALE));
    let mut prev_amount: Option<Decimal> = None;

    for (i, bid) in batch.iter().enumerate() {
        let expected_rank = i as i32 + 1;

        if bid.contract_number != first.contract_number {
            return Err(AppError::InvalidBatch(format!(
                "mixed contracts: {} and {}",
                first.contract_number, bid.contract_number
            )));
        }
        if bid.number_of_bidders as usize != batch.len() {
            return Err(AppError::InvalidBatch(format!(
                "rank {} reports {} bidders but the batch has {}",
                bid.bid_rank,
                bid.number_of_bidders,
                batch.len()
            )));
        }
        if bid.bid_rank != expected_rank {
            return Err(AppError::InvalidBatch(format!(
                "expected rank {expected_rank}, found {}",
                bid.bid_rank
            )));
        }
        if bid.bid_amount.is_sign_negative()
            || bid.bid_amount.scale() > AMOUNT_SCALE
            || bid.bid_amount >= max_amount
        {
            return Err(AppError::InvalidBatch(format!(
                "amount {} for rank {} does not fit DECIMAL({AMOUNT_PRECISION},{AMOUNT_SCALE})",
                bid.bid_amount, bid.bid_rank
            )));
        }
        if let Some(prev) = prev_amount {
            if bid.bid_amount < prev {
                return Err(AppError::InvalidBatch(format!(
                    "amount {} for rank {} is below the previous rank's {prev}",
                    bid.bid_amount, bid.bid_rank
                )));
            }
        }
        prev_amount = Some(bid.bid_amount);
    }

    Ok(())
}
