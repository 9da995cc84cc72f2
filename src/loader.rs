use tracing::{debug, error, info, warn};

use crate::config::BIDS_TABLE;
use crate::db::{BidStore, Connector};
use crate::error::{AppError, Result};
use crate::types::{validate_batch, BidRecord, LoadReport};

/// Loads `batch` into the bid table: connect, create the table if absent,
/// insert every record in order, then count the table's rows.
///
/// Any failure is logged once and ends the sequence. Rows already inserted
/// are kept. The connection, if one was opened, is closed on every path.
pub async fn load_bids<C: Connector>(connector: &C, batch: &[BidRecord]) -> Result<LoadReport> {
    let mut store = None;
    let outcome = run_steps(connector, batch, &mut store).await;

    if let Err(e) = &outcome {
        error!("Bid load failed: {e}");
    }

    match store {
        Some(store) => match store.close().await {
            Ok(()) => info!("Connection closed"),
            Err(e) => warn!("Connection did not close cleanly: {e}"),
        },
        None => info!("Connection closed"),
    }

    outcome
}

async fn run_steps<C: Connector>(
    connector: &C,
    batch: &[BidRecord],
    slot: &mut Option<C::Store>,
) -> Result<LoadReport> {
    validate_batch(batch)?;

    let store = slot.insert(connector.connect().await?);
    info!("Connected to database");

    store.ensure_schema().await?;
    info!(table = BIDS_TABLE, "Table ready");

    for (inserted, bid) in batch.iter().enumerate() {
        store
            .insert_bid(bid)
            .await
            .map_err(|source| AppError::Insert {
                rank: bid.bid_rank,
                inserted,
                source,
            })?;
        debug!(rank = bid.bid_rank, bidder = %bid.bidder_id, amount = %bid.bid_amount, "Inserted bid");
    }
    info!(inserted = batch.len(), "{} records inserted", batch.len());

    let total_rows = store.count_bids().await?;
    info!(total = total_rows, "Total rows in {BIDS_TABLE}: {total_rows}");

    Ok(LoadReport {
        inserted: batch.len(),
        total_rows,
    })
}
