use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tracing::debug;

use super::models::BidRow;
use super::store::{BidStore, Connector, DbResult};
use crate::types::BidRecord;

/// Opens one dedicated PostgreSQL connection per load.
pub struct PgConnector {
    options: PgConnectOptions,
}

impl PgConnector {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl Connector for PgConnector {
    type Store = PgBidStore;

    async fn connect(&self) -> DbResult<PgBidStore> {
        debug!(
            host = self.options.get_host(),
            port = self.options.get_port(),
            "Opening PostgreSQL connection"
        );
        let conn = PgConnection::connect_with(&self.options).await?;
        Ok(PgBidStore { conn })
    }
}

/// Writes bid rows over a single PostgreSQL connection.
pub struct PgBidStore {
    conn: PgConnection,
}

#[async_trait]
impl BidStore for PgBidStore {
    async fn ensure_schema(&mut self) -> DbResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS caltrans_bids (
                id SERIAL PRIMARY KEY,
                contract_number VARCHAR(50),
                number_of_bidders INTEGER,
                bid_rank INTEGER,
                bid_amount DECIMAL(15,2),
                bidder_id VARCHAR(50),
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&mut self.conn)
        .await?;
        Ok(())
    }

    async fn insert_bid(&mut self, bid: &BidRecord) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO caltrans_bids (
                contract_number, number_of_bidders, bid_rank, bid_amount, bidder_id
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&bid.contract_number)
        .bind(bid.number_of_bidders)
        .bind(bid.bid_rank)
        .bind(bid.bid_amount)
        .bind(&bid.bidder_id)
        .execute(&mut self.conn)
        .await?;
        Ok(())
    }

    async fn count_bids(&mut self) -> DbResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM caltrans_bids")
            .fetch_one(&mut self.conn)
            .await
    }

    async fn bids_for_contract(&mut self, contract_number: &str) -> DbResult<Vec<BidRow>> {
        sqlx::query_as::<_, BidRow>(
            r#"
            SELECT id, contract_number, number_of_bidders, bid_rank, bid_amount, bidder_id, created_at
            FROM caltrans_bids
            WHERE contract_number = $1
            ORDER BY bid_rank, id
            "#,
        )
        .bind(contract_number)
        .fetch_all(&mut self.conn)
        .await
    }

    async fn close(self) -> DbResult<()> {
        self.conn.close().await
    }
}
