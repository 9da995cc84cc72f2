use tracing::info;
use tracing_subscriber::EnvFilter;

use caltrans_bid_loader::config::Config;
use caltrans_bid_loader::dataset::caltrans_bids;
use caltrans_bid_loader::db::PgConnector;
use caltrans_bid_loader::loader::load_bids;

#[tokio::main]
async fn main() {
    let cfg = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    info!(
        host = %cfg.db_host,
        port = cfg.db_port,
        database = %cfg.db_name,
        "Loading Caltrans bids"
    );

    let connector = PgConnector::new(cfg.connect_options());
    let bids = caltrans_bids();

    // The loader has already logged a failure; it does not change the exit status.
    if let Ok(report) = load_bids(&connector, &bids).await {
        info!(
            inserted = report.inserted,
            total = report.total_rows,
            "Load complete"
        );
    }
}
