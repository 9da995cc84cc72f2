pub mod models;
pub mod postgres;
pub mod store;

pub use models::BidRow;
pub use postgres::{PgBidStore, PgConnector};
pub use store::{BidStore, Connector, DbResult};
