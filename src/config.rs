use sqlx::postgres::{PgConnectOptions, PgSslMode};

pub const DB_HOST: &str = "fruxai-db";
pub const DB_PORT: u16 = 5432;
pub const DB_USER: &str = "postgres";
pub const DB_PASSWORD: &str = "fruxai_password";
pub const DB_NAME: &str = "fruxai";

/// Target table for the bid load.
pub const BIDS_TABLE: &str = "caltrans_bids";

/// `DECIMAL(15,2)`: 15 total digits, 2 after the point.
pub const AMOUNT_PRECISION: u32 = 15;
pub const AMOUNT_SCALE: u32 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: DB_HOST.to_string(),
            db_port: DB_PORT,
            db_user: DB_USER.to_string(),
            db_password: DB_PASSWORD.to_string(),
            db_name: DB_NAME.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Embedded connection literals. Only the log level (LOG_LEVEL) comes from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level.clone()),
            ..defaults
        }
    }

    /// Every connection parameter is set explicitly so `PG*` variables cannot redirect the load.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new_without_pgpass()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .ssl_mode(PgSslMode::Prefer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_embedded_literals() {
        let cfg = Config::from_lookup(lookup_from(&[]));
        assert_eq!(cfg.db_host, "fruxai-db");
        assert_eq!(cfg.db_port, 5432);
        assert_eq!(cfg.db_user, "postgres");
        assert_eq!(cfg.db_password, "fruxai_password");
        assert_eq!(cfg.db_name, "fruxai");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn connection_variables_in_environment_are_ignored() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "localhost"),
            ("DB_PORT", "6543"),
            ("DB_USER", "intruder"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "other"),
            ("PGHOST", "elsewhere"),
        ]));
        assert_eq!(cfg.db_host, "fruxai-db");
        assert_eq!(cfg.db_port, 5432);
        assert_eq!(cfg.db_user, "postgres");
        assert_eq!(cfg.db_password, "fruxai_password");
        assert_eq!(cfg.db_name, "fruxai");
    }

    #[test]
    fn log_level_is_read_from_environment() {
        let cfg = Config::from_lookup(lookup_from(&[("LOG_LEVEL", "debug")]));
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.db_host, "fruxai-db");
    }

    #[test]
    fn connect_options_carry_embedded_literals() {
        let opts = Config::default().connect_options();
        assert_eq!(opts.get_host(), "fruxai-db");
        assert_eq!(opts.get_port(), 5432);
        assert_eq!(opts.get_database(), Some("fruxai"));
        assert_eq!(opts.get_username(), "postgres");
    }
}
