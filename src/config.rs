use chrono::{FixedOffset, NaiveDate, Utc};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, sync::Arc};
use tracing::warn;

/// Runtime configuration, loaded once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub jwt_secret: String,
    /// Reference timezone used to decide which calendar day an entry belongs
    /// to. Timestamps themselves are stored in UTC.
    pub utc_offset: FixedOffset,
}

impl Config {
    pub fn load() -> Arc<Self> {
        Arc::new(Self {
            port: load_or("PORT", 8080),
            database_path: env::var("APP_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/mood.db")),
            jwt_secret: load_secret(),
            utc_offset: load_or("APP_UTC_OFFSET", utc()),
        })
    }

    /// The current calendar day in the configured reference timezone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset).date_naive()
    }
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap_or_else(|| unreachable!("zero offset is valid"))
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("invalid {key} value {raw:?}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

fn load_secret() -> String {
    env::var("APP_JWT_SECRET").unwrap_or_else(|_| {
        warn!("APP_JWT_SECRET not set, using a development-only secret");
        "insecure-dev-secret".to_string()
    })
}
