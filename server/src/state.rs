use std::{sync::Arc, time::Instant};

use catalog::Store;
use tracing::warn;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub started: Instant,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let store = Store::connect(&config.database_url).expect("Database misconfigured!");

        // The pool is lazy; a failure here means the database is not up yet.
        // The server still starts and the salon listing serves demo data.
        if let Err(e) = store.migrate().await {
            warn!("Schema setup failed, continuing without a database: {e}");
        }

        Arc::new(Self {
            config,
            store,
            started: Instant::now(),
        })
    }
}
