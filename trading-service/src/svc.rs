//! Service context shared by every handler

use std::sync::Arc;

use common::db::{self, DbPool};
use tracing::info;

use crate::config::RestConf;

/// Holds the configuration loaded at startup, and the shared database
/// handle when the configuration names one.
#[derive(Debug)]
pub struct ServiceContext {
    pub config: RestConf,
    db: Option<&'static DbPool>,
}

impl ServiceContext {
    /// Build the context. A `Database` section opens the shared pool, and a
    /// connection failure there ends the process.
    pub async fn new(config: RestConf) -> Arc<Self> {
        let db = match &config.database {
            Some(database) => {
                info!("Initializing database pool");
                Some(db::must_init(&database.data_source, database.options()).await)
            }
            None => None,
        };

        Arc::new(Self { config, db })
    }

    /// The shared pool, if this service was configured with one
    pub fn db(&self) -> Option<&'static DbPool> {
        self.db
    }
}
