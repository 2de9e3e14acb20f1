//! Application state shared across handlers.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::server::gateway::DataGateway;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the country cache
    pub db: DatabaseConnection,
    /// Client for the upstream country and exchange rate datasets
    pub gateway: DataGateway,
    /// Where the summary PNG is published after each refresh
    pub summary_image_path: PathBuf,
    /// Held for the duration of a refresh so concurrent refreshes run one after another.
    pub refresh_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates a new instance of [`AppState`] with an unlocked refresh lock
    pub fn new(db: DatabaseConnection, gateway: DataGateway, summary_image_path: PathBuf) -> Self {
        Self {
            db,
            gateway,
            summary_image_path,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }
}
