//! Application wiring: one API client, one session store, and the page
//! controllers that share them.

use std::sync::Arc;

use tracing::info;

use scoda_store::{Database, SessionPersistence};

use crate::api::{ApiClient, SessionToken};
use crate::config::ClientConfig;
use crate::controllers::{GeneratorController, InsightsController, LibraryController};
use crate::error::ClientError;
use crate::session::AuthStore;

pub struct AppState {
    pub config: ClientConfig,
    pub api: Arc<ApiClient>,
    pub auth: Arc<AuthStore>,
    pub generator: GeneratorController,
    pub library: LibraryController,
    pub insights: InsightsController,
}

impl AppState {
    /// Open the on-disk session database named by `config` and wire
    /// everything to it.
    pub fn open(config: ClientConfig) -> Result<Self, ClientError> {
        let database = match &config.data_dir {
            Some(dir) => Database::open_in(dir)?,
            None => Database::new()?,
        };
        if let Some(path) = database.path() {
            info!(path = %path.display(), "Opened session database");
        }
        Self::with_storage(config, Arc::new(database))
    }

    /// Wire the client against an explicit persistence backend.
    pub fn with_storage(
        config: ClientConfig,
        storage: Arc<dyn SessionPersistence>,
    ) -> Result<Self, ClientError> {
        let token = SessionToken::new();
        let api = Arc::new(ApiClient::new(&config, Arc::new(token.clone()))?);
        let auth = Arc::new(AuthStore::new(api.clone(), token, storage));

        Ok(Self {
            generator: GeneratorController::new(api.clone(), auth.clone()),
            library: LibraryController::new(api.clone(), auth.clone()),
            insights: InsightsController::new(api.clone(), auth.clone()),
            config,
            api,
            auth,
        })
    }
}
