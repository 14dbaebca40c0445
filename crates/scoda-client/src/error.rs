use thiserror::Error;

use scoda_store::StoreError;

use crate::api::ApiError;

/// Errors surfaced by the session store and page controllers.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Local storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("A generation request is already in progress")]
    GenerationInProgress,
}

impl ClientError {
    /// True when the backend refused generation for lack of a session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api(e) if e.is_unauthorized())
    }
}
