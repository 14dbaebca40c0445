//! Library page: the signed-in user's saved idea graphs.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use scoda_shared::{NodeFilter, SavedIdea};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::session::AuthStore;
use crate::view::GraphView;

#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub ideas: Vec<SavedIdea>,
    /// Id of the selected entry, if any.
    pub selected: Option<String>,
    pub filter: NodeFilter,
    pub loading: bool,
    pub error: Option<String>,
}

impl LibraryState {
    pub fn selected_idea(&self) -> Option<&SavedIdea> {
        let id = self.selected.as_deref()?;
        self.ideas.iter().find(|idea| idea.id == id)
    }

    pub fn selected_view(&self) -> Option<GraphView> {
        self.selected_idea().map(|idea| {
            let mut view = GraphView::new(idea.graph.clone());
            view.set_filter(self.filter);
            view
        })
    }
}

pub struct LibraryController {
    api: Arc<ApiClient>,
    auth: Arc<AuthStore>,
    state: Mutex<LibraryState>,
}

impl LibraryController {
    pub fn new(api: Arc<ApiClient>, auth: Arc<AuthStore>) -> Self {
        Self {
            api,
            auth,
            state: Mutex::new(LibraryState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LibraryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> LibraryState {
        self.lock().clone()
    }

    /// Fetch the library. Signed out, the list is emptied without a request.
    pub async fn load(&self) -> Result<usize, ClientError> {
        if !self.auth.is_authenticated() {
            let mut state = self.lock();
            state.ideas.clear();
            state.selected = None;
            state.loading = false;
            return Ok(0);
        }

        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
        }

        let result = self.api.list_ideas().await;

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok(ideas) => {
                let count = ideas.len();
                state.selected = ideas.first().map(|idea| idea.id.clone());
                state.ideas = ideas;
                info!(count, "Library loaded");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load library");
                state.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Local selection only. Unknown ids are ignored.
    pub fn select(&self, id: &str) -> bool {
        let mut state = self.lock();
        if state.ideas.iter().any(|idea| idea.id == id) {
            state.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_filter(&self, filter: NodeFilter) {
        self.lock().filter = filter;
    }

    /// Delete on the backend, then locally. A rejected delete leaves the
    /// list and selection as they were.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        match self.api.delete_idea(id).await {
            Ok(()) => {
                let mut state = self.lock();
                state.ideas.retain(|idea| idea.id != id);
                if state.selected.as_deref() == Some(id) {
                    state.selected = None;
                }
                info!(id, "Idea deleted");
                Ok(())
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to delete idea");
                self.lock().error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Replace an entry with the backend's refined graph and select it.
    ///
    /// An id missing from the loaded list leaves the list and selection
    /// untouched; the refined idea is still returned.
    pub async fn refine(&self, id: &str) -> Result<SavedIdea, ClientError> {
        match self.api.refine_idea(id).await {
            Ok(refined) => {
                let mut state = self.lock();
                if let Some(slot) = state.ideas.iter_mut().find(|idea| idea.id == refined.id) {
                    *slot = refined.clone();
                    state.selected = Some(refined.id.clone());
                }
                info!(id = %refined.id, nodes = refined.graph.nodes.len(), "Idea refined");
                Ok(refined)
            }
            Err(e) => {
                warn!(id, error = %e, "Failed to refine idea");
                self.lock().error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
