//! Generator page: topic in, idea graph out, optionally saved to the library.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, info};

use scoda_shared::{GenerateIdeasResponse, NodeFilter, SavedIdea};

use crate::api::{ApiClient, ApiError};
use crate::background::best_effort;
use crate::error::ClientError;
use crate::session::AuthStore;
use crate::view::GraphView;

#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    /// The working graph. Replaced wholesale by each successful generation.
    pub view: Option<GraphView>,
    pub topic: Option<String>,
    /// Set while a request is outstanding; resubmission is refused.
    pub loading: bool,
    /// Banner text for the last failure, if any.
    pub error: Option<String>,
    /// Set instead of `error` when the backend wants the user to sign in.
    pub sign_in_prompt: Option<String>,
    /// Successful generations in this session.
    pub plans_created: u32,
}

/// What a successful generation produced.
#[derive(Debug, Clone)]
pub struct Generated {
    pub node_count: usize,
    /// `None` when signed out or when the background save failed.
    pub saved: Option<SavedIdea>,
}

pub struct GeneratorController {
    api: Arc<ApiClient>,
    auth: Arc<AuthStore>,
    state: Mutex<GeneratorState>,
}

/// Clears the loading flag however the request ends.
struct LoadingGuard<'a>(&'a Mutex<GeneratorState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).loading = false;
    }
}

impl GeneratorController {
    pub fn new(api: Arc<ApiClient>, auth: Arc<AuthStore>) -> Self {
        Self {
            api,
            auth,
            state: Mutex::new(GeneratorState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GeneratorState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> GeneratorState {
        self.lock().clone()
    }

    pub async fn generate(&self, topic: &str) -> Result<Generated, ClientError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ClientError::EmptyTopic);
        }

        {
            let mut state = self.lock();
            if state.loading {
                return Err(ClientError::GenerationInProgress);
            }
            state.loading = true;
            state.error = None;
            state.sign_in_prompt = None;
        }
        let _loading = LoadingGuard(&self.state);

        info!(topic, "Generating ideas");

        let GenerateIdeasResponse {
            graph,
            credits_used,
            remaining_credits,
        } = match self.api.generate_ideas(topic).await {
            Ok(response) => response,
            Err(ApiError::Unauthorized { message }) => {
                self.lock().sign_in_prompt = Some(message.clone());
                return Err(ApiError::Unauthorized { message }.into());
            }
            Err(e) => {
                error!(error = %e, "Error generating ideas");
                self.lock().error = Some(e.to_string());
                return Err(e.into());
            }
        };

        let node_count = graph.nodes.len();
        {
            let mut state = self.lock();
            state.view = Some(GraphView::new(graph.clone()));
            state.topic = Some(topic.to_string());
            state.plans_created += 1;
        }

        let saved = if self.auth.is_authenticated() {
            best_effort("save generated idea", self.api.save_idea(topic, &graph)).await
        } else {
            None
        };

        match (remaining_credits, credits_used) {
            (Some(remaining), _) => self.auth.set_user_credits(remaining),
            (None, Some(used)) => self.auth.deduct_credits(used),
            (None, None) => {}
        }

        info!(nodes = node_count, saved = saved.is_some(), "Ideas generated");

        Ok(Generated { node_count, saved })
    }

    /// Start over: drop the working graph and any error banner.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.view = None;
        state.topic = None;
        state.error = None;
    }

    pub fn dismiss_sign_in_prompt(&self) {
        self.lock().sign_in_prompt = None;
    }

    /// Returns false when there is no graph to filter.
    pub fn set_filter(&self, filter: NodeFilter) -> bool {
        match self.lock().view.as_mut() {
            Some(view) => {
                view.set_filter(filter);
                true
            }
            None => false,
        }
    }
}
