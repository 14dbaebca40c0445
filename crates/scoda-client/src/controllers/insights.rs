//! Insights page: read-only aggregates computed by the backend.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use scoda_shared::{ActiveCategory, CategoryDistribution, InsightsStats, WeeklyActivityPoint};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::session::AuthStore;

#[derive(Debug, Clone, Default)]
pub struct InsightsState {
    pub stats: InsightsStats,
    pub activity: Vec<WeeklyActivityPoint>,
    pub categories: Vec<CategoryDistribution>,
    pub most_active: Vec<ActiveCategory>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InsightsState {
    /// Idea count of the busiest day, used to scale the activity chart.
    pub fn busiest_day(&self) -> u64 {
        self.activity.iter().map(|p| p.ideas).max().unwrap_or(0)
    }
}

pub struct InsightsController {
    api: Arc<ApiClient>,
    auth: Arc<AuthStore>,
    state: Mutex<InsightsState>,
}

impl InsightsController {
    pub fn new(api: Arc<ApiClient>, auth: Arc<AuthStore>) -> Self {
        Self {
            api,
            auth,
            state: Mutex::new(InsightsState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, InsightsState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> InsightsState {
        self.lock().clone()
    }

    /// Load all four views together; signed out, reset to the zero state.
    pub async fn load(&self) -> Result<(), ClientError> {
        if !self.auth.is_authenticated() {
            *self.lock() = InsightsState::default();
            return Ok(());
        }

        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
        }

        let result = tokio::try_join!(
            self.api.insights_stats(),
            self.api.weekly_activity(),
            self.api.category_distribution(),
            self.api.most_active_categories(),
        );

        let mut state = self.lock();
        state.loading = false;
        match result {
            Ok((stats, activity, categories, most_active)) => {
                state.stats = stats;
                state.activity = activity;
                state.categories = categories;
                state.most_active = most_active;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load insights");
                state.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
