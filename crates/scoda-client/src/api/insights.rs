use reqwest::Method;

use scoda_shared::{ActiveCategory, CategoryDistribution, InsightsStats, WeeklyActivityPoint};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn insights_stats(&self) -> Result<InsightsStats, ApiError> {
        let req = self.request(Method::GET, &["insights", "stats"]);
        self.send_json(req, "Failed to load insights stats").await
    }

    pub async fn weekly_activity(&self) -> Result<Vec<WeeklyActivityPoint>, ApiError> {
        let req = self.request(Method::GET, &["insights", "activity"]);
        self.send_json(req, "Failed to load weekly activity").await
    }

    pub async fn category_distribution(&self) -> Result<Vec<CategoryDistribution>, ApiError> {
        let req = self.request(Method::GET, &["insights", "categories"]);
        self.send_json(req, "Failed to load category distribution").await
    }

    pub async fn most_active_categories(&self) -> Result<Vec<ActiveCategory>, ApiError> {
        let req = self.request(Method::GET, &["insights", "most-active"]);
        self.send_json(req, "Failed to load most active categories").await
    }
}
