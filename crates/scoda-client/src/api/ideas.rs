use reqwest::{Method, StatusCode};

use scoda_shared::{GenerateIdeasResponse, IdeaGraph, IdeaRecord, SaveIdeaRequest, SavedIdea};

use super::error::BackendErrorPayload;
use super::{ApiClient, ApiError};

const GENERATE_CONTEXT: &str = "Failed";
const SIGN_IN_TO_GENERATE: &str = "Please sign in to generate content.";

impl ApiClient {
    /// Generate an idea graph for `topic`.
    ///
    /// A 401 here is reported as [`ApiError::Unauthorized`] so callers can
    /// prompt for sign-in instead of showing a generic error.
    pub async fn generate_ideas(&self, topic: &str) -> Result<GenerateIdeasResponse, ApiError> {
        let req = self
            .request(Method::POST, &["generate-ideas"])
            .json(&serde_json::json!({ "topic": topic }));
        let response = self.execute(req, GENERATE_CONTEXT).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            let message = BackendErrorPayload::parse(&body)
                .and_then(|p| p.plain_message().map(String::from))
                .unwrap_or_else(|| SIGN_IN_TO_GENERATE.to_string());
            tracing::info!("generation refused: not signed in");
            return Err(ApiError::Unauthorized { message });
        }

        Self::read_json(GENERATE_CONTEXT, response).await
    }

    pub async fn save_idea(&self, topic: &str, graph: &IdeaGraph) -> Result<SavedIdea, ApiError> {
        const CONTEXT: &str = "Failed to save idea";
        let req = self
            .request(Method::POST, &["ideas"])
            .json(&SaveIdeaRequest::new(topic, graph));
        let record: IdeaRecord = self.send_json(req, CONTEXT).await?;
        normalize(CONTEXT, record)
    }

    pub async fn list_ideas(&self) -> Result<Vec<SavedIdea>, ApiError> {
        const CONTEXT: &str = "Failed to load ideas";
        let req = self.request(Method::GET, &["ideas"]);
        let records: Vec<IdeaRecord> = self.send_json(req, CONTEXT).await?;
        records.into_iter().map(|r| normalize(CONTEXT, r)).collect()
    }

    pub async fn delete_idea(&self, id: &str) -> Result<(), ApiError> {
        let req = self.request(Method::DELETE, &["ideas", id]);
        self.send_empty(req, "Failed to delete idea").await
    }

    /// Ask the backend for an improved graph; same identifier, new content.
    pub async fn refine_idea(&self, id: &str) -> Result<SavedIdea, ApiError> {
        const CONTEXT: &str = "Failed to refine idea";
        let req = self.request(Method::POST, &["ideas", id, "refine"]);
        let record: IdeaRecord = self.send_json(req, CONTEXT).await?;
        normalize(CONTEXT, record)
    }
}

fn normalize(context: &'static str, record: IdeaRecord) -> Result<SavedIdea, ApiError> {
    SavedIdea::try_from(record).map_err(|e| ApiError::InvalidResponse {
        context,
        message: e.to_string(),
    })
}
