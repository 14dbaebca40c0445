use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SharedError;
use crate::graph::{GraphMetadata, IdeaEdge, IdeaGraph, IdeaNode};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// User record as returned by `/auth/me`, `/auth/profile` and inside auth
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
}

/// The signed-in user as held by the session store and persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            avatar: None,
            credits: record.credits,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserRecord,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIdeasResponse {
    pub graph: IdeaGraph,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_credits: Option<u32>,
}

/// Body of `POST /ideas`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveIdeaRequest<'a> {
    pub topic: &'a str,
    pub nodes: &'a [IdeaNode],
    pub edges: &'a [IdeaEdge],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<&'a GraphMetadata>,
}

impl<'a> SaveIdeaRequest<'a> {
    pub fn new(topic: &'a str, graph: &'a IdeaGraph) -> Self {
        Self {
            topic,
            nodes: &graph.nodes,
            edges: &graph.edges,
            metadata: graph.metadata.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

/// A saved idea graph in the user's library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedIdea {
    pub id: String,
    pub topic: String,
    pub graph: IdeaGraph,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Saved idea as sent by the backend.
///
/// Save and refine answer with a flat document (`_id`, `nodes`, `edges`,
/// `metadata`); the list endpoint nests the graph under `graph` and uses
/// `id`. Both shapes deserialize here and normalize through `SavedIdea`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    #[serde(rename = "_id", default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub topic: String,
    #[serde(default)]
    pub graph: Option<IdeaGraph>,
    #[serde(default)]
    pub nodes: Vec<IdeaNode>,
    #[serde(default)]
    pub edges: Vec<IdeaEdge>,
    #[serde(default)]
    pub metadata: Option<GraphMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<IdeaRecord> for SavedIdea {
    type Error = SharedError;

    fn try_from(record: IdeaRecord) -> Result<Self, Self::Error> {
        let id = record
            .object_id
            .or(record.id)
            .ok_or(SharedError::MissingIdeaId)?;

        let graph = record.graph.unwrap_or(IdeaGraph {
            nodes: record.nodes,
            edges: record.edges,
            metadata: record.metadata,
        });

        Ok(SavedIdea {
            id,
            topic: record.topic,
            graph,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightsStats {
    pub total_ideas: u64,
    pub total_nodes: u64,
    pub avg_nodes_per_idea: f64,
    pub most_used_category: String,
    pub ideas_this_week: u64,
    pub credits_used: u64,
    pub remaining_credits: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyActivityPoint {
    pub day: String,
    pub ideas: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    pub name: String,
    pub value: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCategory {
    pub name: String,
    pub count: u64,
}
