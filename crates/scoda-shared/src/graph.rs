//! The idea graph: the unit of generation, persistence and retrieval.
//!
//! Nodes and edges are kept in the order the backend sent them; node order
//! is display order. Referential integrity between edges and nodes is the
//! backend's responsibility and is not checked here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SharedError;

/// Hierarchical role of an idea within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Main,
    Sub,
    Related,
}

impl NodeKind {
    pub const ALL: [NodeKind; 3] = [NodeKind::Main, NodeKind::Sub, NodeKind::Related];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Main => "main",
            NodeKind::Sub => "sub",
            NodeKind::Related => "related",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(NodeKind::Main),
            "sub" => Ok(NodeKind::Sub),
            "related" => Ok(NodeKind::Related),
            other => Err(SharedError::UnknownNodeKind(other.to_string())),
        }
    }
}

/// Relationship between two ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Hierarchical,
    Related,
    Suggested,
}

/// A single content idea, including its optional content-plan attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaNode {
    /// Unique within the enclosing graph.
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Instagram, TikTok, YouTube, LinkedIn, Twitter/X
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Reel, Post, Story, Carousel, Video, Short, Thread, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Attention-grabbing opening line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posting_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Free-form backend metadata, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl IdeaNode {
    /// A node with only the required fields set.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            description: None,
            category: None,
            platform: None,
            format: None,
            hook: None,
            key_points: None,
            hashtags: None,
            posting_time: None,
            engagement_strategy: None,
            script: None,
            caption: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    pub topic: String,
    pub generated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaGraph {
    #[serde(default)]
    pub nodes: Vec<IdeaNode>,
    #[serde(default)]
    pub edges: Vec<IdeaEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GraphMetadata>,
}

impl IdeaGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&IdeaNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn topic(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.topic.as_str())
    }
}
