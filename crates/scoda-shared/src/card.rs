//! Projection of an [`IdeaNode`] into the sections of a content-plan card.
//!
//! Every section is driven by the presence of its field. Blank strings and
//! lists without a non-blank entry count as absent, so no section is ever
//! produced empty.

use serde::Serialize;

use crate::graph::{IdeaNode, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum CardSection {
    Hook { text: String },
    Description { text: String },
    Script {
        heading: &'static str,
        text: String,
    },
    Caption { text: String },
    KeyPoints { points: Vec<String> },
    Hashtags { tags: Vec<String> },
    PostingTime { text: String },
    Engagement { text: String },
}

impl CardSection {
    pub fn heading(&self) -> &'static str {
        match self {
            CardSection::Hook { .. } => "Hook",
            CardSection::Description { .. } => "Content idea",
            CardSection::Script { heading, .. } => *heading,
            CardSection::Caption { .. } => "Caption suggestion",
            CardSection::KeyPoints { .. } => "Key talking points",
            CardSection::Hashtags { .. } => "Hashtags",
            CardSection::PostingTime { .. } => "Best time",
            CardSection::Engagement { .. } => "Engagement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCard {
    pub id: String,
    pub title: String,
    pub kind: NodeKind,
    /// `platform • format`, or "Content Idea" when neither is known.
    pub badge: String,
    pub category: Option<String>,
    pub is_video: bool,
    pub sections: Vec<CardSection>,
}

const VIDEO_FORMATS: [&str; 4] = ["video", "short", "story", "reel"];

impl PlanCard {
    pub fn from_node(node: &IdeaNode) -> Self {
        let is_video = node
            .format
            .as_deref()
            .map(|f| {
                let f = f.to_ascii_lowercase();
                VIDEO_FORMATS.iter().any(|v| f.contains(v))
            })
            .unwrap_or(false);

        let badge = [non_blank(&node.platform), non_blank(&node.format)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" • ");
        let badge = if badge.is_empty() {
            "Content Idea".to_string()
        } else {
            badge
        };

        let mut sections = Vec::new();

        if let Some(text) = non_blank(&node.hook) {
            sections.push(CardSection::Hook { text });
        }
        if let Some(text) = non_blank(&node.description) {
            sections.push(CardSection::Description { text });
        }
        if let Some(text) = non_blank(&node.script) {
            let heading = if is_video {
                "Example video script"
            } else {
                "Script / Outline"
            };
            sections.push(CardSection::Script { heading, text });
        }
        if let Some(text) = non_blank(&node.caption) {
            sections.push(CardSection::Caption { text });
        }
        if let Some(points) = non_blank_list(&node.key_points) {
            sections.push(CardSection::KeyPoints { points });
        }
        if let Some(tags) = non_blank_list(&node.hashtags) {
            sections.push(CardSection::Hashtags { tags });
        }
        if let Some(text) = non_blank(&node.posting_time) {
            sections.push(CardSection::PostingTime { text });
        }
        if let Some(text) = non_blank(&node.engagement_strategy) {
            sections.push(CardSection::Engagement { text });
        }

        Self {
            id: node.id.clone(),
            title: node.label.clone(),
            kind: node.kind,
            badge,
            category: non_blank(&node.category),
            is_video,
            sections,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn non_blank_list(values: &Option<Vec<String>>) -> Option<Vec<String>> {
    let items: Vec<String> = values
        .as_ref()?
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    (!items.is_empty()).then_some(items)
}
