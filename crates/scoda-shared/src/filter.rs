//! Client-local node filtering.
//!
//! Filtering is a synchronous projection over an already fetched graph and
//! never changes the graph itself. Relative node order is preserved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SharedError;
use crate::graph::{IdeaGraph, IdeaNode, NodeKind};

/// Selector over the fixed variant set. `All` is the union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeFilter {
    #[default]
    All,
    Main,
    Sub,
    Related,
}

impl NodeFilter {
    pub const ALL: [NodeFilter; 4] = [
        NodeFilter::All,
        NodeFilter::Main,
        NodeFilter::Sub,
        NodeFilter::Related,
    ];

    /// The node kind this filter selects, or `None` for `All`.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            NodeFilter::All => None,
            NodeFilter::Main => Some(NodeKind::Main),
            NodeFilter::Sub => Some(NodeKind::Sub),
            NodeFilter::Related => Some(NodeKind::Related),
        }
    }

    pub fn matches(&self, node: &IdeaNode) -> bool {
        self.kind().map_or(true, |kind| node.kind == kind)
    }

    /// Nodes of `graph` selected by this filter, in graph order.
    pub fn apply<'g>(&self, graph: &'g IdeaGraph) -> Vec<&'g IdeaNode> {
        graph.nodes.iter().filter(|n| self.matches(n)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeFilter::All => "all",
            NodeFilter::Main => "main",
            NodeFilter::Sub => "sub",
            NodeFilter::Related => "related",
        }
    }

    /// Tab label shown above the card grid.
    pub fn label(&self) -> &'static str {
        match self {
            NodeFilter::All => "All Plans",
            NodeFilter::Main => "Pillars",
            NodeFilter::Sub => "Content Plans",
            NodeFilter::Related => "Related",
        }
    }
}

impl From<NodeKind> for NodeFilter {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Main => NodeFilter::Main,
            NodeKind::Sub => NodeFilter::Sub,
            NodeKind::Related => NodeFilter::Related,
        }
    }
}

impl fmt::Display for NodeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeFilter {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(NodeFilter::All),
            "main" => Ok(NodeFilter::Main),
            "sub" => Ok(NodeFilter::Sub),
            "related" => Ok(NodeFilter::Related),
            other => Err(SharedError::UnknownFilter(other.to_string())),
        }
    }
}

/// Per-kind node counts of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub main: usize,
    pub sub: usize,
    pub related: usize,
}

impl KindCounts {
    pub fn of(graph: &IdeaGraph) -> Self {
        graph
            .nodes
            .iter()
            .fold(Self::default(), |mut counts, node| {
                match node.kind {
                    NodeKind::Main => counts.main += 1,
                    NodeKind::Sub => counts.sub += 1,
                    NodeKind::Related => counts.related += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.main + self.sub + self.related
    }

    pub fn for_filter(&self, filter: NodeFilter) -> usize {
        match filter {
            NodeFilter::All => self.total(),
            NodeFilter::Main => self.main,
            NodeFilter::Sub => self.sub,
            NodeFilter::Related => self.related,
        }
    }
}
