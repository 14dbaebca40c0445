//! # scoda-shared
//!
//! Types exchanged with the Scoda backend and the pure, client-local
//! projections built on top of them (node filtering, plan cards, help text).

pub mod card;
pub mod constants;
pub mod error;
pub mod filter;
pub mod graph;
pub mod help;
pub mod types;

pub use card::{CardSection, PlanCard};
pub use error::SharedError;
pub use filter::{KindCounts, NodeFilter};
pub use graph::{EdgeKind, GraphMetadata, IdeaEdge, IdeaGraph, IdeaNode, NodeKind};
pub use types::*;
