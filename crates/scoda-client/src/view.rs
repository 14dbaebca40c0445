//! View state for a rendered idea graph: the graph plus the selected filter.

use std::fmt::Write as _;

use scoda_shared::{CardSection, IdeaGraph, IdeaNode, KindCounts, NodeFilter, PlanCard};

#[derive(Debug, Clone, PartialEq)]
pub struct GraphView {
    graph: IdeaGraph,
    filter: NodeFilter,
}

impl GraphView {
    pub fn new(graph: IdeaGraph) -> Self {
        Self {
            graph,
            filter: NodeFilter::All,
        }
    }

    pub fn graph(&self) -> &IdeaGraph {
        &self.graph
    }

    pub fn filter(&self) -> NodeFilter {
        self.filter
    }

    /// Purely local; never triggers a fetch.
    pub fn set_filter(&mut self, filter: NodeFilter) {
        self.filter = filter;
    }

    pub fn visible_nodes(&self) -> Vec<&IdeaNode> {
        self.filter.apply(&self.graph)
    }

    pub fn counts(&self) -> KindCounts {
        KindCounts::of(&self.graph)
    }

    pub fn cards(&self) -> Vec<PlanCard> {
        self.visible_nodes()
            .into_iter()
            .map(PlanCard::from_node)
            .collect()
    }

    /// Plain-text rendering of the filter tabs and visible cards.
    pub fn render_text(&self) -> String {
        let counts = self.counts();
        let mut out = String::new();

        if let Some(topic) = self.graph.topic() {
            let _ = writeln!(out, "Topic: {topic}");
        }

        let tabs: Vec<String> = NodeFilter::ALL
            .iter()
            .map(|f| {
                let marker = if *f == self.filter { "*" } else { " " };
                format!("[{marker}{} ({})]", f.label(), counts.for_filter(*f))
            })
            .collect();
        let _ = writeln!(out, "{}", tabs.join(" "));

        let cards = self.cards();
        if cards.is_empty() {
            let _ = writeln!(out, "\nNo content plans found for this filter.");
            return out;
        }

        for card in &cards {
            let _ = writeln!(out);
            render_card(&mut out, card);
        }
        out
    }
}

fn render_card(out: &mut String, card: &PlanCard) {
    let _ = write!(out, "== {} [{}]", card.title, card.badge);
    if let Some(category) = &card.category {
        let _ = write!(out, " ({category})");
    }
    if card.is_video {
        let _ = write!(out, " · Video / Reel");
    }
    let _ = writeln!(out);

    for section in &card.sections {
        let heading = section.heading();
        match section {
            CardSection::Hook { text } => {
                let _ = writeln!(out, "  {heading}: \u{201c}{text}\u{201d}");
            }
            CardSection::KeyPoints { points } => {
                let _ = writeln!(out, "  {heading}:");
                for point in points {
                    let _ = writeln!(out, "    - {point}");
                }
            }
            CardSection::Hashtags { tags } => {
                let _ = writeln!(out, "  {heading}: {}", tags.join(" "));
            }
            CardSection::Description { text }
            | CardSection::Script { text, .. }
            | CardSection::Caption { text }
            | CardSection::PostingTime { text }
            | CardSection::Engagement { text } => {
                let _ = writeln!(out, "  {heading}:");
                for line in text.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
        }
    }
}
