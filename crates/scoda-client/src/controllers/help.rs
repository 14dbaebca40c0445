//! Help page. Static content; no backend calls and no session required.

use std::fmt::Write as _;

use scoda_shared::constants::SUGGESTED_TOPICS;
use scoda_shared::help::{sections, HelpSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    pub sections: Vec<HelpSection>,
    /// Example topics offered on the generator's empty state.
    pub suggested_topics: &'static [&'static str],
}

impl HelpPage {
    pub fn new() -> Self {
        Self {
            sections: sections(),
            suggested_topics: &SUGGESTED_TOPICS,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "{}", section.title);
            let _ = writeln!(out, "  {}", section.summary);
            for bullet in &section.bullets {
                let _ = writeln!(out, "  - {bullet}");
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "Try a topic:");
        for topic in self.suggested_topics {
            let _ = writeln!(out, "  {topic}");
        }
        out
    }
}

impl Default for HelpPage {
    fn default() -> Self {
        Self::new()
    }
}
