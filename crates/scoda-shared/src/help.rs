//! Static help content shown by the help page.

use crate::constants::{CREDITS_PER_GENERATION, STARTING_CREDITS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub title: &'static str,
    pub summary: String,
    pub bullets: Vec<&'static str>,
}

pub fn sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "1. Generate a content plan",
            summary: "Open the generator and enter a topic \
                      (e.g. \"Instagram growth for real estate agents\")."
                .to_string(),
            bullets: vec![
                "Scoda creates ~1 week of posts across platforms.",
                "Each card includes platform, format, hook, script / caption, and hashtags.",
                "Video / reel ideas include an example script and shot breakdown.",
            ],
        },
        HelpSection {
            title: "2. Credits & limits",
            summary: format!(
                "Each generation uses {CREDITS_PER_GENERATION} credit. \
                 New accounts start with {STARTING_CREDITS} credits."
            ),
            bullets: vec![
                "Your current credits are shown next to your account.",
                "At 0 credits you can still view your library and insights.",
            ],
        },
        HelpSection {
            title: "3. Library & deleting plans",
            summary: "The library shows all content plans you've saved while logged in."
                .to_string(),
            bullets: vec![
                "Select a saved topic to view its plans.",
                "Deleted plans are removed from your library immediately.",
            ],
        },
        HelpSection {
            title: "4. Insights & analytics",
            summary: "Insights summarize how you've been using Scoda.".to_string(),
            bullets: vec![
                "Total ideas and nodes generated.",
                "Ideas created this week and your most active days.",
                "Top categories and credits used / remaining.",
            ],
        },
        HelpSection {
            title: "Tips for better results",
            summary: "Specific topics produce specific plans.".to_string(),
            bullets: vec![
                "Be specific with topics (\"7-day Instagram Reels challenge for fitness coaches\" beats \"Instagram\").",
                "Regenerate with slightly different angles (e.g. \"only story ideas\", \"UGC-style hooks\").",
                "Treat scripts as a starting point and add your own voice and examples.",
            ],
        },
    ]
}
