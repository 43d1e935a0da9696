//! Keyword heuristics for deriving preference signals from user text.
//!
//! Deliberately simple substring/keyword matching, no NLP. The rule set is an
//! explicit value so the vocabulary can be tested and extended independently
//! of the chat orchestration logic.

use crate::types::Mood;

/// Sentinel substrings that flag a turn as important for compaction.
pub const IMPORTANCE_MARKERS: &[&str] = &["project:", "deadline:", "important:"];

/// Marker and keyword vocabulary scanned against each user message.
#[derive(Debug, Clone)]
pub struct PreferenceRules {
    /// Emoji markers that set mood to happy.
    pub happy_markers: Vec<String>,
    /// Emoji markers that set mood to sad. Happy wins when both appear.
    pub sad_markers: Vec<String>,
    /// Topic keywords, matched case-insensitively.
    pub topic_keywords: Vec<String>,
    /// Labels scanned as `label:` sentinels; the trailing text becomes the value.
    pub info_labels: Vec<String>,
}

impl Default for PreferenceRules {
    fn default() -> Self {
        Self {
            happy_markers: vec!["😊".to_string(), "😄".to_string()],
            sad_markers: vec!["😢".to_string(), "😞".to_string()],
            topic_keywords: ["code", "game", "music", "work", "study"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            info_labels: vec!["project".to_string()],
        }
    }
}

/// Result of scanning one message against the rule set.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub mood: Option<Mood>,
    pub topics: Vec<String>,
    pub info: Vec<(String, String)>,
}

impl PreferenceRules {
    /// Scans `text` for mood markers, topic keywords, and `label:` sentinels.
    ///
    /// Mood markers are signals, not content, so they are stripped from any
    /// captured info value before it is trimmed.
    pub fn scan(&self, text: &str) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();

        if self.happy_markers.iter().any(|m| text.contains(m.as_str())) {
            outcome.mood = Some(Mood::Happy);
        } else if self.sad_markers.iter().any(|m| text.contains(m.as_str())) {
            outcome.mood = Some(Mood::Sad);
        }

        let lower = text.to_lowercase();
        for keyword in &self.topic_keywords {
            if lower.contains(&keyword.to_lowercase()) {
                outcome.topics.push(keyword.clone());
            }
        }

        for label in &self.info_labels {
            let marker = format!("{}:", label);
            if let Some(pos) = text.find(&marker) {
                let value = self.strip_mood_markers(&text[pos + marker.len()..]);
                outcome.info.push((label.clone(), value.trim().to_string()));
            }
        }

        outcome
    }

    fn strip_mood_markers(&self, text: &str) -> String {
        let mut value = text.to_string();
        for marker in self.happy_markers.iter().chain(self.sad_markers.iter()) {
            value = value.replace(marker.as_str(), "");
        }
        value
    }
}

/// Returns true if the turn text carries any importance marker.
pub(crate) fn is_important(text: &str) -> bool {
    IMPORTANCE_MARKERS.iter().any(|m| text.contains(m))
}
