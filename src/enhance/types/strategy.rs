use serde::{Deserialize, Serialize};

use super::changes::ChangeSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Ranking weight; higher priorities amplify impact during sorting.
    pub fn weight(self) -> f64 {
        match self {
            Priority::Low => 0.7,
            Priority::Medium => 1.0,
            Priority::High => 1.5,
        }
    }
}

/// A scored, named enhancement recommendation. The `changes` payload is
/// self-describing so downstream renderers and reporting need no extra
/// context, and `id` stays stable once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementStrategy {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// Estimated benefit, 0 to 100.
    pub impact: f64,
    pub changes: ChangeSet,
}

impl EnhancementStrategy {
    /// Ranking score: impact weighted by priority.
    pub fn score(&self) -> f64 {
        self.impact * self.priority.weight()
    }
}
