//! List-item records for the dashboard - discussions and issues.
//!
//! Both record types share the same structural shape for querying purposes
//! (free-text fields, a tag set, a repository grouping key, numeric facets)
//! and both are immutable snapshots: a state change produces a replacement
//! record, never an in-place edit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label marking an issue as suitable for new contributors.
pub const BEGINNER_LABEL: &str = "good-first-issue";

/// Tag appended to discussions produced by the summarization backend.
pub const AI_SUMMARIZED_TAG: &str = "ai-summarized";

/// Issue difficulty, ordered easy < moderate < hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    /// Fixed sort rank: easy = 0, moderate = 1, hard = 2.
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Moderate => 1,
            Difficulty::Hard => 2,
        }
    }

    /// The lowercase wire/display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A summarized GitHub discussion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discussion {
    /// Unique within a collection snapshot.
    pub id: u64,
    pub title: String,
    /// Repository grouping key.
    pub repository: String,
    /// Summary text, searchable.
    pub summary: String,
    pub participants: u64,
    /// Relative-time label ("2 hours ago"). Display only, never parsed.
    pub last_activity: String,
    pub tags: Vec<String>,
    /// Elevated recent activity; source of truth is external.
    pub trending: bool,
    pub replies: u64,
}

impl Discussion {
    /// Whether this discussion came from the summarization backend.
    pub fn is_ai_summarized(&self) -> bool {
        self.tags.iter().any(|t| t == AI_SUMMARIZED_TAG)
    }
}

/// An open issue surfaced as a contribution opportunity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Unique within a collection snapshot.
    pub id: u64,
    pub title: String,
    pub repository: String,
    pub difficulty: Difficulty,
    /// Primary language of the repository.
    pub language: String,
    /// Issue body, searchable.
    pub description: String,
    pub labels: Vec<String>,
    /// Presence means the issue is claimed.
    pub assignee: Option<String>,
    /// Relative-time label ("3 days ago"). Display only, never parsed.
    pub created_at: String,
    pub stars: u64,
    pub comments: u64,
}

impl Issue {
    /// An issue is available while nobody has claimed it.
    pub fn is_available(&self) -> bool {
        self.assignee.is_none()
    }

    /// Whether the issue carries the beginner-friendly label.
    pub fn is_beginner_friendly(&self) -> bool {
        self.labels.iter().any(|l| l == BEGINNER_LABEL)
    }

    /// Returns a copy of this issue claimed by `user`.
    pub fn claimed_by(&self, user: &str) -> Issue {
        Issue {
            assignee: Some(user.to_string()),
            ..self.clone()
        }
    }
}
