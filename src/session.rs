//! The browsing session: sole owner of the in-memory collections.
//!
//! The query pipeline reads these collections, the summarization flow
//! appends to them through [`DashboardSession::add_discussion`], and claims
//! replace records. Nothing is persisted; the session dies with the
//! process.

use crate::analysis::AnalyzedIssue;
use crate::models::{Discussion, Issue};
use crate::query::{self, Query, QueryOutcome};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("no issue with id {0}")]
    UnknownIssue(u64),
    #[error("issue {id} is already claimed by {assignee}")]
    AlreadyClaimed { id: u64, assignee: String },
}

/// Aggregate counters for the issue board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueStats {
    pub total: usize,
    pub available: usize,
    pub beginner_friendly: usize,
    pub languages: usize,
}

/// In-memory collections for one browsing session.
pub struct DashboardSession {
    discussions: Vec<Discussion>,
    issues: Vec<Issue>,
    next_issue_id: u64,
}

impl DashboardSession {
    /// A session preloaded with the curated seed collections.
    pub fn seeded() -> Self {
        let issues = crate::seed::issues();
        let next_issue_id = issues.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        Self {
            discussions: crate::seed::discussions(),
            issues,
            next_issue_id,
        }
    }

    /// An empty session.
    pub fn empty() -> Self {
        Self {
            discussions: Vec::new(),
            issues: Vec::new(),
            next_issue_id: 1,
        }
    }

    pub fn discussions(&self) -> &[Discussion] {
        &self.discussions
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Prepends a freshly summarized discussion so it lists first under the
    /// default order.
    pub fn add_discussion(&mut self, discussion: Discussion) {
        self.discussions.insert(0, discussion);
    }

    /// Replaces the issue board with an analysis response, allocating fresh
    /// ids.
    pub fn ingest_analyzed(&mut self, analyzed: Vec<AnalyzedIssue>) {
        self.issues = analyzed
            .into_iter()
            .map(|issue| {
                let id = self.next_issue_id;
                self.next_issue_id += 1;
                issue.into_issue(id)
            })
            .collect();
    }

    /// Claims an issue for `user` by replacing the record.
    pub fn claim_issue(&mut self, id: u64, user: &str) -> Result<&Issue, SessionError> {
        let position = self
            .issues
            .iter()
            .position(|issue| issue.id == id)
            .ok_or(SessionError::UnknownIssue(id))?;

        let replacement = {
            let issue = &self.issues[position];
            if let Some(assignee) = &issue.assignee {
                return Err(SessionError::AlreadyClaimed {
                    id,
                    assignee: assignee.clone(),
                });
            }
            issue.claimed_by(user)
        };

        self.issues[position] = replacement;
        Ok(&self.issues[position])
    }

    /// Runs a query over the discussion feed.
    pub fn query_discussions(&self, query: &Query) -> QueryOutcome<'_, Discussion> {
        query::run(&self.discussions, query)
    }

    /// Runs a query over the issue board.
    pub fn query_issues(&self, query: &Query) -> QueryOutcome<'_, Issue> {
        query::run(&self.issues, query)
    }

    /// Counters for the issue board header.
    pub fn issue_stats(&self) -> IssueStats {
        let mut languages: Vec<&str> = self.issues.iter().map(|i| i.language.as_str()).collect();
        languages.sort_unstable();
        languages.dedup();

        IssueStats {
            total: self.issues.len(),
            available: self.issues.iter().filter(|i| i.is_available()).count(),
            beginner_friendly: self
                .issues
                .iter()
                .filter(|i| i.is_beginner_friendly())
                .count(),
            languages: languages.len(),
        }
    }

    /// How many discussions in the feed came from the summarizer.
    pub fn ai_summarized_count(&self) -> usize {
        self.discussions
            .iter()
            .filter(|d| d.is_ai_summarized())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AI_SUMMARIZED_TAG;
    use crate::query::SortKey;

    fn summarized(id: u64) -> Discussion {
        Discussion {
            id,
            title: "Discussion #42: Advanced memory allocation strategies".into(),
            repository: "memory-management".into(),
            summary: "Arena allocation, pool allocation and hybrid approaches.".into(),
            participants: 14,
            last_activity: "Just now".into(),
            tags: vec!["memory".into(), AI_SUMMARIZED_TAG.into()],
            trending: false,
            replies: 27,
        }
    }

    #[test]
    fn added_discussion_lists_first_under_recent_order() {
        let mut session = DashboardSession::seeded();
        let fresh = summarized(999_000);
        session.add_discussion(fresh);

        let mut query = Query::neutral();
        query.sort = SortKey::Recent;
        let outcome = session.query_discussions(&query);
        assert_eq!(outcome.items[0].id, 999_000);
        assert_eq!(outcome.match_count, 6);
    }

    #[test]
    fn added_discussion_id_is_distinct_from_existing_ones() {
        let mut session = DashboardSession::seeded();
        let fresh = summarized(999_000);
        let existing: Vec<u64> = session.discussions().iter().map(|d| d.id).collect();
        assert!(!existing.contains(&fresh.id));
        session.add_discussion(fresh);
        assert_eq!(session.ai_summarized_count(), 1);
    }

    #[test]
    fn claim_replaces_the_record() {
        let mut session = DashboardSession::seeded();
        let claimed = session.claim_issue(1, "carol").unwrap();
        assert_eq!(claimed.assignee.as_deref(), Some("carol"));

        // The board now holds the replacement.
        let issue = session.issues().iter().find(|i| i.id == 1).unwrap();
        assert!(!issue.is_available());
    }

    #[test]
    fn claiming_a_claimed_issue_is_rejected() {
        let mut session = DashboardSession::seeded();
        // Seed issue 3 is already assigned.
        let result = session.claim_issue(3, "carol");
        assert_eq!(
            result.unwrap_err(),
            SessionError::AlreadyClaimed {
                id: 3,
                assignee: "alice_dev".into()
            }
        );

        let result = session.claim_issue(404, "carol");
        assert_eq!(result.unwrap_err(), SessionError::UnknownIssue(404));
    }

    #[test]
    fn issue_stats_match_the_seed_board() {
        let session = DashboardSession::seeded();
        let stats = session.issue_stats();
        assert_eq!(stats.total, 8);
        assert_eq!(stats.available, 6);
        assert_eq!(stats.beginner_friendly, 3);
        assert_eq!(stats.languages, 7);
    }

    #[test]
    fn ingest_allocates_fresh_unique_ids() {
        let json = serde_json::json!([{
            "title": "Add Unicode identifier support",
            "body": null,
            "url": "https://github.com/acme/lexer-tools/issues/17",
            "createdAt": "2026-07-30T10:00:00Z",
            "updatedAt": "2026-08-02T08:30:00Z",
            "assignee": null,
            "labels": [],
            "comments": 5,
            "repository": {
                "name": "lexer-tools",
                "fullName": "acme/lexer-tools",
                "stars": 412,
                "language": "Rust"
            },
            "beginnerFriendly": true,
            "difficulty": "easy"
        }]);
        let analyzed: Vec<AnalyzedIssue> = serde_json::from_value(json).unwrap();

        let mut session = DashboardSession::seeded();
        session.ingest_analyzed(analyzed);

        assert_eq!(session.issues().len(), 1);
        // Fresh id, past the seeded range.
        assert_eq!(session.issues()[0].id, 9);
    }
}
