//! In-memory filter and sort pipeline for the dashboard listings.
//!
//! The pipeline is pure: it reads a collection snapshot, applies the search
//! text and facet filters, then a stable sort, and hands back a fresh
//! sequence of references plus the match count. It runs on every filter
//! change, so it does no I/O and never touches the input collection.

use crate::models::{Discussion, Issue};

/// A single facet filter: the `All` sentinel admits everything, `Only`
/// requires the item's facet value to match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Builds a selection from user input, treating "all" (or empty input)
    /// as the sentinel.
    pub fn parse(value: &str) -> Selection {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(trimmed.to_string())
        }
    }

    /// Whether this selection admits an item whose facet value is `value`.
    /// An item without the facet is only admitted by `All`.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// Filterable facets shared between discussions and issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Repository,
    Difficulty,
    Language,
    /// "available" or "assigned", derived from assignee presence.
    Status,
}

/// Sort order for the matched subset. Every comparator is stable: ties keep
/// their relative input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Preserve input order. Collections are produced most-recent-first
    /// (new summaries are prepended), and the records carry only relative
    /// display labels, so this is deliberately a no-op rather than a
    /// timestamp sort.
    #[default]
    Recent,
    /// Trending items first.
    Trending,
    /// Descending numeric sorts.
    Participants,
    Replies,
    Stars,
    Comments,
    /// Ascending easy < moderate < hard; items without a difficulty last.
    Difficulty,
}

impl SortKey {
    /// Parses a sort key, falling back to `Recent` for anything
    /// unrecognised.
    pub fn parse_lenient(value: &str) -> SortKey {
        match value.trim().to_ascii_lowercase().as_str() {
            "trending" => SortKey::Trending,
            "participants" => SortKey::Participants,
            "replies" => SortKey::Replies,
            "stars" => SortKey::Stars,
            "comments" => SortKey::Comments,
            "difficulty" => SortKey::Difficulty,
            _ => SortKey::Recent,
        }
    }
}

/// A listing query: search text, one selection per facet, and a sort key.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Case-insensitive substring over title, description and tags.
    /// Empty matches everything.
    pub search: String,
    pub repository: Selection,
    pub difficulty: Selection,
    pub language: Selection,
    pub status: Selection,
    pub sort: SortKey,
}

impl Query {
    /// Neutral query: no search text, all facets open, `Recent` order.
    pub fn neutral() -> Query {
        Query::default()
    }
}

/// The ordered matches for one query over one snapshot.
#[derive(Debug)]
pub struct QueryOutcome<'a, T> {
    /// Matched items, in sorted order. No truncation.
    pub items: Vec<&'a T>,
    /// Always equal to `items.len()`; zero matches is a valid state, not an
    /// error.
    pub match_count: usize,
}

/// Implemented by any record the pipeline can filter and sort.
pub trait Queryable {
    /// Text fields searched for the query's substring.
    fn search_haystacks(&self) -> Vec<&str>;

    /// The item's value for a facet, if it has one.
    fn facet(&self, facet: Facet) -> Option<&str>;

    fn participants(&self) -> u64 {
        0
    }
    fn replies(&self) -> u64 {
        0
    }
    fn stars(&self) -> u64 {
        0
    }
    fn comments(&self) -> u64 {
        0
    }
    fn trending(&self) -> bool {
        false
    }
    fn difficulty_rank(&self) -> Option<u8> {
        None
    }
}

/// Runs the query over a collection snapshot, producing the ordered matches
/// and their count. The input is never reordered or mutated.
pub fn run<'a, T: Queryable>(items: &'a [T], query: &Query) -> QueryOutcome<'a, T> {
    let needle = query.search.trim().to_lowercase();

    let mut matched: Vec<&T> = items
        .iter()
        .filter(|item| matches_search(*item, &needle) && matches_facets(*item, query))
        .collect();

    sort_matches(&mut matched, query.sort);

    QueryOutcome {
        match_count: matched.len(),
        items: matched,
    }
}

fn matches_search<T: Queryable>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.search_haystacks()
        .iter()
        .any(|hay| hay.to_lowercase().contains(needle))
}

fn matches_facets<T: Queryable>(item: &T, query: &Query) -> bool {
    query.repository.admits(item.facet(Facet::Repository))
        && query.difficulty.admits(item.facet(Facet::Difficulty))
        && query.language.admits(item.facet(Facet::Language))
        && query.status.admits(item.facet(Facet::Status))
}

fn sort_matches<T: Queryable>(matched: &mut [&T], sort: SortKey) {
    use std::cmp::Reverse;

    match sort {
        SortKey::Recent => {}
        SortKey::Trending => matched.sort_by_key(|item| Reverse(item.trending())),
        SortKey::Participants => matched.sort_by_key(|item| Reverse(item.participants())),
        SortKey::Replies => matched.sort_by_key(|item| Reverse(item.replies())),
        SortKey::Stars => matched.sort_by_key(|item| Reverse(item.stars())),
        SortKey::Comments => matched.sort_by_key(|item| Reverse(item.comments())),
        SortKey::Difficulty => {
            matched.sort_by_key(|item| item.difficulty_rank().unwrap_or(u8::MAX));
        }
    }
}

impl Queryable for Discussion {
    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.summary.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Repository => Some(self.repository.as_str()),
            Facet::Difficulty | Facet::Language | Facet::Status => None,
        }
    }

    fn participants(&self) -> u64 {
        self.participants
    }

    fn replies(&self) -> u64 {
        self.replies
    }

    fn trending(&self) -> bool {
        self.trending
    }
}

impl Queryable for Issue {
    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.labels.iter().map(String::as_str));
        fields
    }

    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Repository => Some(self.repository.as_str()),
            Facet::Difficulty => Some(self.difficulty.as_str()),
            Facet::Language => Some(self.language.as_str()),
            Facet::Status => Some(if self.is_available() {
                "available"
            } else {
                "assigned"
            }),
        }
    }

    fn stars(&self) -> u64 {
        self.stars
    }

    fn comments(&self) -> u64 {
        self.comments
    }

    fn difficulty_rank(&self) -> Option<u8> {
        Some(self.difficulty.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn make_discussion(id: u64, title: &str, repo: &str, tags: &[&str]) -> Discussion {
        Discussion {
            id,
            title: title.to_string(),
            repository: repo.to_string(),
            summary: format!("Summary of {title}"),
            participants: id * 3,
            last_activity: "2 hours ago".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            trending: false,
            replies: id * 7,
        }
    }

    fn make_issue(
        id: u64,
        difficulty: Difficulty,
        language: &str,
        assignee: Option<&str>,
        stars: u64,
    ) -> Issue {
        Issue {
            id,
            title: format!("Issue {id}"),
            repository: "compiler-core".to_string(),
            difficulty,
            language: language.to_string(),
            description: format!("Description of issue {id}"),
            labels: vec!["help-wanted".to_string()],
            assignee: assignee.map(|a| a.to_string()),
            created_at: "1 week ago".to_string(),
            stars,
            comments: id,
        }
    }

    /// Eight issues with known facet combinations. Ids 3 and 7 are the only
    /// hard Rust issues.
    fn issue_fixture() -> Vec<Issue> {
        vec![
            make_issue(1, Difficulty::Easy, "Rust", None, 12),
            make_issue(2, Difficulty::Moderate, "C++", None, 8),
            make_issue(3, Difficulty::Hard, "Rust", Some("alice_dev"), 15),
            make_issue(4, Difficulty::Easy, "JavaScript", None, 6),
            make_issue(5, Difficulty::Hard, "Haskell", None, 20),
            make_issue(6, Difficulty::Easy, "Markdown", None, 4),
            make_issue(7, Difficulty::Hard, "Rust", None, 25),
            make_issue(8, Difficulty::Moderate, "C", None, 18),
        ]
    }

    #[test]
    fn neutral_query_is_identity() {
        let items = issue_fixture();
        let outcome = run(&items, &Query::neutral());

        assert_eq!(outcome.match_count, items.len());
        let ids: Vec<u64> = outcome.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_collection_yields_zero_matches() {
        let items: Vec<Issue> = Vec::new();
        let outcome = run(&items, &Query::neutral());
        assert_eq!(outcome.match_count, 0);
        assert!(outcome.items.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_title_description_and_tags() {
        let items = vec![
            make_discussion(1, "RFC: pattern matching", "lang-spec", &["RFC", "syntax"]),
            make_discussion(2, "Memory strategies", "compiler-design", &["memory"]),
            make_discussion(3, "Type inference", "type-system", &["generics"]),
        ];

        let mut query = Query::neutral();
        query.search = "PATTERN".to_string();
        let outcome = run(&items, &query);
        assert_eq!(outcome.match_count, 1);
        assert_eq!(outcome.items[0].id, 1);

        // Tag hit only.
        query.search = "generics".to_string();
        let outcome = run(&items, &query);
        assert_eq!(outcome.items[0].id, 3);

        // Summary hit (summary text embeds the title).
        query.search = "summary of memory".to_string();
        let outcome = run(&items, &query);
        assert_eq!(outcome.items[0].id, 2);
    }

    #[test]
    fn all_sentinel_matches_missing_facets() {
        let items = vec![make_discussion(1, "RFC", "lang-spec", &[])];

        // Discussions carry no language facet: Only never matches, All does.
        let mut query = Query::neutral();
        query.language = Selection::Only("Rust".to_string());
        assert_eq!(run(&items, &query).match_count, 0);

        query.language = Selection::All;
        assert_eq!(run(&items, &query).match_count, 1);
    }

    #[test]
    fn facet_filters_are_anded() {
        let items = issue_fixture();
        let mut query = Query::neutral();
        query.difficulty = Selection::Only("hard".to_string());
        query.language = Selection::Only("Rust".to_string());

        let outcome = run(&items, &query);
        let ids: Vec<u64> = outcome.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn status_facet_tracks_assignee_presence() {
        let items = issue_fixture();

        let mut query = Query::neutral();
        query.status = Selection::Only("assigned".to_string());
        let assigned: Vec<u64> = run(&items, &query).items.iter().map(|i| i.id).collect();
        assert_eq!(assigned, vec![3]);

        query.status = Selection::Only("available".to_string());
        assert_eq!(run(&items, &query).match_count, 7);
    }

    #[test]
    fn filter_with_zero_matches_is_empty_not_an_error() {
        let items = issue_fixture();
        let mut query = Query::neutral();
        query.language = Selection::Only("COBOL".to_string());

        let outcome = run(&items, &query);
        assert_eq!(outcome.match_count, 0);
        assert!(outcome.items.is_empty());
    }

    #[test]
    fn stars_sort_is_descending() {
        let items = issue_fixture();
        let mut query = Query::neutral();
        query.sort = SortKey::Stars;

        let outcome = run(&items, &query);
        for pair in outcome.items.windows(2) {
            assert!(pair[0].stars >= pair[1].stars);
        }
        assert_eq!(outcome.items[0].id, 7);
    }

    #[test]
    fn difficulty_sort_is_ascending_and_stable() {
        let items = issue_fixture();
        let mut query = Query::neutral();
        query.sort = SortKey::Difficulty;

        let outcome = run(&items, &query);
        for pair in outcome.items.windows(2) {
            assert!(pair[0].difficulty.rank() <= pair[1].difficulty.rank());
        }
        // Ties keep input order within each band.
        let ids: Vec<u64> = outcome.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 4, 6, 2, 8, 3, 5, 7]);
    }

    #[test]
    fn trending_sort_puts_trending_first_and_preserves_ties() {
        let mut items = vec![
            make_discussion(1, "a", "r", &[]),
            make_discussion(2, "b", "r", &[]),
            make_discussion(3, "c", "r", &[]),
        ];
        items[1].trending = true;

        let mut query = Query::neutral();
        query.sort = SortKey::Trending;
        let ids: Vec<u64> = run(&items, &query).items.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn recent_sort_preserves_input_order() {
        let items = vec![
            make_discussion(9, "newest", "r", &[]),
            make_discussion(1, "older", "r", &[]),
        ];
        let ids: Vec<u64> = run(&items, &Query::neutral())
            .items
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![9, 1]);
    }

    #[test]
    fn same_query_twice_is_idempotent() {
        let items = issue_fixture();
        let mut query = Query::neutral();
        query.search = "issue".to_string();
        query.sort = SortKey::Comments;

        let first: Vec<u64> = run(&items, &query).items.iter().map(|i| i.id).collect();
        let second: Vec<u64> = run(&items, &query).items.iter().map(|i| i.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_sort_key_parses_as_recent() {
        assert_eq!(SortKey::parse_lenient("recent"), SortKey::Recent);
        assert_eq!(SortKey::parse_lenient("stars"), SortKey::Stars);
        assert_eq!(SortKey::parse_lenient("newest-first"), SortKey::Recent);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Recent);
    }

    #[test]
    fn selection_parse_treats_all_and_blank_as_sentinel() {
        assert_eq!(Selection::parse("all"), Selection::All);
        assert_eq!(Selection::parse("All"), Selection::All);
        assert_eq!(Selection::parse("  "), Selection::All);
        assert_eq!(
            Selection::parse("Rust"),
            Selection::Only("Rust".to_string())
        );
    }

    #[test]
    fn facet_equality_is_exact() {
        let items = issue_fixture();
        let mut query = Query::neutral();
        query.language = Selection::Only("rust".to_string());
        // Facet matching is exact, unlike the search text.
        assert_eq!(run(&items, &query).match_count, 0);
    }
}
