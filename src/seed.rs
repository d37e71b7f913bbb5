//! Curated seed collections shown before any backend data arrives.
//!
//! These are deterministic fixtures, not generated data; counts and labels
//! are fixed so listings render the same on every launch.

use crate::models::{Difficulty, Discussion, Issue};

/// The initial discussion feed, most recent first.
pub fn discussions() -> Vec<Discussion> {
    vec![
        Discussion {
            id: 1,
            title: "RFC: New syntax for pattern matching in functional languages".into(),
            repository: "functional-lang-spec".into(),
            summary: "Proposal for introducing pattern matching syntax that improves \
                      readability and reduces boilerplate code. Discussion covers syntax \
                      alternatives, performance implications, and backward compatibility."
                .into(),
            participants: 12,
            last_activity: "2 hours ago".into(),
            tags: vec!["RFC".into(), "syntax".into(), "pattern-matching".into()],
            trending: true,
            replies: 45,
        },
        Discussion {
            id: 2,
            title: "Memory management strategies for compiled languages".into(),
            repository: "compiler-design".into(),
            summary: "Deep dive into various memory management approaches including garbage \
                      collection, reference counting, and manual memory management. Comparing \
                      trade-offs and implementation complexity."
                .into(),
            participants: 8,
            last_activity: "4 hours ago".into(),
            tags: vec!["memory".into(), "compiler".into(), "performance".into()],
            trending: false,
            replies: 23,
        },
        Discussion {
            id: 3,
            title: "Type inference improvements for generic programming".into(),
            repository: "type-system".into(),
            summary: "Discussion on enhancing type inference algorithms to better handle \
                      complex generic scenarios while maintaining compilation speed and error \
                      message clarity."
                .into(),
            participants: 15,
            last_activity: "1 day ago".into(),
            tags: vec!["types".into(), "generics".into(), "inference".into()],
            trending: true,
            replies: 67,
        },
        Discussion {
            id: 4,
            title: "Async/await implementation across different language paradigms".into(),
            repository: "async-patterns".into(),
            summary: "Comparing async/await implementations in various programming languages \
                      and discussing best practices for asynchronous programming patterns."
                .into(),
            participants: 20,
            last_activity: "2 days ago".into(),
            tags: vec!["async".into(), "concurrency".into(), "patterns".into()],
            trending: false,
            replies: 89,
        },
        Discussion {
            id: 5,
            title: "Error handling mechanisms: exceptions vs result types".into(),
            repository: "error-handling".into(),
            summary: "Comprehensive discussion on different error handling approaches, their \
                      trade-offs, and impact on code maintainability and performance."
                .into(),
            participants: 18,
            last_activity: "3 days ago".into(),
            tags: vec!["errors".into(), "exceptions".into(), "result-types".into()],
            trending: true,
            replies: 34,
        },
    ]
}

/// The initial issue board.
pub fn issues() -> Vec<Issue> {
    vec![
        Issue {
            id: 1,
            title: "Add support for Unicode identifiers in lexer".into(),
            repository: "lexer-tools".into(),
            difficulty: Difficulty::Easy,
            language: "Rust".into(),
            description: "Implement Unicode identifier support according to Unicode Standard \
                          Annex #31. Good first issue for contributors familiar with regex and \
                          Unicode."
                .into(),
            labels: vec![
                "good-first-issue".into(),
                "lexer".into(),
                "unicode".into(),
                "help-wanted".into(),
            ],
            assignee: None,
            created_at: "3 days ago".into(),
            stars: 12,
            comments: 5,
        },
        Issue {
            id: 2,
            title: "Optimize AST traversal for large codebases".into(),
            repository: "ast-processor".into(),
            difficulty: Difficulty::Moderate,
            language: "C++".into(),
            description: "Current AST traversal becomes slow with large codebases (>10k LOC). \
                          Need visitor pattern optimizations and caching; profiling shows 60% \
                          of time spent in redundant traversals."
                .into(),
            labels: vec!["performance".into(), "ast".into(), "optimization".into()],
            assignee: None,
            created_at: "1 week ago".into(),
            stars: 8,
            comments: 12,
        },
        Issue {
            id: 3,
            title: "Implement error recovery in parser".into(),
            repository: "parser-gen".into(),
            difficulty: Difficulty::Hard,
            language: "OCaml".into(),
            description: "Add error recovery mechanisms to continue parsing after syntax \
                          errors, providing better error messages and IDE support."
                .into(),
            labels: vec!["parser".into(), "error-handling".into(), "ide-support".into()],
            assignee: Some("alice_dev".into()),
            created_at: "2 weeks ago".into(),
            stars: 15,
            comments: 23,
        },
        Issue {
            id: 4,
            title: "Add syntax highlighting for new language constructs".into(),
            repository: "syntax-highlighter".into(),
            difficulty: Difficulty::Easy,
            language: "JavaScript".into(),
            description: "Update syntax highlighting rules to support recently added language \
                          constructs including pattern matching and async generators."
                .into(),
            labels: vec![
                "good-first-issue".into(),
                "syntax".into(),
                "highlighting".into(),
                "textmate".into(),
            ],
            assignee: None,
            created_at: "4 days ago".into(),
            stars: 6,
            comments: 3,
        },
        Issue {
            id: 5,
            title: "Improve type checker performance for recursive types".into(),
            repository: "type-checker".into(),
            difficulty: Difficulty::Hard,
            language: "Haskell".into(),
            description: "Type checking becomes exponentially slow with deeply nested recursive \
                          types. Need memoization and cycle detection to improve performance \
                          while maintaining correctness."
                .into(),
            labels: vec![
                "performance".into(),
                "types".into(),
                "recursion".into(),
                "algorithms".into(),
            ],
            assignee: None,
            created_at: "1 week ago".into(),
            stars: 20,
            comments: 18,
        },
        Issue {
            id: 6,
            title: "Create documentation for contributor onboarding".into(),
            repository: "docs".into(),
            difficulty: Difficulty::Easy,
            language: "Markdown".into(),
            description: "Write comprehensive documentation to help new contributors get \
                          started: setup instructions, coding standards, and contribution \
                          workflow."
                .into(),
            labels: vec![
                "documentation".into(),
                "good-first-issue".into(),
                "community".into(),
            ],
            assignee: None,
            created_at: "2 days ago".into(),
            stars: 4,
            comments: 7,
        },
        Issue {
            id: 7,
            title: "Implement incremental compilation support".into(),
            repository: "compiler-core".into(),
            difficulty: Difficulty::Moderate,
            language: "Rust".into(),
            description: "Add support for incremental compilation to reduce build times. This \
                          involves dependency tracking and selective recompilation of changed \
                          modules."
                .into(),
            labels: vec!["compiler".into(), "performance".into(), "incremental".into()],
            assignee: Some("bob_compiler".into()),
            created_at: "3 weeks ago".into(),
            stars: 25,
            comments: 31,
        },
        Issue {
            id: 8,
            title: "Fix memory leak in garbage collector".into(),
            repository: "runtime".into(),
            difficulty: Difficulty::Moderate,
            language: "C".into(),
            description: "Memory leak detected in the mark-and-sweep garbage collector when \
                          handling circular references. Valgrind reports consistent memory \
                          growth during long-running programs."
                .into(),
            labels: vec!["bug".into(), "memory".into(), "gc".into(), "runtime".into()],
            assignee: None,
            created_at: "5 days ago".into(),
            stars: 18,
            comments: 14,
        },
    ]
}
