//! Terminal rendering for listings, stats and summarizer feedback.

use crate::models::{Difficulty, Discussion, Issue};
use crate::query::{Query, QueryOutcome, Selection};
use crate::session::IssueStats;
use colored::{ColoredString, Colorize};

/// Disables colour output when stdout is not a terminal.
pub fn configure_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

fn colored_difficulty(difficulty: Difficulty) -> ColoredString {
    match difficulty {
        Difficulty::Easy => difficulty.as_str().green(),
        Difficulty::Moderate => difficulty.as_str().yellow(),
        Difficulty::Hard => difficulty.as_str().red(),
    }
}

/// One-line summary of what the listing shows, mirroring the active query.
fn match_line(noun: &str, count: usize, query: &Query) -> String {
    let plural = if count == 1 { "" } else { "s" };
    let mut line = format!("Showing {count} {noun}{plural}");
    if !query.search.trim().is_empty() {
        line.push_str(&format!(" matching \"{}\"", query.search.trim()));
    }
    if let Selection::Only(repo) = &query.repository {
        line.push_str(&format!(" in {repo}"));
    }
    line
}

/// Renders the discussion feed.
pub fn print_discussions(outcome: &QueryOutcome<'_, Discussion>, query: &Query) {
    println!("{}\n", match_line("discussion", outcome.match_count, query));

    if outcome.items.is_empty() {
        println!("No discussions found.");
        println!("Try adjusting your search terms or summarise a new discussion.");
        return;
    }

    for discussion in &outcome.items {
        let mut badges = String::new();
        if discussion.trending {
            badges.push_str(&format!(" {}", "[trending]".bright_yellow()));
        }
        if discussion.is_ai_summarized() {
            badges.push_str(&format!(" {}", "[ai]".magenta()));
        }

        println!("{}{}", discussion.title.bold(), badges);
        println!(
            "  {} | {} participants | {} replies | {}",
            discussion.repository.cyan(),
            discussion.participants,
            discussion.replies,
            discussion.last_activity.dimmed(),
        );
        println!("  {}", discussion.summary);
        if !discussion.tags.is_empty() {
            println!("  {}", discussion.tags.join(", ").dimmed());
        }
        println!();
    }
}

/// Renders the issue board.
pub fn print_issues(outcome: &QueryOutcome<'_, Issue>, query: &Query) {
    println!("{}\n", match_line("issue", outcome.match_count, query));

    if outcome.items.is_empty() {
        println!("No issues found.");
        println!("Try adjusting your search terms or filters.");
        return;
    }

    for issue in &outcome.items {
        println!(
            "#{} {} [{}]",
            issue.id,
            issue.title.bold(),
            colored_difficulty(issue.difficulty)
        );
        println!(
            "  {} | {} | {} stars | {} comments | {}",
            issue.repository.cyan(),
            issue.language,
            issue.stars,
            issue.comments,
            issue.created_at.dimmed(),
        );
        println!("  {}", issue.description);
        match &issue.assignee {
            Some(assignee) => println!("  {}", format!("assigned to {assignee}").yellow()),
            None => println!("  {}", "available".green()),
        }
        if !issue.labels.is_empty() {
            println!("  {}", issue.labels.join(", ").dimmed());
        }
        println!();
    }
}

/// Renders the issue board header counters.
pub fn print_issue_stats(stats: &IssueStats) {
    println!(
        "{} issues | {} available | {} beginner friendly | {} languages\n",
        stats.total.to_string().bold(),
        stats.available.to_string().green(),
        stats.beginner_friendly.to_string().blue(),
        stats.languages,
    );
}

/// Confirmation card for a successful summarization.
pub fn print_summarized(discussion: &Discussion) {
    println!("{}", "Successfully summarized".green().bold());
    println!("{}", discussion.title.bold());
    println!(
        "  {} | {} participants | {} replies",
        discussion.repository.cyan(),
        discussion.participants,
        discussion.replies,
    );
    println!("  {}\n", discussion.summary);
}

/// Inline, recoverable error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
