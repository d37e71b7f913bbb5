//! Interactive dashboard loop.
//!
//! The default mode when no subcommand is given: browse and filter the
//! session collections, summarise new discussions, claim issues. Every
//! failure is rendered inline and the loop continues; nothing here is
//! fatal.

use crate::config::Config;
use crate::query::{Query, Selection, SortKey};
use crate::render;
use crate::session::DashboardSession;
use crate::summarizer::{SummarizeClient, SummarizeError};
use dialoguer::{Input, Select};

const MENU: &[&str] = &[
    "Browse discussions",
    "Browse issues",
    "Summarise a discussion",
    "Claim an issue",
    "Quit",
];

/// Runs the interactive loop until the user quits.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let mut session = DashboardSession::seeded();
    let summarizer = SummarizeClient::new(&config.backend.summarize_url)?;

    loop {
        let choice = Select::new()
            .with_prompt("focusfork")
            .items(MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => browse_discussions(&session)?,
            1 => browse_issues(&session)?,
            2 => summarise(&mut session, &summarizer).await?,
            3 => claim(&mut session)?,
            _ => break,
        }
    }

    Ok(())
}

fn prompt_search() -> anyhow::Result<String> {
    let search: String = Input::new()
        .with_prompt("Search (blank for all)")
        .allow_empty(true)
        .interact_text()?;
    Ok(search)
}

fn prompt_selection(prompt: &str) -> anyhow::Result<Selection> {
    let value: String = Input::new()
        .with_prompt(format!("{prompt} (blank or \"all\" for all)"))
        .allow_empty(true)
        .interact_text()?;
    Ok(Selection::parse(&value))
}

fn prompt_sort(options: &[&str]) -> anyhow::Result<SortKey> {
    let index = Select::new()
        .with_prompt("Sort by")
        .items(options)
        .default(0)
        .interact()?;
    Ok(SortKey::parse_lenient(options[index]))
}

fn browse_discussions(session: &DashboardSession) -> anyhow::Result<()> {
    let mut query = Query::neutral();
    query.search = prompt_search()?;
    query.repository = prompt_selection("Repository")?;
    query.sort = prompt_sort(&["recent", "trending", "participants", "replies"])?;

    let outcome = session.query_discussions(&query);
    render::print_discussions(&outcome, &query);
    Ok(())
}

fn browse_issues(session: &DashboardSession) -> anyhow::Result<()> {
    let mut query = Query::neutral();
    query.search = prompt_search()?;
    query.difficulty = prompt_selection("Difficulty")?;
    query.language = prompt_selection("Language")?;
    query.repository = prompt_selection("Repository")?;
    query.status = prompt_selection("Status (available/assigned)")?;
    query.sort = prompt_sort(&["recent", "stars", "comments", "difficulty"])?;

    render::print_issue_stats(&session.issue_stats());
    let outcome = session.query_issues(&query);
    render::print_issues(&outcome, &query);
    Ok(())
}

/// Prompts for a discussion URL and submits it. On failure the input is
/// kept and offered back for editing; it is cleared only on success.
async fn summarise(
    session: &mut DashboardSession,
    summarizer: &SummarizeClient,
) -> anyhow::Result<()> {
    let mut previous = String::new();

    loop {
        let raw: String = Input::new()
            .with_prompt("GitHub discussion URL (blank to cancel)")
            .with_initial_text(previous.clone())
            .allow_empty(true)
            .interact_text()?;
        if raw.trim().is_empty() {
            return Ok(());
        }

        println!("Summarising...");
        match summarizer.submit(&raw).await {
            Ok(discussion) => {
                render::print_summarized(&discussion);
                session.add_discussion(discussion);
                return Ok(());
            }
            Err(error @ SummarizeError::InvalidInput(_)) => {
                render::print_error(&format!(
                    "{error} - expected https://github.com/<owner>/<repo>/discussions/<id>"
                ));
                previous = raw;
            }
            Err(error) => {
                render::print_error(&error.to_string());
                previous = raw;
            }
        }
    }
}

fn claim(session: &mut DashboardSession) -> anyhow::Result<()> {
    let id: u64 = Input::new().with_prompt("Issue id").interact_text()?;
    let user: String = Input::new().with_prompt("Your GitHub username").interact_text()?;

    match session.claim_issue(id, &user) {
        Ok(issue) => println!("Claimed #{}: {}", issue.id, issue.title),
        Err(error) => render::print_error(&error.to_string()),
    }
    Ok(())
}
