//! Focusfork CLI - GitHub discussion and issue dashboard
//!
//! The application logic is contained in lib.rs, and this file is
//! responsible for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use focusfork::query::{Query, Selection, SortKey};
use focusfork::{interactive, render, Config, DashboardSession, SummarizeClient};

#[derive(Parser)]
#[command(name = "focusfork")]
#[command(author, version, about = "Dashboard for GitHub discussions and issues", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the discussion feed
    Discussions {
        /// Substring to search for in titles, summaries and tags
        #[arg(long, default_value = "")]
        search: String,
        /// Repository filter ("all" for no filter)
        #[arg(long, default_value = "all")]
        repository: String,
        /// Sort order: recent, trending, participants, replies
        #[arg(long, default_value = "recent")]
        sort: String,
    },
    /// List the issue board
    Issues {
        /// Substring to search for in titles, descriptions and labels
        #[arg(long, default_value = "")]
        search: String,
        /// Difficulty filter: all, easy, moderate, hard
        #[arg(long, default_value = "all")]
        difficulty: String,
        /// Language filter ("all" for no filter)
        #[arg(long, default_value = "all")]
        language: String,
        /// Repository filter ("all" for no filter)
        #[arg(long, default_value = "all")]
        repository: String,
        /// Status filter: all, available, assigned
        #[arg(long, default_value = "all")]
        status: String,
        /// Sort order: recent, stars, comments, difficulty
        #[arg(long, default_value = "recent")]
        sort: String,
        /// Fetch live issues for owner/repo through the analysis backend
        /// instead of listing the seeded board
        #[arg(long, value_name = "OWNER/REPO")]
        fetch: Option<String>,
    },
    /// Summarise a GitHub discussion by URL
    Summarise {
        /// Full discussion URL: https://github.com/<owner>/<repo>/discussions/<id>
        url: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    render::configure_colors();

    let cli = Cli::parse();
    let config = Config::load_or_default()?;

    match cli.command {
        Some(Commands::Discussions {
            search,
            repository,
            sort,
        }) => {
            let query = Query {
                search,
                repository: Selection::parse(&repository),
                sort: SortKey::parse_lenient(&sort),
                ..Query::neutral()
            };

            let session = DashboardSession::seeded();
            let outcome = session.query_discussions(&query);
            render::print_discussions(&outcome, &query);
        }
        Some(Commands::Issues {
            search,
            difficulty,
            language,
            repository,
            status,
            sort,
            fetch,
        }) => {
            let query = Query {
                search,
                difficulty: Selection::parse(&difficulty),
                language: Selection::parse(&language),
                repository: Selection::parse(&repository),
                status: Selection::parse(&status),
                sort: SortKey::parse_lenient(&sort),
            };

            let session = match fetch {
                Some(target) => {
                    let (owner, repo) = target
                        .split_once('/')
                        .ok_or_else(|| anyhow::anyhow!("--fetch expects OWNER/REPO"))?;
                    let client = focusfork::analysis::AnalysisClient::new(
                        &config.backend.analysis_url,
                        config.api_token()?,
                    )?;
                    let analyzed = client.fetch_issues(owner, repo).await?;
                    let mut session = DashboardSession::empty();
                    session.ingest_analyzed(analyzed);
                    session
                }
                None => DashboardSession::seeded(),
            };

            render::print_issue_stats(&session.issue_stats());
            let outcome = session.query_issues(&query);
            render::print_issues(&outcome, &query);
        }
        Some(Commands::Summarise { url }) => {
            let client = SummarizeClient::new(&config.backend.summarize_url)?;
            println!("Summarising: {}", url);

            let mut session = DashboardSession::seeded();
            let discussion = client.submit(&url).await?;
            render::print_summarized(&discussion);
            session.add_discussion(discussion);

            let query = Query::neutral();
            let outcome = session.query_discussions(&query);
            render::print_discussions(&outcome, &query);
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "focusfork", &mut std::io::stdout());
        }
        None => {
            // Default: launch the interactive dashboard
            interactive::run(&config).await?;
        }
    }

    Ok(())
}
