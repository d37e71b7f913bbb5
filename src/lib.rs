//! # Focusfork
//!
//! A CLI dashboard for browsing GitHub discussions and issues, with
//! AI-generated summaries fetched from a backend summarization service.
//!
//! ## Features
//!
//! - **Pure listing pipeline**: search, facet filters and stable sorts over
//!   in-memory collections, recomputed on every query
//! - **Strict intake**: only full `github.com/<owner>/<repo>/discussions/<id>`
//!   URLs reach the summarization backend
//! - **Session-scoped**: collections live and die with the process

pub mod analysis;
pub mod config;
pub mod interactive;
pub mod models;
pub mod query;
pub mod render;
pub mod seed;
pub mod session;
pub mod summarizer;

pub use config::Config;
pub use models::{Difficulty, Discussion, Issue};
pub use query::{Query, Selection, SortKey};
pub use session::DashboardSession;
pub use summarizer::{DiscussionLocator, SummarizeClient};
