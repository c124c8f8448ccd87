pub mod create;
pub mod delete;
pub mod list;
pub mod report;
pub mod show;
pub mod update;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "userdesk",
    version,
    about = "Manage user profiles on a remote user-management service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API base URL (overrides the USERDESK_API_URL environment variable)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// List profiles, with optional name search and interest filter
    List {
        /// Case-insensitive substring to match against names
        #[arg(long)]
        search: Option<String>,
        /// Exact interest tag a profile must carry
        #[arg(long)]
        interest: Option<String>,
        /// Output format
        #[arg(long, default_value = "terminal", value_parser = ["terminal", "json"])]
        format: String,
    },
    /// List the distinct interest tags across all profiles
    Interests,
    /// Show one profile in full
    Show {
        /// Profile id
        id: String,
    },
    /// Resolve a profile's map viewport
    Map {
        /// Profile id
        id: String,
    },
    /// Create a profile
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Photo URL
        #[arg(long)]
        photo: Option<String>,
        /// Short description
        #[arg(long)]
        brief: Option<String>,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
        /// Free-text location
        #[arg(long)]
        location: Option<String>,
        /// Latitude in decimal degrees
        #[arg(long)]
        latitude: Option<f64>,
        /// Longitude in decimal degrees
        #[arg(long)]
        longitude: Option<f64>,
        /// Interest tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        interests: Vec<String>,
    },
    /// Update a profile — unset flags keep the current values, but the
    /// complete record is resent
    Update {
        /// Profile id
        id: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Photo URL
        #[arg(long)]
        photo: Option<String>,
        /// Short description
        #[arg(long)]
        brief: Option<String>,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
        /// Free-text location
        #[arg(long)]
        location: Option<String>,
        /// Latitude in decimal degrees
        #[arg(long)]
        latitude: Option<f64>,
        /// Longitude in decimal degrees
        #[arg(long)]
        longitude: Option<f64>,
        /// Interest tags (comma-separated, replaces the current set)
        #[arg(long, value_delimiter = ',')]
        interests: Option<Vec<String>>,
    },
    /// Delete a profile
    Delete {
        /// Profile id
        id: String,
    },
    /// Generate a directory report
    Report {
        /// Output format
        #[arg(long, default_value = "terminal", value_parser = ["terminal", "json", "html"])]
        format: String,
        /// Output file path (stdout if not specified)
        #[arg(long)]
        output: Option<String>,
    },
}

/// Trim comma-separated interest tags and drop empties, matching how the
/// admin form treated its interests field.
pub fn tidy_interests(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
