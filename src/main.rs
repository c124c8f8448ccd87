mod api;
mod cli;
mod config;
mod directory;
mod error;
mod filter;
mod geo;
mod report;

use clap::Parser;
use cli::{Cli, Command};

use crate::api::http::HttpProfileStore;
use crate::api::{Contact, UserDraft};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let base_url = config::api_base_url(cli.base_url);
    tracing::debug!("Using API base {base_url}");
    let store = HttpProfileStore::new(&base_url)?;

    match cli.command {
        Command::List {
            search,
            interest,
            format,
        } => {
            cli::list::list(&store, search.as_deref(), interest.as_deref(), &format).await?;
        }
        Command::Interests => cli::list::interests(&store).await?,
        Command::Show { id } => cli::show::show(&store, &id).await?,
        Command::Map { id } => cli::show::map(&store, &id).await?,
        Command::Create {
            name,
            photo,
            brief,
            email,
            phone,
            location,
            latitude,
            longitude,
            interests,
        } => {
            let draft = UserDraft {
                name,
                photo: photo.unwrap_or_default(),
                brief: brief.unwrap_or_default(),
                contact: Contact {
                    email: email.unwrap_or_default(),
                    phone: phone.unwrap_or_default(),
                    location: location.unwrap_or_default(),
                    latitude,
                    longitude,
                },
                interests: cli::tidy_interests(interests),
            };
            cli::create::create(&store, &draft).await?;
        }
        Command::Update {
            id,
            name,
            photo,
            brief,
            email,
            phone,
            location,
            latitude,
            longitude,
            interests,
        } => {
            let overrides = cli::update::FieldOverrides {
                name,
                photo,
                brief,
                email,
                phone,
                location,
                latitude,
                longitude,
                interests,
            };
            cli::update::update(&store, &id, overrides).await?;
        }
        Command::Delete { id } => cli::delete::delete(&store, &id).await?,
        Command::Report { format, output } => {
            cli::report::generate_report(&store, &format, output.as_deref()).await?;
        }
    }

    Ok(())
}
