//! fusedex - command-line front end
//!
//! Fetches three creatures, fuses them, and manages saved favorites.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fusedex::favorites::FavoriteId;
use fusedex::provider::CreatureProvider;
use fusedex::{lookup_color, FusedRecord, FusionConfig, FusionEngine};

/// Command-line arguments for fusedex
#[derive(Parser, Debug)]
#[command(name = "fusedex")]
#[command(about = "Fuse three creatures into one and keep your favorites")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "FUSEDEX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch three creatures and fuse them
    Fuse {
        /// Use these creature ids instead of random ones
        #[arg(long, num_args = 3, value_names = ["A", "B", "C"])]
        ids: Option<Vec<u32>>,

        /// Save the result to favorites
        #[arg(long)]
        save: bool,

        /// Print the fused record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage saved fusions
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Print the color token for a category
    Color {
        /// Category name, e.g. "fire"
        category: String,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    /// List saved fusions, newest first
    List {
        /// Page to show (pages are cumulative)
        #[arg(long, default_value_t = 0)]
        page: usize,
    },

    /// Remove one or more saved fusions
    Remove {
        /// Favorite ids
        #[arg(required = true)]
        ids: Vec<FavoriteId>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fusedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = FusionConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    match args.command {
        Command::Fuse { ids, save, json } => run_fuse(&config, ids, save, json).await,
        Command::Favorites { action } => run_favorites(&config, action).await,
        Command::Color { category } => {
            println!("{}", lookup_color(&category));
            Ok(())
        }
    }
}

async fn run_fuse(config: &FusionConfig, ids: Option<Vec<u32>>, save: bool, json: bool) -> Result<()> {
    let provider = config.provider().context("Failed to build creature provider")?;

    let [a, b, c] = match ids.as_deref() {
        Some(&[a, b, c]) => provider.fetch_three([a, b, c]).await,
        _ => provider.fetch_three_random().await,
    }
    .context("Failed to fetch creatures")?;

    let fused = FusionEngine::new().fuse(a, b, c)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&fused)?);
    } else {
        print_fused(&fused);
    }

    if save {
        let id = config.favorites()?.add(&fused).await.context("Failed to save favorite")?;
        println!("saved as {id}");
    }
    Ok(())
}

async fn run_favorites(config: &FusionConfig, action: FavoritesAction) -> Result<()> {
    let store = config.favorites()?;

    match action {
        FavoritesAction::List { page } => {
            let window = store.page(page, config.page_size).await?;
            if window.items.is_empty() {
                println!("no favorites yet");
            }
            for favorite in &window.items {
                let record = favorite.record();
                println!(
                    "{}  {:<20} {:<16} {}",
                    favorite.id(),
                    record.name(),
                    join(record.types().iter().map(ToString::to_string)),
                    record.created_at().format("%Y-%m-%d %H:%M:%S")
                );
            }
            if window.has_more {
                println!(
                    "showing {} of {}, next: --page {}",
                    window.items.len(),
                    window.total,
                    page + 1
                );
            }
        }
        FavoritesAction::Remove { ids } => {
            let removed = store.remove_many(&ids).await?;
            println!(
                "removed {removed} {}",
                if removed == 1 { "fusion" } else { "fusions" }
            );
        }
    }
    Ok(())
}

fn print_fused(fused: &FusedRecord) {
    let sources = fused.source_records();
    println!(
        "{}  (from {})",
        fused.name(),
        join(sources.iter().map(|s| format!("{} #{}", s.name(), s.id())))
    );
    println!(
        "  types: {}",
        join(fused.types().iter().map(|t| format!("{t} [{}]", t.color())))
    );
    for stat in fused.stats() {
        println!("  {:<16} {:>4}", stat.name, stat.value);
    }
    for mv in fused.moves() {
        println!("  move: {} ({})", mv.name, mv.category);
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
