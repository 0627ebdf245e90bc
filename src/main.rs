use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use library_catalog::{
    export_rankings_csv, get_most_common_genres, get_most_popular_authors, get_most_popular_books,
    sort_accounts_by_last_name, AccountReport, Catalog, CatalogReport, RankedEntry,
};

#[derive(Parser)]
#[command(name = "library-catalog", version, about = "Library catalog reports")]
struct Cli {
    /// Directory holding accounts.json, books.json and authors.json
    #[arg(long, env = "LIBRARY_CATALOG_DATA", default_value = "data")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Totals and top-five rankings
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Borrow count and current possessions of one account
    Account {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// All accounts ordered by last name
    Accounts,
    /// Write one ranking as CSV
    Export {
        #[arg(value_enum)]
        ranking: Ranking,
        /// Output file (stdout if omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Ranking {
    Genres,
    Books,
    Authors,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let catalog = Catalog::load_from_dir(&cli.data)
        .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?;

    match cli.command {
        Commands::Summary { json } => run_summary(&catalog, json),
        Commands::Account { id, json } => run_account(&catalog, &id, json),
        Commands::Accounts => run_accounts(&catalog),
        Commands::Export { ranking, out } => run_export(&catalog, ranking, out.as_deref()),
    }
}

/// Logs go to stderr; `LIBRARY_CATALOG_LOG` sets the filter (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LIBRARY_CATALOG_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_summary(catalog: &Catalog, json: bool) -> Result<()> {
    let report = CatalogReport::build(catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("📚 {}", report.summary());
    print_ranking("Most common genres", &report.most_common_genres);
    print_ranking("Most popular books", &report.most_popular_books);
    print_ranking("Most popular authors", &report.most_popular_authors);

    Ok(())
}

fn run_account(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let Some(report) = AccountReport::build(catalog, id) else {
        bail!("Account not found: {}", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("👤 {}", report.summary());
    for book in &report.possessed_books {
        let author = book
            .author
            .as_ref()
            .map(|a| a.display_name())
            .unwrap_or_else(|| "unknown author".to_string());
        println!("   • {} ({}) by {}", book.title, book.genre, author);
    }

    Ok(())
}

fn run_accounts(catalog: &Catalog) -> Result<()> {
    for account in sort_accounts_by_last_name(&catalog.accounts) {
        println!("{}, {}  [{}]", account.name.last, account.name.first, account.id);
    }
    Ok(())
}

fn run_export(catalog: &Catalog, ranking: Ranking, out: Option<&Path>) -> Result<()> {
    let entries = match ranking {
        Ranking::Genres => get_most_common_genres(&catalog.books),
        Ranking::Books => get_most_popular_books(&catalog.books),
        Ranking::Authors => get_most_popular_authors(&catalog.books, &catalog.authors),
    };

    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            export_rankings_csv(file, &entries)?;
            eprintln!("✓ Wrote {} rows to {}", entries.len(), path.display());
        }
        None => export_rankings_csv(io::stdout().lock(), &entries)?,
    }

    Ok(())
}

fn print_ranking(title: &str, entries: &[RankedEntry]) {
    println!("\n{}:", title);
    for (i, entry) in entries.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, entry.name, entry.count);
    }
}
