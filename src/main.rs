use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vxi::bible::BibleStore;
use vxi::index::SharedIndex;
use vxi::index::build::build_index_from_dir;
use vxi::index::stats::show_stats;
use vxi::output;
use vxi::query::{SearchEngine, parse_reference, parse_search_query, resolve_reference};
use vxi::utils::{AppConfig, get_config_path};

#[derive(Parser)]
#[command(name = "vxi")]
#[command(about = "Terminal-first Bible verse search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Reference to open or keywords to search (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Search index file
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    /// Bible text: a JSON file or a directory of per-book JSON files
    #[arg(long, global = true)]
    bible: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search verses by keyword ("faith hope", "1 John: love")
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a passage by reference ("John 3:16", "Romans 8:28-30")
    Ref {
        /// Reference to look up
        #[arg(required = true)]
        reference: Vec<String>,
    },
    /// Build the search index from a directory of per-book JSON files
    Index {
        /// Directory containing one JSON file per book
        books_dir: PathBuf,

        /// Output file (defaults to the configured index path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show index statistics
    Stats,
    /// Show the effective configuration
    Config {
        /// Write the current configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring config: {:#}", e);
        AppConfig::default()
    });
    let color = config.color && !cli.no_color;

    match cli.command {
        Some(Commands::Search { query, limit, json }) => {
            let query = query.join(" ");
            let limit = limit.unwrap_or(config.default_limit);
            let store = open_store(&config.resolve_bible_path(cli.bible)?);
            let index_path = config.resolve_index_path(cli.index)?;
            run_search(index_path, &store, &query, limit, json, color)?;
        }
        Some(Commands::Ref { reference }) => {
            let store = open_store(&config.resolve_bible_path(cli.bible.clone())?);
            run_reference(&store, &reference.join(" "), color)?;
        }
        Some(Commands::Index { books_dir, output }) => {
            let output = config.resolve_index_path(output.or(cli.index.clone()))?;
            let summary = build_index_from_dir(&books_dir, &output)?;
            println!(
                "Processed {} books, {} verses",
                summary.books, summary.verses
            );
            println!("Index written to: {}", summary.output.display());
            println!("Unique words: {}", summary.tokens);
            println!("File size: {:.1} MB", summary.bytes as f64 / (1024.0 * 1024.0));
        }
        Some(Commands::Stats) => {
            show_stats(&config.resolve_index_path(cli.index.clone())?)?;
        }
        Some(Commands::Config { save }) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            if save {
                config.save()?;
                println!("Saved to {}", get_config_path()?.display());
            }
        }
        None => {
            if cli.query.is_empty() {
                anyhow::bail!("Nothing to look up. Try `vxi John 3:16` or `vxi search faith`");
            }
            let text = cli.query.join(" ");
            let store = open_store(&config.resolve_bible_path(cli.bible.clone())?);

            // A typed citation that names a real book opens the passage; anything else searches
            match resolve_reference(&text, &store) {
                Some((reference, _)) => {
                    output::print_passage(&reference, &store.resolve(&reference), color)?;
                }
                None => {
                    let index_path = config.resolve_index_path(cli.index)?;
                    run_search(index_path, &store, &text, config.default_limit, false, color)?;
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Open the Bible text, falling back to an empty store so searches still list locations
fn open_store(path: &Path) -> BibleStore {
    let loaded = if path.is_dir() {
        BibleStore::from_book_dir(path)
    } else {
        BibleStore::from_json_file(path)
    };

    loaded.unwrap_or_else(|e| {
        tracing::warn!("Bible text unavailable, verse text will be empty: {:#}", e);
        BibleStore::default()
    })
}

fn run_search(
    index_path: PathBuf,
    store: &BibleStore,
    query: &str,
    limit: usize,
    json: bool,
    color: bool,
) -> Result<()> {
    let shared = SharedIndex::new(index_path);
    let engine = SearchEngine::new(shared.get());
    let results = engine.search(query, store, limit);

    if json {
        output::print_json(&results)?;
    } else if results.is_empty() {
        eprintln!("No verses match \"{}\"", query.trim());
    } else {
        let keywords = parse_search_query(query).keywords;
        output::print_results(&results, &keywords, color)?;
    }

    Ok(())
}

fn run_reference(store: &BibleStore, text: &str, color: bool) -> Result<()> {
    let reference = parse_reference(text)
        .with_context(|| format!("\"{}\" is not a reference like \"John 3:16\"", text.trim()))?;

    let Some((resolved, _)) = resolve_reference(text, store) else {
        // Without Bible text we can still show what was understood
        println!("{}", serde_json::to_string_pretty(&reference)?);
        eprintln!("Book not found: {}", reference.book);
        return Ok(());
    };

    let verses = store.resolve(&resolved);
    if verses.is_empty() {
        eprintln!("No verses found for {}", resolved);
    } else {
        output::print_passage(&resolved, &verses, color)?;
    }

    Ok(())
}
