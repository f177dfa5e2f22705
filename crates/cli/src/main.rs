use anyhow::{Context, Result, anyhow};
use candidate_store::{CandidateStore, Dimension};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{SortMode, ViewMode};
use session::{Debouncer, DiscoverSession, DiscoverSettings, FileKvStore, KvStore, SavedSearch};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

/// talent-discover - Candidate discovery from the command line
#[derive(Parser)]
#[command(name = "talent-discover")]
#[command(about = "Search, filter and export a candidate pool", long_about = None)]
struct Cli {
    /// Path to the candidate snapshot (JSON array)
    #[arg(short, long, default_value = "data/candidates.json")]
    data: PathBuf,

    /// Directory holding the persisted search state
    #[arg(long, default_value = ".talent-discover")]
    state_dir: PathBuf,

    /// Candidates shown per page
    #[arg(long, default_value = "12")]
    page_size: usize,

    /// Quiet period before typed text is applied (interactive mode)
    #[arg(long, default_value = "250")]
    debounce_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current result page
    List {
        /// Number of pages to show
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// Set the free-text query (omit to clear it)
    Query { text: Option<String> },

    /// Toggle one filter value, e.g. `filter skills React`
    Filter { dimension: Dimension, value: String },

    /// Clear every filter
    Clear,

    /// Set the sort order (recent, name, experience)
    Sort { mode: SortMode },

    /// Set the result layout (grid, list)
    View { mode: ViewMode },

    /// Toggle the bookmark on a candidate (kept for this run only)
    Bookmark { id: String },

    /// List the selectable values of a dimension
    Facets { dimension: Dimension },

    /// Manage saved searches
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },

    /// Write the full result list as CSV
    Export {
        /// Output path (defaults to candidates-<date>.csv)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Live search: each stdin line is the search box contents,
    /// `:help` lists commands
    Interactive,
}

#[derive(Subcommand)]
enum SavedAction {
    /// Snapshot the current search under a name
    Save { name: String },
    /// List saved searches, newest first
    List,
    /// Restore a saved search by id or name
    Apply { search: String },
    /// Delete a saved search by id or name
    Delete { search: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = CandidateStore::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load candidates from {}", cli.data.display()))?;
    tracing::debug!("Loaded {} candidates in {:?}", store.len(), start.elapsed());

    let settings = DiscoverSettings {
        page_size: cli.page_size,
        debounce: Duration::from_millis(cli.debounce_ms),
        ..Default::default()
    };
    let kv = FileKvStore::new(&cli.state_dir);
    let mut session = DiscoverSession::new(store, kv, settings);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { pages } => {
            for _ in 1..pages {
                session.load_more();
            }
            print_frame(&session);
        }
        Commands::Query { text } => {
            session.set_free_text(text.unwrap_or_default());
            print_frame(&session);
        }
        Commands::Filter { dimension, value } => {
            let selected = session.toggle_filter_value(dimension, value.as_str());
            let verb = if selected { "Added" } else { "Removed" };
            println!("{} {} filter {:?}", verb.green(), dimension, value);
            print_frame(&session);
        }
        Commands::Clear => {
            session.clear_all_filters();
            print_frame(&session);
        }
        Commands::Sort { mode } => {
            session.set_sort_mode(mode);
            print_frame(&session);
        }
        Commands::View { mode } => {
            session.set_view_mode(mode);
            print_frame(&session);
        }
        Commands::Bookmark { id } => match session.toggle_bookmark(&id) {
            Some(state) => {
                let verb = if state { "Bookmarked" } else { "Unbookmarked" };
                println!("{} {}", verb.green(), id);
                print_frame(&session);
            }
            None => return Err(anyhow!("No candidate with id {:?}", id)),
        },
        Commands::Facets { dimension } => handle_facets(&session, dimension),
        Commands::Saved { action } => handle_saved(&mut session, action)?,
        Commands::Export { out } => handle_export(&session, out)?,
        Commands::Interactive => handle_interactive(&mut session).await?,
    }

    Ok(())
}

/// Resolve a saved search given either its id or its name
fn resolve_saved<S: KvStore>(session: &DiscoverSession<S>, search: &str) -> Result<Uuid> {
    if let Ok(id) = search.parse::<Uuid>() {
        return Ok(id);
    }
    session
        .find_saved_search(search)
        .map(|s| s.id)
        .ok_or_else(|| anyhow!("No saved search named {:?}", search))
}

/// Handle the 'saved' command
fn handle_saved<S: KvStore>(session: &mut DiscoverSession<S>, action: SavedAction) -> Result<()> {
    match action {
        SavedAction::Save { name } => match session.save_search(&name) {
            Some(saved) => println!("{} {} ({})", "Saved".green(), saved.name.bold(), saved.id),
            None => println!("{}", "A saved search needs a non-blank name".yellow()),
        },
        SavedAction::List => print_saved(session.saved_searches()),
        SavedAction::Apply { search } => {
            let id = resolve_saved(session, &search)?;
            if session.apply_saved_search(id) {
                println!("{} {}", "Applied".green(), search);
                print_frame(session);
            } else {
                println!("{} {}", "Not found:".yellow(), search);
            }
        }
        SavedAction::Delete { search } => {
            let id = resolve_saved(session, &search)?;
            if session.delete_saved_search(id) {
                println!("{} {}", "Deleted".green(), search);
            } else {
                println!("{} {}", "Not found:".yellow(), search);
            }
        }
    }
    Ok(())
}

/// Handle the 'facets' command
fn handle_facets<S: KvStore>(session: &DiscoverSession<S>, dimension: Dimension) {
    let selected = session.config().filters.values(dimension);
    println!("{}", format!("Values for {}:", dimension).bold().blue());
    for facet in session.facets(dimension) {
        let marker = if selected.contains(&facet.value) { "●".green() } else { "○".normal() };
        println!("  {} {} ({})", marker, facet.value, facet.count);
    }
}

/// Handle the 'export' command
fn handle_export<S: KvStore>(session: &DiscoverSession<S>, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| {
        PathBuf::from(pipeline::export_filename(chrono::Local::now().date_naive()))
    });
    let bytes = session.export_csv();
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} {} candidates to {}",
        "Exported".green(),
        session.results().len(),
        path.display()
    );
    Ok(())
}

/// Handle the 'interactive' command
///
/// Plain lines go through the debouncer as search-box contents; lines
/// starting with ':' are applied immediately as commands.
async fn handle_interactive<S: KvStore>(session: &mut DiscoverSession<S>) -> Result<()> {
    let (mut debouncer, mut commits) = Debouncer::new(session.settings().debounce);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "Type to search, :help for commands, :quit to exit".bold());
    print_frame(session);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    debouncer.flush();
                    break;
                };
                match line.strip_prefix(':') {
                    Some(command) => {
                        debouncer.flush();
                        while let Ok(text) = commits.try_recv() {
                            session.set_free_text(text);
                        }
                        if !run_interactive_command(session, command.trim()) {
                            break;
                        }
                    }
                    None => debouncer.push(line),
                }
            }
            Some(text) = commits.recv() => {
                session.set_free_text(text);
                print_frame(session);
            }
        }
    }

    while let Ok(text) = commits.try_recv() {
        session.set_free_text(text);
    }
    debouncer.cancel();
    Ok(())
}

/// Apply one ':' command. Returns false when the user asked to quit.
fn run_interactive_command<S: KvStore>(session: &mut DiscoverSession<S>, command: &str) -> bool {
    let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
    let rest = rest.trim();

    match name {
        "quit" | "q" => return false,
        "more" => {
            session.load_more();
        }
        "clear" => session.clear_all_filters(),
        "filter" => match rest.split_once(' ') {
            Some((dimension, value)) => match dimension.parse::<Dimension>() {
                Ok(dimension) => {
                    session.toggle_filter_value(dimension, value.trim());
                }
                Err(err) => println!("{}", err.to_string().yellow()),
            },
            None => println!("{}", "usage: :filter <dimension> <value>".yellow()),
        },
        "sort" => match rest.parse::<SortMode>() {
            Ok(mode) => session.set_sort_mode(mode),
            Err(err) => println!("{}", err.yellow()),
        },
        "view" => match rest.parse::<ViewMode>() {
            Ok(mode) => session.set_view_mode(mode),
            Err(err) => println!("{}", err.yellow()),
        },
        "bookmark" => match session.toggle_bookmark(rest) {
            Some(state) => println!("{} {}", if state { "Bookmarked" } else { "Unbookmarked" }, rest),
            None => println!("{} {}", "No candidate".yellow(), rest),
        },
        "save" => match session.save_search(rest) {
            Some(saved) => println!("{} {}", "Saved".green(), saved.name),
            None => println!("{}", "A saved search needs a non-blank name".yellow()),
        },
        "saved" => {
            print_saved(session.saved_searches());
            return true;
        }
        "apply" | "delete" => match resolve_saved(session, rest) {
            Ok(id) => {
                let done = if name == "apply" {
                    session.apply_saved_search(id)
                } else {
                    session.delete_saved_search(id)
                };
                if !done {
                    println!("{} {}", "Not found:".yellow(), rest);
                }
            }
            Err(err) => println!("{}", err.to_string().yellow()),
        },
        "help" => {
            println!(
                ":more  :clear  :filter <dim> <value>  :sort <mode>  :view <mode>\n\
                 :bookmark <id>  :save <name>  :saved  :apply <id|name>  :delete <id|name>  :quit"
            );
            return true;
        }
        other => {
            println!("{} {}", "Unknown command:".yellow(), other);
            return true;
        }
    }
    print_frame(session);
    true
}

/// Helper function to print saved searches
fn print_saved(searches: &[SavedSearch]) {
    println!("{}", "Saved searches:".bold().blue());
    if searches.is_empty() {
        println!("  (none)");
    }
    for saved in searches {
        println!(
            "  {} {} - {} filter(s), sort {}, created {}",
            saved.id.to_string().dimmed(),
            saved.name.bold(),
            saved.config.filters.active_count(),
            saved.config.sort_mode,
            saved.created_at.format("%Y-%m-%d %H:%M")
        );
    }
}

/// Helper function to format and print the current page
fn print_frame<S: KvStore>(session: &DiscoverSession<S>) {
    let frame = session.frame();

    // Header with the active query state
    let query = if frame.config.query.is_empty() {
        "(any)".to_string()
    } else {
        format!("{:?}", frame.config.query)
    };
    println!(
        "{} query {} | {} filter(s) | sort {} | view {}",
        "Discover:".bold().blue(),
        query,
        frame.active_filter_count,
        frame.config.sort_mode,
        frame.config.view_mode
    );
    for dimension in frame.config.filters.active_dimensions() {
        let values: Vec<&str> = frame
            .config
            .filters
            .values(dimension)
            .iter()
            .map(String::as_str)
            .collect();
        println!("  {} {}", format!("{}:", dimension).cyan(), values.join(", "));
    }

    for (rank, candidate) in frame.visible.iter().enumerate() {
        let star = if candidate.bookmarked { "★".yellow() } else { " ".normal() };
        match frame.config.view_mode {
            ViewMode::List => println!(
                "{}{:>3}. {} - {} [{}]",
                star,
                (rank + 1).to_string().green(),
                candidate.name.bold(),
                candidate.title,
                candidate.id.dimmed()
            ),
            ViewMode::Grid => {
                println!(
                    "{}{:>3}. {} [{}]",
                    star,
                    (rank + 1).to_string().green(),
                    candidate.name.bold(),
                    candidate.id.dimmed()
                );
                println!("       {} | {} | {}", candidate.title, candidate.location, candidate.experience_band);
                println!("       Skills: {}", candidate.skills.join(", "));
            }
        }
    }

    println!(
        "Showing {} of {} candidates{}",
        frame.visible.len(),
        frame.total_results,
        if frame.has_more { " (more available)" } else { "" }
    );
}
