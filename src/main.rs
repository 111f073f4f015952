//! TimeMachine CLI
//!
//! Launches the terminal or native search view, or runs a single search from
//! the command line.

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::{Duration, Instant};
use timemachine::{overview, AppConfig, SearchResult, TriggerOutcome, CATALOG};

/// TimeMachine - keyword search with a simulated network round trip
#[derive(Parser)]
#[command(name = "timemachine")]
#[command(author = "TimeMachine Contributors")]
#[command(version)]
#[command(about = "Keyword search over a small fixed catalog", long_about = None)]
struct Cli {
    /// Simulated search delay in milliseconds
    #[arg(long, global = true, default_value = "1000")]
    delay_ms: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal view (default)
    Tui {
        /// Show result links in the status bar instead of opening a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Native window view
    Gui {
        /// Show result links in the status bar instead of opening a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Run one search and print the overview and results
    Search {
        /// Search query (use -- before the query if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the whole catalog and the overview keywords
    List,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    query: String,
    overview: String,
    results: Vec<SearchResult>,
    elapsed_ms: u128,
    #[serde(skip)]
    elapsed: Duration,
}

fn main() {
    // Initialize logging
    timemachine::logging::init();
    timemachine::logging::info("MAIN", "TimeMachine starting up");

    let cli = Cli::parse();
    let result = run(cli);
    timemachine::logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> timemachine::Result<()> {
    let mut config = AppConfig {
        search_delay: Duration::from_millis(cli.delay_ms),
        ..Default::default()
    };
    config.validate()?;

    match cli.command.unwrap_or(Commands::Tui { no_browser: false }) {
        Commands::Tui { no_browser } => {
            config.open_links_in_browser = !no_browser;
            timemachine::tui::run(config)
        }
        Commands::Gui { no_browser } => {
            config.open_links_in_browser = !no_browser;
            timemachine::gui::run(config)
        }
        Commands::Search { query, output } => cmd_search(&config, &query, output),
        Commands::List => cmd_list(),
    }
}

/// Search command implementation
fn cmd_search(config: &AppConfig, query: &str, output: OutputFormat) -> timemachine::Result<()> {
    // Blank queries are dropped without a word, same as in the views
    let Some(report) = search_report(config, query, output == OutputFormat::Text) else {
        return Ok(());
    };

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Found {} results in {}",
        style(report.results.len()).green(),
        style(HumanDuration(report.elapsed)).cyan()
    );

    if report.results.is_empty() {
        return Ok(());
    }

    println!();
    println!("{}", style("Overview").magenta().bold());
    println!("  {}", report.overview);
    println!();

    for (i, result) in report.results.iter().enumerate() {
        print_result(i, result);
    }

    Ok(())
}

/// Run one search to completion. `None` when the query is blank and nothing ran.
fn search_report(config: &AppConfig, query: &str, show_spinner: bool) -> Option<SearchReport> {
    let mut session = config.session();
    session.set_query(query);

    let start = Instant::now();
    if session.trigger() == TriggerOutcome::Ignored {
        return None;
    }

    let pb = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.magenta} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Searching... Please wait");
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    });

    while session.state.loading {
        session.wait_for_completion(Duration::from_millis(100));
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let elapsed = start.elapsed();
    let state = session.state;
    Some(SearchReport {
        query: state.query,
        overview: state.overview,
        results: state.results,
        elapsed_ms: elapsed.as_millis(),
        elapsed,
    })
}

fn print_result(index: usize, result: &SearchResult) {
    println!(
        "  {} {}",
        style(format!("{:2}.", index + 1)).dim(),
        style(result.title).magenta().bold()
    );
    println!("      {}", style(result.link).cyan().underlined());
    println!("      {}", result.snippet);
    if let Some(image) = result.image {
        println!("      {} {}", style("Image:").dim(), style(image).dim());
    }
    println!();
}

/// List command implementation
fn cmd_list() -> timemachine::Result<()> {
    println!("{} {} results in catalog", style("→").cyan().bold(), CATALOG.len());
    println!();
    for (i, result) in CATALOG.iter().enumerate() {
        print_result(i, result);
    }

    let keywords: Vec<String> = overview::keywords()
        .map(|k| style(format!("'{}'", k)).yellow().to_string())
        .collect();
    println!("{} {}", style("Overview keywords:").bold(), keywords.join(", "));

    Ok(())
}
