use std::collections::BTreeMap;

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::filters::{DefaultNoiseClassifier, NoNoise, NoiseClassifier};
use crate::models::{OutputFormat, SearchOptions, SourceType};
use crate::output::{FormatOptions, format_results, parse_time_zone};
use crate::search::search;
use crate::store::{HistoryStore, JsonHistoryStore};
use crate::utils::{Config, format_path_with_tilde, get_worklog_dir};

#[derive(Parser)]
#[command(name = "worklog")]
#[command(version = "0.1.0")]
#[command(about = "Search your local history of commits, PRs, and editor and AI sessions", long_about = None)]
pub struct Cli {
    /// Log search diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recorded work by text, regex, or fuzzy match
    Search(SearchArgs),
    /// Show statistics about the history
    Stats,
    /// List the known sources
    Sources,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Text to search for in titles and descriptions
    pub query: String,

    /// Treat the query as a case-insensitive regular expression
    #[arg(long)]
    pub regex: bool,

    /// Also match words within a small edit distance of the query
    #[arg(long)]
    pub fuzzy: bool,

    /// Only include items from this source (repeatable)
    #[arg(short, long = "source", value_enum)]
    pub sources: Vec<SourceType>,

    /// Only include items whose project contains this text (repeatable)
    #[arg(short, long = "project")]
    pub projects: Vec<String>,

    /// Only include items on or after this day (YYYY-MM-DD, UTC)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Only include items on or before this day (YYYY-MM-DD, UTC)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Only include items from the last N days (ignored with --since)
    #[arg(long)]
    pub days: Option<u32>,

    /// Maximum number of results (0 or less for all)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Time zone for displayed times: an IANA name like Europe/Paris, or an offset like +09:00
    /// (default: local time)
    #[arg(long)]
    pub tz: Option<String>,

    /// Keep merge commits, build artifacts, and other noise
    #[arg(long)]
    pub include_noise: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Search(args)) => {
            run_search(args)?;
        }
        Some(Commands::Stats) => {
            show_stats()?;
        }
        Some(Commands::Sources) => {
            show_sources();
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("worklog=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// Map CLI arguments (with config defaults) onto search options
pub fn build_search_options(
    args: &SearchArgs,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<SearchOptions> {
    if args.query.trim().is_empty() {
        bail!("Search query cannot be empty");
    }

    let start_date = match (args.since, args.days) {
        (Some(since), _) => Some(start_of_day(since)),
        (None, Some(days)) => Some(now - Duration::days(i64::from(days))),
        (None, None) => None,
    };
    let end_date = args.until.map(end_of_day);

    if let (Some(start), Some(end)) = (start_date, end_date)
        && start > end
    {
        bail!("--since must not be after --until");
    }

    Ok(SearchOptions {
        query: args.query.clone(),
        regex: args.regex,
        fuzzy: args.fuzzy,
        sources: args.sources.clone(),
        projects: args.projects.clone(),
        start_date,
        end_date,
        limit: args.limit.or(config.default_limit),
    })
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

fn load_config() -> Result<(std::path::PathBuf, Config)> {
    let worklog_dir = get_worklog_dir()?;
    let config = Config::load(&worklog_dir)?;
    Ok((worklog_dir, config))
}

fn run_search(args: &SearchArgs) -> Result<()> {
    let (worklog_dir, config) = load_config()?;
    let options = build_search_options(args, &config, Utc::now())?;

    let time_zone = match &args.tz {
        Some(tz) => Some(parse_time_zone(tz)?),
        None => config.time_zone()?,
    };
    let format = args.format.or(config.default_format).unwrap_or_default();

    let store = JsonHistoryStore::new(config.history_dir(&worklog_dir));
    let noise: &dyn NoiseClassifier =
        if args.include_noise { &NoNoise } else { &DefaultNoiseClassifier };
    let results = search(&store, noise, &options)?;

    println!("{}", format_results(&results.to_vec(), format, &FormatOptions { time_zone }));

    Ok(())
}

fn show_stats() -> Result<()> {
    let (worklog_dir, config) = load_config()?;
    let history_dir = config.history_dir(&worklog_dir);
    let entries = JsonHistoryStore::new(&history_dir).load_history()?;

    let mut per_source: BTreeMap<SourceType, usize> = BTreeMap::new();
    let mut total_items = 0;
    let mut oldest: Option<DateTime<Utc>> = None;
    let mut newest: Option<DateTime<Utc>> = None;

    for item in entries.iter().flat_map(|entry| entry.items()) {
        total_items += 1;
        *per_source.entry(item.source).or_default() += 1;
        oldest = Some(oldest.map_or(item.timestamp, |t| t.min(item.timestamp)));
        newest = Some(newest.map_or(item.timestamp, |t| t.max(item.timestamp)));
    }

    println!("Work History Statistics");
    println!("=======================");
    println!("Total entries: {}", entries.len());
    println!("Total items: {}", total_items);
    for (source, count) in &per_source {
        println!("  {} {}: {}", source.emoji(), source.display_name(), count);
    }
    println!();
    println!("History directory: {}", format_path_with_tilde(&history_dir));

    if let Some(oldest) = oldest {
        println!("Oldest item: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = newest {
        println!("Newest item: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn show_sources() {
    for source in SourceType::ALL {
        println!("{} {:<12} {}", source.emoji(), source.as_str(), source.display_name());
    }
}
