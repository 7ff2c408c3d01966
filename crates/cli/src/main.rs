// ABOUTME: CLI for scraping one hotel search-results page into a CSV table.
// ABOUTME: Builds or takes a results URL (or reads saved HTML), extracts listings and writes CSV.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use staylist_listings::{
    build_search_url, extract, write_csv, Fetcher, Record, SearchParams, SortOrder,
    DEFAULT_USER_AGENT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scrape a hotel search-results page and export the listings as CSV.
#[derive(Parser, Debug)]
#[command(name = "staylist")]
#[command(about = "Scrape hotel search results into a CSV table", long_about = None)]
struct Args {
    /// Results page URL to fetch.
    #[arg(long, conflicts_with_all = ["html", "destination"])]
    url: Option<String>,

    /// Saved results page to parse instead of fetching.
    #[arg(long, conflicts_with = "destination")]
    html: Option<PathBuf>,

    /// Destination to search for (builds the URL from the search options).
    #[arg(long)]
    destination: Option<String>,

    /// Check-in date (YYYY-MM-DD).
    #[arg(long, requires = "destination")]
    checkin: Option<String>,

    /// Check-out date (YYYY-MM-DD).
    #[arg(long, requires = "destination")]
    checkout: Option<String>,

    /// Number of adults.
    #[arg(long, default_value_t = 2)]
    adults: u32,

    /// Number of rooms.
    #[arg(long, default_value_t = 1)]
    rooms: u32,

    /// Sort order: popularity, price or bayesian_review_score.
    #[arg(long, default_value = "popularity")]
    sort: String,

    /// Print the built search URL and exit without fetching.
    #[arg(long, default_value_t = false)]
    print_url: bool,

    /// Output CSV path. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "results.csv")]
    output: PathBuf,

    /// Request timeout in seconds.
    #[arg(long, env = "STAYLIST_TIMEOUT", default_value_t = 20)]
    timeout: u64,

    /// User-Agent header sent with the request.
    #[arg(long, env = "STAYLIST_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log progress to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Where the page comes from.
enum Source {
    Url(String),
    File(PathBuf),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve_source(args: &Args) -> Result<Source> {
    if let Some(path) = &args.html {
        return Ok(Source::File(path.clone()));
    }
    if let Some(url) = &args.url {
        return Ok(Source::Url(url.clone()));
    }
    let Some(destination) = &args.destination else {
        bail!("one of --url, --html or --destination is required");
    };
    let (Some(checkin), Some(checkout)) = (&args.checkin, &args.checkout) else {
        bail!("--checkin and --checkout are required with --destination");
    };

    let params = SearchParams {
        adults: args.adults,
        rooms: args.rooms,
        sort: args.sort.parse::<SortOrder>()?,
        ..SearchParams::new(destination.as_str(), checkin.as_str(), checkout.as_str())
    };
    let url = build_search_url(&params)?;
    Ok(Source::Url(url.into()))
}

fn write_output(path: &Path, records: &[Record]) -> Result<()> {
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        write_csv(stdout.lock(), records)?;
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn run(args: Args) -> Result<ExitCode> {
    let source = resolve_source(&args)?;

    if args.print_url {
        match &source {
            Source::Url(url) => println!("{url}"),
            Source::File(_) => bail!("--print-url needs --url or --destination"),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let html = match source {
        Source::File(path) => fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        Source::Url(url) => {
            let fetcher = Fetcher::builder()
                .timeout(Duration::from_secs(args.timeout))
                .user_agent(args.user_agent.clone())
                .build()?;
            match fetcher.fetch(&url) {
                Ok(html) => html,
                Err(err) => {
                    eprintln!("connection failed: {err}");
                    return Ok(ExitCode::from(1));
                }
            }
        }
    };

    let records = extract(&html);
    write_output(&args.output, &records)?;
    info!(
        records = records.len(),
        output = %args.output.display(),
        "wrote CSV"
    );
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
