use clap::Parser;
use gamers_era::ui::{launch_gui, LaunchOptions};
use gamers_era::{prefetch_first_pages, Hydration, RawgClient, RawgConfig, TriggerMode};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Browse games, developers and tags from the RAWG database
#[derive(Parser, Debug)]
#[command(name = "gamers_era")]
#[command(version, about, long_about = None)]
struct Args {
    /// RAWG API key (falls back to RAWG_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL of the RAWG API (falls back to RAWG_BASE_URL, then https://api.rawg.io/api)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Fetch the first page of every listing before opening the window
    #[arg(long, default_value_t = false)]
    prefetch: bool,

    /// Only load more when the end of a list scrolls into view, not while it stays visible
    #[arg(long, default_value_t = false)]
    edge_trigger: bool,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=gamers_era=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Gamers Era");

    let args = Args::parse();

    let client = match RawgConfig::from_env_or(args.api_key, args.base_url)
        .map(|config| config.timeout(Duration::from_secs(args.timeout_secs)))
        .and_then(RawgClient::new)
    {
        Ok(client) => client,
        Err(e) => {
            log::error!("Configuration error: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to create Tokio runtime: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let hydration = if args.prefetch {
        log::info!("Prefetching first pages");
        runtime.block_on(prefetch_first_pages(&client))
    } else {
        Hydration::default()
    };

    let trigger_mode = if args.edge_trigger {
        TriggerMode::Edge
    } else {
        TriggerMode::Level
    };

    let options = LaunchOptions {
        client,
        runtime: runtime.handle().clone(),
        hydration,
        trigger_mode,
    };

    if let Err(e) = launch_gui(options) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
