use artrec_api::RestApi;
use artrec_core::{RecommendConfig, Recommender};
use artrec_storage::StorageManager;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Artwork recommendation engine
#[derive(Parser, Debug)]
#[command(name = "artrec")]
#[command(about = "Artwork recommendation scoring engine", long_about = None)]
struct Args {
    /// Path to the data directory
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Embedding dimension for a fresh data directory
    #[arg(long, default_value_t = 1536)]
    vector_dim: usize,

    /// Path to a JSON recommender configuration (candidate ids, excluded
    /// museum, level policy, discovery limit)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_recommend_config(path: Option<&PathBuf>) -> anyhow::Result<RecommendConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(RecommendConfig::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting artrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);
    info!("HTTP API port: {}", args.http_port);

    let storage = Arc::new(StorageManager::new(&args.data_dir, args.vector_dim)?);
    info!(
        "Storage initialized: {} artworks, dim {}",
        storage.catalog().count(),
        storage.catalog().vector_dim()
    );

    let config = load_recommend_config(args.config.as_ref())?;
    info!(
        "Recommender configured: {} curated candidates, discovery limit {}",
        config.candidate_ids.len(),
        config.discovery_limit
    );
    let recommender = Arc::new(Recommender::new(config));

    let storage_http = storage.clone();
    let recommender_http = recommender.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(storage_http, recommender_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("artrec started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Saving snapshot before shutdown...");
    if let Err(e) = storage.save() {
        eprintln!("Final snapshot save failed: {}", e);
    }

    info!("Shutting down...");
    Ok(())
}
