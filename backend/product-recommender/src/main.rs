use anyhow::{Context, Result};
use clap::Parser;
use product_recommender::config::LogFormat;
use product_recommender::models::{RecommendRequest, RecommendResponse};
use product_recommender::Config;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank recommended products for a JSON request and print their ids
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Request file; reads stdin when omitted
    #[arg(value_name = "REQUEST_FILE")]
    request_file: Option<PathBuf>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("product_recommender=info,info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn read_request(path: Option<&Path>) -> Result<RecommendRequest> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("Invalid recommendation request JSON")
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let request = read_request(args.request_file.as_deref())?;
    let (target, pool, feedback) = request.into_parts();

    let ranker = config.ranking.build_ranker();
    let recommended_ids = ranker.rank(&target, &pool, &feedback);

    info!(
        candidate_count = pool.len(),
        recommended = recommended_ids.len(),
        "Recommendation request served"
    );

    let response = serde_json::to_string(&RecommendResponse { recommended_ids })
        .context("Failed to encode response")?;
    println!("{response}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.service.log_format);

    info!(
        service = %config.service.service_name,
        min_score_threshold = config.ranking.min_score_threshold,
        max_results = config.ranking.max_results,
        liked_bonus = config.ranking.liked_bonus,
        "Starting product recommender"
    );

    run(&args, &config).map_err(|e| {
        error!("Recommendation failed: {:#}", e);
        e
    })
}
