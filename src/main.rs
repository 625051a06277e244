use std::path::Path;

use analytics::classify::LexiconScorer;
use report::ReportAssembler;
use social_client::SocialClient;
use socialscope_core::{AppConfig, CoreError, ErrorExt, SocialNetwork};

const CONFIG_ENV: &str = "SOCIALSCOPE_CONFIG";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "socialscope=info,analytics=info,social_client=info".into()),
        )
        .init();

    if let Err(error) = run().await {
        error.log_error();
        eprintln!("{}", error.user_friendly_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CoreError> {
    let mut args = std::env::args().skip(1);
    let (network_arg, keyword) = match (args.next(), args.next()) {
        (Some(network), Some(keyword)) => (network, keyword),
        _ => {
            eprintln!("usage: socialscope <twitter|reddit|instagram|facebook> <keyword>");
            std::process::exit(2);
        }
    };
    let network: SocialNetwork = network_arg.parse().map_err(CoreError::Config)?;

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => AppConfig::load(Path::new(&path)).map_err(CoreError::Config)?,
        Err(_) => AppConfig::from_env(),
    };

    // Credential problems surface before any fetch is attempted.
    config.validate_credentials(network)?;

    tracing::info!("Fetching posts from {} for '{}'", network, keyword);
    let client = SocialClient::new();
    let posts = client
        .fetch_posts(network, &keyword, &config.credentials, config.max_results)
        .await?;

    let scorer = LexiconScorer::new();
    let run = analytics::pipeline::run(network, &keyword, &posts, &scorer)?;

    let assembler = ReportAssembler::new(&config.output_dir);
    let artifacts = assembler.write_report(&run)?;

    println!(
        "Analyzed {} posts from {} for '{}' ({:.1}% positive, {:.1}% negative, {:.1}% neutral)",
        run.summary.total,
        network,
        keyword,
        run.summary.positive_pct,
        run.summary.negative_pct,
        run.summary.neutral_pct,
    );
    for path in artifacts {
        println!("  wrote {}", path.display());
    }
    Ok(())
}
