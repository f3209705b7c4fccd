use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use huescout::api;
use huescout::assets::AssetLoader;
use huescout::models::{AppConfig, ExtractionResult};
use huescout::server;
use huescout::services::{CrawlService, HttpFetcher};

#[derive(Parser)]
#[command(name = "huescout")]
#[command(about = "Huescout - color palette search over the open web")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Crawl once for a keyword and print the palettes as JSON
    Search {
        /// Search keyword, e.g. "ocean"
        keyword: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Huescout API",
        description = "Keyword-driven color palette search over the open web",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_palettes),
    components(schemas(
        api::PaletteQuery,
        api::PalettesResponse,
        api::PalettesError,
    )),
    tags(
        (name = "Palettes", description = "Palette search")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Search { keyword }) => run_search_command(&keyword).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Crawl for one keyword and print the result (no server needed)
async fn run_search_command(keyword: &str) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huescout=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        anyhow::bail!("Keyword must not be empty");
    }

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);

    let asset_loader = Arc::new(AssetLoader::new(templates_dir, config_file));
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));

    let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
    let crawler = CrawlService::new(config, fetcher);

    let palettes = crawler.crawl(&keyword).await;
    if palettes.is_empty() {
        anyhow::bail!("No color palettes found for \"{keyword}\"");
    }

    let result = ExtractionResult { keyword, palettes };
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();

    println!("Huescout v{VERSION} - color palette search over the open web\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set, embedded config)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir
            .as_deref()
            .unwrap_or("(not set, embedded templates)")
    );

    println!("\nCommands:");
    println!("  huescout serve             Start the HTTP server");
    println!("  huescout search <keyword>  Crawl once and print palettes as JSON");
    println!("\nRun 'huescout --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huescout=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        templates = ?templates_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let asset_loader = Arc::new(AssetLoader::new(templates_dir, config_file));
    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        // OpenAPI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Huescout server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
