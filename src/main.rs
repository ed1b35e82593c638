use anyhow::Result;
use clap::Parser;
use folio_gallery::html::render_nodes;
use folio_gallery::{GalleryKind, GalleryLoader, LoadOutcome, NodeList, SiteConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "folio-gallery",
    version,
    about = "Refresh the logo and testimonial galleries from the repository"
)]
struct Cli {
    #[arg(long, help = "Path to gallery.json (defaults to the platform config dir)")]
    config: Option<PathBuf>,
    #[arg(long, help = "Repository owner (overrides the config file)")]
    owner: Option<String>,
    #[arg(long)]
    repo: Option<String>,
    #[arg(long)]
    branch: Option<String>,
    #[arg(long, help = "Request timeout in seconds")]
    timeout: Option<u64>,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

/// Loads the config file (explicit `--config`, else the default file when it
/// exists) and lays each flag over it. Without any file, `--owner` and
/// `--repo` are both required.
fn resolve_config(cli: &Cli) -> Result<SiteConfig> {
    let from_file = match &cli.config {
        Some(path) => Some(SiteConfig::load(path)?),
        None => match SiteConfig::default_path() {
            Ok(path) if path.exists() => Some(SiteConfig::load(&path)?),
            _ => None,
        },
    };

    let mut config = match (from_file, &cli.owner, &cli.repo) {
        (Some(config), _, _) => config,
        (None, Some(owner), Some(repo)) => SiteConfig::new(owner.clone(), repo.clone(), "main"),
        (None, _, _) => anyhow::bail!(
            "No gallery config found; pass --config, or both --owner and --repo"
        ),
    };

    if let Some(owner) = &cli.owner {
        config.owner = owner.clone();
    }
    if let Some(repo) = &cli.repo {
        config.repo = repo.clone();
    }
    if let Some(branch) = &cli.branch {
        config.branch = branch.clone();
    }
    if cli.timeout.is_some() {
        config.request_timeout_secs = cli.timeout;
    }
    config.validate()?;
    Ok(config)
}

fn outcome_json(kind: GalleryKind, outcome: &LoadOutcome, html: String) -> serde_json::Value {
    let state = match outcome {
        LoadOutcome::Applied(state) => serde_json::to_value(state).unwrap_or_default(),
        LoadOutcome::Stale => serde_json::Value::String("stale".to_string()),
    };
    serde_json::json!({
        "gallery": kind,
        "state": state,
        "html": html,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio_gallery=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::info!("Loading galleries from {}", config.api_base());

    let loader = GalleryLoader::from_config(&config, NodeList::new(), NodeList::new())?;
    let (logo, testimonial) = loader.refresh_all().await;

    let mut sections = Vec::new();
    for (kind, outcome) in [
        (GalleryKind::Logo, &logo),
        (GalleryKind::Testimonial, &testimonial),
    ] {
        let container = loader.slot(kind).container().lock().await;
        sections.push((kind, outcome, render_nodes(container.nodes())));
    }

    if cli.json {
        let out: Vec<_> = sections
            .into_iter()
            .map(|(kind, outcome, html)| outcome_json(kind, outcome, html))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (kind, _, html) in sections {
            println!("<!-- {}Gallery -->", kind);
            println!("{}", html);
        }
    }

    Ok(())
}
