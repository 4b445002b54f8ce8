use anyhow::{Context, Result};
use brochure::{
    check::check_page,
    cli::{Cli, Commands, SchemaKind, SourceArgs},
    config::Config,
    content::Catalog,
    profile::BusinessProfile,
    render::{render_document, RenderOptions},
    schema::{BusinessListing, FaqPage},
    service::{serve::serve, BuildConfig, BuildService, Site},
};
use clap::Parser;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let catalog = Catalog::standard();

    match cli.command {
        Commands::Build {
            source,
            out,
            archive,
        } => {
            let (config, profile, options) = prepare(config_path, &source)?;
            let lastmod = config
                .build
                .sitemap_lastmod
                .then(|| chrono::Local::now().date_naive());
            let site = Site::generate(&profile, &catalog, &options, lastmod)?;

            let build_config = BuildConfig {
                out_dir: out.unwrap_or_else(|| config.out_dir.clone()),
                archive: archive || config.build.archive,
            };
            let result = BuildService::build(&site, &build_config).await?;

            // Print only the output directory to stdout
            println!("{}", result.out_dir.display());
        }
        Commands::Render { source } => {
            let (_, profile, options) = prepare(config_path, &source)?;
            println!("{}", render_document(&profile, &catalog, &options)?);
        }
        Commands::Schema { source, kind } => {
            let (_, profile, options) = prepare(config_path, &source)?;
            let listing =
                BusinessListing::build(&profile, &catalog, &options.site_url, &options.og_image);
            let faq = FaqPage::build(&profile, &catalog);

            let documents = match kind {
                Some(SchemaKind::Business) => vec![serde_json::to_value(&listing)?],
                Some(SchemaKind::Faq) => vec![serde_json::to_value(&faq)?],
                None => vec![serde_json::to_value(&listing)?, serde_json::to_value(&faq)?],
            };
            for document in documents {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&document)
                        .context("Failed to serialize structured data")?
                );
            }
        }
        Commands::Check { source } => {
            let (_, profile, options) = prepare(config_path, &source)?;
            let html = render_document(&profile, &catalog, &options)?;
            let drifts = check_page(&profile, &catalog, &options, &html);
            if !drifts.is_empty() {
                for drift in &drifts {
                    error!("{}", drift);
                    println!("{}", drift);
                }
                anyhow::bail!("{} consistency problem(s) found", drifts.len());
            }
            info!("Structured data matches the page");
            println!("ok");
        }
        Commands::Serve { source, addr } => {
            let (config, profile, options) = prepare(config_path, &source)?;
            let lastmod = config
                .build
                .sitemap_lastmod
                .then(|| chrono::Local::now().date_naive());
            let site = Site::generate(&profile, &catalog, &options, lastmod)?;
            let addr = addr.unwrap_or_else(|| config.serve.addr.clone());
            serve(site, &addr).await?;
        }
        Commands::Version => {
            println!("brochure {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load configuration, apply command-line overrides, and load the profile
fn prepare(
    config_path: Option<&Path>,
    source: &SourceArgs,
) -> Result<(Config, BusinessProfile, RenderOptions)> {
    let mut config = Config::load(config_path)?;
    if let Some(site_url) = &source.site_url {
        config.site_url = site_url.clone();
    }

    let profile_path = source.profile.as_deref().or(config.profile.as_deref());
    let profile = BusinessProfile::load_or_sample(profile_path)?;
    let options = RenderOptions::from_config(&config)?;
    Ok((config, profile, options))
}
