//! CLI for landing-links - resolves link references in a landing-page document

use clap::Parser;
use landing_links::{
    Denormalizer, LinkResolverRegistry, NormalizedData, ResolverOptions, StaticListingStore,
    StaticTranslations,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landing-page document (JSON) containing link references
    input: PathBuf,

    /// Output file path (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Resolver configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Translations file (JSON, locale -> key -> text)
    #[arg(long)]
    translations: Option<PathBuf>,

    /// Listings file (JSON, listing id -> record)
    #[arg(long)]
    listings: Option<PathBuf>,

    /// Normalized data file (JSON, type -> records); defaults to the document itself
    #[arg(long)]
    data: Option<PathBuf>,

    /// Override the configured locale
    #[arg(long)]
    locale: Option<String>,

    /// Override the configured asset host
    #[arg(long)]
    asset_host: Option<String>,

    /// Override the configured site name
    #[arg(long)]
    sitename: Option<String>,
}

fn run(args: Args) -> landing_links::Result<String> {
    let mut options = match &args.config {
        Some(path) => ResolverOptions::from_file(path)?,
        None => ResolverOptions::default(),
    };
    if let Some(locale) = args.locale {
        options.locale = locale;
    }
    if args.asset_host.is_some() {
        options.asset_host = args.asset_host;
    }
    if args.sitename.is_some() {
        options.sitename = args.sitename;
    }

    let translations = match &args.translations {
        Some(path) => StaticTranslations::from_file(path)?,
        None => StaticTranslations::new(),
    };
    let listings = match &args.listings {
        Some(path) => StaticListingStore::from_file(path)?,
        None => StaticListingStore::new(),
    };

    let registry =
        LinkResolverRegistry::from_options(&options, Arc::new(translations), Arc::new(listings))?;
    tracing::info!(link_types = ?registry.link_types(), "resolvers ready");

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&args.input)?)?;
    let data: NormalizedData = match &args.data {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => document.as_object().cloned().unwrap_or_default(),
    };

    let resolved = Denormalizer::new(&registry).denormalize(&document, &data)?;
    Ok(serde_json::to_string_pretty(&resolved)?)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "landing_links=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let output = args.output.clone();

    match run(args) {
        Ok(json) => {
            if let Some(output) = output {
                if let Err(e) = std::fs::write(&output, &json) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
                println!("Successfully resolved links to {:?}", output);
            } else {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error resolving links: {}", e);
            std::process::exit(1);
        }
    }
}
