//! Command-line front end for inspecting documentation content

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docnav::{
    AliasTable, ContentRegistry, CrossLinkBus, MemoryLocation, NavConfig, Navigator,
    PartialRegistry, PathResolver, Sitemap, TextLinker,
};

#[derive(Parser)]
#[command(name = "docnav", version, about = "Resolve documentation routes and cross-links")]
struct Cli {
    /// Navigator config (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page descriptor for a hash fragment
    Resolve {
        /// Fragment such as `#/components/overlays/drawer`; empty for the default
        #[arg(default_value = "")]
        hash: String,

        /// Registry parts (JSON), merged in order
        #[arg(long = "registry", required = true)]
        registries: Vec<PathBuf>,

        /// Menu tree (JSON)
        #[arg(long)]
        sitemap: Option<PathBuf>,
    },

    /// Split prose into plain and linked segments
    Link {
        /// Text to scan
        text: String,

        /// Registry parts (JSON), merged in order
        #[arg(long = "registry")]
        registries: Vec<PathBuf>,

        /// Alias table (JSON)
        #[arg(long)]
        aliases: Option<PathBuf>,
    },

    /// List every route in the menu tree
    Routes {
        /// Menu tree (JSON)
        #[arg(long)]
        sitemap: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docnav=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            NavConfig::from_json(&json).context("parsing config")?
        }
        None => NavConfig::default(),
    };

    let output = match cli.command {
        Command::Resolve {
            hash,
            registries,
            sitemap,
        } => {
            let registry = load_registry(&registries)?;
            let sitemap = load_sitemap(sitemap.as_ref())?;
            render_page(&hash, config, registry, sitemap)?
        }
        Command::Link {
            text,
            registries,
            aliases,
        } => {
            let registry = load_registry(&registries)?;
            let aliases = match aliases {
                Some(path) => AliasTable::from_file(&path)
                    .with_context(|| format!("loading aliases {}", path.display()))?,
                None => AliasTable::new(),
            };
            render_links(&text, &registry, &aliases)?
        }
        Command::Routes { sitemap } => render_routes(&load_sitemap(Some(&sitemap))?),
    };

    println!("{}", output);
    Ok(())
}

/// Mount a navigator at `hash` and print the resulting page descriptor.
fn render_page(
    hash: &str,
    config: NavConfig,
    registry: ContentRegistry,
    sitemap: Sitemap,
) -> Result<String> {
    let resolver = PathResolver::new(Arc::new(registry));
    let location = Arc::new(MemoryLocation::new(hash));
    let navigator = Navigator::new(config, Arc::new(sitemap), location, CrossLinkBus::new());
    let _mounted = navigator.mount();

    let page = navigator.page(&resolver);
    Ok(serde_json::to_string_pretty(&page)?)
}

fn render_links(text: &str, registry: &ContentRegistry, aliases: &AliasTable) -> Result<String> {
    let linker = TextLinker::new(registry, aliases)?;
    Ok(serde_json::to_string_pretty(&linker.link(text))?)
}

/// One hash per line, in menu order.
fn render_routes(sitemap: &Sitemap) -> String {
    sitemap
        .routes()
        .map(|route| route.to_hash())
        .collect::<Vec<_>>()
        .join("\n")
}

fn load_registry(paths: &[PathBuf]) -> Result<ContentRegistry> {
    let parts = paths
        .iter()
        .map(|path| {
            PartialRegistry::from_file(path)
                .with_context(|| format!("loading registry part {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    let registry = ContentRegistry::build(parts);
    tracing::info!(entries = registry.len(), "registry loaded");
    Ok(registry)
}

fn load_sitemap(path: Option<&PathBuf>) -> Result<Sitemap> {
    match path {
        Some(path) => Sitemap::from_file(path)
            .with_context(|| format!("loading sitemap {}", path.display())),
        None => Ok(Sitemap::default()),
    }
}
