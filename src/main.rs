use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sokoni::{Browse, Catalog, Config, ALL_CATEGORIES};

mod cli;
use cli::{display, CatalogArgs, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref()).context("loading config")?;
    let ranker = config.ranker();

    match cli.command {
        Commands::Search {
            query,
            catalog,
            limit,
            json,
        } => {
            let catalog = load_catalog(&catalog, &config)?;
            let browse = catalog.browse(&ranker, &query, ALL_CATEGORIES);
            show(&browse, limit, json, &config)
        }
        Commands::List {
            catalog,
            category,
            limit,
            json,
        } => {
            let catalog = load_catalog(&catalog, &config)?;
            let browse = catalog.browse(&ranker, "", &category);
            show(&browse, limit, json, &config)
        }
        Commands::Explain {
            query,
            product_id,
            catalog,
        } => {
            let catalog = load_catalog(&catalog, &config)?;
            let product = catalog
                .get(&product_id)
                .with_context(|| format!("no product with id '{}'", product_id))?;
            let breakdown = ranker.explain(&query, product, catalog.listing());
            display::print_breakdown(query.trim(), product, &breakdown);
            Ok(())
        }
    }
}

/// Catalog path precedence: --catalog, then SOKONI_CATALOG (both via clap),
/// then the config file.
fn load_catalog(args: &CatalogArgs, config: &Config) -> Result<Catalog> {
    let path = args
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .context("no catalog given: pass --catalog, set SOKONI_CATALOG, or set \"catalog\" in the config file")?;
    Catalog::load(&path).with_context(|| format!("loading catalog {}", path.display()))
}

fn show(browse: &Browse, limit: Option<usize>, json: bool, config: &Config) -> Result<()> {
    let visible = limit.unwrap_or_else(|| config.page_size(browse));

    if json {
        let page = browse.page(visible);
        let out = serde_json::to_string_pretty(page.items).context("serializing results")?;
        println!("{}", out);
    } else {
        display::print_browse(browse, visible);
    }
    Ok(())
}
