//! Command handlers.
//!
//! Each handler loads what it needs through [`ProductClient`], applies the
//! core rules, and prints to stdout. Errors propagate to `main`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, warn};

use catalog_client::{ClientConfig, ProductClient};
use catalog_core::listing::select;
use catalog_core::{PriceRange, ProductDraft, ProductId, ViewPreferences};

use crate::cli::{AddArgs, Command, ConfigCommand, EditArgs, ListArgs};
use crate::render;

/// Dispatches one parsed command.
pub async fn run(
    command: Command,
    config: &ClientConfig,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    match command {
        Command::List(args) => list(client(config)?, args).await,
        Command::Show { id, json } => show(client(config)?, ProductId::new(id), json).await,
        Command::Add(args) => add(client(config)?, args).await,
        Command::Edit(args) => edit(client(config)?, args).await,
        Command::Delete { id, yes } => delete(client(config)?, ProductId::new(id), yes).await,
        Command::Config(ConfigCommand::Show) => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
        Command::Config(ConfigCommand::Init { force }) => init_config(config_path, force),
    }
}

fn client(config: &ClientConfig) -> anyhow::Result<ProductClient> {
    Ok(ProductClient::new(config)?)
}

// =============================================================================
// Products
// =============================================================================

async fn list(client: ProductClient, args: ListArgs) -> anyhow::Result<()> {
    let prefs = ViewPreferences {
        sort_key: args.sort,
        only_in_stock: args.in_stock,
        price_range: PriceRange::new(args.min_price, args.max_price),
    };
    if !prefs.price_range.is_well_formed() {
        warn!(
            min = args.min_price,
            max = args.max_price,
            "Price range is empty, no products can match"
        );
    }

    let products = client
        .list_products()
        .await
        .context("Failed to fetch products")?;
    let rows = select(&products, &prefs);
    info!(total = products.len(), shown = rows.len(), sort = %prefs.sort_key, "Listing products");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render::product_table(&rows));
    }
    Ok(())
}

async fn show(client: ProductClient, id: ProductId, json: bool) -> anyhow::Result<()> {
    let product = client.get_product(&id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        print!("{}", render::product_details(&product));
    }
    Ok(())
}

async fn add(client: ProductClient, args: AddArgs) -> anyhow::Result<()> {
    let draft = ProductDraft {
        name: args.name,
        description: args.description,
        price: parse_number(&args.price),
        stock: parse_number(&args.stock),
        featured_image: args.image,
    };

    let product = client.create_product(&draft).await?;
    println!("Product added successfully. (id {})", product.id);
    Ok(())
}

async fn edit(client: ProductClient, args: EditArgs) -> anyhow::Result<()> {
    let id = ProductId::new(args.id);
    let current = client
        .get_product(&id)
        .await
        .with_context(|| format!("Failed to load product {id}"))?;

    let mut draft = ProductDraft::from(&current);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(price) = args.price {
        draft.price = parse_number(&price);
    }
    if let Some(stock) = args.stock {
        draft.stock = parse_number(&stock);
    }
    if let Some(image) = args.image {
        draft.featured_image = image;
    }

    client.update_product(&id, &draft).await?;
    println!("Product updated successfully.");
    Ok(())
}

async fn delete(client: ProductClient, id: ProductId, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let stdin = std::io::stdin();
        if !confirm(&mut stdin.lock(), &mut std::io::stdout())? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.delete_product(&id).await?;
    println!("Product deleted successfully.");
    Ok(())
}

// =============================================================================
// Config
// =============================================================================

pub fn init_config(config_path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let target = config_path
        .or_else(ClientConfig::default_config_path)
        .context("No config directory available on this platform")?;
    if target.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", target.display());
    }

    let written = ClientConfig::default().save(Some(target))?;
    println!("Wrote {}", written.display());
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Parses a numeric field leniently; anything unparseable becomes NaN so
/// validation reports it as "must be a number".
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Asks before a delete. Only `y` or `yes` (any case) confirms.
fn confirm(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<bool> {
    write!(output, "Are you sure you want to delete this product? [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
