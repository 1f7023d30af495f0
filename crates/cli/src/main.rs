//! Handloom CLI - drive the marketplace dashboards from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Log in and see where the role lands
//! handloom login --role artisan
//!
//! # Buyer dashboard cart
//! handloom cart add ikat-shawl
//! handloom cart show
//!
//! # Checkout
//! handloom checkout confirm
//!
//! # Artisan catalog editor
//! handloom catalog save ikat-shawl --price 30 --stock 4
//!
//! # Marketing banner
//! handloom banner use sale
//! ```
//!
//! # Commands
//!
//! - `login` - Role-based redirect
//! - `cart` - Buyer dashboard cart
//! - `checkout` - Cash-on-delivery checkout
//! - `catalog` - Artisan catalog editor
//! - `banner` - Homepage banner selection

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod grid;
mod storage;
mod terminal;

use commands::Page;
use commands::catalog::FormEdits;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "handloom")]
#[command(author, version, about = "Handloom marketplace dashboards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the login form
    Login {
        /// Role (`buyer`, `artisan`, `marketing`, `admin`)
        #[arg(short, long)]
        role: String,
    },
    /// Buyer dashboard cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Checkout page
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// Artisan dashboard catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Marketing dashboard homepage banner
    Banner {
        #[command(subcommand)]
        action: BannerAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add one unit of a product
    Add { id: String },
    /// Add one unit of a product and open the cart
    BuyNow { id: String },
    /// Remove a product's line
    Remove { id: String },
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// Show the order summary
    Show,
    /// Place the cash-on-delivery order
    Confirm,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the product grid
    List,
    /// Open the editor for a product
    Edit { id: String },
    /// Save a product; omitted fields keep their current values
    Save {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<String>,

        #[arg(short, long)]
        stock: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum BannerAction {
    /// Show the current banner
    Show,
    /// Use a banner on the homepage
    Use { id: String },
}

fn main() {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let page = Page::open(&config)?;
    tracing::debug!(
        storage = %page.storage.path().display(),
        cards = page.grid.len(),
        "page opened"
    );

    let lines = match cli.command {
        Commands::Login { role } => commands::login::submit(&role)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&page)?,
            CartAction::Add { id } => commands::cart::add(&page, &id)?,
            CartAction::BuyNow { id } => commands::cart::buy_now(&page, &id)?,
            CartAction::Remove { id } => commands::cart::remove(&page, &id)?,
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Show => commands::checkout::show(&page)?,
            CheckoutAction::Confirm => commands::checkout::confirm(&page)?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&page)?,
            CatalogAction::Edit { id } => commands::catalog::edit(&page, &id)?,
            CatalogAction::Save {
                id,
                name,
                price,
                stock,
                description,
            } => {
                let edits = FormEdits {
                    name,
                    price,
                    stock,
                    description,
                };
                commands::catalog::save(&page, &id, edits)?
            }
        },
        Commands::Banner { action } => match action {
            BannerAction::Show => commands::banner::show(&page)?,
            BannerAction::Use { id } => commands::banner::use_banner(&page, &id)?,
        },
    };

    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
