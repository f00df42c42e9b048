//! Stumarcot CLI - terminal front-end for the storefront stores.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! sm-cli products list --category tiles --price 40-80 --sort price-asc
//! sm-cli products show ceramic-wall-tiles
//!
//! # Manage the cart
//! sm-cli cart add ceramic-wall-tiles -q 2
//! sm-cli cart show --shipping standard
//! sm-cli cart update ceramic-wall-tiles 5
//! sm-cli cart promo save10
//! sm-cli cart clear
//!
//! # Wishlist and forms
//! sm-cli wishlist toggle tool-set
//! sm-cli newsletter user@example.com
//! ```
//!
//! State lives under `STOREFRONT_DATA_DIR` (default `.stumarcot`); set
//! `STOREFRONT_EPHEMERAL=true` to keep everything in memory for a dry run.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is the product here.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use stumarcot_storefront::StorefrontConfig;
use stumarcot_storefront::catalog::Category;
use stumarcot_storefront::filters::SortOrder;
use stumarcot_storefront::shipping::ShippingMethod;

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "sm-cli")]
#[command(author, version, about = "Stumarcot storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Send a message to the shop
    Contact {
        /// First name
        #[arg(long)]
        first_name: String,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number (optional)
        #[arg(long, default_value = "")]
        phone: String,

        /// Message subject
        #[arg(long)]
        subject: String,

        /// Message body
        #[arg(long)]
        message: String,
    },
    /// Subscribe to the newsletter
    Newsletter {
        /// Email address to subscribe
        email: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a catalog product to the cart
    Add {
        /// Product id (e.g. ceramic-wall-tiles)
        id: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,
    },
    /// Show cart contents and the order summary
    Show {
        /// Shipping method for the summary (pickup, standard, express)
        #[arg(short, long)]
        shipping: Option<ShippingMethod>,
    },
    /// Set the quantity of a cart line (0 removes it)
    Update {
        /// Product id
        id: String,

        /// New quantity
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Apply a promo code
    Promo {
        /// The code to apply
        code: String,
    },
    /// Proceed to checkout
    Checkout,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List catalog products
    List {
        /// Keep only one category (tiles, blocks, roofing, tools, paint)
        #[arg(short, long)]
        category: Option<Category>,

        /// Keep only a price band, e.g. "25-50" or "200+"
        #[arg(short, long)]
        price: Option<String>,

        /// Sort order (name, price-asc, price-desc)
        #[arg(short, long, default_value = "name")]
        sort: SortOrder,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Toggle a product on or off the wishlist
    Toggle {
        /// Product id
        id: String,
    },
    /// List wishlist entries
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { id, quantity } => commands::cart::add(&config, &id, quantity)?,
            CartAction::Show { shipping } => commands::cart::show(&config, shipping)?,
            CartAction::Update { id, quantity } => commands::cart::update(&config, &id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(&config, &id)?,
            CartAction::Clear { yes } => commands::cart::clear(&config, yes)?,
            CartAction::Promo { code } => commands::cart::promo(&config, &code)?,
            CartAction::Checkout => commands::cart::checkout(&config)?,
        },
        Commands::Products { action } => match action {
            ProductAction::List {
                category,
                price,
                sort,
            } => commands::products::list(category, price.as_deref(), sort)?,
            ProductAction::Show { id } => commands::products::show(&config, &id)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&config, &id)?,
            WishlistAction::List => commands::wishlist::list(&config)?,
        },
        Commands::Contact {
            first_name,
            last_name,
            email,
            phone,
            subject,
            message,
        } => commands::contact::submit(first_name, last_name, email, phone, subject, message),
        Commands::Newsletter { email } => commands::contact::newsletter(&email),
    }
    Ok(())
}
