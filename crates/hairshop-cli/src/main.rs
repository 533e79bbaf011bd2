use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hairshop_core::ProductId;
use hairshop_storefront::{DeliveryMethod, PaymentMethod};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "hairshop-cli")]
#[command(about = "Hair shop storefront command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    Products {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print the visible products as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the length, price and color ranges of the current catalog
    Ranges,
    /// Inspect or change the cart
    Cart {
        #[command(subcommand)]
        command: Option<CartCommands>,
    },
    /// Add a product to favorites, or remove it if already there
    Favorite { id: ProductId },
    /// List favorite products
    Favorites,
    /// Manage saved delivery addresses
    Address {
        #[command(subcommand)]
        command: AddressCommands,
    },
    /// Confirm an order for everything in the cart
    Checkout {
        #[arg(long, default_value = "pickup")]
        delivery: DeliveryMethod,
        #[arg(long, default_value = "cash")]
        payment: PaymentMethod,
        /// Position of the saved address to deliver to (see `address list`)
        #[arg(long)]
        address: Option<usize>,
    },
    /// Show purchase history
    Orders,
}

impl Commands {
    fn needs_catalog(&self) -> bool {
        match self {
            Commands::Products { .. }
            | Commands::Ranges
            | Commands::Favorite { .. } => true,
            Commands::Cart { command } => matches!(command, Some(CartCommands::Add { .. })),
            Commands::Favorites
            | Commands::Address { .. }
            | Commands::Checkout { .. }
            | Commands::Orders => false,
        }
    }
}

#[derive(Debug, Default, Args)]
struct FilterArgs {
    #[arg(long)]
    min_length: Option<f64>,
    #[arg(long)]
    max_length: Option<f64>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    /// Repeat to allow several colors
    #[arg(long = "color")]
    colors: Vec<String>,
}

impl FilterArgs {
    fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.colors.is_empty()
    }
}

#[derive(Debug, Subcommand)]
enum CartCommands {
    Show,
    Add { id: ProductId },
    Inc { id: ProductId },
    Dec { id: ProductId },
    Remove { id: ProductId },
}

#[derive(Debug, Subcommand)]
enum AddressCommands {
    List,
    Add {
        #[arg(long)]
        city: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        house: String,
        #[arg(long)]
        apartment: Option<String>,
        /// Delivery company code, e.g. `cdek` or `russian_post`
        #[arg(long, default_value = "cdek")]
        company: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("hairshop-cli: run with --help to see available commands");
        return Ok(());
    };

    let config = hairshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    commands::run(command, &config).await
}
