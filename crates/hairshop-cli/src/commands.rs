//! Command handlers for the CLI.
//!
//! Each run opens the user's storefront from the configured store file,
//! loads the catalog when the command needs it, performs one action and
//! prints the result.

use chrono::Utc;

use hairshop_catalog::{CatalogClient, FilterCriteria};
use hairshop_core::{AppConfig, Product};
use hairshop_storefront::{
    format_rub, resolve_identity, HostProvider, Intent, JsonFileStore, NewAddress, Storefront,
    TelegramHost,
};

use crate::{AddressCommands, CartCommands, Commands, FilterArgs};

pub(crate) async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    let mut storefront = open_storefront(config)?;
    if command.needs_catalog() {
        let client = CatalogClient::new(config.http_timeout_secs, &config.user_agent)?;
        storefront.reload(&client, &config.csv_url).await?;
    }

    match command {
        Commands::Products { filter, json } => list_products(&mut storefront, &filter, json)?,
        Commands::Ranges => print_ranges(&storefront)?,
        Commands::Cart { command } => run_cart(&mut storefront, command)?,
        Commands::Favorite { id } => {
            let note = storefront.dispatch(Intent::ToggleFavorite(id))?;
            println!("{note}");
        }
        Commands::Favorites => {
            if storefront.favorites().is_empty() {
                println!("Избранное пусто");
            }
            for product in storefront.favorites().items() {
                print_product(product);
            }
        }
        Commands::Address { command } => run_address(&mut storefront, command)?,
        Commands::Checkout {
            delivery,
            payment,
            address,
        } => {
            if let Some(index) = address {
                storefront.select_address(index)?;
            }
            storefront.set_delivery(delivery);
            storefront.set_payment(payment);
            println!(
                "Оформление заказа: {}, {}",
                storefront.delivery().label(),
                storefront.payment().label()
            );
            let confirmation = storefront.confirm_order(Utc::now())?;
            println!("{}", confirmation.message);
        }
        Commands::Orders => {
            println!("Покупатель: {}", storefront.identity().display_name());
            if storefront.purchases().is_empty() {
                println!("История покупок пуста");
            }
            for purchase in storefront.purchases() {
                println!(
                    "{}  {}  {} поз.  {}  {}",
                    purchase.date.format("%d.%m.%Y %H:%M"),
                    purchase.id,
                    purchase.items.len(),
                    purchase.delivery.label(),
                    format_rub(purchase.total)
                );
            }
        }
    }

    Ok(())
}

fn open_storefront(config: &AppConfig) -> anyhow::Result<Storefront<JsonFileStore>> {
    let host = config
        .telegram_init_data
        .as_deref()
        .map(TelegramHost::from_init_data);
    let identity = resolve_identity(host.as_ref().map(|h| h as &dyn HostProvider));
    tracing::debug!(
        user = %identity.storage_id(),
        guest = identity.is_guest(),
        "identity resolved"
    );

    let store = JsonFileStore::open(config.store_path.clone())?;
    tracing::debug!(path = %store.path().display(), "using storefront data file");
    Ok(Storefront::open(store, identity)?)
}

fn list_products(
    storefront: &mut Storefront<JsonFileStore>,
    filter: &FilterArgs,
    json: bool,
) -> anyhow::Result<()> {
    if !filter.is_empty() {
        let ranges = &storefront
            .catalog()
            .ok_or_else(|| anyhow::anyhow!("catalog is not loaded"))?
            .ranges;
        let criteria = criteria_from_args(FilterCriteria::from_range(ranges), filter);
        let note = storefront.dispatch(Intent::ApplyFilter(criteria))?;
        if !json {
            println!("{note}");
        }
    }

    let visible = storefront.visible_products();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }
    if visible.is_empty() {
        println!("Товары не найдены");
    }
    for product in visible {
        print_product(product);
    }
    Ok(())
}

/// Overlays the flags the user passed on top of the reset criteria.
fn criteria_from_args(mut criteria: FilterCriteria, args: &FilterArgs) -> FilterCriteria {
    if let Some(v) = args.min_length {
        criteria.min_length = v;
    }
    if let Some(v) = args.max_length {
        criteria.max_length = v;
    }
    if let Some(v) = args.min_price {
        criteria.min_price = v;
    }
    if let Some(v) = args.max_price {
        criteria.max_price = v;
    }
    criteria.colors.clone_from(&args.colors);
    criteria
}

fn print_ranges(storefront: &Storefront<JsonFileStore>) -> anyhow::Result<()> {
    let catalog = storefront
        .catalog()
        .ok_or_else(|| anyhow::anyhow!("catalog is not loaded"))?;
    let ranges = &catalog.ranges;
    println!("Товаров: {}", catalog.products.len());
    println!("Длина: {} - {} см", ranges.length.min, ranges.length.max);
    println!(
        "Цена: {} - {}",
        format_rub(ranges.price.min),
        format_rub(ranges.price.max)
    );
    println!("Цвета: {}", ranges.colors.join(", "));
    Ok(())
}

fn run_cart(
    storefront: &mut Storefront<JsonFileStore>,
    command: Option<CartCommands>,
) -> anyhow::Result<()> {
    let intent = match command.unwrap_or(CartCommands::Show) {
        CartCommands::Show => None,
        CartCommands::Add { id } => Some(Intent::AddToCart(id)),
        CartCommands::Inc { id } => Some(Intent::IncreaseQuantity(id)),
        CartCommands::Dec { id } => Some(Intent::DecreaseQuantity(id)),
        CartCommands::Remove { id } => Some(Intent::RemoveFromCart(id)),
    };
    if let Some(intent) = intent {
        let note = storefront.dispatch(intent)?;
        println!("{note}");
    }

    let cart = storefront.cart();
    if cart.is_empty() {
        println!("Корзина пуста");
        return Ok(());
    }
    for item in cart.items() {
        println!(
            "{:>4}  {}  {} × {}  = {}",
            item.product.id.0,
            item.product.name,
            item.quantity,
            format_rub(item.product.price),
            format_rub(item.line_total())
        );
    }
    println!(
        "Всего товаров: {}, сумма: {}",
        cart.total_items(),
        format_rub(cart.total_amount())
    );
    Ok(())
}

fn run_address(
    storefront: &mut Storefront<JsonFileStore>,
    command: AddressCommands,
) -> anyhow::Result<()> {
    match command {
        AddressCommands::List => {
            if storefront.addresses().is_empty() {
                println!("Нет сохраненных адресов");
            }
            for (index, address) in storefront.addresses().iter().enumerate() {
                println!(
                    "{index}  {}  ({})",
                    address.summary(),
                    address.delivery_company_name()
                );
            }
        }
        AddressCommands::Add {
            city,
            street,
            house,
            apartment,
            company,
        } => {
            let new = NewAddress {
                city,
                street,
                house,
                apartment,
                delivery_company: company,
            };
            let address = storefront.save_address(new, Utc::now())?;
            println!("Адрес сохранен: {}", address.summary());
        }
    }
    Ok(())
}

fn print_product(product: &Product) {
    let price = if product.has_discount() {
        format!(
            "{} (было {})",
            format_rub(product.price),
            format_rub(product.old_price)
        )
    } else {
        format_rub(product.price)
    };
    println!(
        "{:>4}  {}  {} см  {}  {}",
        product.id.0, product.name, product.length, product.color, price
    );
}
