//! Minimal consumer of the cart store.
//!
//! Opens (or creates) `basket.db` in the current directory, restores
//! whatever cart was persisted on the previous run, adds a product, and
//! prints the result. Run it twice to watch restore-on-start kick in:
//!
//! ```text
//! cargo run --example cart_demo
//! ```

use basket_store::{CartStore, KvConfig, NewItem, SqliteKv};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket_store=debug,basket_kv=debug,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let kv = SqliteKv::open(KvConfig::new("basket.db")).await?;
    let store = CartStore::open(kv).await;

    store
        .add_to_cart(NewItem {
            id: "sku-42".into(),
            title: "Trail Shoe".into(),
            image_url: "https://cdn.example.com/shoe.png".into(),
            price: 89.9,
        })
        .await?;

    for item in store.items() {
        println!("{:>3} x {:<30} {:>8.2}", item.quantity, item.title, item.line_total());
    }
    println!("{} units, total {:.2}", store.total_quantity(), store.total_price());

    Ok(())
}
