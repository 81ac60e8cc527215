//! Storefront Demo
//!
//! This example walks a cart through a full session: load a product catalog
//! from a fixture set, add and adjust items, print a receipt, and check out.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to persist the cart to a JSON file between runs

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use storefront::{
    fixtures::Fixture,
    notify::Notifier,
    receipt::Receipt,
    session::CartSession,
    shop::Shop,
    storage::{CartStore, JsonFileStore, MemoryStore, StorageError},
};

/// Storefront Demo
#[derive(Debug, Parser)]
struct Args {
    /// Fixture set to load the catalog from
    #[arg(short, long, default_value = "classic")]
    fixture: String,

    /// Optional path to a JSON cart file
    #[arg(short, long)]
    cart: Option<PathBuf>,
}

/// Prints notifications the way a toast banner would show them.
#[derive(Debug)]
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, title: &str, description: &str) {
        println!("[{title}] {description}");
    }
}

/// Either store, behind one enum so the session type stays concrete.
#[derive(Debug)]
enum DemoStore {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl CartStore for DemoStore {
    fn load(&self) -> Result<Option<storefront::snapshot::CartSnapshot>, StorageError> {
        match self {
            Self::File(store) => store.load(),
            Self::Memory(store) => store.load(),
        }
    }

    fn save(&self, snapshot: &storefront::snapshot::CartSnapshot) -> Result<(), StorageError> {
        match self {
            Self::File(store) => store.save(snapshot),
            Self::Memory(store) => store.save(snapshot),
        }
    }
}

#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = Args::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let mut shop = Shop::with_catalog(fixture.into_catalog());

    let store = match args.cart {
        Some(path) => DemoStore::File(JsonFileStore::new(path)),
        None => DemoStore::Memory(MemoryStore::new()),
    };

    let mut session = CartSession::open(store, StdoutNotifier);

    for (id, quantity) in [(1, 1), (2, 2), (5, 1)] {
        if let Some(product) = shop.catalog.get(id) {
            session.add_to_cart(product.to_cart_line(quantity));
        }
    }

    session.update_quantity(2, 3);
    session.remove_from_cart(5);

    println!();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::new(session.state()).write_to(&mut handle)?;

    let order = shop.checkout(&mut session, 1, "1 Main St")?;

    println!("\nOrder #{} placed: {} ({})", order.id, order.total_amount, order.status);

    Ok(())
}
