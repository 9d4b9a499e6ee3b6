//! Storefront - terminal catalog browser
//!
//! # Architecture
//!
//! Fetches the product catalog once, then filters, sorts and incrementally
//! reveals it in a terminal UI with a toggleable cart and light/dark theme.
//!
//! ```text
//! storefront/src/
//! ├── catalog/   # Catalog snapshot and loader
//! ├── core/      # Config, AppState, Message -> update -> Effect
//! ├── runtime/   # Background effects (fetch, page delay)
//! ├── view/      # Filter/sort, display window, cart, theme
//! ├── ui/        # ratatui rendering and key handling
//! └── utils/     # Logging
//! ```

pub mod catalog;
pub mod core;
pub mod runtime;
pub mod ui;
pub mod utils;
pub mod view;

pub use catalog::{Catalog, CatalogLoader};
pub use core::{AppState, Config, Effect, LoadStatus, Message, update};
pub use runtime::{Delay, Dispatcher, ImmediateDelay, TokioDelay};
pub use view::{CartSelection, CategoryFilter, DisplayWindow, SortKey, Theme, ViewQuery};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    utils::logger::init_logger(&config.log_level, config.log_dir.as_deref())?;
    Ok(config)
}
