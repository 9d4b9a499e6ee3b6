//! Client-side view of the catalog
//!
//! - [`filter`]: search, category and sort over the catalog
//! - [`window`]: the incrementally revealed prefix of the filtered result
//! - [`cart`]: toggled product ids
//! - [`theme`]: light/dark switch

pub mod cart;
pub mod filter;
pub mod theme;
pub mod window;

pub use cart::CartSelection;
pub use filter::{CategoryFilter, SortKey, ViewQuery};
pub use theme::Theme;
pub use window::{DEFAULT_PAGE_SIZE, DisplayWindow, RevealPhase};
