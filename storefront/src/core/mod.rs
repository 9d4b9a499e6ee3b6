//! Configuration, application state and state transitions

pub mod config;
pub mod state;
pub mod update;

pub use config::Config;
pub use state::{AppState, LoadStatus};
pub use update::{Effect, Message, update};
