pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod languages;
pub mod manager;
pub mod platform;
pub mod report;
pub mod snippet;
pub mod store;
#[cfg(feature = "tui")]
pub mod tui;

pub use error::{Error, Result};
pub use manager::Manager;
pub use snippet::{Snippet, SnippetDraft};
pub use store::Store;
