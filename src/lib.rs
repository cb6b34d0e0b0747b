pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::SyncConfig;
pub use crate::core::{sprite::SpriteBuilder, sync::IconSync};
pub use domain::model::{SpriteReport, SyncReport};
pub use utils::error::{Result, SyncError};
