pub mod dialect;
pub mod extract;
pub mod fragment;
pub mod mask;
pub mod patch;
pub mod report;
pub mod sprite;
pub mod sync;

pub use crate::domain::model::{Dialect, IconDescriptor, PreparedFragment, TargetDocument};
pub use crate::domain::ports::{ConfigProvider, Indentation, SpriteConfigProvider, Storage};
pub use crate::utils::error::Result;
