pub mod config;
pub mod mapgen;
pub mod types;

pub use config::{ConfigError, GenerationConfig, SizeRange};
pub use mapgen::{DungeonGenerator, GenerationError, GenerationResult, generate};
pub use types::*;
