pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use adapters::HttpContributionSource;
pub use config::{CliConfig, TomlConfig};
pub use self::core::{engine::ContributionEngine, extractor::CalendarGraphExtractor};
pub use utils::error::{ContribError, Result};
