// Adapters layer: concrete implementations for external systems.

pub mod http_source;

pub use http_source::HttpContributionSource;
