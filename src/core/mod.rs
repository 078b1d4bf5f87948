pub mod aggregator;
pub mod engine;
pub mod extractor;
pub mod interval;

pub use crate::domain::model::{ActivityRecord, AggregateSummary, DateInterval};
pub use crate::domain::ports::{Clock, ContributionSource, MarkupExtractor};
pub use crate::utils::error::Result;
