pub mod aggregator;
pub mod pipeline;
pub mod ranking;

pub use aggregator::ProfileAggregator;
pub use pipeline::ProfilePipeline;
