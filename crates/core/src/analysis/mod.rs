pub mod metrics;
pub mod scoring;

pub use metrics::compute;
pub use scoring::recommend;
