pub mod query;
pub mod resolver;
pub mod source;

// Re-exports for convenience
pub use query::FeatureQuery;
pub use resolver::{ClickResolver, LookupResult};
pub use source::{FeatureSource, HttpFeatureSource};
