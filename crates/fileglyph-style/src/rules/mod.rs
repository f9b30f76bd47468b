//! Icon rules, the buckets that hold them, and their synthesis.

mod bucket;
mod cache;
mod rule;
mod synthesizer;

pub use bucket::{RuleBucket, RuleBuckets, SharedBucket};
pub use cache::ResolutionCache;
pub use rule::{IconRule, RuleTarget};
pub use synthesizer::RuleSynthesizer;
