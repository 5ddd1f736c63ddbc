//! Independent signal extractors the classifier combines.

pub mod category;
pub mod requirements;
pub mod urgency;

pub use category::{CategoryScore, CategoryScorer};
pub use requirements::RequirementExtractor;
pub use urgency::UrgencyDetector;
