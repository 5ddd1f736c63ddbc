pub mod classifier;
pub mod config;
pub mod demo;
pub mod features;
pub mod keywords;
pub mod normalization;
pub mod opportunity;
pub mod responses;
pub mod run_log;

pub use classifier::{analyze_post, OpportunityClassifier};
pub use config::ClassifierConfig;
pub use opportunity::{AnalysisResult, OpportunityType, RequirementCategory, UrgencyLevel};
