use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    DataIntegration,
    DataVisualization,
    WebDevelopment,
    AppDevelopment,
    None,
}

impl OpportunityType {
    /// Every category a post can be classified into. `None` is the absence of one.
    pub const CATEGORIES: [OpportunityType; 4] = [
        OpportunityType::DataIntegration,
        OpportunityType::DataVisualization,
        OpportunityType::WebDevelopment,
        OpportunityType::AppDevelopment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::DataIntegration => "data_integration",
            OpportunityType::DataVisualization => "data_visualization",
            OpportunityType::WebDevelopment => "web_development",
            OpportunityType::AppDevelopment => "app_development",
            OpportunityType::None => "none",
        }
    }
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::Unknown,
    ];

    /// Ordering used when several levels are signalled; `Unknown` never wins.
    pub fn rank(&self) -> u8 {
        match self {
            UrgencyLevel::Unknown => 0,
            UrgencyLevel::Low => 1,
            UrgencyLevel::Medium => 2,
            UrgencyLevel::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Technologies,
    Budget,
    Timeline,
}

impl RequirementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementCategory::Technologies => "technologies",
            RequirementCategory::Budget => "budget",
            RequirementCategory::Timeline => "timeline",
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fragments pulled out of a post, keyed by what they describe.
/// Categories with nothing extracted are absent rather than empty.
pub type Requirements = BTreeMap<RequirementCategory, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub opportunity_type: OpportunityType,
    pub confidence_score: f64,
    pub urgency_level: UrgencyLevel,
    pub extracted_requirements: Requirements,
    pub suggested_response: String,
    pub key_indicators: Vec<String>,
    pub talking_points: Vec<String>,
}

impl AnalysisResult {
    pub fn is_opportunity(&self) -> bool {
        self.opportunity_type != OpportunityType::None
    }

    pub fn requirements_for(&self, category: RequirementCategory) -> &[String] {
        self.extracted_requirements
            .get(&category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
