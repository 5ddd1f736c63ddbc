use crate::opportunity::OpportunityType;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Tunable policy for the classifier. The defaults are arbitrary but fixed
/// values; none of them is derived from data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points for each distinct primary phrase of a category
    pub primary_weight: f64,
    /// Points for each distinct secondary phrase of a category
    pub secondary_weight: f64,
    /// Confidence contributed by one category point
    pub points_per_match: f64,
    pub budget_bonus: f64,
    pub hiring_bonus: f64,
    /// Added when urgency is High or Medium
    pub urgency_bonus: f64,
    /// Tie-break order for equal category scores, first wins
    pub category_priority: Vec<OpportunityType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub max_key_indicators: usize,
    /// Below this confidence talking points collapse to a single warning
    pub talking_points_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            primary_weight: 2.0,
            secondary_weight: 1.0,
            points_per_match: 0.2,
            budget_bonus: 0.15,
            hiring_bonus: 0.15,
            urgency_bonus: 0.1,
            category_priority: OpportunityType::CATEGORIES.to_vec(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_key_indicators: 10,
            talking_points_floor: 0.2,
        }
    }
}

impl ClassifierConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {path}"))?;
        let config: ClassifierConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {path}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {path}"))?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let scoring = &self.scoring;
        let weights = [
            ("primary_weight", scoring.primary_weight),
            ("secondary_weight", scoring.secondary_weight),
            ("points_per_match", scoring.points_per_match),
            ("budget_bonus", scoring.budget_bonus),
            ("hiring_bonus", scoring.hiring_bonus),
            ("urgency_bonus", scoring.urgency_bonus),
            ("talking_points_floor", self.output.talking_points_floor),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be a finite non-negative number, got {value}");
            }
        }

        let priority = &scoring.category_priority;
        if priority.len() != OpportunityType::CATEGORIES.len()
            || OpportunityType::CATEGORIES
                .iter()
                .any(|category| !priority.contains(category))
        {
            bail!(
                "category_priority must list each of {:?} exactly once, got {:?}",
                OpportunityType::CATEGORIES,
                priority
            );
        }

        if self.output.max_key_indicators == 0 {
            bail!("max_key_indicators must be at least 1");
        }

        Ok(())
    }
}
