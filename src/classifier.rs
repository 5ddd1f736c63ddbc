use crate::config::ClassifierConfig;
use crate::features::{CategoryScore, CategoryScorer, RequirementExtractor, UrgencyDetector};
use crate::keywords;
use crate::normalization::TextNormalizer;
use crate::opportunity::{AnalysisResult, OpportunityType, UrgencyLevel};
use crate::responses;
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_CLASSIFIER: OpportunityClassifier = OpportunityClassifier::new();
}

/// Analyze a post with the built-in configuration.
pub fn analyze_post(text: &str) -> AnalysisResult {
    DEFAULT_CLASSIFIER.analyze(text)
}

/// Rule-based classifier for posts that may be asking for IT services.
///
/// Holds only its configuration; the phrase tables are process-wide statics,
/// so one instance can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct OpportunityClassifier {
    config: ClassifierConfig,
}

impl OpportunityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClassifierConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one post. Any text is valid input: a post without signal
    /// comes back as `OpportunityType::None` with zero confidence.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let text = TextNormalizer::normalize(text);
        let scoring = &self.config.scoring;

        let scores = CategoryScorer::score_all(&text.normalized, scoring);
        let winner = CategoryScorer::select(&scores, &scoring.category_priority);
        let urgency_level = UrgencyDetector::detect(&text.normalized);
        let extracted_requirements = RequirementExtractor::extract(&text.original);
        let hiring = keywords::hiring_indicators(&text.normalized);

        let (opportunity_type, confidence_score) = match winner {
            Some(winner) => {
                let confidence = self.confidence(
                    winner,
                    RequirementExtractor::has_budget(&extracted_requirements),
                    !hiring.is_empty(),
                    urgency_level,
                );
                (winner.category, confidence)
            }
            None => (OpportunityType::None, 0.0),
        };

        let key_indicators = self.key_indicators(&hiring, &scores);
        let talking_points = responses::talking_points(
            opportunity_type,
            urgency_level,
            confidence_score,
            self.config.output.talking_points_floor,
        );

        log::debug!(
            "Classified post as {} (confidence {:.2}, urgency {}, {} requirement categories)",
            opportunity_type,
            confidence_score,
            urgency_level,
            extracted_requirements.len()
        );

        AnalysisResult {
            opportunity_type,
            confidence_score,
            urgency_level,
            extracted_requirements,
            suggested_response: responses::suggested_response(opportunity_type, urgency_level)
                .to_string(),
            key_indicators,
            talking_points,
        }
    }

    fn confidence(
        &self,
        winner: &CategoryScore,
        has_budget: bool,
        has_hiring: bool,
        urgency: UrgencyLevel,
    ) -> f64 {
        let scoring = &self.config.scoring;
        let mut confidence = winner.score * scoring.points_per_match;
        if has_budget {
            confidence += scoring.budget_bonus;
        }
        if has_hiring {
            confidence += scoring.hiring_bonus;
        }
        if matches!(urgency, UrgencyLevel::High | UrgencyLevel::Medium) {
            confidence += scoring.urgency_bonus;
        }

        // Overflowing weights can yield inf * 0
        if confidence.is_nan() {
            return 0.0;
        }
        confidence.clamp(0.0, 1.0)
    }

    fn key_indicators(&self, hiring: &[&'static str], scores: &[CategoryScore]) -> Vec<String> {
        let mut indicators: Vec<String> = Vec::new();
        let candidates = hiring
            .iter()
            .copied()
            .chain(scores.iter().flat_map(|s| s.hits()));
        for indicator in candidates {
            if indicators.len() >= self.config.output.max_key_indicators {
                break;
            }
            if !indicators.iter().any(|i| i == indicator) {
                indicators.push(indicator.to_string());
            }
        }
        indicators
    }
}
