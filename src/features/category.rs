use crate::config::ScoringConfig;
use crate::keywords::{self, Phrase, CATEGORY_KEYWORDS};
use crate::opportunity::OpportunityType;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: OpportunityType,
    pub primary_hits: Vec<&'static str>,
    pub secondary_hits: Vec<&'static str>,
    pub score: f64,
}

impl CategoryScore {
    pub fn hits(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.primary_hits
            .iter()
            .chain(self.secondary_hits.iter())
            .copied()
    }
}

pub struct CategoryScorer;

impl CategoryScorer {
    /// Score every category against normalized text.
    ///
    /// A phrase counts once however often it appears, and only where it is
    /// not part of a longer phrase from any category: "react native" is an
    /// app hit, not also a web "react" hit. Results follow the keyword table
    /// order, not the tie-break priority.
    pub fn score_all(normalized: &str, scoring: &ScoringConfig) -> Vec<CategoryScore> {
        let mut matches = Vec::new();
        for (index, keywords) in CATEGORY_KEYWORDS.iter().enumerate() {
            for phrase in keywords.primary.iter().chain(keywords.secondary.iter()) {
                for span in phrase.spans(normalized) {
                    matches.push((span, (index, phrase.text)));
                }
            }
        }
        let hits: HashSet<(usize, &'static str)> = keywords::unshadowed(matches)
            .into_iter()
            .map(|(_, hit)| hit)
            .collect();

        let hits_in = |index: usize, phrases: &[Phrase]| -> Vec<&'static str> {
            phrases
                .iter()
                .filter(|p| hits.contains(&(index, p.text)))
                .map(|p| p.text)
                .collect()
        };

        CATEGORY_KEYWORDS
            .iter()
            .enumerate()
            .map(|(index, keywords)| {
                let primary_hits = hits_in(index, &keywords.primary);
                let secondary_hits = hits_in(index, &keywords.secondary);
                let score = primary_hits.len() as f64 * scoring.primary_weight
                    + secondary_hits.len() as f64 * scoring.secondary_weight;

                CategoryScore {
                    category: keywords.category,
                    primary_hits,
                    secondary_hits,
                    score,
                }
            })
            .collect()
    }

    /// Pick the highest non-zero score. Equal scores go to whichever category
    /// comes first in `priority`.
    pub fn select<'a>(
        scores: &'a [CategoryScore],
        priority: &[OpportunityType],
    ) -> Option<&'a CategoryScore> {
        let rank = |category: OpportunityType| {
            priority
                .iter()
                .position(|c| *c == category)
                .unwrap_or(priority.len())
        };

        scores
            .iter()
            .filter(|s| s.score > 0.0)
            .min_by(|a, b| {
                b.score
                    .total_cmp(&a.score)
                    .then_with(|| rank(a.category).cmp(&rank(b.category)))
            })
    }
}
