use crate::keywords::{self, URGENCY_KEYWORDS};
use crate::opportunity::UrgencyLevel;

pub struct UrgencyDetector;

impl UrgencyDetector {
    /// Derive the urgency level from normalized text.
    ///
    /// Every phrase occurrence is collected first; one lying inside a longer
    /// occurrence is dropped, so "not urgent" reads as Low and "as soon as
    /// possible" does not also count as "soon". The highest surviving level
    /// wins. Nothing matching means `Unknown`.
    pub fn detect(normalized: &str) -> UrgencyLevel {
        Self::signals(normalized)
            .into_iter()
            .map(|(level, _)| level)
            .max_by_key(|level| level.rank())
            .unwrap_or(UrgencyLevel::Unknown)
    }

    /// Surviving urgency phrases in order of appearance.
    pub fn signals(normalized: &str) -> Vec<(UrgencyLevel, &'static str)> {
        let mut matches = Vec::new();
        for table in URGENCY_KEYWORDS.iter() {
            for phrase in &table.phrases {
                for span in phrase.spans(normalized) {
                    matches.push((span, (table.level, phrase.text)));
                }
            }
        }

        let surviving = keywords::unshadowed(matches);
        for (_, (level, phrase)) in &surviving {
            log::trace!("Urgency signal '{}' -> {}", phrase, level);
        }

        surviving.into_iter().map(|(_, signal)| signal).collect()
    }
}
