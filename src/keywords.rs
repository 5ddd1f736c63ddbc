//! Built-in phrase tables. Compiled once per process and read-only afterwards.
//!
//! All phrases are lower-case and are matched against normalized text as whole
//! words, so "etl" fires on "ETL pipeline" but not on "settle".

use crate::opportunity::{OpportunityType, UrgencyLevel};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Reverse;

const DATA_INTEGRATION_PRIMARY: &[&str] = &[
    "data integration",
    "data pipeline",
    "etl",
    "data migration",
    "api integration",
    "database sync",
    "data warehousing",
    "data warehouse",
    "data consolidation",
    "system integration",
    "data flow",
];

const DATA_INTEGRATION_SECONDARY: &[&str] = &[
    "connect systems",
    "merge data",
    "automate data",
    "real-time data",
    "data sync",
    "import data",
    "export data",
    "integrate",
    "integration",
];

const DATA_VISUALIZATION_PRIMARY: &[&str] = &[
    "data visualization",
    "dashboard",
    "dashboards",
    "reporting",
    "analytics",
    "charts",
    "graphs",
    "business intelligence",
    "bi tool",
    "data analysis",
    "metrics",
    "kpi dashboard",
];

const DATA_VISUALIZATION_SECONDARY: &[&str] = &[
    "visualize data",
    "show data",
    "data insights",
    "performance tracking",
    "report automation",
    "tableau",
    "power bi",
    "looker",
    "data studio",
];

const WEB_DEVELOPMENT_PRIMARY: &[&str] = &[
    "website",
    "web development",
    "web developer",
    "web app",
    "web application",
    "frontend",
    "backend",
    "full stack",
    "full-stack",
    "responsive design",
    "web portal",
    "landing page",
    "e-commerce",
];

const WEB_DEVELOPMENT_SECONDARY: &[&str] = &[
    "create site",
    "web solution",
    "online presence",
    "web platform",
    "cms",
    "wordpress",
    "react",
    "angular",
    "vue",
    "django",
    "flask",
];

const APP_DEVELOPMENT_PRIMARY: &[&str] = &[
    "mobile app",
    "app development",
    "ios app",
    "android app",
    "application development",
    "native app",
    "cross platform",
    "cross-platform",
    "flutter",
    "react native",
    "swift",
    "kotlin",
];

const APP_DEVELOPMENT_SECONDARY: &[&str] = &[
    "build app",
    "build an app",
    "create application",
    "mobile solution",
    "app store",
    "play store",
    "mobile platform",
    "app developer",
    "mobile developer",
];

const HIRING_PHRASES: &[&str] = &[
    "looking for",
    "need help",
    "seeking",
    "require",
    "requires",
    "required",
    "want to hire",
    "hiring",
    "need assistance",
    "help needed",
    "recommendations for",
    "anyone know",
    "suggestions for",
    "advice on",
    "expertise in",
    "consultant",
    "freelancer",
    "agency",
    "developer",
    "developers",
    "specialist",
    "outsource",
    "contract",
    "project",
    "budget for",
    "quote for",
];

const HIGH_URGENCY_PHRASES: &[&str] = &[
    "urgent",
    "urgently",
    "asap",
    "immediately",
    "emergency",
    "right away",
    "as soon as possible",
];

const MEDIUM_URGENCY_PHRASES: &[&str] = &[
    "soon",
    "quickly",
    "this month",
    "next month",
    "few weeks",
    "couple of weeks",
    "upcoming",
    "deadline",
    "priority",
];

// Explicit statements that there is no time pressure. "not urgent" is listed so
// it shadows the "urgent" it contains.
const LOW_URGENCY_PHRASES: &[&str] = &[
    "no rush",
    "not urgent",
    "no hurry",
    "not in a hurry",
    "long-term",
    "long term",
    "eventually",
    "in the future",
    "thinking about",
    "considering",
    "exploring options",
];

/// Byte range `(start, end)` of a match in normalized text.
pub type Span = (usize, usize);

/// A phrase compiled into a whole-word matcher.
#[derive(Debug, Clone)]
pub struct Phrase {
    pub text: &'static str,
    regex: Regex,
}

impl Phrase {
    pub fn new(text: &'static str) -> Self {
        let pattern = format!(r"\b{}\b", regex::escape(text));
        Self {
            text,
            regex: Regex::new(&pattern).unwrap(),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Byte ranges of every occurrence, left to right.
    pub fn spans<'h>(&'h self, haystack: &'h str) -> impl Iterator<Item = Span> + 'h {
        self.regex.find_iter(haystack).map(|m| (m.start(), m.end()))
    }
}

/// Drop every match lying inside a longer match, keeping the rest ordered by
/// position. One sort plus one sweep, so long posts stay cheap.
pub fn unshadowed<T>(mut matches: Vec<(Span, T)>) -> Vec<(Span, T)> {
    matches.sort_by_key(|((start, end), _)| (*start, Reverse(*end)));

    // Span reaching furthest right among those already seen; every one of
    // them starts at or before the current match.
    let mut reach: Option<Span> = None;
    let mut surviving = Vec::with_capacity(matches.len());
    for (span, value) in matches {
        let (start, end) = span;
        let shadowed = match reach {
            Some((reach_start, reach_end)) => {
                reach_end > end || (reach_end == end && reach_start < start)
            }
            None => false,
        };
        if reach.map_or(true, |(_, reach_end)| end > reach_end) {
            reach = Some(span);
        }
        if !shadowed {
            surviving.push((span, value));
        }
    }
    surviving
}

fn compile(phrases: &'static [&'static str]) -> Vec<Phrase> {
    phrases.iter().copied().map(Phrase::new).collect()
}

pub struct CategoryKeywords {
    pub category: OpportunityType,
    pub primary: Vec<Phrase>,
    pub secondary: Vec<Phrase>,
}

impl CategoryKeywords {
    fn new(
        category: OpportunityType,
        primary: &'static [&'static str],
        secondary: &'static [&'static str],
    ) -> Self {
        Self {
            category,
            primary: compile(primary),
            secondary: compile(secondary),
        }
    }
}

pub struct UrgencyKeywords {
    pub level: UrgencyLevel,
    pub phrases: Vec<Phrase>,
}

lazy_static! {
    pub static ref CATEGORY_KEYWORDS: Vec<CategoryKeywords> = vec![
        CategoryKeywords::new(
            OpportunityType::DataIntegration,
            DATA_INTEGRATION_PRIMARY,
            DATA_INTEGRATION_SECONDARY,
        ),
        CategoryKeywords::new(
            OpportunityType::DataVisualization,
            DATA_VISUALIZATION_PRIMARY,
            DATA_VISUALIZATION_SECONDARY,
        ),
        CategoryKeywords::new(
            OpportunityType::WebDevelopment,
            WEB_DEVELOPMENT_PRIMARY,
            WEB_DEVELOPMENT_SECONDARY,
        ),
        CategoryKeywords::new(
            OpportunityType::AppDevelopment,
            APP_DEVELOPMENT_PRIMARY,
            APP_DEVELOPMENT_SECONDARY,
        ),
    ];
    pub static ref HIRING_INDICATORS: Vec<Phrase> = compile(HIRING_PHRASES);
    pub static ref URGENCY_KEYWORDS: Vec<UrgencyKeywords> = vec![
        UrgencyKeywords {
            level: UrgencyLevel::High,
            phrases: compile(HIGH_URGENCY_PHRASES),
        },
        UrgencyKeywords {
            level: UrgencyLevel::Medium,
            phrases: compile(MEDIUM_URGENCY_PHRASES),
        },
        UrgencyKeywords {
            level: UrgencyLevel::Low,
            phrases: compile(LOW_URGENCY_PHRASES),
        },
    ];
}

pub fn keywords_for(category: OpportunityType) -> Option<&'static CategoryKeywords> {
    CATEGORY_KEYWORDS.iter().find(|k| k.category == category)
}

/// Hiring phrases present in normalized text, in table order.
pub fn hiring_indicators(normalized: &str) -> Vec<&'static str> {
    HIRING_INDICATORS
        .iter()
        .filter(|p| p.is_match(normalized))
        .map(|p| p.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> Vec<&'static [&'static str]> {
        vec![
            DATA_INTEGRATION_PRIMARY,
            DATA_INTEGRATION_SECONDARY,
            DATA_VISUALIZATION_PRIMARY,
            DATA_VISUALIZATION_SECONDARY,
            WEB_DEVELOPMENT_PRIMARY,
            WEB_DEVELOPMENT_SECONDARY,
            APP_DEVELOPMENT_PRIMARY,
            APP_DEVELOPMENT_SECONDARY,
            HIRING_PHRASES,
            HIGH_URGENCY_PHRASES,
            MEDIUM_URGENCY_PHRASES,
            LOW_URGENCY_PHRASES,
        ]
    }

    #[test]
    fn test_phrases_are_normalized_words() {
        for table in all_tables() {
            for phrase in table {
                assert_eq!(*phrase, phrase.to_lowercase(), "{phrase} not lower-case");
                assert_eq!(*phrase, phrase.trim(), "{phrase} has padding");
                let first = phrase.chars().next().unwrap();
                let last = phrase.chars().last().unwrap();
                assert!(
                    first.is_alphanumeric() && last.is_alphanumeric(),
                    "{phrase} must start and end with a word character"
                );
            }
        }
    }

    #[test]
    fn test_every_category_has_keywords() {
        for category in OpportunityType::CATEGORIES {
            let keywords = keywords_for(category).unwrap();
            assert!(!keywords.primary.is_empty());
            assert!(!keywords.secondary.is_empty());
        }
        assert!(keywords_for(OpportunityType::None).is_none());
    }

    #[test]
    fn test_whole_word_matching() {
        let etl = Phrase::new("etl");
        assert!(etl.is_match("we need an etl pipeline"));
        assert!(etl.is_match("etl"));
        assert!(!etl.is_match("please settle the invoice"));

        let long_term = Phrase::new("long-term");
        assert!(long_term.is_match("a long-term engagement"));
    }

    #[test]
    fn test_spans_in_order() {
        let phrase = Phrase::new("soon");
        let spans: Vec<_> = phrase.spans("soon, very soon").collect();
        assert_eq!(spans, vec![(0, 4), (11, 15)]);
    }

    #[test]
    fn test_secondary_phrases_do_not_contain_primary_ones() {
        // A secondary phrase wrapping a primary one would shadow it and lower the score
        for keywords in CATEGORY_KEYWORDS.iter() {
            for secondary in &keywords.secondary {
                for primary in &keywords.primary {
                    assert!(
                        !primary.is_match(secondary.text),
                        "{} contains {}",
                        secondary.text,
                        primary.text
                    );
                }
            }
        }
    }

    #[test]
    fn test_contained_matches_are_dropped() {
        let matches = vec![
            ((10, 16), "urgent"),
            ((0, 4), "soon"),
            ((6, 16), "not urgent"),
            ((6, 16), "duplicate"),
            ((12, 20), "overlap"),
        ];
        let surviving: Vec<&str> = unshadowed(matches).into_iter().map(|(_, v)| v).collect();
        assert_eq!(surviving, vec!["soon", "not urgent", "duplicate", "overlap"]);
    }

    #[test]
    fn test_shadowing_scales_to_long_input() {
        let matches: Vec<(Span, usize)> = (0..200_000).map(|i| ((i * 5, i * 5 + 4), i)).collect();
        let start = std::time::Instant::now();
        let surviving = unshadowed(matches);
        assert_eq!(surviving.len(), 200_000);
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_hiring_indicators() {
        let found = hiring_indicators("we are looking for a freelancer");
        assert_eq!(found, vec!["looking for", "freelancer"]);
        assert!(hiring_indicators("lovely weather today").is_empty());
    }
}
