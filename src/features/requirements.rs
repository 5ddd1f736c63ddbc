use crate::normalization::TextNormalizer;
use crate::opportunity::{RequirementCategory, Requirements};
use lazy_static::lazy_static;
use regex::Regex;

const TECHNOLOGIES: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "typescript",
    "php",
    "ruby",
    "golang",
    "rust",
    "swift",
    "kotlin",
    // Frameworks
    "react",
    "react native",
    "angular",
    "vue",
    "node.js",
    "nodejs",
    "django",
    "flask",
    "spring boot",
    "laravel",
    "flutter",
    "wordpress",
    "shopify",
    // Data stores
    "sql",
    "mysql",
    "postgresql",
    "postgres",
    "mongodb",
    "oracle",
    "elasticsearch",
    "snowflake",
    "bigquery",
    // Cloud
    "aws",
    "azure",
    "gcp",
    "google cloud",
    "cloud",
    // Data tooling
    "tableau",
    "power bi",
    "looker",
    "qlik",
    "grafana",
    "airflow",
    "kafka",
    "spark",
    // Integration styles
    "api",
    "rest api",
    "graphql",
    "microservices",
    // Mobile
    "mobile",
    "ios",
    "android",
];

lazy_static! {
    static ref TECHNOLOGY_REGEX: Regex = {
        // Longest names first so "react native" is not cut short at "react"
        let mut names: Vec<&str> = TECHNOLOGIES.to_vec();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
    };
    static ref BUDGET_REGEX: Regex = Regex::new(concat!(
        r"(?i)(?:[$€£¥]|\b(?:usd|eur|gbp)\s?)\s?\d+(?:,\d{3})*(?:\.\d+)?(?:\s?[km]\b)?",
        r"|\b\d+(?:,\d{3})*(?:\.\d+)?\s?k?\s?(?:usd|eur|gbp|dollars?|euros?|pounds)\b",
    ))
    .unwrap();
    static ref TIMELINE_REGEX: Regex = Regex::new(concat!(
        r"(?i)\b\d+(?:\s?-\s?\d+)?\s?(?:hours?|days?|weeks?|months?|years?)\b",
        r"|\b(?:this|next)\s(?:week|month|quarter|year)\b",
        r"|\bend\sof\s(?:the\s)?(?:week|month|quarter|year)\b",
        r"|\bwithin\s(?:a|one)\s(?:day|week|month)\b",
    ))
    .unwrap();
}

pub struct RequirementExtractor;

impl RequirementExtractor {
    /// Pull technologies, budget figures and timeframes out of the original text.
    ///
    /// Fragments keep their original spelling and order of appearance.
    /// Repeats are kept; categories without a fragment are left out. Link text
    /// is skipped.
    pub fn extract(original: &str) -> Requirements {
        let mut requirements = Requirements::new();
        let text = TextNormalizer::strip_urls(original);

        let extractors: [(RequirementCategory, &Regex); 3] = [
            (RequirementCategory::Technologies, &*TECHNOLOGY_REGEX),
            (RequirementCategory::Budget, &*BUDGET_REGEX),
            (RequirementCategory::Timeline, &*TIMELINE_REGEX),
        ];

        for (category, regex) in extractors {
            let fragments: Vec<String> = regex
                .find_iter(&text)
                .map(|m| m.as_str().trim().to_string())
                .collect();
            if !fragments.is_empty() {
                log::trace!("Extracted {} {}: {:?}", fragments.len(), category, fragments);
                requirements.insert(category, fragments);
            }
        }

        requirements
    }

    pub fn has_budget(requirements: &Requirements) -> bool {
        requirements
            .get(&RequirementCategory::Budget)
            .is_some_and(|fragments| !fragments.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(requirements: &Requirements, category: RequirementCategory) -> Vec<&str> {
        requirements
            .get(&category)
            .map(|v| v.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_empty_text_yields_empty_map() {
        assert!(RequirementExtractor::extract("").is_empty());
        assert!(RequirementExtractor::extract("Lovely weather today").is_empty());
    }

    #[test]
    fn test_budget_currency_prefixed() {
        let req = RequirementExtractor::extract("Budget $5000, maybe up to $7,500.50 or €3k");
        assert_eq!(
            fragments(&req, RequirementCategory::Budget),
            vec!["$5000", "$7,500.50", "€3k"]
        );
        assert!(RequirementExtractor::has_budget(&req));
    }

    #[test]
    fn test_budget_currency_suffixed() {
        let req = RequirementExtractor::extract("We can pay 5000 USD or 10k dollars");
        assert_eq!(
            fragments(&req, RequirementCategory::Budget),
            vec!["5000 USD", "10k dollars"]
        );
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let req = RequirementExtractor::extract("$500 for design, $500 for hosting");
        assert_eq!(fragments(&req, RequirementCategory::Budget), vec!["$500", "$500"]);
    }

    #[test]
    fn test_technologies_keep_original_spelling() {
        let req = RequirementExtractor::extract("Need React Native and Node.js, plus PostgreSQL");
        assert_eq!(
            fragments(&req, RequirementCategory::Technologies),
            vec!["React Native", "Node.js", "PostgreSQL"]
        );
    }

    #[test]
    fn test_technologies_whole_words_only() {
        let req = RequirementExtractor::extract("Javascript experts, not java beans");
        assert_eq!(
            fragments(&req, RequirementCategory::Technologies),
            vec!["Javascript", "java"]
        );
        let req = RequirementExtractor::extract("Rapid iteration");
        assert!(req.get(&RequirementCategory::Technologies).is_none());
    }

    #[test]
    fn test_link_text_is_not_extracted() {
        let req = RequirementExtractor::extract("Check this out https://example.com/mobile-app/api");
        assert!(req.is_empty());

        let req = RequirementExtractor::extract(
            "Python help, $300, see http://jobs.example.com/aws-kafka-3-weeks",
        );
        assert_eq!(fragments(&req, RequirementCategory::Technologies), vec!["Python"]);
        assert_eq!(fragments(&req, RequirementCategory::Budget), vec!["$300"]);
        assert!(req.get(&RequirementCategory::Timeline).is_none());
    }

    #[test]
    fn test_timeline_phrases() {
        let req = RequirementExtractor::extract(
            "Timeline 3 weeks, phase two in 2-3 months, kickoff next week, done by end of the quarter",
        );
        assert_eq!(
            fragments(&req, RequirementCategory::Timeline),
            vec!["3 weeks", "2-3 months", "next week", "end of the quarter"]
        );
    }

    #[test]
    fn test_unicode_text_does_not_break_extraction() {
        let req = RequirementExtractor::extract("Projekt für Ärzte 😀 Budget €2.000 in 4 Wochen");
        assert_eq!(fragments(&req, RequirementCategory::Budget), vec!["€2.000"]);
        assert!(req.get(&RequirementCategory::Timeline).is_none());
    }
}
