use crate::opportunity::{OpportunityType, UrgencyLevel};
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const FALLBACK_RESPONSE: &str =
    "Thanks for sharing! If you ever need help with data, web or app projects, feel free to reach out.";

pub const LOW_CONFIDENCE_POINT: &str = "Low confidence opportunity - may not be relevant";

type ResponseKey = (OpportunityType, UrgencyLevel);

const RESPONSE_TEMPLATES: &[(ResponseKey, &str)] = &[
    (
        (OpportunityType::DataIntegration, UrgencyLevel::High),
        "Hi! We build and rescue data pipelines and can start on your integration right away. Could we jump on a call today to map your sources and targets?",
    ),
    (
        (OpportunityType::DataIntegration, UrgencyLevel::Medium),
        "Hi! Connecting systems and automating data flows is what we do. Happy to walk you through a recent ETL project and sketch a plan for your timeline.",
    ),
    (
        (OpportunityType::DataIntegration, UrgencyLevel::Low),
        "Hi! When you're ready to plan the integration, we'd be glad to share how we approach data warehousing and long-term pipeline maintenance.",
    ),
    (
        (OpportunityType::DataIntegration, UrgencyLevel::Unknown),
        "Hi! We specialise in data integration and ETL. Would you like to compare notes on the systems you need to connect?",
    ),
    (
        (OpportunityType::DataVisualization, UrgencyLevel::High),
        "Hi! We can turn your data into a working dashboard quickly. Can I send a few examples and book a short call today?",
    ),
    (
        (OpportunityType::DataVisualization, UrgencyLevel::Medium),
        "Hi! We design dashboards and BI reports that people actually use. Happy to share some examples and discuss your KPIs.",
    ),
    (
        (OpportunityType::DataVisualization, UrgencyLevel::Low),
        "Hi! Whenever you start planning your reporting, we'd love to help translate your business questions into clear visuals.",
    ),
    (
        (OpportunityType::DataVisualization, UrgencyLevel::Unknown),
        "Hi! Data visualization is our core work, from Tableau and Power BI to custom dashboards. Want to see a few examples?",
    ),
    (
        (OpportunityType::WebDevelopment, UrgencyLevel::High),
        "Hi! Our web team has availability now and can move fast on your site. Could we talk today about scope and launch date?",
    ),
    (
        (OpportunityType::WebDevelopment, UrgencyLevel::Medium),
        "Hi! We build responsive websites and web apps end to end. Happy to share our portfolio and a rough plan for your timeline.",
    ),
    (
        (OpportunityType::WebDevelopment, UrgencyLevel::Low),
        "Hi! When you're ready to move on the website, we'd be glad to help you explore options and pick the right stack.",
    ),
    (
        (OpportunityType::WebDevelopment, UrgencyLevel::Unknown),
        "Hi! We do full-stack web development. Would you like to see some recent projects similar to yours?",
    ),
    (
        (OpportunityType::AppDevelopment, UrgencyLevel::High),
        "Hi! We ship iOS and Android apps on tight schedules and can start immediately. Can we set up a quick call to go over requirements?",
    ),
    (
        (OpportunityType::AppDevelopment, UrgencyLevel::Medium),
        "Hi! We build native and cross-platform mobile apps. Happy to share store links to our work and plan around your launch window.",
    ),
    (
        (OpportunityType::AppDevelopment, UrgencyLevel::Low),
        "Hi! Whenever you're ready to start on the app, we'd be glad to help you weigh native against cross-platform approaches.",
    ),
    (
        (OpportunityType::AppDevelopment, UrgencyLevel::Unknown),
        "Hi! Mobile app development is our focus. Would you like to see a few apps we've shipped?",
    ),
];

lazy_static! {
    static ref RESPONSE_TABLE: HashMap<ResponseKey, &'static str> =
        RESPONSE_TEMPLATES.iter().copied().collect();
}

/// Canned reply for a classified post; `None` always gets the fallback.
pub fn suggested_response(opportunity: OpportunityType, urgency: UrgencyLevel) -> &'static str {
    RESPONSE_TABLE
        .get(&(opportunity, urgency))
        .copied()
        .unwrap_or(FALLBACK_RESPONSE)
}

fn approaches(opportunity: OpportunityType) -> &'static [&'static str] {
    match opportunity {
        OpportunityType::DataIntegration => &[
            "Highlight experience with ETL processes and data pipelines",
            "Mention specific integration tools (Zapier, MuleSoft, custom APIs)",
            "Showcase data warehousing and real-time processing capabilities",
        ],
        OpportunityType::DataVisualization => &[
            "Share portfolio of dashboard examples",
            "Mention expertise in Tableau, Power BI, or custom solutions",
            "Highlight ability to translate business needs into visual insights",
        ],
        OpportunityType::WebDevelopment => &[
            "Showcase relevant web development portfolio",
            "Mention technology stack expertise (React, Django, etc.)",
            "Emphasize responsive design and user experience",
        ],
        OpportunityType::AppDevelopment => &[
            "Share mobile app portfolio and app store links",
            "Mention cross-platform vs native development capabilities",
            "Highlight user-centric design approach",
        ],
        OpportunityType::None => &[],
    }
}

/// Angles for a reply. Empty for non-opportunities.
pub fn talking_points(
    opportunity: OpportunityType,
    urgency: UrgencyLevel,
    confidence: f64,
    floor: f64,
) -> Vec<String> {
    if opportunity == OpportunityType::None {
        return Vec::new();
    }
    if confidence < floor {
        return vec![LOW_CONFIDENCE_POINT.to_string()];
    }

    let mut points: Vec<String> = approaches(opportunity)
        .iter()
        .map(|p| p.to_string())
        .collect();
    if urgency == UrgencyLevel::High {
        points.push("Emphasize quick turnaround and availability".to_string());
        points.push("Mention agile development approach".to_string());
    }
    points
}
