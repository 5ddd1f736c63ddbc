//! Fixed posts the scheduled run classifies.

pub const SAMPLE_POSTS: &[&str] = &[
    "Looking for a data visualization expert to create interactive dashboards for our sales team. Need someone with Tableau or Power BI experience. Budget around $5k, timeline 3 weeks.",
    "Hey everyone! Our startup needs help building a mobile app for iOS and Android. We're looking for a React Native developer who can work with our existing API. Anyone have recommendations?",
    "Urgent: Need data integration specialist ASAP! We have multiple databases that need to sync in real-time. Experience with ETL processes required. Please DM if interested.",
    "Planning to build a new website for our consulting firm. Need full-stack developer with modern framework experience. Not urgent, just exploring options.",
    "Can someone recommend a good restaurant in downtown? Thanks!",
];
