use clap::{Arg, ArgMatches, Command};
use linkedin_scout::demo::SAMPLE_POSTS;
use linkedin_scout::run_log;
use linkedin_scout::{AnalysisResult, ClassifierConfig, OpportunityClassifier};
use log::LevelFilter;
use std::process;

#[derive(Debug, PartialEq)]
enum PostSource {
    Text(String),
    File(String),
    Demo,
}

fn main() {
    let matches = cli().get_matches();

    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = level_override(matches.get_flag("verbose"), rust_log_set) {
        logger.filter_level(level);
    }
    logger.init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration: {e:#}");
                process::exit(1);
            }
        },
        None => ClassifierConfig::default(),
    };

    let classifier = match OpportunityClassifier::with_config(config) {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Invalid configuration: {e:#}");
            process::exit(1);
        }
    };

    let posts: Vec<String> = match post_source(&matches) {
        PostSource::Text(text) => vec![text],
        PostSource::File(path) => match std::fs::read_to_string(&path) {
            Ok(content) => vec![content],
            Err(e) => {
                eprintln!("❌ Error reading post file {path}: {e}");
                process::exit(1);
            }
        },
        PostSource::Demo => {
            log::info!("Analyzing {} sample posts", SAMPLE_POSTS.len());
            SAMPLE_POSTS.iter().map(|p| p.to_string()).collect()
        }
    };

    let results: Vec<AnalysisResult> = posts.iter().map(|p| classifier.analyze(p)).collect();
    let opportunities = results.iter().filter(|r| r.is_opportunity()).count();
    log::info!(
        "Analyzed {} post(s), {} opportunity(ies) found",
        results.len(),
        opportunities
    );

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing results: {e}");
                process::exit(1);
            }
        }
    } else {
        print_report(&posts, &results);
    }

    if let Some(log_path) = matches.get_one::<String>("log-file") {
        if let Err(e) = run_log::append_completion(log_path, chrono::Utc::now()) {
            eprintln!("Error writing run log: {e:#}");
            process::exit(1);
        }
    }
}

fn cli() -> Command {
    Command::new("linkedin-scout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flags LinkedIn posts that look like IT service opportunities")
        .long_about("linkedin-scout classifies post text into data integration, data visualization,\n\
                    web development and app development opportunities, scores confidence and\n\
                    urgency, extracts technologies, budgets and timelines, and suggests a reply.")
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .value_name("TEXT")
                .help("Analyze the given post text")
                .conflicts_with_all(["file", "demo"])
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Analyze the post text stored in a file")
                .conflicts_with("demo")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Analyze the built-in sample posts (default when no input is given)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Scoring configuration file path (YAML)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Write the default scoring configuration and exit")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Append a completion line to this run log")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-signal details")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Level forced by the command line. `RUST_LOG` takes precedence when set.
fn level_override(verbose: bool, rust_log_set: bool) -> Option<LevelFilter> {
    if rust_log_set {
        None
    } else if verbose {
        Some(LevelFilter::Debug)
    } else {
        Some(LevelFilter::Info)
    }
}

fn post_source(matches: &ArgMatches) -> PostSource {
    if matches.get_flag("demo") {
        PostSource::Demo
    } else if let Some(text) = matches.get_one::<String>("text") {
        PostSource::Text(text.clone())
    } else if let Some(path) = matches.get_one::<String>("file") {
        PostSource::File(path.clone())
    } else {
        log::info!("No input given, falling back to the sample posts");
        PostSource::Demo
    }
}

fn load_config(path: &str) -> anyhow::Result<ClassifierConfig> {
    if std::path::Path::new(path).exists() {
        ClassifierConfig::from_file(path)
    } else {
        log::warn!("Configuration file '{path}' not found, using default configuration");
        Ok(ClassifierConfig::default())
    }
}

fn generate_default_config(path: &str) {
    let config = ClassifierConfig::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the weights and priority order to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e:#}");
            process::exit(1);
        }
    }
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

fn print_report(posts: &[String], results: &[AnalysisResult]) {
    println!("🔍 LinkedIn Opportunity Detection Results");
    println!("{}", "=".repeat(50));

    for (i, (post, result)) in posts.iter().zip(results).enumerate() {
        println!();
        println!("📝 Post {}: {}", i + 1, truncate_string(post.trim(), 100));

        if result.is_opportunity() {
            println!("🎯 Opportunity Type: {}", result.opportunity_type);
        } else {
            println!("➖ Opportunity Type: {}", result.opportunity_type);
        }
        println!("   Confidence Score: {:.2}", result.confidence_score);
        println!("   Urgency Level: {}", result.urgency_level);

        if !result.key_indicators.is_empty() {
            let shown: Vec<&str> = result
                .key_indicators
                .iter()
                .take(5)
                .map(|s| s.as_str())
                .collect();
            println!("   Key Indicators: {}", shown.join(", "));
        }

        for (category, fragments) in &result.extracted_requirements {
            println!("   Requirements ({}): {}", category, fragments.join(", "));
        }

        println!("   Suggested Response: {}", result.suggested_response);
        if !result.talking_points.is_empty() {
            println!("   Talking Points:");
            for point in result.talking_points.iter().take(3) {
                println!("     - {point}");
            }
        }
        println!("{}", "-".repeat(30));
    }
}
