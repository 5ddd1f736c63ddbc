use anyhow::Context;
use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn completion_line(timestamp: DateTime<Utc>) -> String {
    format!("Agent test completed on {}", timestamp.format(TIMESTAMP_FORMAT))
}

/// Append one completion line to the run log, creating the file if needed.
pub fn append_completion<P: AsRef<Path>>(path: P, timestamp: DateTime<Utc>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open run log: {}", path.display()))?;
    writeln!(file, "{}", completion_line(timestamp))
        .with_context(|| format!("Failed to write run log: {}", path.display()))?;
    log::info!("Run recorded in {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_completion_line_format() {
        let timestamp = Utc.with_ymd_and_hms(2026, 10, 19, 6, 30, 0).unwrap();
        assert_eq!(
            completion_line(timestamp),
            "Agent test completed on 2026-10-19 06:30:00 UTC"
        );
    }

    #[test]
    fn test_append_adds_one_line_per_run() {
        let path = std::env::temp_dir().join(format!(
            "linkedin-scout-run-log-{}.txt",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();

        let first = Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2026, 10, 19, 6, 0, 0).unwrap();
        append_completion(&path, first).unwrap();
        append_completion(&path, second).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Agent test completed on 2026-10-18 06:00:00 UTC",
                "Agent test completed on 2026-10-19 06:00:00 UTC",
            ]
        );
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let result = append_completion("/nonexistent-dir/agent_log.txt", Utc::now());
        assert!(result.is_err());
    }
}
