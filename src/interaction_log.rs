//! Append-only text log of every query and the output it produced
//!
//! Each record is a block of the form:
//!
//! ```text
//! 2026-10-14 09:30:00
//! INPUT:
//! <query>
//! OUTPUT:
//! <output>
//! ----------------------------------------
//! ```
//!
//! The file is opened in append mode for each record and closed again.
//! There is no locking and no rotation.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File written when no path is configured
pub const DEFAULT_LOG_PATH: &str = "ai_log.txt";

/// Local-time format of the record header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the dashed line closing each record
pub const SEPARATOR_WIDTH: usize = 40;

/// Render one record
pub fn format_record(timestamp: &str, query: &str, output: &str) -> String {
    format!(
        "{timestamp}\nINPUT:\n{query}\nOUTPUT:\n{output}\n{}\n",
        "-".repeat(SEPARATOR_WIDTH)
    )
}

#[derive(Clone, Debug)]
pub struct InteractionLog {
    path: PathBuf,
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl InteractionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record stamped with the current local time
    pub fn log(&self, query: &str, output: &str) -> std::io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.append(&format_record(&timestamp, query, output))
    }

    fn append(&self, record: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        debug!("Appended {} bytes to {:?}", record.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_format_record() {
        let record = format_record("2026-10-14 09:30:00", "hello", "Hi*&$x!@^y");
        assert_eq!(
            record,
            "2026-10-14 09:30:00\nINPUT:\nhello\nOUTPUT:\nHi*&$x!@^y\n----------------------------------------\n"
        );
    }

    #[test]
    fn test_log_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = InteractionLog::new(dir.path().join("ai_log.txt"));
        assert!(!log.path().exists());

        log.log("q", "a").unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let header = contents.lines().next().unwrap();
        assert!(NaiveDateTime::parse_from_str(header, TIMESTAMP_FORMAT).is_ok());
        assert!(contents.ends_with("INPUT:\nq\nOUTPUT:\na\n----------------------------------------\n"));
    }

    #[test]
    fn test_log_appends_in_call_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = InteractionLog::new(dir.path().join("ai_log.txt"));

        for i in 0..5 {
            log.log(&format!("query {i}"), &format!("output {i}")).unwrap();
        }

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let blocks: Vec<&str> = contents
            .split_terminator(&format!("{separator}\n"))
            .collect();
        assert_eq!(blocks.len(), 5);
        for (i, block) in blocks.iter().enumerate() {
            let lines: Vec<&str> = block.lines().skip(1).collect();
            let query = format!("query {i}");
            let output = format!("output {i}");
            assert_eq!(lines, vec!["INPUT:", query.as_str(), "OUTPUT:", output.as_str()]);
        }
    }

    #[test]
    fn test_log_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ai_log.txt");
        std::fs::write(&path, "earlier\n").unwrap();

        InteractionLog::new(&path).log("q", "a").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("earlier\n"));
    }

    #[test]
    fn test_log_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let log = InteractionLog::new(dir.path().join("missing").join("ai_log.txt"));
        assert!(log.log("q", "a").is_err());
    }
}
