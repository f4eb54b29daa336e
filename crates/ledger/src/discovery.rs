//! Sprint document discovery

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::entry::SprintNumber;

fn sprint_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^SPRINT-(\d+)\.md$").expect("valid sprint file pattern"))
}

/// Parse the sprint number out of a `SPRINT-NNN.md` file name
pub fn parse_sprint_file_name(name: &str) -> Option<SprintNumber> {
    let caps = sprint_file_pattern().captures(name)?;
    caps[1].parse().ok()
}

/// Find every `SPRINT-NNN.md` file in `dir`, returning sorted unique numbers.
///
/// Names that do not match the pattern are skipped, as are directories.
pub fn discover_sprints(dir: &Path) -> Result<Vec<SprintNumber>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read sprints directory: {}", dir.display()))?;

    let mut numbers = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        match parse_sprint_file_name(name) {
            Some(number) if !entry.path().is_dir() => numbers.push(number),
            _ => tracing::trace!(name, "skipping non-sprint entry"),
        }
    }

    numbers.sort();
    numbers.dedup();

    tracing::debug!(dir = %dir.display(), count = numbers.len(), "discovered sprints");
    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "# sprint\n").unwrap();
    }

    #[test]
    fn test_parse_file_name() {
        assert_eq!(parse_sprint_file_name("SPRINT-001.md"), Some(SprintNumber(1)));
        assert_eq!(parse_sprint_file_name("SPRINT-42.md"), Some(SprintNumber(42)));
        assert_eq!(parse_sprint_file_name("SPRINT-1000.md"), Some(SprintNumber(1000)));
    }

    #[test]
    fn test_parse_file_name_rejects_malformed() {
        assert_eq!(parse_sprint_file_name("SPRINT-abc.md"), None);
        assert_eq!(parse_sprint_file_name("SPRINT-.md"), None);
        assert_eq!(parse_sprint_file_name("SPRINT-001.txt"), None);
        assert_eq!(parse_sprint_file_name("sprint-001.md"), None);
        assert_eq!(parse_sprint_file_name("SPRINT-001.md.bak"), None);
        assert_eq!(parse_sprint_file_name("SPRINT-99999999999.md"), None);
    }

    #[test]
    fn test_discover_sorted_numeric() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "SPRINT-010.md");
        touch(dir.path(), "SPRINT-002.md");
        touch(dir.path(), "SPRINT-001.md");

        let found = discover_sprints(dir.path()).unwrap();
        assert_eq!(found, vec![SprintNumber(1), SprintNumber(2), SprintNumber(10)]);
    }

    #[test]
    fn test_discover_skips_other_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "SPRINT-003.md");
        touch(dir.path(), "SPRINT-draft.md");
        touch(dir.path(), "README.md");
        touch(dir.path(), "ledger.json");
        fs::create_dir(dir.path().join("SPRINT-004.md")).unwrap();

        let found = discover_sprints(dir.path()).unwrap();
        assert_eq!(found, vec![SprintNumber(3)]);
    }

    #[test]
    fn test_discover_dedups_same_number() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "SPRINT-7.md");
        touch(dir.path(), "SPRINT-007.md");

        let found = discover_sprints(dir.path()).unwrap();
        assert_eq!(found, vec![SprintNumber(7)]);
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(discover_sprints(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = discover_sprints(&dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("Failed to read sprints directory"));
    }
}
