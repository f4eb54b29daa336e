//! Standard paths used by the ledger tool

use std::path::PathBuf;

/// Standard ledger paths
pub struct Paths {
    /// Config directory (~/.config/ledger)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("ledger");

        Self { config }
    }

    /// Get the path of the tool's config file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_under_config_dir() {
        let paths = Paths::new();
        let file = paths.config_file();
        assert!(file.starts_with(&paths.config));
        assert_eq!(file.file_name().unwrap(), "config.json");
        assert!(paths.config.ends_with("ledger"));
    }
}
