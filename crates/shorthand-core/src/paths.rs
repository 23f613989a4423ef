//! Standard paths used by gh-shorthand tools

use std::path::PathBuf;

/// File name of the user configuration, relative to the home directory
pub const CONFIG_FILE_NAME: &str = ".gh-shorthand.yml";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "GH_SHORTHAND_CONFIG";

/// Standard gh-shorthand paths
pub struct Paths {
    /// Home directory (~)
    pub home: PathBuf,
    /// Config file (~/.gh-shorthand.yml)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));

        // GH_SHORTHAND_CONFIG wins over the home directory default
        let config = match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => expand_path(&path),
            _ => home.join(CONFIG_FILE_NAME),
        };

        Self { home, config }
    }
}

/// Expand ~ and environment variables in a path
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test touching GH_SHORTHAND_CONFIG, so nothing races on it
    #[test]
    fn test_config_env_override() {
        std::env::set_var(CONFIG_ENV_VAR, "/etc/gh-shorthand.yml");
        assert_eq!(Paths::new().config, PathBuf::from("/etc/gh-shorthand.yml"));

        std::env::set_var(CONFIG_ENV_VAR, "~/x.yml");
        let config = Paths::new().config;
        assert!(!config.to_string_lossy().starts_with('~'));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config, home.join("x.yml"));
        }

        // blank values fall back to the home directory default
        std::env::set_var(CONFIG_ENV_VAR, "  ");
        let paths = Paths::new();
        assert_eq!(paths.config, paths.home.join(CONFIG_FILE_NAME));

        std::env::remove_var(CONFIG_ENV_VAR);
        let paths = Paths::new();
        assert_eq!(paths.config, paths.home.join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(
            expand_path("/etc/gh-shorthand.yml"),
            PathBuf::from("/etc/gh-shorthand.yml")
        );
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_path("~/.gh-shorthand.yml");
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with(".gh-shorthand.yml"));
    }
}
