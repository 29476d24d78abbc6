//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::MatchError;
use crate::system::System;
use anyhow::Result;
use std::path::Path;

/// Load and parse YAML configuration from file
///
/// Relative export paths are resolved against the directory holding the
/// configuration file, so a config can sit next to the exports it names.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The YAML is malformed
/// - The configuration is invalid
#[inline]
pub fn load_config(system: &dyn System, path: &str) -> Result<Config> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(MatchError::configuration(format!(
            "Configuration file not found: {path}\n\
            Create a cinematch.yaml file or pass the two people as arguments"
        ))
        .into());
    }

    let content = system.read_to_string(path_obj).map_err(|e| {
        MatchError::configuration(format!("Failed to read configuration file: {path}: {e}"))
    })?;

    let mut config: Config = serde_yaml::from_str(&content).map_err(|e| {
        MatchError::configuration(format!(
            "Failed to parse YAML configuration in file: {path}\n{e}"
        ))
    })?;

    if let Some(base) = path_obj.parent().filter(|p| !p.as_os_str().is_empty()) {
        for person in &mut config.people {
            if Path::new(&person.export).is_relative() {
                person.export = base.join(&person.export).display().to_string();
            }
        }
    }

    crate::config::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn load_valid_config() {
        let content = r"
people:
  - name: alice
    export: alice.zip
  - name: bob
    export: /data/bob.zip
layout:
  liked: likes/films.csv
";
        let system = MockSystem::new()
            .with_file("/cfg/cinematch.yaml", content.as_bytes())
            .unwrap();

        let config = load_config(&system, "/cfg/cinematch.yaml").unwrap();
        assert_eq!(config.people[0].export, "/cfg/alice.zip");
        assert_eq!(config.people[1].export, "/data/bob.zip");
        assert_eq!(config.layout.watched, "watched.csv");
    }

    #[test]
    fn load_nonexistent_file() {
        let err = load_config(&MockSystem::new(), "/nope.yaml").unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn malformed_yaml() {
        let system = MockSystem::new()
            .with_file("/c.yaml", b"people: [\n")
            .unwrap();
        let err = load_config(&system, "/c.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
        assert_eq!(err.downcast_ref::<MatchError>().unwrap().exit_code(), 2);
    }
}
