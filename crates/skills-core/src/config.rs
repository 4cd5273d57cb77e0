//! Discovery options.

use serde::{Deserialize, Serialize};

/// File name that marks a directory as a skill.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Default number of directory levels walked below a skills root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Options controlling a skills scan.
///
/// Deserializes from a partial table, so a host config can embed it and
/// only override what it needs:
///
/// ```
/// use skills_core::LocateOptions;
///
/// let options: LocateOptions = serde_json::from_str("{}").unwrap();
/// assert_eq!(options.max_depth, skills_core::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocateOptions {
    /// Deepest directory level (0 = the root itself) whose subdirectories
    /// are still checked for skills.
    pub max_depth: usize,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LocateOptions {
    /// Returns options with the given depth bound.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_is_three() {
        assert_eq!(LocateOptions::default().max_depth, 3);
    }

    #[test]
    fn deserializes_partial_config() {
        let options: LocateOptions = serde_json::from_str(r#"{"max_depth": 1}"#).unwrap();
        assert_eq!(options, LocateOptions::with_max_depth(1));

        let options: LocateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, LocateOptions::default());
    }
}
