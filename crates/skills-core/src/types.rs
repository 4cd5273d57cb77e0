//! Core type definitions for skill discovery.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The `name` and `description` declared in a `SKILL.md` header.
///
/// Empty strings mean the key was absent or the file could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillHeader {
    /// Declared skill name.
    pub name: String,
    /// Declared skill description.
    pub description: String,
}

/// One skill found on disk.
///
/// Records are built fresh on every scan and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    /// Directory containing the skill file.
    pub path: PathBuf,

    /// Path of the `SKILL.md` file itself.
    pub skill_file: PathBuf,

    /// Declared name, or the directory's base name when none is declared.
    pub name: String,

    /// Declared description, or empty.
    pub description: String,

    /// Caller-supplied label naming the root this skill was found under.
    pub source_type: String,
}

impl SkillRecord {
    /// Builds a record from a parsed header, applying the name fallback.
    pub(crate) fn from_header(
        path: PathBuf,
        skill_file: PathBuf,
        dir_name: &str,
        header: SkillHeader,
        source_type: &str,
    ) -> Self {
        let name = if header.name.is_empty() {
            dir_name.to_string()
        } else {
            header.name
        };
        Self {
            path,
            skill_file,
            name,
            description: header.description,
            source_type: source_type.to_string(),
        }
    }
}
