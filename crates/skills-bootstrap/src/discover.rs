//! Skill listing over a plugins directory.
//!
//! The expected layout is `<plugins>/<plugin>/skills/<skill>/SKILL.md`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frontmatter::extract_and_strip_frontmatter;

/// Directory inside each plugin that holds its skills.
pub const SKILLS_DIR_NAME: &str = "skills";

const SKILL_FILE: &str = "SKILL.md";

/// Name and description of one plugin skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSummary {
    /// Declared name, or the skill directory's name.
    pub name: String,
    /// Declared description, or empty.
    pub description: String,
}

/// Lists the skills of every plugin under `plugins_dir`.
///
/// Only `<plugin>/skills/<skill>/SKILL.md` is considered; there is no
/// deeper recursion. A skill without a declared name takes its directory
/// name. A missing `plugins_dir` gives an empty list, as does a plugin
/// without a `skills` directory.
///
/// # Errors
///
/// Returns [`Error::ListDir`] if a directory on the way cannot be listed,
/// and [`Error::Read`] if a `SKILL.md` cannot be read. Either aborts the
/// whole listing.
pub fn discover_skills(plugins_dir: impl AsRef<Path>) -> Result<Vec<SkillSummary>> {
    let plugins_dir = plugins_dir.as_ref();
    let mut skills = Vec::new();
    if !plugins_dir.exists() {
        return Ok(skills);
    }

    for (plugin, _) in list_dirs(plugins_dir)? {
        let skills_dir = plugin.join(SKILLS_DIR_NAME);
        if !skills_dir.exists() {
            tracing::debug!(?plugin, "plugin has no skills directory");
            continue;
        }
        collect_plugin_skills(&skills_dir, &mut skills)?;
    }

    Ok(skills)
}

fn collect_plugin_skills(skills_dir: &Path, skills: &mut Vec<SkillSummary>) -> Result<()> {
    for (dir, dir_name) in list_dirs(skills_dir)? {
        let skill_file = dir.join(SKILL_FILE);
        if !skill_file.exists() {
            continue;
        }
        let content = fs::read_to_string(&skill_file).map_err(|source| Error::Read {
            path: skill_file.clone(),
            source,
        })?;

        let doc = extract_and_strip_frontmatter(&content);
        let name = match doc.field("name") {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => dir_name,
        };
        let description = doc.field("description").unwrap_or_default().to_string();
        skills.push(SkillSummary { name, description });
    }
    Ok(())
}

fn list_dirs(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let err = |source: std::io::Error| Error::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(err)? {
        let entry = entry.map_err(err)?;
        if entry.file_type().map_err(err)?.is_dir() {
            dirs.push((
                entry.path(),
                entry.file_name().to_string_lossy().into_owned(),
            ));
        }
    }
    Ok(dirs)
}
