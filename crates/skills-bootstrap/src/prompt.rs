//! Skill list injection into a host's system prompt.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::discover::{SkillSummary, discover_skills};
use crate::error::Result;

/// Heading placed above the skill list when none is configured.
pub const DEFAULT_HEADING: &str = "**Available skills:**";

/// Renders skills as a bulleted block under [`DEFAULT_HEADING`].
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn render_skill_list(skills: &[SkillSummary]) -> Option<String> {
    render_skill_list_with_heading(DEFAULT_HEADING, skills)
}

/// Renders skills as one `- **name**: description` line each, below
/// `heading`, in the order given.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use skills_bootstrap::{SkillSummary, render_skill_list_with_heading};
///
/// let skills = [SkillSummary {
///     name: "review".to_string(),
///     description: "Use when reviewing".to_string(),
/// }];
/// assert_eq!(
///     render_skill_list_with_heading("Skills:", &skills).as_deref(),
///     Some("Skills:\n- **review**: Use when reviewing"),
/// );
/// ```
#[must_use]
pub fn render_skill_list_with_heading(heading: &str, skills: &[SkillSummary]) -> Option<String> {
    if skills.is_empty() {
        return None;
    }

    let lines: Vec<String> = skills
        .iter()
        .map(|s| format!("- **{}**: {}", s.name, s.description))
        .collect();
    Some(format!("{heading}\n{}", lines.join("\n")))
}

/// Where to find plugin skills and how to title them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Root holding one directory per plugin.
    pub plugins_dir: PathBuf,

    /// Heading above the list; [`DEFAULT_HEADING`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

/// The host's mutable system-prompt output for one chat turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemOutput {
    /// System prompt fragments, in order.
    #[serde(default)]
    pub system: Vec<String>,
}

/// Builds the skill block and appends it to the host's system prompt.
///
/// Holds no state between turns: every call rescans the plugins directory.
#[derive(Debug, Clone)]
pub struct SkillPrompt {
    config: PromptConfig,
}

impl SkillPrompt {
    /// Creates a prompt over `plugins_dir` with the default heading.
    pub fn new(plugins_dir: impl Into<PathBuf>) -> Self {
        Self::from_config(PromptConfig {
            plugins_dir: plugins_dir.into(),
            heading: None,
        })
    }

    /// Creates a prompt from a loaded config.
    pub fn from_config(config: PromptConfig) -> Self {
        Self { config }
    }

    /// Replaces the heading.
    #[must_use]
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.config.heading = Some(heading.into());
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Scans the plugins directory and renders the skill block.
    ///
    /// # Errors
    ///
    /// Propagates any [`discover_skills`] failure.
    pub fn content(&self) -> Result<Option<String>> {
        let skills = discover_skills(&self.config.plugins_dir)?;
        let heading = self.config.heading.as_deref().unwrap_or(DEFAULT_HEADING);
        Ok(render_skill_list_with_heading(heading, &skills))
    }

    /// Appends the skill block to `output.system`; a no-op when there are
    /// no skills.
    ///
    /// # Errors
    ///
    /// Propagates any [`discover_skills`] failure; `output` is left untouched.
    pub fn transform(&self, output: &mut SystemOutput) -> Result<()> {
        if let Some(block) = self.content()? {
            tracing::debug!(bytes = block.len(), "injecting skill list");
            output.system.push(block);
        }
        Ok(())
    }
}
