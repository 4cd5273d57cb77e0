#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`discover`] - Plugin skill listing
//! - [`error`] - Error types
//! - [`frontmatter`] - Inline header parser
//! - [`prompt`] - System prompt injection

pub mod discover;
pub mod error;
pub mod frontmatter;
pub mod prompt;

pub use discover::{SKILLS_DIR_NAME, SkillSummary, discover_skills};
pub use error::{Error, Result};
pub use frontmatter::{ParsedDocument, extract_and_strip_frontmatter};
pub use prompt::{
    DEFAULT_HEADING, PromptConfig, SkillPrompt, SystemOutput, render_skill_list,
    render_skill_list_with_heading,
};
