#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`config`] - Discovery options and constants
//! - [`error`] - Error types
//! - [`frontmatter`] - `SKILL.md` header extraction
//! - [`locate`] - Recursive skill discovery
//! - [`types`] - Skill records

pub mod config;
pub mod error;
pub mod frontmatter;
pub mod locate;
pub mod types;

pub use config::{DEFAULT_MAX_DEPTH, LocateOptions, SKILL_FILE_NAME};
pub use error::{Error, Result};
pub use frontmatter::{
    Frontmatter, Header, extract_frontmatter, parse_frontmatter, strip_frontmatter,
    try_extract_frontmatter,
};
pub use locate::{SkillLocator, find_skills_in_dir, find_skills_to_depth};
pub use types::{SkillHeader, SkillRecord};
