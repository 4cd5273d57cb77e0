//! Frontmatter extraction for `SKILL.md` files.
//!
//! Skill headers are a flat list of `key: value` lines between two `---`
//! lines at the top of the file. Nothing here is a YAML parser: nesting,
//! lists and multi-line scalars are not recognized, and malformed lines are
//! skipped rather than reported.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::SkillHeader;

const DELIMITER: &str = "---";

const BOM: char = '\u{feff}';

/// `identifier: value` lines inside a header region.
static HEADER_FIELD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+):\s*(.*)$").ok());

/// Flat, insertion-ordered header fields.
///
/// A repeated key keeps the position of its first occurrence and the value
/// of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: Vec<(String, String)>,
}

impl Header {
    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `key` to `value`, replacing any earlier value in place.
    pub fn insert(&mut self, key: String, value: String) {
        match self.fields.iter().position(|(k, _)| *k == key) {
            Some(idx) => self.fields[idx].1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Iterates over fields in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no header fields were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parsed frontmatter result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Header fields; empty when no header block was recognized.
    pub header: Header,
    /// The text after the header block, or the whole input.
    pub body: &'a str,
}

/// Splits content into header fields and body.
///
/// The header is recognized only when the text starts with a `---` line
/// and a later line is exactly `---` followed by a newline. Otherwise the
/// header is empty and the body is the input unchanged.
///
/// Each header line is split at its first colon. Values are trimmed and
/// lose one surrounding `"` or `'` on each side. Lines without a colon, or
/// starting with one, are ignored.
///
/// # Examples
///
/// ```
/// use skills_core::parse_frontmatter;
///
/// let parsed = parse_frontmatter("---\nname: review\ndescription: \"Use when reviewing\"\n---\n# Body\n");
/// assert_eq!(parsed.header.get("description"), Some("Use when reviewing"));
/// assert_eq!(parsed.body, "# Body\n");
/// ```
#[must_use]
pub fn parse_frontmatter(content: &str) -> Frontmatter<'_> {
    match split_header(content) {
        Some((raw, body)) => Frontmatter {
            header: parse_fields(raw),
            body,
        },
        None => Frontmatter {
            header: Header::default(),
            body: content,
        },
    }
}

fn split_header(content: &str) -> Option<(&str, &str)> {
    let after_opener = content.strip_prefix("---\n")?;
    if let Some(body) = after_opener.strip_prefix("---\n") {
        return Some(("", body));
    }
    let closer = "\n---\n";
    let pos = after_opener.find(closer)?;
    Some((&after_opener[..pos], &after_opener[pos + closer.len()..]))
}

fn parse_fields(raw: &str) -> Header {
    let mut header = Header::default();
    for line in raw.split('\n') {
        let Some(colon) = line.find(':') else {
            continue;
        };
        if colon == 0 {
            continue;
        }
        let key = line[..colon].trim();
        let value = unquote(line[colon + 1..].trim());
        header.insert(key.to_string(), value.to_string());
    }
    header
}

fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

/// Reads `name` and `description` from a skill file's header.
///
/// Never fails: a missing, unreadable or non-UTF-8 file yields an empty
/// [`SkillHeader`], so one broken skill cannot abort a scan.
pub fn extract_frontmatter(path: impl AsRef<Path>) -> SkillHeader {
    let path = path.as_ref();
    match try_extract_frontmatter(path) {
        Ok(header) => header,
        Err(e) => {
            tracing::debug!(?path, %e, "using empty frontmatter");
            SkillHeader::default()
        }
    }
}

/// Reads `name` and `description` from a skill file's header.
///
/// The header region opens only when the first line is `---` and closes
/// at the next `---` line; an unclosed region runs to the end of the file.
/// Values are trimmed but not unquoted. Keys other than `name` and
/// `description` are ignored.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read as UTF-8 text.
pub fn try_extract_frontmatter(path: impl AsRef<Path>) -> Result<SkillHeader> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_header(&content))
}

fn scan_header(content: &str) -> SkillHeader {
    let mut header = SkillHeader::default();
    let content = content.strip_prefix(BOM).unwrap_or(content);
    let mut lines = content.lines();
    if lines.next().map(str::trim) != Some(DELIMITER) {
        return header;
    }

    for line in lines {
        if line.trim() == DELIMITER {
            break;
        }
        let Some(caps) = HEADER_FIELD.as_ref().and_then(|re| re.captures(line)) else {
            continue;
        };
        let value = caps[2].trim().to_string();
        match &caps[1] {
            "name" => header.name = value,
            "description" => header.description = value,
            _ => {}
        }
    }
    header
}

/// Removes a leading `---` header region and trims what remains.
///
/// When there is no header region (the first line is not `---`, or the
/// region never closes) the input is returned verbatim, untrimmed.
/// Later `---` lines in the body are kept.
///
/// # Examples
///
/// ```
/// use skills_core::strip_frontmatter;
///
/// assert_eq!(strip_frontmatter("---\nname: x\n---\n\n# Body\n"), "# Body");
/// assert_eq!(strip_frontmatter("plain text\n"), "plain text\n");
/// ```
#[must_use]
pub fn strip_frontmatter(content: &str) -> String {
    match header_end(content) {
        Some(offset) => content[offset..].trim().to_string(),
        None => content.to_string(),
    }
}

/// Byte offset just past the line that closes a leading header region.
fn header_end(content: &str) -> Option<usize> {
    let unmarked = content.strip_prefix(BOM).unwrap_or(content);
    let mut lines = unmarked.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim() != DELIMITER {
        return None;
    }

    let mut offset = content.len() - unmarked.len() + first.len();
    for line in lines {
        offset += line.len();
        if line.trim() == DELIMITER {
            return Some(offset);
        }
    }
    None
}
