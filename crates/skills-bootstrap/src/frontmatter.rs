//! Inline frontmatter parser.
//!
//! Kept separate from `skills-core` so the bootstrap path loads without it.

/// A `SKILL.md` document split into header fields and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Header fields in source order; a repeated key updates in place.
    pub frontmatter: Vec<(String, String)>,
    /// Text after the header, or the whole input when there is none.
    pub content: String,
}

impl ParsedDocument {
    /// Returns the header value for `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.frontmatter
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some((_, existing)) = self.frontmatter.iter_mut().find(|(k, _)| k == key) {
            *existing = value.to_string();
        } else {
            self.frontmatter.push((key.to_string(), value.to_string()));
        }
    }
}

/// Splits `---\n<fields>\n---\n<body>` into fields and body.
///
/// Input that does not start with that shape comes back as an empty header
/// plus the original text.
#[must_use]
pub fn extract_and_strip_frontmatter(content: &str) -> ParsedDocument {
    let Some(rest) = content.strip_prefix("---\n") else {
        return unparsed(content);
    };

    let (fields, body) = if let Some(body) = rest.strip_prefix("---\n") {
        ("", body)
    } else if let Some(end) = rest.find("\n---\n") {
        (&rest[..end], &rest[end + "\n---\n".len()..])
    } else {
        return unparsed(content);
    };

    let mut doc = ParsedDocument {
        frontmatter: Vec::new(),
        content: body.to_string(),
    };
    for line in fields.split('\n') {
        match line.find(':') {
            Some(idx) if idx > 0 => {
                let value = trim_quotes(line[idx + 1..].trim());
                doc.set(line[..idx].trim(), value);
            }
            _ => {}
        }
    }
    doc
}

fn unparsed(content: &str) -> ParsedDocument {
    ParsedDocument {
        frontmatter: Vec::new(),
        content: content.to_string(),
    }
}

fn trim_quotes(value: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}
