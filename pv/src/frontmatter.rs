//! Frontmatter encoding and line-based extraction
//!
//! Prompt files carry a fixed-layout YAML frontmatter block followed by a
//! `# title` header and the body. Extraction is deliberately lenient: a
//! malformed block falls back to stem-derived titles and unmodified
//! content instead of raising an error.

use regex::Regex;

/// Metadata block written at the top of every saved prompt
#[derive(Debug, Clone)]
pub struct Frontmatter {
    pub title: String,
    /// Creation date, `YYYY-MM-DD`
    pub date: String,
    /// Sentinel tag first, then user tags in the order given
    pub tags: Vec<String>,
}

impl Frontmatter {
    /// Build a frontmatter block dated today (local time)
    pub fn new(title: &str, tags: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            tags,
        }
    }

    /// Render the full document: frontmatter block, `# title` header, body,
    /// trailing newline. The title is quoted verbatim.
    pub fn render(&self, body: &str) -> String {
        let mut lines = vec!["---".to_string()];
        lines.push(format!("title: \"{}\"", self.title));
        lines.push(format!("date: {}", self.date));
        lines.push("tags:".to_string());
        for tag in &self.tags {
            lines.push(format!("  - {}", tag));
        }
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push(format!("# {}", self.title));
        lines.push(String::new());
        lines.push(body.to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Extract the `title:` field from a leading frontmatter block.
///
/// Returns None when the content does not start with a frontmatter
/// delimiter or no title line matches.
pub fn extract_title(content: &str) -> Option<String> {
    if !content.starts_with("---") {
        return None;
    }
    let re = Regex::new(r#"(?m)^title:\s*["']?(.+?)["']?\s*$"#).ok()?;
    re.captures(content).map(|caps| caps[1].to_string())
}

/// Extract the body of a document: frontmatter removed, a leading `# `
/// header line dropped, surrounding whitespace trimmed.
///
/// Content without a well-formed three-part `---` split is used unmodified
/// (apart from the header strip and trim).
pub fn body(content: &str) -> String {
    let without_front = if content.starts_with("---") {
        let parts: Vec<&str> = content.splitn(3, "---").collect();
        if parts.len() == 3 { parts[2].trim() } else { content }
    } else {
        content
    };

    let remainder = match without_front.split_once('\n') {
        Some((first, rest)) if first.starts_with("# ") => rest,
        None if without_front.starts_with("# ") => "",
        _ => without_front,
    };

    remainder.trim().to_string()
}

/// First displayable line for `list` output: outside the frontmatter
/// block, not a `#` header, non-empty after trimming. Truncated to
/// `PREVIEW_WIDTH` characters with `...` appended only when longer.
pub fn preview(content: &str) -> String {
    let mut in_frontmatter = false;

    for line in content.lines() {
        if line.trim() == "---" {
            in_frontmatter = !in_frontmatter;
            continue;
        }
        if in_frontmatter || line.starts_with('#') {
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut preview: String = trimmed.chars().take(crate::PREVIEW_WIDTH).collect();
        if trimmed.chars().count() > crate::PREVIEW_WIDTH {
            preview.push_str("...");
        }
        return preview;
    }

    String::new()
}
