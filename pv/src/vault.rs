//! Prompt repository: recursive scan plus save/list/resolve operations
//!
//! The repository is just the set of `.md` files under the prompts root.
//! There is no index; every operation walks the tree again.

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::frontmatter::{self, Frontmatter};

/// A prompt as shown by `list`
#[derive(Debug, Clone)]
pub struct PromptEntry {
    /// Display title: frontmatter `title:` field, or the filename stem
    pub title: String,
    /// Path relative to the prompts root
    pub rel_path: PathBuf,
    /// First body line, truncated; empty when the body has none
    pub preview: String,
}

/// The prompt repository rooted at `<vault>/<prompts folder>`
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open the repository at the given prompts root. The directory is not
    /// created until the first save.
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save a prompt, silently overwriting any existing file at the same
    /// resolved path. Returns the absolute path written.
    pub fn save(&self, title: &str, content: &str, folder: Option<&str>, tags: &[String]) -> Result<PathBuf> {
        let target = match folder {
            Some(folder) => self.root.join(folder),
            None => self.root.clone(),
        };
        fs::create_dir_all(&target)
            .with_context(|| format!("Failed to create prompts folder: {}", target.display()))?;

        let path = target.join(format!("{}.md", sanitize_title(title)));
        let document = Frontmatter::new(title, tags.to_vec()).render(content);
        fs::write(&path, document).with_context(|| format!("Failed to write prompt: {}", path.display()))?;

        info!(path = %path.display(), "Saved prompt");
        Ok(path)
    }

    /// Collect every prompt under the root, optionally filtered by a
    /// case-insensitive substring match against content or filename stem.
    /// Sorted by relative path.
    pub fn list(&self, search: Option<&str>) -> Result<Vec<PromptEntry>> {
        let term = search.map(|s| s.to_lowercase());
        let mut entries = Vec::new();

        for path in self.walk()? {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read prompt: {}", path.display()))?;

            if let Some(term) = &term {
                let stem = file_stem(&path).to_lowercase();
                if !content.to_lowercase().contains(term) && !stem.contains(term) {
                    continue;
                }
            }

            let title = frontmatter::extract_title(&content).unwrap_or_else(|| file_stem(&path));
            let rel_path = path.strip_prefix(&self.root).unwrap_or(&path).to_path_buf();

            entries.push(PromptEntry {
                title,
                rel_path,
                preview: frontmatter::preview(&content),
            });
        }

        entries.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        debug!(count = entries.len(), "Listed prompts");
        Ok(entries)
    }

    /// Find a prompt by filename stem or frontmatter title, both matched
    /// case-insensitively.
    ///
    /// Single left-to-right scan in traversal order; for each file the stem
    /// is checked before the frontmatter title, and the first file matching
    /// either way ends the scan. Callers relying on stem matches taking
    /// priority across the whole tree will not get that: a title match on
    /// an earlier file wins over a stem match on a later one.
    pub fn resolve(&self, name: &str) -> Result<Option<PathBuf>> {
        let name = name.to_lowercase();

        for path in self.walk()? {
            if file_stem(&path).to_lowercase() == name {
                debug!(path = %path.display(), "Resolved prompt by stem");
                return Ok(Some(path));
            }

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read prompt: {}", path.display()))?;
            if let Some(title) = frontmatter::extract_title(&content)
                && title.to_lowercase() == name
            {
                debug!(path = %path.display(), "Resolved prompt by title");
                return Ok(Some(path));
            }
        }

        Ok(None)
    }

    /// Read a prompt file and return its body with the frontmatter block
    /// and leading header stripped
    pub fn read_body(&self, path: &Path) -> Result<String> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read prompt: {}", path.display()))?;
        Ok(frontmatter::body(&content))
    }

    /// Filename stems of every prompt in the repository, traversal order
    pub fn stems(&self) -> Result<Vec<String>> {
        Ok(self.walk()?.iter().map(|p| file_stem(p)).collect())
    }

    fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().map(|e| e == "md").unwrap_or(false) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

/// Replace filesystem-reserved characters in a title with `-`
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '-',
            c => c,
        })
        .collect()
}

/// Compose the tag list: sentinel tag first, then each comma-separated
/// user tag trimmed of surrounding whitespace, order preserved, no dedup.
/// An empty `--tags` value contributes nothing.
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    let mut all = vec![crate::PROMPT_TAG.to_string()];
    if let Some(tags) = tags.filter(|t| !t.is_empty()) {
        all.extend(tags.split(',').map(|t| t.trim().to_string()));
    }
    all
}

fn file_stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vault(temp: &TempDir) -> Vault {
        Vault::open(temp.path().join("Claude-Prompts"))
    }

    #[test]
    fn test_save_and_read_body_round_trip() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        let path = vault
            .save("Code Review", "Review the diff below.", None, &parse_tags(None))
            .unwrap();
        assert_eq!(path, vault.root().join("Code Review.md"));

        let body = vault.read_body(&path).unwrap();
        assert_eq!(body, "Review the diff below.");
    }

    #[test]
    fn test_save_sanitizes_filename() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        let path = vault.save("a/b:c", "body", None, &parse_tags(None)).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("a-b-c.md"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_into_nested_folder() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        let path = vault
            .save("Summarizer", "body", Some("agents/helpers"), &parse_tags(None))
            .unwrap();
        assert_eq!(path, vault.root().join("agents/helpers/Summarizer.md"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_on_collision() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        vault.save("Same", "first body", None, &parse_tags(None)).unwrap();
        let path = vault.save("Same", "second body", None, &parse_tags(None)).unwrap();

        assert_eq!(vault.read_body(&path).unwrap(), "second body");
        assert_eq!(vault.stems().unwrap(), vec!["Same".to_string()]);
    }

    #[test]
    fn test_tags_written_in_order() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        let tags = parse_tags(Some("x, y"));
        assert_eq!(tags, vec!["claude-prompt", "x", "y"]);

        let path = vault.save("Tagged", "body", None, &tags).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("tags:\n  - claude-prompt\n  - x\n  - y\n---"));
    }

    #[test]
    fn test_parse_tags_empty_and_missing() {
        assert_eq!(parse_tags(None), vec!["claude-prompt"]);
        assert_eq!(parse_tags(Some("")), vec!["claude-prompt"]);
    }

    #[test]
    fn test_parse_tags_keeps_duplicates() {
        assert_eq!(parse_tags(Some("a,a")), vec!["claude-prompt", "a", "a"]);
    }

    #[test]
    fn test_list_sorted_by_relative_path() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        vault.save("Zeta", "z body", None, &parse_tags(None)).unwrap();
        vault.save("Alpha", "a body", None, &parse_tags(None)).unwrap();

        let entries = vault.list(None).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rel_path, PathBuf::from("Alpha.md"));
        assert_eq!(entries[1].rel_path, PathBuf::from("Zeta.md"));
        assert_eq!(entries[0].title, "Alpha");
        assert_eq!(entries[0].preview, "a body");
    }

    #[test]
    fn test_list_search_matches_content_or_stem() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        vault.save("Review", "look at the DIFF", None, &parse_tags(None)).unwrap();
        vault.save("Summarize", "condense a thread", None, &parse_tags(None)).unwrap();

        // Content match, case-insensitive
        let entries = vault.list(Some("diff")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Review");

        // Stem match, case-insensitive
        let entries = vault.list(Some("SUMMAR")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Summarize");

        let entries = vault.list(Some("nomatch")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_list_title_falls_back_to_stem() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        fs::create_dir_all(vault.root()).unwrap();
        fs::write(vault.root().join("Bare.md"), "no frontmatter here\n").unwrap();

        let entries = vault.list(None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Bare");
        assert_eq!(entries[0].preview, "no frontmatter here");
    }

    #[test]
    fn test_resolve_by_stem_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        let path = vault.save("Code Review", "body", None, &parse_tags(None)).unwrap();
        assert_eq!(vault.resolve("code review").unwrap(), Some(path));
    }

    #[test]
    fn test_resolve_by_title_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        // Stem differs from the title once sanitized
        let path = vault.save("My: Prompt", "body", None, &parse_tags(None)).unwrap();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("My- Prompt.md"));
        assert_eq!(vault.resolve("my: prompt").unwrap(), Some(path));
    }

    #[test]
    fn test_resolve_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        vault.save("Exists", "body", None, &parse_tags(None)).unwrap();
        assert_eq!(vault.resolve("does-not-exist").unwrap(), None);
    }

    #[test]
    fn test_resolve_finds_prompts_in_subfolders() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        let path = vault
            .save("Nested", "body", Some("deep/er"), &parse_tags(None))
            .unwrap();
        assert_eq!(vault.resolve("nested").unwrap(), Some(path));
    }

    #[test]
    fn test_sanitize_title_replaces_reserved_chars() {
        assert_eq!(sanitize_title("a/b:c"), "a-b-c");
        assert_eq!(sanitize_title(r#"<>:"/\|?*"#), "---------");
        assert_eq!(sanitize_title("untouched title"), "untouched title");
    }

    #[test]
    fn test_stems_lists_all_prompts() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        vault.save("One", "body", None, &parse_tags(None)).unwrap();
        vault.save("Two", "body", Some("sub"), &parse_tags(None)).unwrap();

        let mut stems = vault.stems().unwrap();
        stems.sort();
        assert_eq!(stems, vec!["One".to_string(), "Two".to_string()]);
    }

    #[test]
    fn test_non_md_files_ignored() {
        let temp = TempDir::new().unwrap();
        let vault = vault(&temp);

        vault.save("Real", "body", None, &parse_tags(None)).unwrap();
        fs::write(vault.root().join("notes.txt"), "not a prompt").unwrap();

        assert_eq!(vault.list(None).unwrap().len(), 1);
        assert_eq!(vault.stems().unwrap(), vec!["Real".to_string()]);
    }
}
