//! Content tree traversal: resolve a root, walk it, assemble the export stream.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// ExportOptions
// ---------------------------------------------------------------------------

/// Options for exporting a content tree.
///
/// Defaults match the documentation-site conventions: `.mdx` sources,
/// `_`-prefixed directories and the `api` directory excluded.
#[derive(Clone)]
pub struct ExportOptions {
    extension: String,
    skip_prefix: char,
    skip_names: Vec<String>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// File extension (with leading dot) that marks an exportable source.
    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_owned();
        self
    }

    /// Directories whose name starts with this character are never entered.
    pub fn skip_prefix(mut self, prefix: char) -> Self {
        self.skip_prefix = prefix;
        self
    }

    /// Exclude directories with this exact name.
    pub fn skip_name(mut self, name: &str) -> Self {
        self.skip_names.push(name.to_owned());
        self
    }

    fn skips_dir(&self, name: &str) -> bool {
        name.starts_with(self.skip_prefix) || self.skip_names.iter().any(|n| n == name)
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            extension: ".mdx".to_owned(),
            skip_prefix: '_',
            skip_names: vec!["api".to_owned()],
        }
    }
}

// ---------------------------------------------------------------------------
// ExportRecord
// ---------------------------------------------------------------------------

/// One exported file: derived URL path plus its full text content.
/// `Display` renders the delimited wire form appended to the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub url_path: String,
    pub content: String,
}

impl std::fmt::Display for ExportRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n=== {} ===\n\n{}\n\n", self.url_path, self.content)
    }
}

/// URL path for a file: relative path with the extension stripped and
/// backslashes normalized to forward slashes.
fn url_path(relative: &Path, extension: &str) -> String {
    let normalized = relative.to_string_lossy().replace('\\', "/");
    match normalized.strip_suffix(extension) {
        Some(stripped) => stripped.to_owned(),
        None => normalized,
    }
}

// ---------------------------------------------------------------------------
// resolve_root
// ---------------------------------------------------------------------------

/// Pick the first candidate root that exists on the filesystem.
///
/// Candidates are an explicit parameter so callers (and tests) control
/// exactly which locations are probed.
pub fn resolve_root(candidates: &[PathBuf]) -> Result<PathBuf> {
    for candidate in candidates {
        if candidate.try_exists()? {
            return Ok(candidate.clone());
        }
    }
    Err(Error::NoContentRoot)
}

// ---------------------------------------------------------------------------
// export_tree
// ---------------------------------------------------------------------------

enum WorkItem {
    // (absolute, relative-to-root) in both variants
    Dir(PathBuf, PathBuf),
    File(PathBuf, PathBuf),
}

/// Walk `root` depth-first and assemble the export stream.
///
/// Traversal is pre-order: a subdirectory's contribution is emitted in place
/// before its later siblings. Sibling order follows directory enumeration
/// order, which is not guaranteed sorted. Failures are non-fatal: an
/// unreadable file contributes a placeholder record, an unlistable directory
/// truncates only its own subtree, and both are logged.
pub fn export_tree(root: &Path, opts: &ExportOptions) -> String {
    let mut out = String::new();
    let mut stack: Vec<WorkItem> = Vec::new();
    push_entries(root, Path::new(""), opts, &mut stack);

    while let Some(item) = stack.pop() {
        match item {
            WorkItem::Dir(abs, rel) => push_entries(&abs, &rel, opts, &mut stack),
            WorkItem::File(abs, rel) => {
                let content = fs::read_to_string(&abs).unwrap_or_else(|err| {
                    warn!(file = %abs.display(), %err, "failed to read file");
                    format!("Error reading file: {}", abs.display())
                });
                let record = ExportRecord {
                    url_path: url_path(&rel, &opts.extension),
                    content,
                };
                out.push_str(&record.to_string());
            }
        }
    }

    out
}

/// List `dir` and push its relevant children. Pushed in reverse so the LIFO
/// stack pops them back in enumeration order.
fn push_entries(dir: &Path, rel: &Path, opts: &ExportOptions, stack: &mut Vec<WorkItem>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), %err, "failed to list directory");
            return;
        }
    };

    let mut items = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %dir.display(), %err, "failed to read directory entry");
                continue;
            }
        };
        let abs = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        // DirEntry::file_type does not follow symlinks; stat those explicitly.
        let is_dir = match entry.file_type() {
            Ok(ft) if ft.is_symlink() => match fs::metadata(&abs) {
                Ok(meta) => meta.is_dir(),
                Err(err) => {
                    warn!(entry = %abs.display(), %err, "failed to stat entry, skipping");
                    continue;
                }
            },
            Ok(ft) => ft.is_dir(),
            Err(err) => {
                warn!(entry = %abs.display(), %err, "failed to stat entry, skipping");
                continue;
            }
        };

        if is_dir {
            if opts.skips_dir(&name) {
                continue;
            }
            items.push(WorkItem::Dir(abs, rel.join(entry.file_name())));
        } else if name.ends_with(&opts.extension) {
            items.push(WorkItem::File(abs, rel.join(entry.file_name())));
        }
    }

    stack.extend(items.into_iter().rev());
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

/// Resolve the content root from `candidates` and export its tree.
///
/// # Examples
/// ```ignore
/// let roots = vec![PathBuf::from("pages"), PathBuf::from("src/pages")];
/// let stream = export(&roots, &ExportOptions::default())?;
/// ```
pub fn export(candidates: &[PathBuf], opts: &ExportOptions) -> Result<String> {
    let root = resolve_root(candidates)?;
    Ok(export_tree(&root, opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_path_strips_extension() {
        assert_eq!(url_path(Path::new("guide.mdx"), ".mdx"), "guide");
        assert_eq!(url_path(Path::new("a/b.mdx"), ".mdx"), "a/b");
    }

    #[test]
    fn url_path_normalizes_backslashes() {
        assert_eq!(url_path(Path::new("a\\b.mdx"), ".mdx"), "a/b");
    }

    #[test]
    fn record_display_form() {
        let record = ExportRecord {
            url_path: "guide".to_owned(),
            content: "hello".to_owned(),
        };
        assert_eq!(record.to_string(), "\n=== guide ===\n\nhello\n\n");
    }

    #[test]
    fn skips_dir_rules() {
        let opts = ExportOptions::default();
        assert!(opts.skips_dir("_drafts"));
        assert!(opts.skips_dir("api"));
        assert!(!opts.skips_dir("guides"));
        assert!(!opts.skips_dir("apidocs"));
    }

    #[test]
    fn custom_options() {
        let opts = ExportOptions::new()
            .extension(".md")
            .skip_prefix('.')
            .skip_name("internal");
        assert!(opts.skips_dir(".hidden"));
        assert!(opts.skips_dir("internal"));
        assert!(!opts.skips_dir("_drafts"));
    }

    #[test]
    fn single_file_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("guide.mdx"), "hello").unwrap();

        let stream = export_tree(dir.path(), &ExportOptions::default());
        assert_eq!(stream, "\n=== guide ===\n\nhello\n\n");
    }

    #[test]
    fn empty_tree_is_empty_stream() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(export_tree(dir.path(), &ExportOptions::default()), "");
    }

    #[test]
    fn resolve_root_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let root = resolve_root(&[missing.clone(), dir.path().to_path_buf()]).unwrap();
        assert_eq!(root, dir.path());

        let err = resolve_root(&[missing]).unwrap_err();
        assert!(matches!(err, Error::NoContentRoot));
    }
}
