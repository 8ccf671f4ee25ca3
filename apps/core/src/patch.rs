//! One-shot literal text patching.
//!
//! Reads a file, replaces the first occurrence of a literal needle, writes
//! the result back. A failed match still rewrites the file unchanged, but
//! the outcome is reported so the caller can tell the difference.

use crate::error::AppError;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// What a patch application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The needle was found and replaced.
    Applied,
    /// The needle was not found; the file was rewritten unchanged.
    NotFound,
}

/// A literal single-file text patch.
#[derive(Debug, Clone)]
pub struct TextPatch {
    pub file: PathBuf,
    pub needle: String,
    pub replacement: String,
}

impl TextPatch {
    pub fn new(
        file: impl Into<PathBuf>,
        needle: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            needle: needle.into(),
            replacement: replacement.into(),
        }
    }

    /// Applies the patch, replacing the first occurrence of the needle.
    pub fn apply(&self) -> Result<PatchOutcome, AppError> {
        let content = fs::read_to_string(&self.file)?;

        let outcome = if content.contains(&self.needle) {
            PatchOutcome::Applied
        } else {
            PatchOutcome::NotFound
        };
        let updated = content.replacen(&self.needle, &self.replacement, 1);

        fs::write(&self.file, updated)?;

        match outcome {
            PatchOutcome::Applied => info!(file = %self.file.display(), "patch applied"),
            PatchOutcome::NotFound => {
                warn!(file = %self.file.display(), "patch target not found, file rewritten unchanged")
            }
        }
        Ok(outcome)
    }
}

/// The shipped fix for the logo page: when the customize flow hands control
/// back, the sidebar header has to be restored along with the content and
/// the footer.
pub fn logo_sidebar_header_fix(file: impl Into<PathBuf>) -> TextPatch {
    let needle = concat!(
        "                    // Restore original content and footer\n",
        "                    sidebarContent.style.display = 'block';\n",
        "                    footer.style.display = 'flex';\n",
        "                    \n",
        "                    // Update to V2 logos (new versions from customize tab)\n",
        "                    updateLogoSidebarWithNewVersion(2);"
    );
    let replacement = concat!(
        "                    // Restore original content, footer, and header with tabs\n",
        "                    sidebarContent.style.display = 'block';\n",
        "                    footer.style.display = 'flex';\n",
        "                    if (sidebarHeader) {\n",
        "                        sidebarHeader.style.display = 'block';\n",
        "                    }\n",
        "                    \n",
        "                    // Update to V2 logos (new versions from customize tab)\n",
        "                    updateLogoSidebarWithNewVersion(2);"
    );
    TextPatch::new(file, needle, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_occurrence_is_replaced() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.html");
        fs::write(&file, "aaa NEEDLE bbb NEEDLE ccc").unwrap();

        let patch = TextPatch::new(&file, "NEEDLE", "PATCHED");
        assert_eq!(patch.apply().unwrap(), PatchOutcome::Applied);

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "aaa PATCHED bbb NEEDLE ccc");
    }

    #[test]
    fn test_missing_needle_is_a_noop_write() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.html");
        fs::write(&file, "nothing to see here").unwrap();

        let patch = TextPatch::new(&file, "NEEDLE", "PATCHED");
        assert_eq!(patch.apply().unwrap(), PatchOutcome::NotFound);

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "nothing to see here");
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let patch = TextPatch::new(dir.path().join("absent.html"), "a", "b");
        assert!(matches!(patch.apply(), Err(AppError::Io(_))));
    }

    #[test]
    fn test_logo_sidebar_header_fix_applies() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("generate-logo.html");
        let patch = logo_sidebar_header_fix(&file);

        let page = format!("<script>\n{}\n</script>\n", patch.needle);
        fs::write(&file, page).unwrap();

        assert_eq!(patch.apply().unwrap(), PatchOutcome::Applied);
        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("sidebarHeader.style.display = 'block';"));
        assert!(content.contains("// Restore original content, footer, and header with tabs"));
    }
}
