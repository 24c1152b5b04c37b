//! Reading and writing layouts as JSON files.
//!
//! Layouts are stored as pretty-printed JSON. Loading validates the
//! structure so later composition never sees a malformed layout.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Layout;

/// Service for layout file I/O.
pub struct LayoutService;

impl LayoutService {
    /// Loads and validates a layout from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, isn't a layout, or fails
    /// [`Layout::validate`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use flickgrid::services::LayoutService;
    ///
    /// let layout = LayoutService::load(Path::new("my_layout.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Layout> {
        let layout = Self::load_unchecked(path)?;
        layout
            .validate()
            .with_context(|| format!("Invalid layout in {}", path.display()))?;
        Ok(layout)
    }

    /// Loads a layout without structural validation.
    ///
    /// Used by the consistency checker, which reports problems instead of
    /// failing on the first one.
    pub fn load_unchecked(path: &Path) -> Result<Layout> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse layout from {}", path.display()))
    }

    /// Saves a layout as JSON.
    ///
    /// This performs an atomic write using a temp file + rename pattern so
    /// the file is never left half-written.
    pub fn save(layout: &Layout, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(layout).context("Failed to serialize layout to JSON")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create layout directory: {}", parent.display())
                })?;
            }
        }

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temporary file: {}", temp_path.display()))?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to save layout to {}", path.display()))?;

        Ok(())
    }

    /// Path of `layout`'s file inside `dir`, named after its id.
    #[must_use]
    pub fn file_path_in(dir: &Path, layout: &Layout) -> PathBuf {
        dir.join(format!("{}.json", sanitize_filename(&layout.id)))
    }
}

/// Sanitizes a layout id for use as a filename.
///
/// Path separators, colons and spaces become underscores; the result is lower case.
///
/// # Examples
///
/// ```
/// # use flickgrid::services::layouts::sanitize_filename;
/// assert_eq!(sanitize_filename("My Layout"), "my_layout");
/// assert_eq!(sanitize_filename("en/US:test"), "en_us_test");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', ' '], "_").to_lowercase()
}
