//! Course catalog augmentation.
//!
//! A catalog is a TOML file listing the course and subject display names an
//! institution offers:
//!
//! ```toml
//! courses = ["Computer Science BSc (Hons)", "Medicine MBBS"]
//! subjects = ["Mathematics", "Classical Greek"]
//! ```
//!
//! Each course name is reduced to its field ("computer science") and merged
//! into the built-in course table. Unknown subjects are appended as entries
//! that alias only themselves.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{SynonymProvider, SynonymTable};
use crate::error::{CatalogError, CatalogResult};

/// Words stripped from course titles when deriving the field name.
const QUALIFICATION_WORDS: &[&str] = &[
    "hons", "bsc", "ba", "msc", "ma", "meng", "msci", "llb", "bds", "mbbs", "degree",
    "programme", "program", "course", "with", "and", "&", "-",
];

/// Reduce a full course title to its field of study.
///
/// Lowercases, drops brackets, and removes qualification and filler words.
/// An empty title yields an empty string.
pub fn clean_course_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['(', ')'], " ")
        .split_whitespace()
        .filter(|word| !QUALIFICATION_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Default, Deserialize)]
struct CatalogToml {
    #[serde(default)]
    courses: Vec<String>,
    #[serde(default)]
    subjects: Vec<String>,
}

/// Parsed catalog contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub courses: Vec<String>,
    pub subjects: Vec<String>,
}

impl Catalog {
    pub fn from_toml_str(toml_str: &str, path: &Path) -> CatalogResult<Self> {
        let parsed: CatalogToml = toml::from_str(toml_str).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self {
            courses: parsed.courses,
            subjects: parsed.subjects,
        })
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Merge this catalog into `table`. Returns the number of new canonical
    /// entries created.
    pub fn apply(&self, table: &mut SynonymTable) -> usize {
        let mut added = 0;
        for name in self.courses.iter().filter(|n| !n.trim().is_empty()) {
            let field = clean_course_name(name);
            if field.is_empty() {
                tracing::debug!(course = %name, "course title has no field after cleaning");
                continue;
            }
            if table.add_course(&field, name) {
                added += 1;
            }
        }
        for name in &self.subjects {
            if table.add_subject(name) {
                added += 1;
            }
        }
        added
    }
}

/// Provider that augments the built-in table with a catalog file.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    path: PathBuf,
}

impl CatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SynonymProvider for CatalogProvider {
    fn name(&self) -> &str {
        "catalog"
    }

    fn get_synonyms(&self) -> CatalogResult<SynonymTable> {
        let catalog = Catalog::load(&self.path)?;
        let mut table = SynonymTable::builtin();
        let added = catalog.apply(&mut table);
        tracing::info!(
            path = %self.path.display(),
            courses = catalog.courses.len(),
            subjects = catalog.subjects.len(),
            new_entries = added,
            "applied course catalog"
        );
        Ok(table)
    }
}
