//! Synonym tables: canonical subjects and courses with their aliases, plus
//! the phrase lists that mark dropped subjects and course interest.
//!
//! A [`SynonymTable`] is assembled once by a [`SynonymProvider`] and then
//! shared read-only (usually behind an `Arc`) by every parser instance.

pub mod builtin;
pub mod catalog;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::text::fold_phrase;

pub use catalog::{CatalogProvider, clean_course_name};

/// A canonical name and its ordered aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub canonical: String,
    pub aliases: Vec<String>,
}

impl SynonymEntry {
    pub fn new(canonical: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            canonical: canonical.into(),
            aliases,
        }
    }

    /// Whether `phrase` (already folded) names this entry.
    pub fn matches(&self, phrase: &str) -> bool {
        self.canonical == phrase || self.aliases.iter().any(|a| a == phrase)
    }
}

impl From<&builtin::Equivalence> for SynonymEntry {
    fn from(eq: &builtin::Equivalence) -> Self {
        Self {
            canonical: eq.canonical.to_string(),
            aliases: eq.aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// The full vocabulary used by the parser.
///
/// Entry order matters: when one alias belongs to several entries the
/// earliest entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymTable {
    dropped: Vec<String>,
    interest: Vec<String>,
    none: Vec<String>,
    subjects: Vec<SynonymEntry>,
    courses: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            dropped: owned(builtin::DROPPED),
            interest: owned(builtin::INTEREST),
            none: owned(builtin::NONE),
            subjects: builtin::SUBJECTS.iter().map(SynonymEntry::from).collect(),
            courses: builtin::COURSES.iter().map(SynonymEntry::from).collect(),
        }
    }

    /// Build from `provider`, falling back to the built-in table on error.
    pub fn from_provider(provider: &dyn SynonymProvider) -> Self {
        load_table(provider)
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn interest(&self) -> &[String] {
        &self.interest
    }

    pub fn none(&self) -> &[String] {
        &self.none
    }

    pub fn subjects(&self) -> &[SynonymEntry] {
        &self.subjects
    }

    pub fn courses(&self) -> &[SynonymEntry] {
        &self.courses
    }

    /// Register a subject name. Unknown names become new entries aliasing
    /// only themselves; names already known are left alone.
    pub fn add_subject(&mut self, name: &str) -> bool {
        let name = fold_phrase(name);
        if name.is_empty() || self.subjects.iter().any(|e| e.matches(&name)) {
            return false;
        }
        self.subjects.push(SynonymEntry::new(name.clone(), vec![name]));
        true
    }

    /// Register a course under the canonical `field`, adding `full_name` as
    /// an alias. Returns `true` when a new canonical entry was created.
    pub fn add_course(&mut self, field: &str, full_name: &str) -> bool {
        let field = fold_phrase(field);
        let full_name = fold_phrase(full_name);
        if field.is_empty() {
            return false;
        }
        match self.courses.iter_mut().find(|e| e.canonical == field) {
            Some(entry) => {
                if !full_name.is_empty() && !entry.aliases.contains(&full_name) {
                    entry.aliases.push(full_name);
                }
                false
            }
            None => {
                let mut aliases = vec![field.clone()];
                if !full_name.is_empty() && full_name != field {
                    aliases.push(full_name);
                }
                self.courses.push(SynonymEntry::new(field, aliases));
                true
            }
        }
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A source of synonym data.
///
/// Implementations may fail (unreadable catalog, malformed data); callers
/// go through [`load_table`], which falls back to the built-in table.
pub trait SynonymProvider {
    /// Short human-readable name used in log output.
    fn name(&self) -> &str;

    /// Produce the complete synonym table.
    fn get_synonyms(&self) -> CatalogResult<SynonymTable>;
}

/// Provider returning the compiled-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl SynonymProvider for BuiltinProvider {
    fn name(&self) -> &str {
        "builtin"
    }

    fn get_synonyms(&self) -> CatalogResult<SynonymTable> {
        Ok(SynonymTable::builtin())
    }
}

/// Load a table from `provider`, falling back to the built-in data if the
/// provider fails.
pub fn load_table(provider: &dyn SynonymProvider) -> SynonymTable {
    match provider.get_synonyms() {
        Ok(table) => {
            tracing::info!(
                provider = provider.name(),
                subjects = table.subjects.len(),
                courses = table.courses.len(),
                "loaded synonym table"
            );
            table
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "synonym provider failed, using built-in table"
            );
            SynonymTable::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    struct Failing;

    impl SynonymProvider for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn get_synonyms(&self) -> CatalogResult<SynonymTable> {
            Err(CatalogError::Parse {
                path: "broken.toml".into(),
                message: "nope".into(),
            })
        }
    }

    #[test]
    fn builtin_preserves_declaration_order() {
        let table = SynonymTable::builtin();
        assert_eq!(table.subjects()[0].canonical, "mathematics");
        assert_eq!(table.courses()[0].canonical, "medicine");
        assert_eq!(table.dropped()[0], "dropped");
    }

    #[test]
    fn failing_provider_falls_back_to_builtin() {
        assert_eq!(load_table(&Failing), SynonymTable::builtin());
    }

    #[test]
    fn add_subject_ignores_known_names() {
        let mut table = SynonymTable::builtin();
        assert!(!table.add_subject("Maths"));
        assert!(table.add_subject("Classical Greek"));
        let last = table.subjects().last().unwrap();
        assert_eq!(last.canonical, "classical greek");
        assert_eq!(last.aliases, vec!["classical greek"]);
    }

    #[test]
    fn add_course_extends_existing_entry() {
        let mut table = SynonymTable::builtin();
        assert!(!table.add_course("medicine", "Medicine MBBS"));
        let medicine = table.courses().iter().find(|e| e.canonical == "medicine").unwrap();
        assert!(medicine.aliases.contains(&"medicine mbbs".to_string()));

        assert!(table.add_course("astrobiology", "Astrobiology BSc"));
        let last = table.courses().last().unwrap();
        assert_eq!(last.aliases, vec!["astrobiology", "astrobiology bsc"]);
    }
}
