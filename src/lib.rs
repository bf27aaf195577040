//! # coursefinder-nlp
//!
//! Extracts A-level grades and degree-course interests from free-text
//! student statements such as
//! "I got A* in Maths and B in Physics, dropped Chemistry, interested in med".
//!
//! ## Architecture
//!
//! - **Synonyms** (`synonyms`): canonical subjects and courses with aliases,
//!   drop/interest/none phrase lists, optional catalog augmentation
//! - **Text** (`text`): normalization and tokenization
//! - **Drop filter** (`dropped`): removes dropped, failed and retaken subjects
//! - **Grades** (`grades`): grouped and single-grade extraction strategies
//! - **Interests** (`interests`): interest-phrase scoping and course matching
//! - **Parser** (`parser`): combines the stages into a [`ParseResult`]
//!
//! ## Library usage
//!
//! ```
//! use coursefinder_nlp::{Grade, parse};
//!
//! let result = parse("I got A in maths, B in physics and dropped chemistry, and im interested in med");
//! assert_eq!(result.grades.get("mathematics"), Some(Grade::A));
//! assert_eq!(result.grades.get("physics"), Some(Grade::B));
//! assert!(!result.grades.contains_key("chemistry"));
//! assert_eq!(result.interests, vec!["medicine"]);
//! ```

pub mod canonical;
pub mod config;
pub mod dropped;
pub mod error;
pub mod grades;
pub mod interests;
pub mod parser;
pub mod synonyms;
pub mod text;

pub use config::ParserConfig;
pub use error::{ParserError, ParserResult};
pub use grades::{Grade, GradeMap, GradeScale};
pub use parser::{GradeParser, ParseResult, parse};
pub use synonyms::{SynonymProvider, SynonymTable};
