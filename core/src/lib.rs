//! flexion-core
//!
//! Language-agnostic data model, lexical index, dictionary and configuration
//! shared by the inflection crate (libflexion).
//!
//! Lemmas are stored in a `Dictionary` and indexed by surface form with an
//! `fst` map; dictionaries persist with bincode (compact) or JSON
//! (inspectable).
//!
//! Public API:
//! - `Dictionary` - Lemma store with exact and nearest-neighbour lookup
//! - `LexicalIndex` - Surface form → lemma handle index
//! - `Noun`, `Verb`, `Adjective`, `Adverb`, `Pronoun` - Lemma types
//! - `Verbspec` - Addresses one verb form
//! - `Config` - Persistence settings
//! - `strings` - Suffix and umlaut helpers used by inflection rules
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{CoreError, DataPosition};

pub mod strings;

pub mod lemma;
pub use lemma::{
    first_form, Adjective, Adverb, AdverbKind, Case, CaseTable, DeclensionGender, Degree, Gender,
    Lemma, LemmaRef, Noun, NounClass, Number, NumberForms, PersonForms, Pronoun, PronounKind,
    Verb, Word, WordKind,
};

pub mod verb_spec;
pub use verb_spec::{Mode, NumberSpec, Person, Tempus, Verbspec};

pub mod index;
pub use index::LexicalIndex;

pub mod dictionary;
pub use dictionary::{Dictionary, MergeStats};

pub mod persist;

/// Generic configuration for dictionary storage.
///
/// Language-specific options (rule tables, vowel sets) belong in
/// `GrammarConfig` in the language crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on a bincode payload; larger inputs are treated as corrupt.
    pub max_payload_bytes: u64,
    /// Strip empty-string forms from a dictionary before indexing it on load.
    pub simplify_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_payload_bytes: 1 << 30,
            simplify_on_load: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), CoreError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }

    /// Index key for a surface form: NFC and lowercased, without trimming.
    /// Surrounding whitespace is removed once at ingestion, so a padded query
    /// never matches a key.
    pub fn fold_key(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        crate::strings::fold(&s.nfc().collect::<String>())
    }
}
