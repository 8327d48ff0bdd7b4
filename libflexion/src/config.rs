//! Inflection configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All storage options from `flexion_core::Config` (flattened via serde)
//! - The letter classes the rules test against (vowels, syllable nuclei,
//!   sibilants)
//! - The n-declension suffix table and its exception list
//!
//! # Example
//!
//! ```rust
//! use libflexion::GrammarConfig;
//!
//! let config = GrammarConfig::default();
//! assert!(config.is_vowel("ä"));
//! ```

use flexion_core::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Base configuration fields (payload limit, simplify on load)
    #[serde(flatten)]
    pub base: flexion_core::Config,

    /// Single vowels; used to reject a linking "s" between vowels.
    pub vowels: Vec<String>,
    /// Syllable nuclei, diphthongs first so each counts once.
    pub syllable_nuclei: Vec<String>,
    /// Endings that take "-es" in the genitive or an apostrophe on names.
    pub sibilants: Vec<String>,
    /// Masculine endings marking the weak (n-) declension.
    pub n_declension_suffixes: Vec<String>,
    /// Neuter nouns that nevertheless decline weakly.
    pub n_declension_exceptions: Vec<String>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            base: flexion_core::Config::default(),
            vowels: strings(&["a", "e", "i", "o", "u", "ö", "ä", "ü"]),
            syllable_nuclei: strings(&[
                "au", "ei", "eu", "äu", "a", "e", "i", "o", "u", "ö", "ä", "ü",
            ]),
            sibilants: strings(&["s", "ss", "ß", "tsch", "x", "z"]),
            n_declension_suffixes: strings(&[
                "and", "ant", "at", "end", "et", "ent", "graph", "ist", "ik", "it", "loge", "nom",
                "ot", "soph", "urg",
            ]),
            n_declension_exceptions: strings(&["Herz"]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl GrammarConfig {
    /// Convert this config into the base config
    pub fn into_base(self) -> flexion_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &flexion_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut flexion_core::Config {
        &mut self.base
    }

    pub fn is_vowel(&self, letter: &str) -> bool {
        flexion_core::strings::is_any_of(letter, &self.vowels)
    }

    pub fn ends_with_sibilant(&self, word: &str) -> bool {
        flexion_core::strings::ends_with_any(word, &self.sibilants)
    }

    pub fn has_n_declension_suffix(&self, word: &str) -> bool {
        flexion_core::strings::ends_with_any(word, &self.n_declension_suffixes)
    }

    /// Syllable count estimate: nuclei found left to right in the lowercase
    /// word.
    pub fn syllables(&self, word: &str) -> usize {
        flexion_core::strings::count_in_order(
            &flexion_core::strings::fold(word),
            &self.syllable_nuclei,
        )
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        let config: GrammarConfig = toml::from_str(&content)?;
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
