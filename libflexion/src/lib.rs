//! libflexion crate root
//!
//! Rule-based German inflection on top of the `flexion-core` dictionary:
//! noun plural and case derivation, n-declension classification, compound
//! splitting and verb form retrieval.
//!
//! Public API exported here:
//! - `Grammar` from `grammar`
//! - `NounInflector` from `noun`, `VerbInflector` from `verb`
//! - `CompoundSegmenter` from `kompositum`
//! - `PLURAL_RULES` and `RuleMatch` from `plural_rules`
//! - `GrammarConfig` from `config`
//! - `measure_nouns`, `measure_verbs`, `segment_long_nouns` from `accuracy`

pub mod accuracy;
pub mod config;
pub mod error;
pub mod grammar;
pub mod kompositum;
pub mod noun;
pub mod plural_rules;
pub mod verb;

// Re-export the core types callers need to build and query dictionaries.
pub use flexion_core::{
    Adjective, Adverb, AdverbKind, Case, CoreError, Dictionary, Gender, Lemma, LemmaRef, Mode,
    Noun, NounClass, Number, NumberSpec, Person, Pronoun, PronounKind, Tempus, Verb, Verbspec,
    Word, WordKind,
};

// Convenience re-exports for common types used by callers.
pub use accuracy::{measure_nouns, measure_verbs, segment_long_nouns, AccuracyReport, Mismatch};
pub use config::GrammarConfig;
pub use error::InflectionError;
pub use grammar::Grammar;
pub use kompositum::CompoundSegmenter;
pub use noun::{Derived, NounInflector};
pub use plural_rules::{plural_rule_match, Gate, PluralRule, RuleCategory, RuleMatch, PLURAL_RULES};
pub use verb::VerbInflector;
