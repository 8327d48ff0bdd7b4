//! `Grammar` ties a dictionary to its inflection configuration and hands out
//! inflectors that borrow both.

use crate::config::GrammarConfig;
use crate::kompositum::CompoundSegmenter;
use crate::noun::{Derived, NounInflector};
use crate::verb::VerbInflector;
use flexion_core::{CoreError, Dictionary, Noun, Verb, Word};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Grammar {
    dict: Dictionary,
    config: Arc<GrammarConfig>,
}

impl Grammar {
    /// Wrap a dictionary, building its index if it is stale.
    pub fn new(mut dict: Dictionary, config: GrammarConfig) -> Result<Self, CoreError> {
        if dict.needs_rebuild() {
            dict.build_map()?;
        }
        Ok(Self {
            dict,
            config: Arc::new(config),
        })
    }

    /// Load a bincode dictionary using the storage settings in `config`.
    pub fn load_bincode<P: AsRef<Path>>(path: P, config: GrammarConfig) -> Result<Self, CoreError> {
        let dict = Dictionary::load_bincode(path, config.base())?;
        Self::new(dict, config)
    }

    pub fn load_json<P: AsRef<Path>>(path: P, config: GrammarConfig) -> Result<Self, CoreError> {
        let dict = Dictionary::load_json(path, config.base())?;
        Self::new(dict, config)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Mutable access for ingestion. Call [`Grammar::rebuild`] afterwards.
    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dict
    }

    pub fn rebuild(&mut self) -> Result<(), CoreError> {
        self.dict.build_map()
    }

    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    pub fn shared_config(&self) -> Arc<GrammarConfig> {
        Arc::clone(&self.config)
    }

    pub fn noun<'a>(&'a self, noun: &'a Noun) -> NounInflector<'a> {
        NounInflector::new(noun, &self.dict, &self.config)
    }

    pub fn verb<'a>(&self, verb: &'a Verb) -> VerbInflector<'a> {
        VerbInflector::new(verb)
    }

    pub fn segmenter(&self) -> CompoundSegmenter<'_> {
        CompoundSegmenter::new(&self.dict, &self.config)
    }

    pub fn split_compound(&self, word: &str) -> Vec<String> {
        self.segmenter().split(word)
    }

    /// Plural of the first noun lemma that has `word` as a surface form.
    /// `Ok(None)` if no noun has it.
    pub fn noun_plural(&self, word: &str, force_artificial: bool) -> Derived {
        let noun = self.dict.find(word).into_iter().find_map(|w| match w {
            Word::Noun(n) => Some(n),
            _ => None,
        });
        match noun {
            Some(n) => self.noun(n).nominative_plural(force_artificial),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexion_core::{Case, Gender, Number};

    #[test]
    fn new_builds_stale_index() {
        let mut d = Dictionary::new();
        d.add(Noun::new("Baum", Gender::MASCULINE));
        let g = Grammar::new(d, GrammarConfig::default()).unwrap();
        assert!(!g.dictionary().needs_rebuild());
        assert_eq!(g.dictionary().find("baum").len(), 1);
    }

    #[test]
    fn noun_plural_by_surface_form() {
        let mut d = Dictionary::new();
        d.add(
            Noun::new("Baum", Gender::MASCULINE)
                .with_form(Case::Nominative, Number::Plural, "Bäume"),
        );
        d.add(Noun::new("Weihnacht", Gender::FEMININE));
        d.add(Noun::new("Weihnachtsbaum", Gender::MASCULINE));
        let g = Grammar::new(d, GrammarConfig::default()).unwrap();
        assert_eq!(g.noun_plural("Bäume", false).unwrap().as_deref(), Some("Bäume"));
        assert_eq!(
            g.noun_plural("weihnachtsbaum", false).unwrap().as_deref(),
            Some("Weihnachtsbäume")
        );
        assert_eq!(g.noun_plural("Katze", false).unwrap(), None);
    }

    #[test]
    fn rebuild_after_ingestion() {
        let mut g = Grammar::new(Dictionary::new(), GrammarConfig::default()).unwrap();
        g.dictionary_mut().add(Noun::new("Tür", Gender::FEMININE));
        assert!(g.split_compound("Türbaum").len() == 1);
        g.rebuild().unwrap();
        assert_eq!(g.dictionary().find("tür").len(), 1);
    }
}
