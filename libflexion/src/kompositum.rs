//! Compound noun segmentation.
//!
//! A compound is split greedily from the left: the first cut point whose
//! left side is a known stem and whose right side (optionally after a linking
//! "s") is a known noun wins, and the right side is split again. There is no
//! backtracking, so the result is one deterministic segmentation.

use crate::config::GrammarConfig;
use flexion_core::strings::eq_folded;
use flexion_core::{Dictionary, NounClass, Word};

/// Splits compounds against the nouns and adjectives of a dictionary.
pub struct CompoundSegmenter<'a> {
    dict: &'a Dictionary,
    config: &'a GrammarConfig,
}

impl<'a> CompoundSegmenter<'a> {
    pub fn new(dict: &'a Dictionary, config: &'a GrammarConfig) -> Self {
        Self { dict, config }
    }

    /// True if `part` can start a compound: a common noun in its stored
    /// nominative singular or plural, or an adjective in its positive form.
    pub fn is_stem(&self, part: &str) -> bool {
        self.dict.find(part).into_iter().any(|word| match word {
            Word::Noun(noun) => {
                noun.class == NounClass::Common
                    && noun
                        .cases
                        .nominative
                        .iter()
                        .any(|form| eq_folded(form, part))
            }
            Word::Adjective(adj) => adj.positive.iter().any(|form| eq_folded(form, part)),
            _ => false,
        })
    }

    /// True if `part` can end a compound: any common noun has it as a
    /// surface form.
    pub fn is_head(&self, part: &str) -> bool {
        self.dict
            .find(part)
            .into_iter()
            .any(|word| matches!(word, Word::Noun(noun) if noun.class == NounClass::Common))
    }

    /// Split `word` into stems, linking elements and a head. Concatenating
    /// the parts gives back `word`; a word that cannot be split comes back
    /// as a single part.
    pub fn split(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let offsets: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
        let len = chars.len();
        if len < 4 {
            return vec![word.to_string()];
        }

        for i in 3..len - 3 {
            let start = &word[..offsets[i]];
            if !self.is_stem(start) {
                continue;
            }

            let end = &word[offsets[i]..];
            if self.is_head(end) {
                let mut parts = vec![start.to_string()];
                parts.extend(self.split(end));
                return parts;
            }

            if chars[i] == 's' && !self.is_vowel(chars[i - 1]) && !self.is_vowel(chars[i + 1]) {
                let end = &word[offsets[i + 1]..];
                if self.is_head(end) {
                    let mut parts = vec![start.to_string(), "s".to_string()];
                    parts.extend(self.split(end));
                    return parts;
                }
            }
        }
        vec![word.to_string()]
    }

    fn is_vowel(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.config.is_vowel(c.encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexion_core::{Adjective, Case, Gender, Noun, Number};

    fn dict() -> Dictionary {
        let mut d = Dictionary::new();
        d.add(Noun::new("Weihnacht", Gender::FEMININE));
        d.add(
            Noun::new("Baum", Gender::MASCULINE)
                .with_form(Case::Nominative, Number::Plural, "Bäume"),
        );
        d.add(Noun::new("Haus", Gender::NEUTER));
        d.add(Noun::new("Tür", Gender::FEMININE));
        d.add(Noun::new("Baumhaus", Gender::NEUTER));
        d.add(Adjective::new("groß"));
        d.add(Noun::new("Meier", Gender::MASCULINE).with_class(NounClass::Name));
        d.build_map().unwrap();
        d
    }

    #[test]
    fn splits_with_linking_s() {
        let d = dict();
        let config = GrammarConfig::default();
        let seg = CompoundSegmenter::new(&d, &config);
        assert_eq!(seg.split("Weihnachtsbaum"), vec!["Weihnacht", "s", "baum"]);
    }

    #[test]
    fn splits_adjective_stem_and_chains() {
        let d = dict();
        let config = GrammarConfig::default();
        let seg = CompoundSegmenter::new(&d, &config);
        assert_eq!(seg.split("Großhaus"), vec!["Groß", "haus"]);
        assert_eq!(seg.split("Großbaumhaus"), vec!["Groß", "baum", "haus"]);
    }

    #[test]
    fn unsplittable_words_stay_whole() {
        let d = dict();
        let config = GrammarConfig::default();
        let seg = CompoundSegmenter::new(&d, &config);
        assert_eq!(seg.split("Tür"), vec!["Tür"]);
        assert_eq!(seg.split("Katalog"), vec!["Katalog"]);
        assert_eq!(seg.split(""), vec![""]);
        // names are not compound heads
        assert_eq!(seg.split("Hausmeier"), vec!["Hausmeier"]);
    }

    #[test]
    fn each_side_keeps_three_characters() {
        let d = dict();
        let config = GrammarConfig::default();
        let seg = CompoundSegmenter::new(&d, &config);
        // "Tür" + "baum" would need a cut at index 3 of a 7-char word: allowed.
        assert_eq!(seg.split("Türbaum"), vec!["Tür", "baum"]);
        // "Haus" + "Tür" leaves the head at exactly three characters: not tried.
        assert_eq!(seg.split("Haustür"), vec!["Haustür"]);
    }
}
