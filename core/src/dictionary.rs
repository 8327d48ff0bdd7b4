//! The lemma store.
//!
//! `Dictionary` owns every lemma in append-only vectors (one per word type)
//! together with the `LexicalIndex` built over them. Lemmas enter only through
//! [`Dictionary::add`]; the index is rebuilt explicitly with
//! [`Dictionary::build_map`] and published by swapping an `Arc`, so a reader
//! holding [`Dictionary::index`] keeps a consistent snapshot.

use crate::error::CoreError;
use crate::index::LexicalIndex;
use crate::lemma::{
    Adjective, Adverb, CaseTable, Lemma, LemmaRef, Noun, NounClass, NumberForms, PersonForms,
    Pronoun, Verb, Word, WordKind,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Outcome of [`Dictionary::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Partial lemmas folded into a full lemma.
    pub merged: usize,
    /// Partial lemmas considered.
    pub attempted: usize,
}

impl MergeStats {
    pub fn dropped(&self) -> usize {
        self.attempted - self.merged
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    nouns: Vec<Noun>,
    verbs: Vec<Verb>,
    adjectives: Vec<Adjective>,
    adverbs: Vec<Adverb>,
    pronouns: Vec<Pronoun>,
    #[serde(skip)]
    index: Arc<LexicalIndex>,
    #[serde(skip)]
    stale: bool,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a lemma and return its handle. The index goes stale until the
    /// next `build_map`.
    pub fn add<L: Into<Lemma>>(&mut self, lemma: L) -> LemmaRef {
        self.stale = true;
        match lemma.into() {
            Lemma::Noun(n) => push(&mut self.nouns, n, WordKind::Noun),
            Lemma::Verb(v) => push(&mut self.verbs, v, WordKind::Verb),
            Lemma::Adjective(a) => push(&mut self.adjectives, a, WordKind::Adjective),
            Lemma::Adverb(a) => push(&mut self.adverbs, a, WordKind::Adverb),
            Lemma::Pronoun(p) => push(&mut self.pronouns, p, WordKind::Pronoun),
        }
    }

    /// Total number of lemmas of every type.
    pub fn len(&self) -> usize {
        self.nouns.len()
            + self.verbs.len()
            + self.adjectives.len()
            + self.adverbs.len()
            + self.pronouns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nouns(&self) -> &[Noun] {
        &self.nouns
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn adjectives(&self) -> &[Adjective] {
        &self.adjectives
    }

    pub fn adverbs(&self) -> &[Adverb] {
        &self.adverbs
    }

    pub fn pronouns(&self) -> &[Pronoun] {
        &self.pronouns
    }

    /// Resolve a handle. `None` if it does not belong to this dictionary.
    pub fn get(&self, handle: LemmaRef) -> Option<Word<'_>> {
        let i = handle.index;
        match handle.kind {
            WordKind::Noun => self.nouns.get(i).map(Word::Noun),
            WordKind::Verb => self.verbs.get(i).map(Word::Verb),
            WordKind::Adjective => self.adjectives.get(i).map(Word::Adjective),
            WordKind::Adverb => self.adverbs.get(i).map(Word::Adverb),
            WordKind::Pronoun => self.pronouns.get(i).map(Word::Pronoun),
        }
    }

    /// Rebuild the lexical index from scratch and publish it.
    pub fn build_map(&mut self) -> Result<(), CoreError> {
        let mut entries: Vec<(&str, LemmaRef)> = Vec::new();
        for (i, n) in self.nouns.iter().enumerate() {
            let handle = LemmaRef::new(WordKind::Noun, i);
            entries.extend(n.surface_forms().map(|s| (s, handle)));
        }
        for (i, v) in self.verbs.iter().enumerate() {
            let handle = LemmaRef::new(WordKind::Verb, i);
            entries.extend(v.surface_forms().map(|s| (s, handle)));
        }
        for (i, a) in self.adjectives.iter().enumerate() {
            let handle = LemmaRef::new(WordKind::Adjective, i);
            entries.extend(a.surface_forms().map(|s| (s, handle)));
        }
        for (i, a) in self.adverbs.iter().enumerate() {
            let handle = LemmaRef::new(WordKind::Adverb, i);
            entries.extend(a.surface_forms().map(|s| (s, handle)));
        }
        for (i, p) in self.pronouns.iter().enumerate() {
            let handle = LemmaRef::new(WordKind::Pronoun, i);
            entries.extend(p.surface_forms().map(|s| (s, handle)));
        }

        let index = LexicalIndex::build(entries)?;
        self.index = Arc::new(index);
        self.stale = false;
        Ok(())
    }

    /// True if lemmas were added or merged since the last `build_map`.
    pub fn needs_rebuild(&self) -> bool {
        self.stale
    }

    /// The currently published index.
    pub fn index(&self) -> Arc<LexicalIndex> {
        Arc::clone(&self.index)
    }

    /// Handles for an exact (case-insensitive) surface form.
    pub fn lookup(&self, word: &str) -> &[LemmaRef] {
        self.index.find(word)
    }

    /// Lemmas with `word` among their surface forms, in insertion order.
    pub fn find(&self, word: &str) -> Vec<Word<'_>> {
        self.resolve(self.index.find(word))
    }

    /// Lemmas around `word` in key order; see [`LexicalIndex::closest`].
    pub fn closest(&self, word: &str) -> Vec<Word<'_>> {
        self.resolve(&self.index.closest(word))
    }

    fn resolve(&self, handles: &[LemmaRef]) -> Vec<Word<'_>> {
        handles.iter().filter_map(|h| self.get(*h)).collect()
    }

    /// Fold partial lemmas (built from declined-form pages) into the full
    /// lemmas they belong to. The first matching full lemma receives the
    /// forms; partial lemmas without a match are dropped.
    pub fn merge(&mut self, incomplete: Dictionary) -> MergeStats {
        let mut stats = MergeStats::default();

        for partial in &incomplete.nouns {
            stats.attempted += 1;
            let target = self.nouns.iter_mut().find(|n| {
                n.class == NounClass::Common
                    && (partial.gender.is_empty() || partial.gender.is_subset(&n.gender))
                    && intersects(&n.cases.nominative.singular, &partial.cases.nominative.singular)
            });
            if let Some(target) = target {
                merge_cases(&mut target.cases, &partial.cases);
                stats.merged += 1;
            }
        }

        for partial in &incomplete.adjectives {
            stats.attempted += 1;
            let target = self
                .adjectives
                .iter_mut()
                .find(|a| intersects(&a.positive, &partial.positive));
            if let Some(target) = target {
                for (table, extra) in target.declension.iter_mut().zip(partial.declension.iter()) {
                    merge_cases(table, extra);
                }
                push_unique(&mut target.positive, &partial.positive);
                push_unique(&mut target.superlative, &partial.superlative);
                push_unique(&mut target.comparative, &partial.comparative);
                stats.merged += 1;
            }
        }

        for partial in &incomplete.pronouns {
            stats.attempted += 1;
            let target = self.pronouns.iter_mut().find(|p| {
                p.kind == partial.kind
                    && intersects(&p.cases.nominative.singular, &partial.cases.nominative.singular)
            });
            if let Some(target) = target {
                merge_cases(&mut target.cases, &partial.cases);
                stats.merged += 1;
            }
        }

        for partial in &incomplete.verbs {
            stats.attempted += 1;
            let target = self
                .verbs
                .iter_mut()
                .find(|v| intersects(&v.present_infinitive, &partial.present_infinitive));
            if let Some(target) = target {
                merge_numbers(&mut target.imperative, &partial.imperative);
                push_unique(&mut target.auxiliary, &partial.auxiliary);
                push_unique(&mut target.irrealis_1sg, &partial.irrealis_1sg);
                push_unique(&mut target.participle_ii, &partial.participle_ii);
                merge_persons(&mut target.present, &partial.present);
                push_unique(&mut target.present_infinitive, &partial.present_infinitive);
                push_unique(&mut target.preterite_1sg, &partial.preterite_1sg);
                push_unique(&mut target.subjunctive_i_1sg, &partial.subjunctive_i_1sg);
                stats.merged += 1;
            }
        }

        if stats.merged > 0 {
            self.stale = true;
        }
        tracing::info!(
            merged = stats.merged,
            attempted = stats.attempted,
            "merged partial lemmas"
        );
        stats
    }

    /// Remove empty-string forms from every slot of every lemma. Returns how
    /// many were removed.
    pub fn simplify(&mut self) -> usize {
        let mut removed = 0;
        for noun in &mut self.nouns {
            removed += strip_cases(&mut noun.cases);
        }
        for adj in &mut self.adjectives {
            for table in adj.declension.iter_mut() {
                removed += strip_cases(table);
            }
            removed += strip(&mut adj.positive)
                + strip(&mut adj.comparative)
                + strip(&mut adj.superlative);
        }
        for verb in &mut self.verbs {
            removed += strip_numbers(&mut verb.imperative)
                + strip_numbers(&mut verb.present.first)
                + strip_numbers(&mut verb.present.second)
                + strip_numbers(&mut verb.present.third)
                + strip(&mut verb.auxiliary)
                + strip(&mut verb.irrealis_1sg)
                + strip(&mut verb.participle_ii)
                + strip(&mut verb.present_infinitive)
                + strip(&mut verb.preterite_1sg)
                + strip(&mut verb.subjunctive_i_1sg);
        }
        for adv in &mut self.adverbs {
            removed += strip(&mut adv.positive)
                + strip(&mut adv.comparative)
                + strip(&mut adv.superlative);
        }
        for pro in &mut self.pronouns {
            removed += strip_cases(&mut pro.cases);
        }

        if removed > 0 {
            self.stale = true;
        }
        tracing::info!(removed, "removed empty forms");
        removed
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lemmas:     {}", self.len())?;
        writeln!(f, "nouns:      {}", self.nouns.len())?;
        writeln!(f, "verbs:      {}", self.verbs.len())?;
        writeln!(f, "adjectives: {}", self.adjectives.len())?;
        writeln!(f, "adverbs:    {}", self.adverbs.len())?;
        writeln!(f, "pronouns:   {}", self.pronouns.len())?;
        write!(f, "index keys: {}", self.index.len())
    }
}

fn push<T>(vec: &mut Vec<T>, item: T, kind: WordKind) -> LemmaRef {
    vec.push(item);
    LemmaRef::new(kind, vec.len() - 1)
}

fn intersects(a: &[String], b: &[String]) -> bool {
    a.iter().any(|x| b.contains(x))
}

fn push_unique(into: &mut Vec<String>, from: &[String]) {
    for s in from {
        if !into.contains(s) {
            into.push(s.clone());
        }
    }
}

fn merge_numbers(into: &mut NumberForms, from: &NumberForms) {
    push_unique(&mut into.singular, &from.singular);
    push_unique(&mut into.plural, &from.plural);
}

fn merge_persons(into: &mut PersonForms, from: &PersonForms) {
    merge_numbers(&mut into.first, &from.first);
    merge_numbers(&mut into.second, &from.second);
    merge_numbers(&mut into.third, &from.third);
}

fn merge_cases(into: &mut CaseTable, from: &CaseTable) {
    merge_numbers(&mut into.nominative, &from.nominative);
    merge_numbers(&mut into.genitive, &from.genitive);
    merge_numbers(&mut into.dative, &from.dative);
    merge_numbers(&mut into.accusative, &from.accusative);
}

fn strip(forms: &mut Vec<String>) -> usize {
    let before = forms.len();
    forms.retain(|s| !s.is_empty());
    before - forms.len()
}

fn strip_numbers(forms: &mut NumberForms) -> usize {
    strip(&mut forms.singular) + strip(&mut forms.plural)
}

fn strip_cases(table: &mut CaseTable) -> usize {
    strip_numbers(&mut table.nominative)
        + strip_numbers(&mut table.genitive)
        + strip_numbers(&mut table.dative)
        + strip_numbers(&mut table.accusative)
}
