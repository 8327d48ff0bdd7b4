//! Lemma data model.
//!
//! A lemma is one dictionary headword with whatever inflected forms the
//! loader found for it. Forms are kept as ordered lists: the first non-empty
//! entry of a slot is its canonical form, the rest are alternates that only
//! matter for membership tests.
//!
//! Public API:
//! - `Case`, `Number` - grammatical coordinates of a form slot
//! - `NumberForms`, `CaseTable`, `PersonForms` - slot containers
//! - `Noun`, `Verb`, `Adjective`, `Adverb`, `Pronoun` - the word types
//! - `Lemma` - owned tagged union used for ingestion
//! - `WordKind`, `LemmaRef`, `Word` - tags, stable handles and borrowed views

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
    ];
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Case::Nominative => "NOM",
            Case::Genitive => "GEN",
            Case::Dative => "DAT",
            Case::Accusative => "ACC",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];
}

/// Known surface forms of one slot, split by number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberForms {
    pub singular: Vec<String>,
    pub plural: Vec<String>,
}

impl NumberForms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.singular.is_empty() && self.plural.is_empty()
    }

    pub fn get(&self, number: Number) -> &[String] {
        match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        }
    }

    pub fn get_mut(&mut self, number: Number) -> &mut Vec<String> {
        match number {
            Number::Singular => &mut self.singular,
            Number::Plural => &mut self.plural,
        }
    }

    /// The canonical form for `number`, if one is stored.
    pub fn canonical(&self, number: Number) -> Option<&str> {
        first_form(self.get(number))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.singular
            .iter()
            .chain(self.plural.iter())
            .map(String::as_str)
    }
}

/// The first stored form of a slot, unless the slot is empty or starts with
/// an empty placeholder.
pub fn first_form(forms: &[String]) -> Option<&str> {
    forms.first().map(String::as_str).filter(|s| !s.is_empty())
}

/// Four cases, each with singular and plural forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseTable {
    pub nominative: NumberForms,
    pub genitive: NumberForms,
    pub dative: NumberForms,
    pub accusative: NumberForms,
}

impl CaseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, case: Case) -> &NumberForms {
        match case {
            Case::Nominative => &self.nominative,
            Case::Genitive => &self.genitive,
            Case::Dative => &self.dative,
            Case::Accusative => &self.accusative,
        }
    }

    pub fn get_mut(&mut self, case: Case) -> &mut NumberForms {
        match case {
            Case::Nominative => &mut self.nominative,
            Case::Genitive => &mut self.genitive,
            Case::Dative => &mut self.dative,
            Case::Accusative => &mut self.accusative,
        }
    }

    pub fn forms(&self, case: Case, number: Number) -> &[String] {
        self.get(case).get(number)
    }

    pub fn is_empty(&self) -> bool {
        Case::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Every form of every case, nominative first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        Case::ALL.into_iter().flat_map(move |c| self.get(c).iter())
    }
}

/// Grammatical gender as a set. Several flags may be set for lemmas that are
/// used with more than one gender; an empty set means "unknown".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gender {
    pub masculine: bool,
    pub neuter: bool,
    pub feminine: bool,
}

impl Gender {
    pub const MASCULINE: Gender = Gender {
        masculine: true,
        neuter: false,
        feminine: false,
    };
    pub const NEUTER: Gender = Gender {
        masculine: false,
        neuter: true,
        feminine: false,
    };
    pub const FEMININE: Gender = Gender {
        masculine: false,
        neuter: false,
        feminine: true,
    };

    pub fn is_empty(&self) -> bool {
        !(self.masculine || self.neuter || self.feminine)
    }

    /// True if every gender in `self` is also in `other`.
    pub fn is_subset(&self, other: &Gender) -> bool {
        (!self.masculine || other.masculine)
            && (!self.neuter || other.neuter)
            && (!self.feminine || other.feminine)
    }

    pub fn union(self, other: Gender) -> Gender {
        Gender {
            masculine: self.masculine || other.masculine,
            neuter: self.neuter || other.neuter,
            feminine: self.feminine || other.feminine,
        }
    }

    // Rule gates: an unknown gender admits every rule.

    pub fn admits_masculine(&self) -> bool {
        self.is_empty() || self.masculine
    }

    pub fn admits_neuter(&self) -> bool {
        self.is_empty() || self.neuter
    }

    pub fn admits_feminine(&self) -> bool {
        self.is_empty() || self.feminine
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.masculine {
            f.write_str("m")?;
        }
        if self.feminine {
            f.write_str("f")?;
        }
        if self.neuter {
            f.write_str("n")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NounClass {
    Name,
    #[default]
    Common,
    Numeral,
    Toponym,
    /// A partial lemma built from a declined-form page; merged into its full
    /// lemma by `Dictionary::merge`.
    Incomplete,
}

impl fmt::Display for NounClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NounClass::Name => "Name",
            NounClass::Common => "Noun",
            NounClass::Numeral => "Num",
            NounClass::Toponym => "Topo",
            NounClass::Incomplete => "?",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun {
    pub cases: CaseTable,
    pub gender: Gender,
    pub class: NounClass,
    pub no_plural: bool,
    pub no_singular: bool,
}

impl Noun {
    /// A common noun with a single nominative singular form.
    pub fn new<S: Into<String>>(singular: S, gender: Gender) -> Self {
        let mut noun = Noun {
            gender,
            ..Default::default()
        };
        noun.cases.nominative.singular.push(singular.into());
        noun
    }

    pub fn with_class(mut self, class: NounClass) -> Self {
        self.class = class;
        self
    }

    /// Append a stored form to a slot.
    pub fn with_form<S: Into<String>>(mut self, case: Case, number: Number, form: S) -> Self {
        self.cases.get_mut(case).get_mut(number).push(form.into());
        self
    }

    pub fn forms(&self, case: Case, number: Number) -> &[String] {
        self.cases.forms(case, number)
    }

    /// Forms contributed to the lexical index.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.cases.nominative.iter()
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class, self.gender)?;
        for case in Case::ALL {
            let forms = self.cases.get(case);
            if case == Case::Nominative || !forms.is_empty() {
                write!(f, "\n   {}:", case)?;
                for form in forms.iter() {
                    write!(f, " {}", form)?;
                }
            }
        }
        Ok(())
    }
}

/// Present-tense forms by grammatical person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonForms {
    pub first: NumberForms,
    pub second: NumberForms,
    pub third: NumberForms,
}

impl PersonForms {
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty() && self.third.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.first
            .iter()
            .chain(self.second.iter())
            .chain(self.third.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub present_infinitive: Vec<String>,
    pub present: PersonForms,
    pub preterite_1sg: Vec<String>,
    pub subjunctive_i_1sg: Vec<String>,
    pub irrealis_1sg: Vec<String>,
    pub participle_ii: Vec<String>,
    pub auxiliary: Vec<String>,
    pub imperative: NumberForms,
}

impl Verb {
    pub fn new<S: Into<String>>(infinitive: S) -> Self {
        Verb {
            present_infinitive: vec![infinitive.into()],
            ..Default::default()
        }
    }

    /// Forms contributed to the lexical index, in index insertion order.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.imperative
            .iter()
            .chain(
                [
                    &self.present_infinitive,
                    &self.participle_ii,
                    &self.subjunctive_i_1sg,
                    &self.irrealis_1sg,
                    &self.preterite_1sg,
                    &self.auxiliary,
                ]
                .into_iter()
                .flatten()
                .map(String::as_str),
            )
            .chain(self.present.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

/// Column of the adjective declension grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclensionGender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective {
    pub positive: Vec<String>,
    pub comparative: Vec<String>,
    pub superlative: Vec<String>,
    /// Degree-major grid: `declension[degree * 3 + gender]`.
    pub declension: [CaseTable; 9],
}

impl Adjective {
    pub fn new<S: Into<String>>(positive: S) -> Self {
        Adjective {
            positive: vec![positive.into()],
            ..Default::default()
        }
    }

    fn cell(degree: Degree, gender: DeclensionGender) -> usize {
        let row = match degree {
            Degree::Positive => 0,
            Degree::Comparative => 3,
            Degree::Superlative => 6,
        };
        let column = match gender {
            DeclensionGender::Masculine => 0,
            DeclensionGender::Feminine => 1,
            DeclensionGender::Neuter => 2,
        };
        row + column
    }

    pub fn declension(&self, degree: Degree, gender: DeclensionGender) -> &CaseTable {
        &self.declension[Self::cell(degree, gender)]
    }

    pub fn declension_mut(&mut self, degree: Degree, gender: DeclensionGender) -> &mut CaseTable {
        &mut self.declension[Self::cell(degree, gender)]
    }

    pub fn degree(&self, degree: Degree) -> &[String] {
        match degree {
            Degree::Positive => &self.positive,
            Degree::Comparative => &self.comparative,
            Degree::Superlative => &self.superlative,
        }
    }

    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        degree_forms(&self.positive, &self.comparative, &self.superlative)
    }
}

fn degree_forms<'a>(
    positive: &'a [String],
    comparative: &'a [String],
    superlative: &'a [String],
) -> impl Iterator<Item = &'a str> {
    positive
        .iter()
        .chain(comparative.iter())
        .chain(superlative.iter())
        .map(String::as_str)
}

/// Closed word classes stored as "adverbs" (uninflected simple words).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdverbKind {
    #[default]
    Adverb,
    Particle,
    Subjunction,
    Unknown,
    Article,
    Conjunction,
    Preposition,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adverb {
    pub positive: Vec<String>,
    pub comparative: Vec<String>,
    pub superlative: Vec<String>,
    pub kind: AdverbKind,
}

impl Adverb {
    pub fn new<S: Into<String>>(positive: S, kind: AdverbKind) -> Self {
        Adverb {
            positive: vec![positive.into()],
            kind,
            ..Default::default()
        }
    }

    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        degree_forms(&self.positive, &self.comparative, &self.superlative)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounKind {
    Personal,
    Reflexive,
    Reciprocal,
    Possessive,
    Demonstrative,
    Indefinite,
    Relative,
    Interrogative,
    Article,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronoun {
    pub kind: PronounKind,
    pub cases: CaseTable,
}

impl Pronoun {
    pub fn new<S: Into<String>>(nominative: S, kind: PronounKind) -> Self {
        let mut pronoun = Pronoun {
            kind,
            ..Default::default()
        };
        pronoun.cases.nominative.singular.push(nominative.into());
        pronoun
    }

    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.cases.iter()
    }
}

/// Owned lemma, the unit of ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lemma {
    Noun(Noun),
    Verb(Verb),
    Adjective(Adjective),
    Adverb(Adverb),
    Pronoun(Pronoun),
}

impl Lemma {
    pub fn kind(&self) -> WordKind {
        match self {
            Lemma::Noun(_) => WordKind::Noun,
            Lemma::Verb(_) => WordKind::Verb,
            Lemma::Adjective(_) => WordKind::Adjective,
            Lemma::Adverb(_) => WordKind::Adverb,
            Lemma::Pronoun(_) => WordKind::Pronoun,
        }
    }
}

impl From<Noun> for Lemma {
    fn from(n: Noun) -> Self {
        Lemma::Noun(n)
    }
}

impl From<Verb> for Lemma {
    fn from(v: Verb) -> Self {
        Lemma::Verb(v)
    }
}

impl From<Adjective> for Lemma {
    fn from(a: Adjective) -> Self {
        Lemma::Adjective(a)
    }
}

impl From<Adverb> for Lemma {
    fn from(a: Adverb) -> Self {
        Lemma::Adverb(a)
    }
}

impl From<Pronoun> for Lemma {
    fn from(p: Pronoun) -> Self {
        Lemma::Pronoun(p)
    }
}

/// Word type tag. The declaration order is the index insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordKind {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
}

/// Stable handle to a lemma owned by a `Dictionary`.
///
/// Lemma vectors are append-only, so a handle stays valid for the lifetime
/// of the dictionary regardless of reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LemmaRef {
    pub kind: WordKind,
    pub index: usize,
}

impl LemmaRef {
    pub fn new(kind: WordKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Borrowed view of a lemma resolved from a `LemmaRef`.
#[derive(Debug, Clone, Copy)]
pub enum Word<'a> {
    Noun(&'a Noun),
    Verb(&'a Verb),
    Adjective(&'a Adjective),
    Adverb(&'a Adverb),
    Pronoun(&'a Pronoun),
}

impl<'a> Word<'a> {
    pub fn kind(&self) -> WordKind {
        match self {
            Word::Noun(_) => WordKind::Noun,
            Word::Verb(_) => WordKind::Verb,
            Word::Adjective(_) => WordKind::Adjective,
            Word::Adverb(_) => WordKind::Adverb,
            Word::Pronoun(_) => WordKind::Pronoun,
        }
    }

    pub fn as_noun(&self) -> Option<&'a Noun> {
        match self {
            Word::Noun(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_verb(&self) -> Option<&'a Verb> {
        match self {
            Word::Verb(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_adjective(&self) -> Option<&'a Adjective> {
        match self {
            Word::Adjective(a) => Some(a),
            _ => None,
        }
    }
}
