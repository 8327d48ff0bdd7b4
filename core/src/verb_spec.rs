//! Verb form addressing.
//!
//! A `Verbspec` names one verb form by mode, tense, person and number. The
//! slot table in [`Verb::slot`] maps the specs that have storage to the field
//! holding their forms; getters, membership tests, `predefined` and `set` all
//! go through it so the four can never disagree about where a form lives.

use crate::lemma::{Number, Verb};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Indicative,
    Subjunctive,
    Irrealis,
    Imperative,
    Participle,
    Infinitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tempus {
    Present,
    Preterite,
    Perfect,
    Pluperfect,
    FutureI,
    FutureII,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
    Polite,
    Majestic,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberSpec {
    Singular,
    Plural,
    Any,
}

impl NumberSpec {
    pub fn number(self) -> Option<Number> {
        match self {
            NumberSpec::Singular => Some(Number::Singular),
            NumberSpec::Plural => Some(Number::Plural),
            NumberSpec::Any => None,
        }
    }
}

impl From<Number> for NumberSpec {
    fn from(n: Number) -> Self {
        match n {
            Number::Singular => NumberSpec::Singular,
            Number::Plural => NumberSpec::Plural,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verbspec {
    pub mode: Mode,
    pub tempus: Tempus,
    pub person: Person,
    pub number: NumberSpec,
}

impl Verbspec {
    pub fn new(mode: Mode, tempus: Tempus, person: Person, number: NumberSpec) -> Self {
        Self {
            mode,
            tempus,
            person,
            number,
        }
    }

    /// Indicative present for the given person and number.
    pub fn present(person: Person, number: Number) -> Self {
        Self::new(Mode::Indicative, Tempus::Present, person, number.into())
    }

    pub fn infinitive() -> Self {
        Self::new(Mode::Infinitive, Tempus::Present, Person::Any, NumberSpec::Any)
    }

    pub fn participle_ii() -> Self {
        Self::new(Mode::Participle, Tempus::Perfect, Person::Any, NumberSpec::Any)
    }

    pub fn imperative(number: Number) -> Self {
        Self::new(Mode::Imperative, Tempus::Present, Person::Second, number.into())
    }

    /// True if person or number is a wildcard, which no getter accepts.
    pub fn is_wildcard(&self) -> bool {
        self.person == Person::Any || self.number == NumberSpec::Any
    }
}

impl fmt::Display for Verbspec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?} {:?}",
            self.mode, self.tempus, self.person, self.number
        )
    }
}

/// Which field of a `Verb` a spec addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Present(Person, Number),
    Preterite1Sg,
    SubjunctiveI1Sg,
    Irrealis1Sg,
    ParticipleII,
    Infinitive,
    Imperative(Number),
}

fn slot_of(spec: &Verbspec) -> Option<Slot> {
    let first_singular = spec.person == Person::First && spec.number == NumberSpec::Singular;
    match (spec.mode, spec.tempus) {
        (Mode::Indicative, Tempus::Present) => match spec.person {
            Person::First | Person::Second | Person::Third => {
                spec.number.number().map(|n| Slot::Present(spec.person, n))
            }
            _ => None,
        },
        (Mode::Indicative, Tempus::Preterite) if first_singular => Some(Slot::Preterite1Sg),
        (Mode::Subjunctive, Tempus::Present) if first_singular => Some(Slot::SubjunctiveI1Sg),
        (Mode::Irrealis, Tempus::Preterite) if first_singular => Some(Slot::Irrealis1Sg),
        (Mode::Participle, Tempus::Perfect) => Some(Slot::ParticipleII),
        (Mode::Infinitive, Tempus::Present) => Some(Slot::Infinitive),
        (Mode::Imperative, _) => spec.number.number().map(Slot::Imperative),
        _ => None,
    }
}

impl Verb {
    /// Stored forms addressed by `spec`, or `None` if the spec has no slot.
    pub fn slot(&self, spec: &Verbspec) -> Option<&Vec<String>> {
        let slot = slot_of(spec)?;
        Some(match slot {
            Slot::Present(person, number) => {
                let forms = match person {
                    Person::First => &self.present.first,
                    Person::Second => &self.present.second,
                    _ => &self.present.third,
                };
                match number {
                    Number::Singular => &forms.singular,
                    Number::Plural => &forms.plural,
                }
            }
            Slot::Preterite1Sg => &self.preterite_1sg,
            Slot::SubjunctiveI1Sg => &self.subjunctive_i_1sg,
            Slot::Irrealis1Sg => &self.irrealis_1sg,
            Slot::ParticipleII => &self.participle_ii,
            Slot::Infinitive => &self.present_infinitive,
            Slot::Imperative(number) => match number {
                Number::Singular => &self.imperative.singular,
                Number::Plural => &self.imperative.plural,
            },
        })
    }

    pub fn slot_mut(&mut self, spec: &Verbspec) -> Option<&mut Vec<String>> {
        let slot = slot_of(spec)?;
        Some(match slot {
            Slot::Present(person, number) => {
                let forms = match person {
                    Person::First => &mut self.present.first,
                    Person::Second => &mut self.present.second,
                    _ => &mut self.present.third,
                };
                forms.get_mut(number)
            }
            Slot::Preterite1Sg => &mut self.preterite_1sg,
            Slot::SubjunctiveI1Sg => &mut self.subjunctive_i_1sg,
            Slot::Irrealis1Sg => &mut self.irrealis_1sg,
            Slot::ParticipleII => &mut self.participle_ii,
            Slot::Infinitive => &mut self.present_infinitive,
            Slot::Imperative(number) => self.imperative.get_mut(number),
        })
    }

    /// Append `word` to the slot addressed by `spec`. Returns false when the
    /// spec addresses no slot.
    pub fn set<S: Into<String>>(&mut self, spec: &Verbspec, word: S) -> bool {
        match self.slot_mut(spec) {
            Some(forms) => {
                forms.push(word.into());
                true
            }
            None => false,
        }
    }
}
